//! Input validation: page URL, output directory, video identifier.
//!
//! All three checks are pure; the run fails here before any socket is opened.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{DownloadError, Result};

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/watch/([A-Za-z0-9_-]+)").expect("static regex"));

/// Parses `raw` and checks that it points at `canonical_host` (or its `www.`
/// variant, case-insensitive) over http or https.
pub fn validate_page_url(raw: &str, canonical_host: &str) -> Result<Url> {
    let parsed = Url::parse(raw)
        .map_err(|e| DownloadError::InvalidInput(format!("malformed URL {raw:?}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(DownloadError::InvalidInput(format!(
                "unsupported scheme {other:?}, expected http or https"
            )));
        }
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| DownloadError::InvalidInput(format!("URL {raw:?} has no host")))?
        .to_ascii_lowercase();

    let canonical = canonical_host.to_ascii_lowercase();
    if host != canonical && host != format!("www.{canonical}") {
        return Err(DownloadError::InvalidInput(format!(
            "URL must be from the {canonical} domain, got {host:?}"
        )));
    }

    Ok(parsed)
}

/// Rejects relative output directories; where a relative path would land
/// depends on the caller's working directory, which we refuse to guess.
pub fn validate_output_dir(dir: &Path) -> Result<()> {
    if dir.is_absolute() {
        Ok(())
    } else {
        Err(DownloadError::InvalidInput(format!(
            "output directory must be an absolute path, got {}",
            dir.display()
        )))
    }
}

/// Pulls the video identifier out of a `/watch/<id>` path segment.
pub fn extract_video_id(url: &Url) -> Result<String> {
    VIDEO_ID_RE
        .captures(url.path())
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| {
            DownloadError::NotFound(format!(
                "no video identifier in {url} (expected .../watch/<id>)"
            ))
        })
}
