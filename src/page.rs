//! Video page fetching and title extraction.
//!
//! The hosting site serves different markup to obvious bots, so the client
//! carries a fixed browser-like header set on every request.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use reqwest::Client;
use url::Url;

use crate::error::Result;

pub const PAGE_TIMEOUT: Duration = Duration::from_secs(30);

const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title>([^<]+)</title>").expect("static regex"));

/// Header set shared by the page fetch and the media download.
pub fn browser_headers(referer: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_UA));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
    headers.insert(REFERER, HeaderValue::from_static(referer));
    headers
}

/// Client for the single page GET: browser headers, 30 s overall timeout.
pub fn page_client(referer: &'static str) -> Result<Client> {
    let client = Client::builder()
        .timeout(PAGE_TIMEOUT)
        .default_headers(browser_headers(referer))
        .build()?;
    Ok(client)
}

/// Fetches the video page and returns its body text. Non-2xx statuses,
/// timeouts, and connection failures all surface as `Network` and are fatal
/// for the invocation.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    tracing::debug!(%url, "fetching video page");
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Pulls the first `<title>` element out of the page, drops the site's
/// ` - SiteName` suffix, and trims. `None` when the page has no title; the
/// caller falls back to the video identifier.
pub fn page_title(html: &str, site_suffix: &str) -> Option<String> {
    let raw = TITLE_RE.captures(html)?.get(1)?.as_str().trim();
    Some(raw.replace(site_suffix, "").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_strips_site_suffix() {
        let html = "<html><head><title>Funny Cat Video - Mover.uz</title></head></html>";
        assert_eq!(
            page_title(html, " - Mover.uz").as_deref(),
            Some("Funny Cat Video")
        );
    }

    #[test]
    fn keeps_title_without_suffix() {
        let html = "<title>  Plain Title  </title>";
        assert_eq!(page_title(html, " - Mover.uz").as_deref(), Some("Plain Title"));
    }

    #[test]
    fn first_title_element_wins() {
        let html = "<title>One</title><title>Two</title>";
        assert_eq!(page_title(html, " - Mover.uz").as_deref(), Some("One"));
    }

    #[test]
    fn missing_title_yields_none() {
        assert_eq!(page_title("<html><body>no head</body></html>", " - Mover.uz"), None);
    }

    #[test]
    fn unicode_titles_survive() {
        let html = "<title>Кино 🎥 - Mover.uz</title>";
        assert_eq!(page_title(html, " - Mover.uz").as_deref(), Some("Кино 🎥"));
    }
}
