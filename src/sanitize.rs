//! Filename sanitization for page titles.
//!
//! Only the characters that are actually illegal on common filesystems are
//! replaced; emoji, accents, and non-Latin scripts pass through untouched.

use std::sync::LazyLock;

use regex::Regex;

/// Names Windows reserves for devices, with or without a trailing extension.
static RESERVED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(CON|PRN|AUX|NUL|COM[0-9]|LPT[0-9])(\..*)?$").expect("static regex")
});

const ILLEGAL: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
const MAX_LEN: usize = 200;
const FALLBACK: &str = "video";

/// Turns an arbitrary title into a safe, non-empty path segment.
///
/// Replaces `< > : " / \ | ? *` with `_`, trims surrounding whitespace,
/// prefixes reserved device names with `_`, and caps the result at 200
/// characters. Empty input collapses to `"video"`. Idempotent.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if ILLEGAL.contains(&c) { '_' } else { c })
        .collect();

    let mut out = replaced.trim().to_string();
    if out.chars().count() > MAX_LEN {
        // Re-trim: the cut can land right after a space.
        out = truncate_trimmed(&out);
    }
    // Checked after truncation: cutting the tail can expose a bare device
    // name that the full string did not match.
    if RESERVED_RE.is_match(&out) {
        out.insert(0, '_');
        if out.chars().count() > MAX_LEN {
            out = truncate_trimmed(&out);
        }
    }
    if out.is_empty() {
        out = FALLBACK.to_string();
    }
    out
}

fn truncate_trimmed(s: &str) -> String {
    s.chars().take(MAX_LEN).collect::<String>().trim_end().to_string()
}
