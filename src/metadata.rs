//! The `.info.json` sidecar written next to a completed download.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DownloadError, Result};

/// One record per completed download. Field names are the sidecar's JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadMetadata {
    /// The page URL the user asked for.
    pub url: String,
    pub video_id: String,
    pub title: String,
    /// The derived direct media URL the bytes actually came from.
    pub video_url: String,
    pub file_size: u64,
}

/// Serializes the record as pretty-printed UTF-8 JSON (non-ASCII kept
/// literal) and writes it in one call, overwriting any previous sidecar.
pub fn write_sidecar(metadata: &DownloadMetadata, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(metadata)?;
    fs::write(path, json).map_err(|e| DownloadError::fs(path, e))
}
