//! Failure taxonomy shared by both downloader binaries.
//!
//! Every variant is terminal for the current invocation; nothing here is
//! retried. The `Display` text doubles as the user-facing diagnostic that the
//! binaries print before exiting non-zero.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DownloadError>;

#[derive(Debug, Error)]
pub enum DownloadError {
    /// Bad command-line input: wrong host, wrong scheme, relative output path.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The locator parsed fine but carries no extractable video identifier.
    #[error("not found: {0}")]
    NotFound(String),

    /// Timeout, connection failure, or a non-2xx response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Declared or observed body size is over the download ceiling.
    #[error("file too large: {size} bytes exceeds the {limit} byte limit")]
    SizeLimitExceeded { size: u64, limit: u64 },

    /// Could not create the output directory or write an output file.
    #[error("filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Sidecar record could not be serialized.
    #[error("metadata serialization failed: {0}")]
    Metadata(#[from] serde_json::Error),

    /// The mix.tj extraction step, which has never been written.
    #[error("{0}")]
    Unimplemented(String),
}

impl DownloadError {
    /// Wraps an I/O error with the path it happened on.
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DownloadError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
