//! Building blocks for the mover.uz / mix.tj command-line downloaders.
//!
//! Each pipeline stage (validation, page fetch, title extraction, media URL
//! derivation, streaming download, sidecar write) is its own module and
//! returns a typed [`error::DownloadError`], so the binaries stay thin glue
//! and every stage is testable without a terminal attached.

pub mod download;
pub mod error;
pub mod locate;
pub mod metadata;
pub mod page;
pub mod sanitize;
pub mod validate;

pub use error::{DownloadError, Result};
