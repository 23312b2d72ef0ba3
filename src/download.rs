//! Size-bounded streaming download.
//!
//! The ceiling is enforced twice: once against the declared `Content-Length`
//! before any byte is written, and again against the running total after every
//! chunk, which covers servers that omit or lie about the header. A run that
//! fails mid-stream removes the partial file before reporting the error.

use std::path::Path;
use std::time::Duration;

use futures_util::stream::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::fs::{remove_file, File};
use tokio::io::AsyncWriteExt;

use crate::error::{DownloadError, Result};
use crate::page::browser_headers;

/// Hard cap on accepted media size: 2 GiB.
pub const MAX_DOWNLOAD_SIZE: u64 = 2 * 1024 * 1024 * 1024;

pub const MEDIA_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the media GET. Connect and read timeouts instead of an overall
/// request timeout; a multi-minute transfer is normal here.
pub fn media_client(referer: &'static str) -> Result<Client> {
    let client = Client::builder()
        .connect_timeout(MEDIA_TIMEOUT)
        .read_timeout(MEDIA_TIMEOUT)
        .default_headers(browser_headers(referer))
        .build()?;
    Ok(client)
}

/// Streams `media_url` into `dest`, enforcing [`MAX_DOWNLOAD_SIZE`].
/// Returns the number of bytes written.
pub async fn download_to_file(client: &Client, media_url: &str, dest: &Path) -> Result<u64> {
    download_to_file_with_limit(client, media_url, dest, MAX_DOWNLOAD_SIZE).await
}

/// Same as [`download_to_file`] with an explicit byte ceiling.
pub async fn download_to_file_with_limit(
    client: &Client,
    media_url: &str,
    dest: &Path,
    limit: u64,
) -> Result<u64> {
    tracing::debug!(media_url, dest = %dest.display(), "starting media download");
    let response = client.get(media_url).send().await?.error_for_status()?;

    let total = response.content_length();
    if let Some(declared) = total {
        if declared > limit {
            // Abort before the destination file even exists.
            return Err(DownloadError::SizeLimitExceeded {
                size: declared,
                limit,
            });
        }
    }

    let pb = progress_bar(total);
    let mut file = File::create(dest)
        .await
        .map_err(|e| DownloadError::fs(dest, e))?;

    match copy_body(response, &mut file, &pb, dest, limit).await {
        Ok(written) => {
            pb.finish_with_message("Download complete");
            Ok(written)
        }
        Err(err) => {
            pb.abandon();
            drop(file);
            if let Err(rm_err) = remove_file(dest).await {
                tracing::warn!(
                    "could not remove partial file {}: {rm_err}",
                    dest.display()
                );
            }
            Err(err)
        }
    }
}

async fn copy_body(
    response: reqwest::Response,
    file: &mut File,
    pb: &ProgressBar,
    dest: &Path,
    limit: u64,
) -> Result<u64> {
    let mut stream = response.bytes_stream();
    let mut downloaded = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)
            .await
            .map_err(|e| DownloadError::fs(dest, e))?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
        if downloaded > limit {
            return Err(DownloadError::SizeLimitExceeded {
                size: downloaded,
                limit,
            });
        }
    }
    file.flush().await.map_err(|e| DownloadError::fs(dest, e))?;
    Ok(downloaded)
}

/// Progress bar when the total is known; hidden when the server did not
/// declare a length (a percentage would be meaningless there).
fn progress_bar(total: Option<u64>) -> ProgressBar {
    match total {
        Some(len) => {
            let pb = ProgressBar::new(len);
            pb.set_style(
                ProgressStyle::with_template(
                    "{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] \
                     {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
            );
            pb
        }
        None => ProgressBar::hidden(),
    }
}
