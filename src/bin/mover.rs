//! mover.uz downloader.
//!
//! `mover-dl <video_url> <output_dir>` fetches the watch page, derives the
//! direct media URL, streams the file into the output directory, and writes a
//! `<title>.info.json` sidecar. Exit code 0 on success, 1 on any failure.

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use uzvid_dl::download::{download_to_file, media_client};
use uzvid_dl::locate::{MediaLocator, MoverLocator};
use uzvid_dl::metadata::{write_sidecar, DownloadMetadata};
use uzvid_dl::page::{fetch_page, page_client, page_title};
use uzvid_dl::sanitize::sanitize_filename;
use uzvid_dl::validate::{extract_video_id, validate_output_dir, validate_page_url};
use uzvid_dl::{DownloadError, Result};

const CANONICAL_HOST: &str = "mover.uz";
const REFERER: &str = "https://mover.uz/";
const TITLE_SUFFIX: &str = " - Mover.uz";

#[derive(Parser, Debug)]
#[command(name = "mover-dl", version, about = "Download a video from mover.uz")]
struct Args {
    /// Video page URL, e.g. https://mover.uz/watch/qY6lqHNe
    url: String,

    /// Absolute directory the media file and its sidecar are written into
    output_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let args = Args::try_parse().unwrap_or_else(|err| {
        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            err.exit();
        }
        // Argument errors belong on stdout with every other diagnostic.
        println!("{}", err.render());
        process::exit(1);
    });

    if let Err(err) = run(args).await {
        println!("ERROR: {err}");
        process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .init();
}

async fn run(args: Args) -> Result<()> {
    println!("Downloading from mover.uz: {}", args.url);
    println!("Output directory: {}", args.output_dir.display());

    let page_url = validate_page_url(&args.url, CANONICAL_HOST)?;
    validate_output_dir(&args.output_dir)?;
    std::fs::create_dir_all(&args.output_dir)
        .map_err(|e| DownloadError::fs(&args.output_dir, e))?;

    let video_id = extract_video_id(&page_url)?;
    println!("Video ID: {video_id}");

    println!("Fetching video page...");
    let client = page_client(REFERER)?;
    let html = fetch_page(&client, &page_url).await?;

    let title = page_title(&html, TITLE_SUFFIX)
        .map(|t| sanitize_filename(&t))
        .unwrap_or_else(|| video_id.clone());
    println!("Title: {title}");

    let media_url = MoverLocator.media_url(&video_id)?;
    println!("Video URL: {media_url}");

    let media_path = args.output_dir.join(format!("{title}.mp4"));
    println!("Downloading to: {}", media_path.display());
    println!("This may take a while...");

    let media = media_client(REFERER)?;
    let file_size = download_to_file(&media, &media_url, &media_path).await?;
    println!("✓ Download complete: {}", media_path.display());

    let sidecar_path = args.output_dir.join(format!("{title}.info.json"));
    let record = DownloadMetadata {
        url: args.url,
        video_id,
        title,
        video_url: media_url,
        file_size,
    };
    write_sidecar(&record, &sidecar_path)?;
    println!("✓ Metadata saved: {}", sidecar_path.display());

    Ok(())
}
