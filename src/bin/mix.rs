//! mix.tj downloader (unfinished).
//!
//! The pipeline validates its input and fetches the player page, but the step
//! that locates the direct media URL was never written: every invocation ends
//! with an "extraction not implemented" diagnostic and exit code 1. Kept as a
//! separate binary so the mover.uz tool stays usable on its own.

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use uzvid_dl::locate::{MediaLocator, MixLocator};
use uzvid_dl::page::{fetch_page, page_client};
use uzvid_dl::validate::{validate_output_dir, validate_page_url};
use uzvid_dl::{DownloadError, Result};

const CANONICAL_HOST: &str = "mix.tj";
const REFERER: &str = "https://mix.tj/";

#[derive(Parser, Debug)]
#[command(name = "mix-dl", version, about = "Download a video from mix.tj (incomplete)")]
struct Args {
    /// Video page URL, e.g. https://mix.tj/video/12345
    url: String,

    /// Absolute directory the media file would be written into
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
    println!("Downloading from mix.tj: {}", args.url);
    println!("Output directory: {}", args.output_dir.display());

    let page_url = validate_page_url(&args.url, CANONICAL_HOST)?;
    validate_output_dir(&args.output_dir)?;
    std::fs::create_dir_all(&args.output_dir)
        .map_err(|e| DownloadError::fs(&args.output_dir, e))?;

    println!("Fetching video page...");
    let client = page_client(REFERER)?;
    let _html = fetch_page(&client, &page_url).await?;

    // Fails on every input until someone writes a real mix.tj locator.
    MixLocator.media_url(page_url.as_str()).map(|_| ())
}
