//! Command-line interface definitions for Feed Harvest.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the Feed Harvest application.
///
/// The harvest itself is not configurable; the flags only cover where the
/// feed list lives and where output lands, defaulting to the well-known
/// paths the tool has always used.
///
/// # Examples
///
/// ```sh
/// # Defaults: ./news_feeds.md in, ~/Desktop/RSS/news out
/// feed_harvest
///
/// # Explicit locations
/// feed_harvest --feeds ./feeds.md --output-dir ./reports
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the grouped feed list
    #[arg(short, long, default_value = "news_feeds.md")]
    pub feeds: PathBuf,

    /// Directory for report files (default: RSS/news on the desktop)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Path of the append-only error log
    #[arg(long, default_value = "rss_parser.log")]
    pub error_log: PathBuf,
}

impl Cli {
    /// Resolve the output directory, falling back to `~/Desktop/RSS/news`.
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Desktop")
                .join("RSS")
                .join("news")
        })
    }
}
