//! # Feed Harvest
//!
//! Fetches a curated, grouped list of RSS/Atom feeds, keeps only the
//! entries no prior run has recorded, normalizes their text, and appends
//! them to a timestamped Markdown report, logging unreachable feeds.
//!
//! ## Usage
//!
//! ```sh
//! feed_harvest --feeds news_feeds.md --output-dir ./reports
//! ```
//!
//! ## Architecture
//!
//! One run is a single sequential pass:
//! 1. **Feed list**: read the grouped feed URLs
//! 2. **Seen scan**: collect every URL recorded by earlier reports
//! 3. **Harvest**: fetch each feed once, filter and normalize its entries
//! 4. **Report**: write the header and group blocks in one pass
//!
//! Feeds are fetched strictly one at a time, in group order then list
//! order. A failing feed is logged and skipped; the run always completes
//! and always produces a report.

use chrono::{Datelike, Local};
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod errlog;
mod feedlist;
mod fetch;
mod harvest;
mod models;
mod normalize;
mod outputs;
mod utils;

use cli::Cli;
use errlog::ErrorLog;
use fetch::FetchOutcome;
use harvest::RunContext;
use outputs::report::ReportWriter;
use outputs::seen;
use utils::{current_datetime, ensure_writable_dir, feed_domain};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // Default to warn so diagnostics don't interleave with the progress
    // output below; RUST_LOG overrides.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args.feeds, ?args.error_log, "Parsed CLI arguments");

    println!("\nWelcome to RSS Feed Harvest.\nParsing RSS-feeds:");

    let groups = feedlist::parse_feed_list(&args.feeds)?;

    let output_dir = args.resolved_output_dir();
    if let Err(e) = ensure_writable_dir(&output_dir).await {
        error!(
            path = %output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let err_log = ErrorLog::new(args.error_log.clone());
    let client = fetch::build_client()?;
    let mut ctx = RunContext::new(seen::scan_existing_urls(&output_dir), Local::now().year());
    let mut report = ReportWriter::new(current_datetime());

    for group in &groups {
        report.start_group(&group.name);
        println!("\n{}", group.name);

        for feed_url in &group.urls {
            ctx.feed_checked();
            if let Some(domain) = feed_domain(feed_url) {
                println!("... {domain}");
            }

            match fetch::fetch_feed(&client, feed_url).await {
                Ok(FetchOutcome::HttpError(status)) => {
                    println!(
                        "\n{feed_url} returned HTTP status code {}\n",
                        status.as_u16()
                    );
                    warn!(url = %feed_url, status = status.as_u16(), "Feed returned an error status");
                    err_log.record(feed_url, &format!("HTTP status code {}", status.as_u16()));
                }
                Ok(FetchOutcome::Entries(entries)) => {
                    for entry in entries {
                        if let Some(accepted) = ctx.accept(entry) {
                            report.push_entry(accepted);
                        }
                    }
                }
                Err(e) => {
                    println!("\nError parsing {feed_url}: {e}\n");
                    warn!(url = %feed_url, error = %e, "Feed fetch failed");
                    err_log.record(feed_url, &e.to_string());
                }
            }
        }
    }

    let report_path = report.write(&output_dir).await?;

    println!("\n[{}] feeds checked.", ctx.feeds_checked());
    println!(
        "\n[{}] new entries found and saved to:\n{}\n",
        report.entry_count(),
        report_path.display()
    );

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        feeds = ctx.feeds_checked(),
        new_entries = report.entry_count(),
        "Harvest complete"
    );

    Ok(())
}
