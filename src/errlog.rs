//! Persistent error log for fetch and parse failures.

use crate::utils::TIMESTAMP_FORMAT;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

/// Append-only failure log, shared by every run against the same path.
///
/// One line per failure:
///
/// ```text
/// 2025-05-06 14:30:00 - ERROR: Error parsing http://feed.example/rss: HTTP status code 503
/// ```
///
/// Appends that fail are reported as warnings and swallowed; the harvest
/// never stops because its log did.
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Record one fetch/parse failure for `feed_url`.
    pub fn record(&self, feed_url: &str, detail: &str) {
        let line = format!(
            "{} - ERROR: Error parsing {}: {}\n",
            Local::now().format(TIMESTAMP_FORMAT),
            feed_url,
            detail
        );
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "Could not append to error log");
        }
    }
}
