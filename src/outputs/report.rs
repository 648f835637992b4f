//! Report composition and writing.

use crate::models::ReportEntry;
use std::error::Error;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Accumulates one run's report and writes it in a single linear pass.
///
/// Group headings and entry blocks are buffered in memory and the header
/// is rendered with the final entry count, so there is no placeholder to
/// patch and no fixed-width hazard at the top of the file.
pub struct ReportWriter {
    timestamp: String,
    groups: Vec<GroupBlock>,
}

struct GroupBlock {
    name: String,
    entries: Vec<ReportEntry>,
}

impl ReportWriter {
    /// `timestamp` is the run timestamp shown in the header and embedded
    /// in the report filename.
    pub fn new(timestamp: String) -> Self {
        Self {
            timestamp,
            groups: Vec::new(),
        }
    }

    /// Open a group block. Every group from the feed list gets a heading
    /// in the report, whether or not any of its entries are accepted.
    pub fn start_group(&mut self, name: &str) {
        self.groups.push(GroupBlock {
            name: name.to_string(),
            entries: Vec::new(),
        });
    }

    /// Append an accepted entry to the most recently started group.
    /// Entries only exist under a heading, so [`Self::start_group`] must
    /// have been called first.
    pub fn push_entry(&mut self, entry: ReportEntry) {
        self.groups
            .last_mut()
            .expect("push_entry called before start_group")
            .entries
            .push(entry);
    }

    /// Count of accepted entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// Render the complete report: header, then group blocks in
    /// feed-list order with entries in acceptance order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "Total New Entries: {}", self.entry_count()).unwrap();
        writeln!(out, "Current Date and Time: {}\n", self.timestamp).unwrap();

        for group in &self.groups {
            writeln!(out, "## {}\n", group.name).unwrap();
            for entry in &group.entries {
                writeln!(out, "***\n").unwrap();
                writeln!(out, "{}", entry.title).unwrap();
                writeln!(out, "URL: {}", entry.link).unwrap();
                writeln!(out, "Date: {}", entry.date_label()).unwrap();
                writeln!(out, "Description: {}\n", entry.description).unwrap();
            }
        }

        out
    }

    /// Write the rendered report to `news_<timestamp>.md` under `dir`.
    #[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
    pub async fn write(&self, dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
        let path = dir.join(format!("news_{}.md", self.timestamp));
        tokio::fs::write(&path, self.render()).await?;
        info!(path = %path.display(), entries = self.entry_count(), "Wrote report");
        Ok(path)
    }
}
