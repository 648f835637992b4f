//! Feed list parsing.
//!
//! The feed list is line-oriented text: a `##` line opens a named group,
//! a line starting with `http` adds a feed URL to the most recent group,
//! and every other line is ignored. URLs are not validated here; a bad
//! one simply fails at fetch time like any unreachable feed.

use crate::models::FeedGroup;
use std::error::Error;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read and parse the grouped feed list at `path`.
pub fn parse_feed_list(path: &Path) -> Result<Vec<FeedGroup>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let groups = parse_groups(&text);
    info!(
        path = %path.display(),
        groups = groups.len(),
        feeds = groups.iter().map(|g| g.urls.len()).sum::<usize>(),
        "Parsed feed list"
    );
    Ok(groups)
}

/// Group feed URLs under their `##` headings, preserving file order.
///
/// A heading that repeats an earlier group name reuses that group's slot
/// and resets its URL list, so the last occurrence wins. A URL before the
/// first heading has no group and is dropped.
pub fn parse_groups(text: &str) -> Vec<FeedGroup> {
    let mut groups: Vec<FeedGroup> = Vec::new();
    let mut current: Option<usize> = None;

    for line in text.lines() {
        let line = line.trim();

        if line.starts_with("##") {
            let name = line.trim_matches(|c| c == '#' || c == ' ').to_string();
            if let Some(pos) = groups.iter().position(|g| g.name == name) {
                groups[pos].urls.clear();
                current = Some(pos);
            } else {
                groups.push(FeedGroup {
                    name,
                    urls: Vec::new(),
                });
                current = Some(groups.len() - 1);
            }
        } else if line.starts_with("http") {
            match current {
                Some(pos) => groups[pos].urls.push(line.to_string()),
                None => debug!(url = %line, "Feed URL before any group heading; dropped"),
            }
        }
    }

    groups
}
