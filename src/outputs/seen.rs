//! Seen-URL scanning over prior reports.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Extension of the report files the scanner considers.
const REPORT_EXTENSION: &str = "md";

static URL_FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"URL:\s*([^\n]+)").unwrap());

/// Collect every URL recorded by a prior run.
///
/// Recursively visits each `.md` file under `dir` and extracts the value
/// of every `URL:` field into one set, so a link reported in any earlier
/// run is never reported again. Visiting order never matters and a URL
/// present in several old reports lands in the set once. A missing
/// directory yields an empty set (first run); unreadable files or
/// subdirectories are skipped with a warning.
pub fn scan_existing_urls(dir: &Path) -> HashSet<String> {
    let mut urls = HashSet::new();
    collect(dir, &mut urls);
    info!(count = urls.len(), dir = %dir.display(), "Scanned previously recorded URLs");
    urls
}

fn collect(dir: &Path, urls: &mut HashSet<String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            if dir.exists() {
                warn!(dir = %dir.display(), error = %e, "Could not read directory during URL scan");
            }
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, urls);
        } else if path.extension().and_then(|e| e.to_str()) == Some(REPORT_EXTENSION) {
            match fs::read_to_string(&path) {
                Ok(text) => {
                    for caps in URL_FIELD.captures_iter(&text) {
                        urls.insert(caps[1].to_string());
                    }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Could not read report during URL scan")
                }
            }
        }
    }
}
