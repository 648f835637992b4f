//! Per-run acceptance: deduplication, recency filtering, normalization.
//!
//! All run state lives in an explicit [`RunContext`] built at startup and
//! dropped when the run ends; nothing accumulates in globals.

use crate::models::{FeedEntry, ReportEntry};
use crate::normalize;
use chrono::{DateTime, Datelike, Local};
use std::collections::HashSet;

/// State threaded through a single harvest run.
///
/// Owns the seen-URL set (every `URL:` recorded by a prior report, plus
/// the links accepted so far this run) and the recency cutoff year.
pub struct RunContext {
    seen: HashSet<String>,
    current_year: i32,
    feeds_checked: usize,
}

impl RunContext {
    /// `seen` comes from the existing-URL scan; `current_year` is the
    /// local calendar year at run start.
    pub fn new(seen: HashSet<String>, current_year: i32) -> Self {
        Self {
            seen,
            current_year,
            feeds_checked: 0,
        }
    }

    /// Note that a feed fetch was attempted.
    pub fn feed_checked(&mut self) {
        self.feeds_checked += 1;
    }

    /// Number of feeds attempted so far.
    pub fn feeds_checked(&self) -> usize {
        self.feeds_checked
    }

    /// Decide whether a raw entry makes it into the report.
    ///
    /// The link is cleaned first so deduplication compares the exact
    /// value the report will carry. Links already recorded (in any prior
    /// run, or earlier in this one) and entries dated before the current
    /// year are dropped silently. An accepted entry claims its link in
    /// the seen set and comes back normalized.
    pub fn accept(&mut self, entry: FeedEntry) -> Option<ReportEntry> {
        let link = normalize::clean_link(&entry.link);
        if self.seen.contains(&link) {
            return None;
        }

        let date: Option<DateTime<Local>> = entry.published.map(|d| d.with_timezone(&Local));
        if let Some(date) = date {
            if date.year() < self.current_year {
                return None;
            }
        }

        self.seen.insert(link.clone());
        Some(ReportEntry {
            title: normalize::remove_soft_hyphens(&normalize::clean_title(&entry.title)),
            link: normalize::remove_soft_hyphens(&link),
            date,
            description: normalize::remove_soft_hyphens(&normalize::clean_description(
                &entry.description,
            )),
        })
    }
}
