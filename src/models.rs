//! Data models for feed groups and entries.
//!
//! Two entry representations exist: [`FeedEntry`] is what the fetcher
//! hands over, field-for-field what the feed document said, and
//! [`ReportEntry`] is the cleaned, immutable form the report writer emits.

use crate::utils::TIMESTAMP_FORMAT;
use chrono::{DateTime, Local, Utc};

/// A named group of feed URLs, in feed-list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedGroup {
    /// Heading text with the `##` marker and surrounding whitespace stripped.
    pub name: String,
    /// The feed URLs listed under this heading, in file order.
    pub urls: Vec<String>,
}

/// A raw feed entry as parsed from the feed document.
///
/// Missing fields arrive empty (or `None`), never as errors; the feed
/// library has already attempted the lenient date parse, so an
/// unparseable `published` shows up here as `None`.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    /// The entry's link, untouched. The acceptance filter cleans it.
    pub link: String,
    /// Publication timestamp, when the feed carried a parseable one.
    pub published: Option<DateTime<Utc>>,
    pub title: String,
    pub description: String,
}

/// A cleaned entry ready for the report writer.
///
/// Constructed once by the acceptance filter and written verbatim; at most
/// one `ReportEntry` exists per unique link per run.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub title: String,
    pub link: String,
    /// Publication time in local time, or `None` when the feed had no
    /// usable date.
    pub date: Option<DateTime<Local>>,
    pub description: String,
}

impl ReportEntry {
    /// Value of the report's `Date:` field: a local timestamp, or `N/A`
    /// when the feed gave no usable date.
    pub fn date_label(&self) -> String {
        match self.date {
            Some(date) => date.format(TIMESTAMP_FORMAT).to_string(),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_label_formats_local_timestamp() {
        let date = Local.with_ymd_and_hms(2025, 5, 6, 14, 30, 0).unwrap();
        let entry = ReportEntry {
            title: "Test".to_string(),
            link: "http://example.com/a".to_string(),
            date: Some(date),
            description: String::new(),
        };
        assert_eq!(entry.date_label(), "2025-05-06 14:30:00");
    }

    #[test]
    fn test_date_label_unavailable() {
        let entry = ReportEntry {
            title: "Test".to_string(),
            link: "http://example.com/a".to_string(),
            date: None,
            description: String::new(),
        };
        assert_eq!(entry.date_label(), "N/A");
    }
}
