//! Utility functions for timestamps, console labels, and file system checks.

use chrono::Local;
use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

/// Timestamp format shared by the report header, the report filename,
/// the per-entry `Date:` field, and the error log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The current local date and time as a formatted string.
pub fn current_datetime() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Extract the host of a feed URL for progress output, dropping any
/// leading `www.`.
///
/// Returns `None` when the URL does not parse or carries no host, in
/// which case no domain line is printed for the feed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(feed_domain("https://www.example.com/rss"), Some("example.com".into()));
/// ```
pub fn feed_domain(feed_url: &str) -> Option<String> {
    let parsed = Url::parse(feed_url).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test
/// by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not
/// writable (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_domain_strips_www() {
        assert_eq!(
            feed_domain("https://www.example.com/feed.xml"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_feed_domain_plain_host() {
        assert_eq!(
            feed_domain("http://news.example.org/rss"),
            Some("news.example.org".to_string())
        );
    }

    #[test]
    fn test_feed_domain_no_path() {
        assert_eq!(
            feed_domain("https://example.com"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_feed_domain_invalid_url() {
        assert_eq!(feed_domain("not a url"), None);
    }

    #[test]
    fn test_current_datetime_shape() {
        let stamp = current_datetime();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("RSS").join("news");
        ensure_writable_dir(&target).await.unwrap();
        assert!(target.is_dir());
    }
}
