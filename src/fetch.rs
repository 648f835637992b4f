//! Feed fetching and parsing.
//!
//! One HTTP GET per feed, body handed to `feed-rs` (RSS and Atom alike).
//! A 4xx/5xx status skips the feed without touching the body; anything
//! else, redirects included, is parsed. Network and parse failures come
//! back as `Err` for the caller to log; a single feed's failure never
//! aborts the run.

use crate::models::FeedEntry;
use feed_rs::parser;
use reqwest::{Client, StatusCode};
use std::error::Error;
use tracing::{debug, instrument};

/// User agent presented to feed servers.
pub const USER_AGENT: &str = concat!("feed_harvest/", env!("CARGO_PKG_VERSION"));

/// Outcome of fetching a single feed.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server answered with a client/server error status; the feed is
    /// skipped and its entries never parsed.
    HttpError(StatusCode),
    /// The feed parsed; raw entries in document order.
    Entries(Vec<FeedEntry>),
}

/// Build the HTTP client shared by the whole run.
///
/// No request timeout is configured: each feed is attempted exactly once
/// and an unresponsive server stalls the run rather than silently
/// dropping its entries.
pub fn build_client() -> Result<Client, Box<dyn Error>> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Fetch and parse one feed URL.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_feed(client: &Client, url: &str) -> Result<FetchOutcome, Box<dyn Error>> {
    let response = client.get(url).send().await?;
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        return Ok(FetchOutcome::HttpError(status));
    }

    let body = response.bytes().await?;
    let entries = parse_entries(&body)?;
    debug!(url, count = entries.len(), "Parsed feed");
    Ok(FetchOutcome::Entries(entries))
}

/// Parse a feed document into raw entries.
///
/// Missing titles and descriptions come back empty, never as errors. An
/// entry without any link is dropped: the link is the deduplication key
/// and a linkless block would be unreferenceable in the report.
pub fn parse_entries(body: &[u8]) -> Result<Vec<FeedEntry>, Box<dyn Error>> {
    let feed = parser::parse(body)?;

    let mut entries = Vec::with_capacity(feed.entries.len());
    for entry in feed.entries {
        let Some(link) = entry.links.first().map(|l| l.href.clone()) else {
            debug!(id = %entry.id, "Feed entry without a link; skipped");
            continue;
        };
        entries.push(FeedEntry {
            link,
            published: entry.published,
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            description: entry.summary.map(|t| t.content).unwrap_or_default(),
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    const RSS_FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example Feed</title>
    <link>http://example.com/</link>
    <description>Example</description>
    <item>
      <title>First story</title>
      <link>http://example.com/first</link>
      <description>&lt;p&gt;Body of the first story&lt;/p&gt;</description>
      <pubDate>Tue, 04 Mar 2025 05:06:07 GMT</pubDate>
    </item>
    <item>
      <title>Second story</title>
      <link>http://example.com/second</link>
      <description>Body of the second story</description>
      <pubDate>not a date</pubDate>
    </item>
  </channel>
</rss>"#;

    const ATOM_FIXTURE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Example</title>
  <id>urn:uuid:feed</id>
  <updated>2025-03-04T00:00:00Z</updated>
  <entry>
    <title>Atom entry</title>
    <id>urn:uuid:entry-1</id>
    <updated>2025-03-04T00:00:00Z</updated>
    <published>2025-03-04T05:06:07Z</published>
    <link href="http://example.com/atom-entry"/>
    <summary>Atom summary</summary>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_entries_rss_fields() {
        let entries = parse_entries(RSS_FIXTURE.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.link, "http://example.com/first");
        assert_eq!(first.title, "First story");
        assert!(first.description.contains("Body of the first story"));
        let published = first.published.expect("pubDate should parse");
        assert_eq!(published.year(), 2025);
    }

    #[test]
    fn test_parse_entries_unparseable_date_is_none() {
        let entries = parse_entries(RSS_FIXTURE.as_bytes()).unwrap();
        assert!(entries[1].published.is_none());
    }

    #[test]
    fn test_parse_entries_atom() {
        let entries = parse_entries(ATOM_FIXTURE.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].link, "http://example.com/atom-entry");
        assert_eq!(entries[0].title, "Atom entry");
        assert_eq!(entries[0].description, "Atom summary");
        assert!(entries[0].published.is_some());
    }

    #[test]
    fn test_parse_entries_missing_fields_are_empty() {
        let xml = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>t</title><link>http://x/</link><description>d</description>
  <item><link>http://example.com/bare</link></item>
</channel></rss>"#;
        let entries = parse_entries(xml.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "");
        assert_eq!(entries[0].description, "");
        assert!(entries[0].published.is_none());
    }

    #[test]
    fn test_parse_entries_linkless_entry_dropped() {
        let xml = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>t</title><link>http://x/</link><description>d</description>
  <item><title>No link here</title></item>
  <item><title>Linked</title><link>http://example.com/linked</link></item>
</channel></rss>"#;
        let entries = parse_entries(xml.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].link, "http://example.com/linked");
    }

    #[test]
    fn test_parse_entries_malformed_document_errors() {
        assert!(parse_entries(b"this is not xml at all").is_err());
    }
}
