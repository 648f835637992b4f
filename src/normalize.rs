//! Entry text normalization.
//!
//! Everything here is enumerated-pattern cleaning: known tracking
//! parameters, the HTML idioms the subscribed feeds actually emit, and a
//! small table of feed-specific quirk substitutions. It is not a general
//! HTML sanitizer; feeds beyond these idioms pass through unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum title length in the report, in characters.
pub const TITLE_LIMIT: usize = 300;

/// Maximum description length in the report, in characters.
pub const DESCRIPTION_LIMIT: usize = 500;

/// Appended when a title or description is cut at its limit.
pub const TRUNCATION_MARKER: &str = "[...]";

/// Feed-specific literal substitutions applied to titles and descriptions.
///
/// New feed quirks get a row here instead of ad hoc replacements inside
/// the cleaning functions.
const QUIRK_RULES: &[(&str, &str)] = &[
    // One feed encodes ":in" as "*in".
    ("*in", ":in"),
    // Non-breaking spaces become plain spaces.
    ("\u{a0}", " "),
];

// Known tracking decorations on entry links: the UTM triple, one
// vendor-specific wt_mc pattern, and a #ref=rss fragment. Removed by
// exact pattern, not by general query-string parsing.
static TRACKING_PATTERNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\?utm_source=[^&]+&utm_medium=[^&]+&utm_campaign=[^&]+|\?wt_mc=rss\.red\.unbekannt\.unbekannt\.atom\.beitrag\.beitrag|#ref=rss",
    )
    .unwrap()
});

// HTML tags, feed artifacts, and numeric/named HTML entities stripped
// from descriptions.
static HTML_ARTIFACTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>|\[link\]|\[comments\]|\[\.\.\.\]|&#\d+;|&[^;]+;").unwrap());

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip known tracking parameters from an entry link.
pub fn clean_link(link: &str) -> String {
    TRACKING_PATTERNS.replace_all(link, "").into_owned()
}

/// Clean an entry title: embedded newlines removed, quirk substitutions
/// applied, capped at [`TITLE_LIMIT`] characters.
pub fn clean_title(title: &str) -> String {
    let title = title.replace('\n', "");
    truncate(&apply_quirk_rules(&title), TITLE_LIMIT)
}

/// Clean an entry description.
///
/// Tags, artifacts, and entities are stripped first, then quirk
/// substitutions, whitespace-run collapsing, and trimming; the
/// [`DESCRIPTION_LIMIT`] cap applies last.
pub fn clean_description(description: &str) -> String {
    let stripped = HTML_ARTIFACTS.replace_all(description, "");
    let substituted = apply_quirk_rules(&stripped);
    let collapsed = WHITESPACE_RUNS.replace_all(&substituted, " ");
    truncate(collapsed.trim(), DESCRIPTION_LIMIT)
}

/// Remove soft hyphens (U+00AD), with no replacement.
///
/// Applied to title, link, and description independently as the last
/// step before an entry reaches the writer.
pub fn remove_soft_hyphens(text: &str) -> String {
    text.replace('\u{ad}', "")
}

fn apply_quirk_rules(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in QUIRK_RULES {
        out = out.replace(from, to);
    }
    out
}

/// Cut `text` at `limit` characters, appending [`TRUNCATION_MARKER`] when
/// anything was cut. Character-based, so multi-byte text never splits.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let mut out: String = text.chars().take(limit).collect();
        out.push_str(TRUNCATION_MARKER);
        out
    } else {
        text.to_string()
    }
}
