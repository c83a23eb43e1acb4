//! Compiled regex patterns for content extraction.
//!
//! All process-wide patterns are compiled once at startup using `LazyLock`
//! and never mutated afterwards. Caller-provided keyword lists are compiled
//! per extractor with [`compile_keyword_pattern`].

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

// =============================================================================
// Candidate Filtering Patterns
// =============================================================================

/// Matches class/id strings of elements unlikely to hold article content.
/// Searched anywhere in the string; only applied during ruthless passes.
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|community|disqus|extra|foot|header|menu|remark|rss|shoutbox|sidebar|sponsor|ad-break|agegate|pagination|pager|popup|tweet|twitter|adblock",
    )
    .expect("UNLIKELY_CANDIDATES regex")
});

/// Overrides [`UNLIKELY_CANDIDATES`]: class/id strings that may still carry
/// content despite an unlikely keyword. Searched anywhere in the string.
pub static OK_MAYBE_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)and|article|body|column|main|shadow").expect("OK_MAYBE_CANDIDATE regex")
});

/// Matches class/id strings signalling article content. Anchored at the
/// start of the string.
pub static POSITIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:article|body|content|entry|hentry|main|page|pagination|post|text|blog|story)")
        .expect("POSITIVE_CLASS regex")
});

/// Matches class/id strings signalling boilerplate. Anchored at the start
/// of the string.
pub static NEGATIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:combx|comment|com-|contact|foot|footer|footnote|masthead|media|meta|outbrain|promo|related|scroll|shoutbox|sidebar|sponsor|shopping|tags|tool|widget|adblock)",
    )
    .expect("NEGATIVE_CLASS regex")
});

// =============================================================================
// Structure Patterns
// =============================================================================

/// Matches an opening block-level tag inside a div's serialized content.
/// A div with no such nested tag behaves like a paragraph and is renamed.
pub static DIV_TO_P_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:a|blockquote|dl|div|img|ol|p|pre|table|ul)")
        .expect("DIV_TO_P_ELEMENTS regex")
});

/// Matches a sentence-ending punctuation mark followed by whitespace or the
/// end of the string.
pub static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?](?:\s|$)").expect("SENTENCE_END regex"));

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches whitespace surrounding a newline, for collapsing to a bare `\n`.
pub static NEWLINE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\n\s*").expect("NEWLINE_WHITESPACE regex"));

/// Matches runs of two or more spaces/tabs, for collapsing to one space.
pub static REPEATED_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("REPEATED_SPACE regex"));

/// Matches one `attr="value"` pair inside a serialized tag. Applied
/// repeatedly, it strips all attributes from markup text.
pub static TAG_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<([^>]+) (?:\w+) *= *(?:[^ "'>]+|'[^']+'|"[^"]+")([^>]*)>"#)
        .expect("TAG_ATTRIBUTE regex")
});

// =============================================================================
// Caller Keyword Compilation
// =============================================================================

/// Compile a caller-provided keyword list into a single prefix-anchored
/// matcher. Keywords are lowercased and escaped, then joined by alternation;
/// the resulting matcher is case-sensitive by construction.
///
/// Returns `None` for an empty list.
pub fn compile_keyword_pattern(keywords: &[String]) -> Result<Option<Regex>> {
    if keywords.is_empty() {
        return Ok(None);
    }

    let escaped: Vec<String> = keywords
        .iter()
        .map(|k| regex::escape(&k.to_lowercase()))
        .collect();
    let pattern = format!("^(?:{})", escaped.join("|"));

    Regex::new(&pattern)
        .map(Some)
        .map_err(|e| Error::Unparseable(e.to_string()))
}
