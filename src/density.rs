//! Text statistics for boilerplate detection.
//!
//! Cleaned text length and link density are the two signals the scorer and
//! sanitizer use to tell article prose from link-heavy noise.

use dom_query::{NodeRef, Selection};

use crate::patterns::{NEWLINE_WHITESPACE, REPEATED_SPACE};

/// Normalize raw text: whitespace around newlines collapses to a bare
/// newline, runs of spaces/tabs to a single space, surrounding whitespace
/// trimmed.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let text = NEWLINE_WHITESPACE.replace_all(text, "\n");
    let text = REPEATED_SPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Cleaned text length of a node subtree, in characters.
#[must_use]
pub fn text_length(node: &NodeRef) -> usize {
    clean_text(&node.text()).chars().count()
}

/// Fraction of a node's cleaned text that lies inside anchor descendants.
///
/// Ranges 0.0 to 1.0; a node without text counts as density 0.
#[must_use]
pub fn link_density(node: &NodeRef) -> f64 {
    let link_length: usize = Selection::from(*node)
        .select("a")
        .nodes()
        .iter()
        .map(text_length)
        .sum();
    let total_length = text_length(node).max(1);

    link_length as f64 / total_length as f64
}
