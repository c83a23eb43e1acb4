//! Candidate scoring.
//!
//! Walks paragraph-like elements under the working root and accumulates a
//! content score on their parent and grandparent containers. Candidates are
//! keyed by node identity, not structure: two identical-looking elements are
//! distinct candidates. Insertion order is preserved because the final score
//! scaling runs once per candidate and selection tie-breaks on first-seen
//! order.

use std::collections::HashMap;

use dom_query::{NodeId, NodeRef};
use regex::Regex;

use crate::density::{clean_text, link_density, text_length};
use crate::dom;
use crate::patterns::{NEGATIVE_CLASS, POSITIVE_CLASS};

/// An element considered as a possible article container, with its
/// accumulated content score.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The scored element.
    pub node: NodeRef<'a>,
    /// Accumulated content score.
    pub score: f64,
}

/// Insertion-ordered set of candidates, keyed by node identity.
#[derive(Debug, Default)]
pub struct CandidateSet<'a> {
    entries: Vec<Candidate<'a>>,
    index: HashMap<NodeId, usize>,
}

impl<'a> CandidateSet<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Candidates in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate<'a>> {
        self.entries.iter()
    }

    /// Look up a candidate by node identity.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Candidate<'a>> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Insert a candidate with an initial score, recording first-seen order.
    /// A node already present keeps its existing record.
    fn insert(&mut self, node: NodeRef<'a>, score: f64) {
        if self.index.contains_key(&node.id) {
            return;
        }
        self.index.insert(node.id, self.entries.len());
        self.entries.push(Candidate { node, score });
    }

    fn add_score(&mut self, id: NodeId, delta: f64) {
        if let Some(&i) = self.index.get(&id) {
            self.entries[i].score += delta;
        }
    }
}

/// Per-extractor keyword matchers compiled from caller-provided lists.
#[derive(Debug, Default)]
pub struct KeywordMatchers {
    /// Prefix-anchored matcher adding +25 per hit.
    pub positive: Option<Regex>,
    /// Prefix-anchored matcher subtracting 25 per hit.
    pub negative: Option<Regex>,
}

impl KeywordMatchers {
    fn weight(&self, text: &str) -> f64 {
        let mut weight = 0.0;
        if self.positive.as_ref().is_some_and(|re| re.is_match(text)) {
            weight += 25.0;
        }
        if self.negative.as_ref().is_some_and(|re| re.is_match(text)) {
            weight -= 25.0;
        }
        weight
    }
}

fn pattern_weight(text: &str) -> f64 {
    let mut weight = 0.0;
    if NEGATIVE_CLASS.is_match(text) {
        weight -= 25.0;
    }
    if POSITIVE_CLASS.is_match(text) {
        weight += 25.0;
    }
    weight
}

/// Weight of an element from its class and id strings, each checked
/// independently against the built-in start-anchored patterns and the
/// caller keyword matchers, plus a synthetic `tag-<name>` keyword check.
#[must_use]
pub fn class_weight(node: &NodeRef, keywords: &KeywordMatchers) -> f64 {
    let mut weight = 0.0;
    for feature in [dom::attr(node, "class"), dom::attr(node, "id")] {
        if let Some(feature) = feature {
            if !feature.is_empty() {
                weight += pattern_weight(&feature);
                weight += keywords.weight(&feature);
            }
        }
    }
    if let Some(tag) = dom::tag_name(node) {
        weight += keywords.weight(&format!("tag-{tag}"));
    }
    weight
}

/// Base score of a potential container: class weight plus a tag bonus.
#[must_use]
pub fn score_node(node: &NodeRef, keywords: &KeywordMatchers) -> f64 {
    let mut score = class_weight(node, keywords);
    match dom::tag_name(node).unwrap_or_default().as_str() {
        "div" => score += 5.0,
        "pre" | "td" | "blockquote" => score += 3.0,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => score -= 3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => score -= 5.0,
        _ => {}
    }
    score
}

/// Score all paragraph containers under the working root.
///
/// Every `p`, `pre`, and `td` with at least `min_text_length` characters of
/// cleaned text contributes `1 + commas + min(len/100, 3)` to its parent's
/// score and half of that to its grandparent's. Once all paragraphs are in,
/// each candidate's score is scaled by `(1 - link_density)` and by
/// `(1 + text_length / 500)`, in first-seen order.
#[must_use]
pub fn score_paragraphs<'a>(
    root: &NodeRef<'a>,
    keywords: &KeywordMatchers,
    min_text_length: usize,
) -> CandidateSet<'a> {
    let mut candidates = CandidateSet::new();

    for elem in dom::iter_tags(root, &["p", "pre", "td"]) {
        let Some(parent) = elem.parent().filter(NodeRef::is_element) else {
            continue;
        };
        let grandparent = parent.parent().filter(NodeRef::is_element);

        let inner_text = clean_text(&elem.text());
        let inner_text_len = inner_text.chars().count();
        if inner_text_len < min_text_length {
            continue;
        }

        candidates.insert(parent, score_node(&parent, keywords));
        if let Some(gp) = grandparent {
            candidates.insert(gp, score_node(&gp, keywords));
        }

        let commas = inner_text.matches(',').count();
        let delta = 1.0 + commas as f64 + (inner_text_len as f64 / 100.0).min(3.0);

        candidates.add_score(parent.id, delta);
        if let Some(gp) = grandparent {
            candidates.add_score(gp.id, delta / 2.0);
        }
    }

    // Scale final scores by link density: good content has few links and is
    // mostly unaffected, while link farms collapse towards zero.
    for candidate in &mut candidates.entries {
        let density = link_density(&candidate.node);
        candidate.score *= 1.0 - density;
        candidate.score *= 1.0 + text_length(&candidate.node) as f64 / 500.0;
    }

    candidates
}
