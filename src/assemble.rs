//! Best-candidate selection and article assembly.
//!
//! Picks the highest-scoring candidate and rebuilds an output fragment from
//! it plus any qualifying siblings - preambles, or content split apart by
//! removed ad blocks, often live next to the main container.

use std::cmp::Ordering;

use dom_query::NodeRef;

use crate::density::link_density;
use crate::dom;
use crate::patterns::SENTENCE_END;
use crate::scoring::{Candidate, CandidateSet};

/// Pick the candidate with the maximum score.
///
/// Ties break on first-seen order: the sort is stable over the set's
/// insertion order, so the earliest of equally scored candidates wins.
/// Returns `None` for an empty set.
#[must_use]
pub fn select_best_candidate<'a, 'b>(candidates: &'b CandidateSet<'a>) -> Option<&'b Candidate<'a>> {
    let mut sorted: Vec<&Candidate<'a>> = candidates.iter().collect();
    sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    sorted.first().copied()
}

/// Assemble the output fragment from the best candidate and its siblings.
///
/// Siblings join the output when they are scored candidates above the
/// sibling threshold, or paragraph-like enough on their own. Included
/// siblings are moved, not copied, into the output container in original
/// document order.
#[must_use]
pub fn get_article<'a>(
    candidates: &CandidateSet<'a>,
    best: &Candidate<'a>,
    html_partial: bool,
) -> NodeRef<'a> {
    let sibling_threshold = 10.0_f64.max(best.score * 0.2);

    let (output_root, container) = initial_output(&best.node, html_partial);

    let siblings: Vec<NodeRef<'a>> = match best.node.parent() {
        Some(parent) => dom::element_children(&parent),
        None => vec![best.node],
    };

    for sibling in siblings {
        let append = sibling.id == best.node.id
            || is_appendable(&sibling, candidates, sibling_threshold);
        if append {
            dom::append_child(&container, &sibling);
        }
    }

    output_root
}

/// Create the output root: a bare `div` fragment, or a minimal document
/// skeleton whose innermost `div` receives the content. Returns
/// `(root, container)`.
fn initial_output<'a>(node: &NodeRef<'a>, html_partial: bool) -> (NodeRef<'a>, NodeRef<'a>) {
    let div = dom::new_element(node, "div");
    if html_partial {
        (div, div)
    } else {
        let html = dom::new_element(node, "html");
        let body = dom::new_element(node, "body");
        dom::append_child(&html, &body);
        dom::append_child(&body, &div);
        (html, div)
    }
}

/// Decide whether a sibling of the best candidate belongs in the article.
fn is_appendable(sibling: &NodeRef, candidates: &CandidateSet, threshold: f64) -> bool {
    if candidates
        .get(sibling.id)
        .is_some_and(|c| c.score >= threshold)
    {
        return true;
    }

    if dom::is_tag(sibling, "p") {
        let density = link_density(sibling);
        let node_content = dom::direct_text(sibling);
        let node_length = node_content.chars().count();

        if node_length > 80 && density < 0.25 {
            return true;
        }
        if node_length <= 80 && density == 0.0 && SENTENCE_END.is_match(&node_content) {
            return true;
        }
    }

    false
}
