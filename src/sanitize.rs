//! Fragment sanitization.
//!
//! Prunes low-value structure from an assembled article fragment: weak
//! headings, interactive elements, and table/list/div blocks that look like
//! navigation, galleries, or boilerplate rather than prose. Finishes by
//! stripping every attribute from the serialized markup.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};

use crate::density::{link_density, text_length};
use crate::dom;
use crate::patterns::TAG_ATTRIBUTE;
use crate::scoring::{class_weight, CandidateSet, KeywordMatchers};

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];
const CONTAINER_TAGS: [&str; 3] = ["table", "ul", "div"];

/// Prune low-value subtrees from the assembled fragment, in place.
///
/// Container blocks are walked one tag at a time - tables, then lists,
/// then divs - each group in reverse document order, recollected after the
/// previous group's removals. A block rescued by long sibling text marks
/// its nested containers as allowed, which shields them from the groups
/// still to come.
pub fn sanitize(
    fragment: &NodeRef,
    candidates: &CandidateSet,
    keywords: &KeywordMatchers,
    min_text_length: usize,
) {
    for heading in dom::iter_tags(fragment, &HEADING_TAGS) {
        if class_weight(&heading, keywords) < 0.0 || link_density(&heading) > 0.33 {
            dom::remove(&heading);
        }
    }

    for elem in dom::iter_tags(fragment, &["form", "iframe", "textarea"]) {
        dom::remove(&elem);
    }

    let mut allowed: HashSet<NodeId> = HashSet::new();
    for tag in CONTAINER_TAGS {
        let containers = dom::iter_tags(fragment, &[tag]);
        for elem in containers.iter().rev() {
            if allowed.contains(&elem.id) {
                continue;
            }

            let weight = class_weight(elem, keywords);
            let score = candidates.get(elem.id).map_or(0.0, |c| c.score);

            if weight + score < 0.0 {
                dom::remove(elem);
            } else if dom::text_content(elem).matches(',').count() < 10 {
                remove_unnecessary_element(elem, weight, min_text_length, &mut allowed);
            }
        }
    }
}

/// Secondary heuristic for a container with little punctuation: count what
/// it is made of and drop it when the mix reads like boilerplate. A block
/// flanked by more than 1000 characters of sibling text is kept regardless
/// of the counts, and its nested containers are marked as allowed.
fn remove_unnecessary_element(
    elem: &NodeRef,
    weight: f64,
    min_text_length: usize,
    allowed: &mut HashSet<NodeId>,
) {
    let p = count_tags(elem, "p");
    let img = count_tags(elem, "img");
    let li = count_tags(elem, "li") - 100.0;
    let embed = count_tags(elem, "embed");
    let input = count_tags(elem, "input") - count_hidden_inputs(elem);

    let content_length = text_length(elem);
    let density = link_density(elem);
    let tag = dom::tag_name(elem).unwrap_or_default();

    let mut to_remove = false;
    if p > 0.0 && img > p {
        to_remove = true;
    } else if input > p / 3.0 {
        to_remove = true;
    } else if (weight < 25.0 && density > 0.2) || (weight >= 25.0 && density > 0.5) {
        to_remove = true;
    } else if li > p && tag != "ul" && tag != "ol" {
        to_remove = true;
    } else if content_length < min_text_length && (img == 0.0 || img > 2.0) {
        to_remove = true;
    } else if (embed == 1.0 && content_length < 75) || embed > 1.0 {
        to_remove = true;
    }

    if sibling_text_length(elem) > 1000 {
        to_remove = false;
        for nested in dom::iter_tags(elem, &CONTAINER_TAGS) {
            allowed.insert(nested.id);
        }
    }

    if to_remove {
        dom::remove(elem);
    }
}

fn count_tags(elem: &NodeRef, tag: &str) -> f64 {
    dom::iter_tags(elem, &[tag]).len() as f64
}

fn count_hidden_inputs(elem: &NodeRef) -> f64 {
    dom::iter_tags(elem, &["input"])
        .iter()
        .filter(|node| {
            dom::attr(node, "type").is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
        })
        .count() as f64
}

/// Cleaned text length of the nearest non-empty element sibling on each
/// side, combined.
fn sibling_text_length(elem: &NodeRef) -> usize {
    let mut total = 0;

    let mut prev = dom::prev_element_sibling(elem);
    while let Some(sib) = prev {
        let len = text_length(&sib);
        if len > 0 {
            total += len;
            break;
        }
        prev = dom::prev_element_sibling(&sib);
    }

    let mut next = dom::next_element_sibling(elem);
    while let Some(sib) = next {
        let len = text_length(&sib);
        if len > 0 {
            total += len;
            break;
        }
        next = dom::next_element_sibling(&sib);
    }

    total
}

/// Strip every attribute from every tag in serialized markup.
///
/// The pattern removes one attribute per tag per pass, so it is applied
/// until the markup stops changing; attribute-free markup passes through
/// untouched.
#[must_use]
pub fn clean_attributes(markup: &str) -> String {
    let mut out = markup.to_string();
    while TAG_ATTRIBUTE.is_match(&out) {
        out = TAG_ATTRIBUTE.replace_all(&out, "<${1}${2}>").into_owned();
    }
    out
}
