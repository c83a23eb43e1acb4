//! Tree preparation before scoring.
//!
//! Strips script/style subtrees, optionally removes unlikely-candidate
//! subtrees by class/id keywords, and normalizes loosely structured `div`
//! blocks into paragraph-like nodes. All mutations happen in place on the
//! working root's subtree.

use dom_query::NodeRef;

use crate::density::clean_text;
use crate::dom;
use crate::patterns::{DIV_TO_P_ELEMENTS, OK_MAYBE_CANDIDATE, UNLIKELY_CANDIDATES};

/// Marker id set on body elements so later passes can recognize them.
pub const BODY_MARKER: &str = "readabilityBody";

/// Run the full preprocessing pass over the working root.
pub fn preprocess(root: &NodeRef, ruthless: bool) {
    for node in dom::iter_tags(root, &["script", "style"]) {
        dom::remove(&node);
    }
    if dom::is_tag(root, "body") {
        dom::set_attr(root, "id", BODY_MARKER);
    }
    for body in dom::iter_tags(root, &["body"]) {
        dom::set_attr(&body, "id", BODY_MARKER);
    }

    if ruthless {
        remove_unlikely_candidates(root);
    }

    transform_misused_divs(root);
}

/// Remove subtrees whose class/id string matches an unlikely-candidate
/// keyword without an override match. `html` and `body` are never removed.
fn remove_unlikely_candidates(root: &NodeRef) {
    let nodes: Vec<NodeRef> = root.descendants().into_iter().collect();
    for node in nodes {
        if !node.is_element() {
            continue;
        }
        let class_id = dom::class_id_string(&node);
        if class_id.len() < 2 {
            continue;
        }
        if UNLIKELY_CANDIDATES.is_match(&class_id)
            && !OK_MAYBE_CANDIDATE.is_match(&class_id)
            && !dom::is_tag(&node, "html")
            && !dom::is_tag(&node, "body")
        {
            dom::remove(&node);
        }
    }
}

/// Normalize divs that behave like paragraph containers.
///
/// A div with no nested block-level descendant becomes a `p`. The remaining
/// divs get loose text wrapped: leading text becomes a `p` child, trailing
/// text after a child becomes a `p` sibling, and `br` children are dropped.
fn transform_misused_divs(root: &NodeRef) {
    for div in dom::iter_tags(root, &["div"]) {
        if !DIV_TO_P_ELEMENTS.is_match(&dom::inner_html(&div)) {
            dom::rename(&div, "p");
        }
    }

    for div in dom::iter_tags(root, &["div"]) {
        wrap_loose_text(&div);
    }
}

fn wrap_loose_text(div: &NodeRef) {
    if let Some(first) = div.children().into_iter().next() {
        if first.is_text() && !clean_text(&first.text()).is_empty() {
            let p = dom::new_element(div, "p");
            dom::insert_before(&first, &p);
            dom::append_child(&p, &first);
        }
    }

    // Reverse order so wrapping one tail does not disturb the walk.
    let children: Vec<NodeRef> = div.children();
    for child in children.into_iter().rev() {
        if !child.is_element() {
            continue;
        }

        wrap_tail_text(&child);

        if dom::is_tag(&child, "br") {
            dom::remove(&child);
        }
    }
}

/// Wrap the text nodes trailing `child` (its "tail") in a new `p` sibling,
/// when that tail is not blank.
fn wrap_tail_text(child: &NodeRef) {
    let mut tail_nodes: Vec<NodeRef> = Vec::new();
    let mut next = child.next_sibling();
    while let Some(node) = next {
        if !node.is_text() {
            break;
        }
        next = node.next_sibling();
        tail_nodes.push(node);
    }

    let tail_text: String = tail_nodes.iter().map(|n| n.text().to_string()).collect();
    if clean_text(&tail_text).is_empty() {
        return;
    }

    if let Some(first_tail) = tail_nodes.first() {
        let p = dom::new_element(child, "p");
        dom::insert_before(first_tail, &p);
        for node in &tail_nodes {
            dom::append_child(&p, node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn body_root(doc: &Document) -> NodeRef<'_> {
        doc.select("body").nodes().first().copied().unwrap()
    }

    #[test]
    fn scripts_and_styles_are_dropped() {
        let doc = Document::from(
            "<body><script>var x;</script><style>p{}</style><p>keep</p></body>",
        );
        preprocess(&body_root(&doc), false);

        assert!(!doc.select("script").exists());
        assert!(!doc.select("style").exists());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn ruthless_removes_unlikely_subtrees() {
        let doc = Document::from(
            r#"<body><div class="sidebar"><p>nav stuff</p></div><div class="text"><p>article</p></div></body>"#,
        );
        preprocess(&body_root(&doc), true);

        assert!(!doc.select(".sidebar").exists());
        assert!(doc.select(".text").exists());
    }

    #[test]
    fn lenient_pass_keeps_unlikely_subtrees() {
        let doc = Document::from(r#"<body><div class="sidebar"><p>nav</p></div></body>"#);
        preprocess(&body_root(&doc), false);

        assert!(doc.select(".sidebar").exists());
    }

    #[test]
    fn override_pattern_protects_unlikely_match() {
        // "comment" is unlikely, but "article" overrides.
        let doc =
            Document::from(r#"<body><div class="article-comment"><p>kept</p></div></body>"#);
        preprocess(&body_root(&doc), true);

        assert!(doc.select(".article-comment").exists());
    }

    #[test]
    fn div_without_block_children_becomes_p() {
        let doc = Document::from("<body><div>just text and <em>inline</em> markup</div></body>");
        preprocess(&body_root(&doc), false);

        assert!(!doc.select("div").exists());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn div_with_block_children_stays_div() {
        let doc = Document::from("<body><div><p>a paragraph</p></div></body>");
        preprocess(&body_root(&doc), false);

        assert!(doc.select("div > p").exists());
    }

    #[test]
    fn leading_text_is_wrapped_in_paragraph() {
        let doc = Document::from("<body><div>loose lead<p>real paragraph</p></div></body>");
        preprocess(&body_root(&doc), false);

        let div = doc.select("div");
        let first_p = div.select("p");
        assert_eq!(first_p.length(), 2);
        assert!(first_p.text().contains("loose lead"));
    }

    #[test]
    fn tail_text_is_wrapped_in_paragraph() {
        let doc = Document::from("<body><div><p>para</p>tail text here</div></body>");
        preprocess(&body_root(&doc), false);

        let paragraphs = doc.select("div > p");
        assert_eq!(paragraphs.length(), 2);
        let last = paragraphs.nodes().last().copied().unwrap();
        assert_eq!(clean_text(&last.text()), "tail text here");
    }

    #[test]
    fn br_children_are_dropped() {
        let doc = Document::from("<body><div><p>one</p><br><p>two</p></div></body>");
        preprocess(&body_root(&doc), false);

        assert!(!doc.select("br").exists());
        assert_eq!(doc.select("div > p").length(), 2);
    }

    #[test]
    fn body_gets_marker_id() {
        let doc = Document::from("<html><body><p>x</p></body></html>");
        let html = doc.select("html").nodes().first().copied().unwrap();
        preprocess(&html, false);

        assert!(doc.select(&format!("body#{BODY_MARKER}")).exists());
    }
}
