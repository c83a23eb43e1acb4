//! DOM operations adapter.
//!
//! Thin layer over the `dom_query` crate providing the tree operations the
//! extraction pipeline needs: tag-filtered traversal, direct-text access,
//! in-place mutation, and serialization. `dom_query` trees are arenas of
//! nodes addressed by stable `NodeId`s, so a detached subtree's handles stay
//! valid while a traversal collected before the mutation is still running.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Tag/Node Information ===

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    node.node_name().map(|t| t.to_lowercase())
}

/// Check whether an element node has the given tag name.
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// Concatenated `"class id"` string of an element, empty parts included.
///
/// This is the string matched against the unlikely-candidate patterns.
#[must_use]
pub fn class_id_string(node: &NodeRef) -> String {
    let class = node.attr("class").unwrap_or_default();
    let id = node.attr("id").unwrap_or_default();
    format!("{class} {id}")
}

/// Get an attribute value.
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|v| v.to_string())
}

/// Set an attribute value.
pub fn set_attr(node: &NodeRef, name: &str, value: &str) {
    Selection::from(*node).set_attr(name, value);
}

// === Traversal ===

/// Collect descendant elements of `root` matching any of `tags`, in
/// document order. The root itself is never included.
#[must_use]
pub fn iter_tags<'a>(root: &NodeRef<'a>, tags: &[&str]) -> Vec<NodeRef<'a>> {
    root.descendants()
        .into_iter()
        .filter(|node| {
            node.is_element()
                && node
                    .node_name()
                    .is_some_and(|name| tags.iter().any(|t| name.eq_ignore_ascii_case(t)))
        })
        .collect()
}

/// Element children of a node, in document order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// First descendant of `root` matching a CSS selector.
#[must_use]
pub fn select_first<'a>(root: &NodeRef<'a>, css: &str) -> Option<NodeRef<'a>> {
    Selection::from(*root).select(css).nodes().first().copied()
}

/// Next element sibling, skipping text and comment nodes.
#[must_use]
pub fn next_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}

/// Previous element sibling, skipping text and comment nodes.
#[must_use]
pub fn prev_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.prev_sibling();
    }
    None
}

// === Text Content ===

/// All text content of a node and its descendants.
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Direct text of an element: the text-node children before its first
/// element child. Trailing text after children is a sibling concern and is
/// not included.
#[must_use]
pub fn direct_text(node: &NodeRef) -> String {
    let mut out = String::new();
    for child in node.children() {
        if child.is_text() {
            out.push_str(&child.text());
        } else {
            break;
        }
    }
    out
}

// === Tree Manipulation ===

/// Detach a node and its whole subtree from the tree.
pub fn remove(node: &NodeRef) {
    node.remove_from_parent();
}

/// Rename an element's tag in place; children and attributes are kept.
pub fn rename(node: &NodeRef, new_tag: &str) {
    Selection::from(*node).rename(new_tag);
}

/// Create a new, detached element in the same arena as `node`.
#[must_use]
pub fn new_element<'a>(node: &NodeRef<'a>, tag: &str) -> NodeRef<'a> {
    node.tree.new_element(tag)
}

/// Move `child` (and its subtree) to be the last child of `parent`.
pub fn append_child(parent: &NodeRef, child: &NodeRef) {
    parent.append_child(child);
}

/// Move `node` to be the sibling immediately before `anchor`.
pub fn insert_before(anchor: &NodeRef, node: &NodeRef) {
    anchor.insert_before(node);
}

// === Serialization ===

/// Outer HTML of a node subtree, attached or detached.
#[must_use]
pub fn outer_html(node: &NodeRef) -> String {
    Selection::from(*node).html().to_string()
}

/// Inner HTML of a node - its serialized children only.
#[must_use]
pub fn inner_html(node: &NodeRef) -> String {
    Selection::from(*node).inner_html().to_string()
}

// === Parsing ===

/// Parse an HTML string into a document.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Clone a document by serializing and reparsing it.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_node<'a>(doc: &'a Document, css: &str) -> NodeRef<'a> {
        doc.select(css).nodes().first().copied().unwrap()
    }

    #[test]
    fn iter_tags_in_document_order() {
        let doc = parse(
            "<div><p>1</p><pre>2</pre><table><tbody><tr><td>x</td></tr></tbody></table><p>3</p></div>",
        );
        let root = first_node(&doc, "div");

        let tags: Vec<String> = iter_tags(&root, &["p", "pre", "td"])
            .iter()
            .filter_map(tag_name)
            .collect();
        assert_eq!(tags, ["p", "pre", "td", "p"]);
    }

    #[test]
    fn class_id_string_includes_both_parts() {
        let doc = parse(r#"<div class="wrap" id="main">x</div>"#);
        let div = first_node(&doc, "div");
        assert_eq!(class_id_string(&div), "wrap main");

        let doc = parse("<div>x</div>");
        let div = first_node(&doc, "div");
        assert_eq!(class_id_string(&div), " ");
    }

    #[test]
    fn direct_text_stops_at_first_element() {
        let doc = parse("<div>lead <span>inner</span> tail</div>");
        let div = first_node(&doc, "div");
        assert_eq!(direct_text(&div).trim(), "lead");
    }

    #[test]
    fn direct_text_empty_when_element_first() {
        let doc = parse("<div><span>inner</span> tail</div>");
        let div = first_node(&doc, "div");
        assert_eq!(direct_text(&div), "");
    }

    #[test]
    fn rename_preserves_children_and_attributes() {
        let doc = parse(r#"<div id="keep"><em>inner</em></div>"#);
        let div = first_node(&doc, "div");
        rename(&div, "p");

        assert!(doc.select("p#keep em").exists());
        assert!(!doc.select("div").exists());
    }

    #[test]
    fn append_child_moves_subtree() {
        let doc = parse("<div><p id=\"a\">one</p></div><section></section>");
        let p = first_node(&doc, "#a");
        let section = first_node(&doc, "section");

        append_child(&section, &p);

        assert!(doc.select("section > p#a").exists());
        assert!(!doc.select("div > p").exists());
    }

    #[test]
    fn new_element_starts_detached() {
        let doc = parse("<div>x</div>");
        let div = first_node(&doc, "div");
        let p = new_element(&div, "p");

        assert!(is_tag(&p, "p"));
        assert!(!doc.select("p").exists());

        append_child(&div, &p);
        assert!(doc.select("div > p").exists());
    }

    #[test]
    fn insert_before_places_node_as_previous_sibling() {
        let doc = parse("<div><span id=\"anchor\">x</span></div>");
        let anchor = first_node(&doc, "#anchor");
        let p = new_element(&anchor, "p");

        insert_before(&anchor, &p);

        let div = first_node(&doc, "div");
        let tags: Vec<String> = element_children(&div).iter().filter_map(tag_name).collect();
        assert_eq!(tags, ["p", "span"]);
    }

    #[test]
    fn element_siblings_skip_text_nodes() {
        let doc = parse("<div><p id=\"a\">1</p> between <p id=\"b\">2</p></div>");
        let a = first_node(&doc, "#a");
        let b = first_node(&doc, "#b");

        assert_eq!(next_element_sibling(&a).map(|n| n.id), Some(b.id));
        assert_eq!(prev_element_sibling(&b).map(|n| n.id), Some(a.id));
        assert!(prev_element_sibling(&a).is_none());
    }

    #[test]
    fn clone_document_is_independent() {
        let doc = parse(r#"<div id="original">content</div>"#);
        let cloned = clone_document(&doc);

        cloned.select("#original").set_attr("id", "cloned");
        assert!(doc.select("#original").exists());
        assert!(cloned.select("#cloned").exists());
    }
}
