//! Thin node-query façade over the XML tree.
//!
//! The parser only ever sees nodes through this module: ordered sibling
//! lists, flattened inner text, and the document-order text fragments of a
//! section body. Raw markup never leaks past here.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use crs_parser::xml::find_child;
///
/// let xml = r#"<TA-LIST><DT>1.</DT><DD>General Provisions</DD></TA-LIST>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert!(find_child(doc.root_element(), "DT").is_some());
/// assert!(find_child(doc.root_element(), "NR").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all descendant elements with the given tag name, in document order.
pub fn find_descendants<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .filter(move |n| n.is_element() && get_tag_name(*n) == tag)
}

/// Get all element children of a node, in document order.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Flattened inner text of a node: nested inline markup stripped,
/// whitespace collapsed to single spaces, ends trimmed.
///
/// Raw source headings may nest inline markup (`<B>`, `<I>`) inside a
/// heading element, so plain `Node::text` is not enough here.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use crs_parser::xml::flattened_text;
///
/// let xml = r#"<T-DIV>CODE OF <B>CRIMINAL</B>
///     PROCEDURE</T-DIV>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(flattened_text(doc.root_element()), "CODE OF CRIMINAL PROCEDURE");
/// ```
pub fn flattened_text(node: Node<'_, '_>) -> String {
    let mut raw = String::new();
    collect_text(node, &mut raw);
    collapse_whitespace(&raw)
}

fn collect_text(node: Node<'_, '_>, out: &mut String) {
    if let Some(t) = node.text() {
        out.push_str(t);
    }
    for child in node.children() {
        if child.is_element() {
            collect_text(child, out);
        }
        if let Some(tail) = child.tail() {
            out.push_str(tail);
        }
    }
}

/// Collapse runs of whitespace (including newlines) to single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Descendant text nodes of a section body, in document order, each
/// whitespace-collapsed; empty fragments are dropped.
///
/// For section bodies the first three fragments are heading boilerplate
/// (number, catchline, source credit); the rest are body paragraphs.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use crs_parser::xml::text_fragments;
///
/// let xml = r#"<SECTION-TEXT><CATLN><SECTNO>16-1-101.</SECTNO>
///     <CATCH-LINE>Short title.</CATCH-LINE><SOURCE>L. 72: p. 190.</SOURCE></CATLN>
///     <P>This code shall be known as the code of criminal procedure.</P>
/// </SECTION-TEXT>"#;
/// let doc = Document::parse(xml).unwrap();
/// let fragments = text_fragments(doc.root_element());
/// assert_eq!(fragments[0], "16-1-101.");
/// assert_eq!(fragments[1], "Short title.");
/// assert_eq!(fragments.len(), 4);
/// ```
pub fn text_fragments(node: Node<'_, '_>) -> Vec<String> {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .map(collapse_whitespace)
        .filter(|s| !s.is_empty())
        .collect()
}
