//! HTML serialization of element trees.
//!
//! Text and attribute values are escaped, void elements have no closing tag,
//! and boolean attributes are written as bare names. Properties are live
//! element state and are never serialized.

use super::element::{Attribute, Element, Node};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

#[must_use]
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[must_use]
pub fn escape_attribute(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#39;")
}

/// Serializes an element and its subtree.
///
/// # Examples
///
/// ```
/// use deform::markup::{to_html, Element};
///
/// let mut input = Element::new("input");
/// input.set_attribute("name", "a&b");
/// input.set_boolean_attribute("required");
/// assert_eq!(to_html(&input), r#"<input name="a&amp;b" required>"#);
/// ```
#[must_use]
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

/// Serializes an element's children only.
#[must_use]
pub fn children_to_html(element: &Element) -> String {
    let mut out = String::new();
    for child in element.children() {
        write_node(&mut out, child);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(element) => write_element(out, element),
        Node::Text(text) => out.push_str(&escape_text(text)),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag());
    for (name, attribute) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        if let Attribute::Value(value) = attribute {
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag()) {
        return;
    }

    for child in element.children() {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}
