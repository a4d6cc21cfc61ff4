//! In-memory element tree.
//!
//! [`Element`] is a small stand-in for a DOM element: a tag, ordered
//! attributes, live properties and child nodes. Builders return elements and
//! callers decide where they go, which keeps tree construction independent
//! of any particular DOM API.

use std::collections::BTreeMap;

/// An attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// `name="value"`.
    Value(String),
    /// Boolean attribute, present without a value (`required`, `checked`).
    Present,
}

impl Attribute {
    /// Returns the attribute's string value; boolean attributes read as `""`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Value(value) => value,
            Self::Present => "",
        }
    }
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of the node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(element) => element.text_content(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// An element with ordered attributes and children.
///
/// Properties model live element state that is not serialized, such as an
/// input's current `value`, which can diverge from its `value` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, Attribute)>,
    properties: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            properties: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Sets an attribute. An existing attribute keeps its position and gets
    /// the new value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.put_attribute(name.into(), Attribute::Value(value.into()));
    }

    /// Sets a boolean (presence-only) attribute.
    pub fn set_boolean_attribute(&mut self, name: impl Into<String>) {
        self.put_attribute(name.into(), Attribute::Present);
    }

    fn put_attribute(&mut self, name: String, attribute: Attribute) {
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = attribute,
            None => self.attributes.push((name, attribute)),
        }
    }

    /// Builder-style [`Element::set_attribute`].
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, attribute)| attribute.as_str())
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(existing, _)| existing == name)
    }

    /// Attributes in the order they were first set.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.attributes
            .iter()
            .map(|(name, attribute)| (name.as_str(), attribute))
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Replaces all children with a single text node, or none for empty text.
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
    }

    /// Builder-style [`Element::set_text_content`].
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text_content(text);
        self
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    #[must_use]
    pub fn first_element_child(&self) -> Option<&Element> {
        self.child_elements().next()
    }

    #[must_use]
    pub fn last_element_child(&self) -> Option<&Element> {
        self.child_elements().last()
    }

    /// Serializes the element and its subtree to HTML.
    #[must_use]
    pub fn outer_html(&self) -> String {
        super::html::to_html(self)
    }

    /// Serializes only the element's children to HTML.
    #[must_use]
    pub fn inner_html(&self) -> String {
        super::html::children_to_html(self)
    }
}
