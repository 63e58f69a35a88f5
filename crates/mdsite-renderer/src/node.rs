//! HTML node tree.
//!
//! A document is rendered through a closed set of two node shapes:
//! - [`LeafNode`]: raw text, optionally wrapped in a single tag
//! - [`ParentNode`]: a tag wrapping the concatenated rendering of its children
//!
//! Both shapes are validated on construction, so a tree that exists can always
//! be rendered.

use std::fmt;

/// Elements rendered as `<tag ... />` with no closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Error returned when a node is constructed with invalid parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// Tag was given but empty.
    #[error("node tag cannot be empty")]
    EmptyTag,
    /// Parent node without children.
    #[error("parent node <{tag}> requires at least one child")]
    NoChildren {
        /// Tag of the rejected parent.
        tag: String,
    },
    /// Leaf node without text.
    #[error("leaf node requires text (tag: {tag:?})")]
    EmptyText {
        /// Tag of the rejected leaf, if any.
        tag: Option<String>,
    },
}

/// Ordered attribute list.
///
/// Insertion order is preserved so rendering is deterministic. Inserting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Create an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    /// Look up an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as ` key="value"` pairs.
    ///
    /// Values are written verbatim; quotes inside a value are not escaped.
    fn render_into(&self, out: &mut String) {
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// Text node, optionally wrapped in one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    text: String,
    attributes: Attributes,
}

impl LeafNode {
    /// Create a leaf node.
    ///
    /// A leaf without a tag renders its text verbatim. Text may only be empty
    /// for void elements such as `img`.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::EmptyTag`] for `Some("")` and
    /// [`NodeError::EmptyText`] when text is empty on a non-void leaf.
    pub fn new(tag: Option<&str>, text: impl Into<String>) -> Result<Self, NodeError> {
        let text = text.into();
        if tag.is_some_and(str::is_empty) {
            return Err(NodeError::EmptyTag);
        }
        if text.is_empty() && !tag.is_some_and(is_void_element) {
            return Err(NodeError::EmptyText {
                tag: tag.map(str::to_owned),
            });
        }
        Ok(Self {
            tag: tag.map(str::to_owned),
            text,
            attributes: Attributes::new(),
        })
    }

    /// Add an attribute, replacing any previous value for the key.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn render_into(&self, out: &mut String) {
        let Some(tag) = self.tag.as_deref() else {
            out.push_str(&self.text);
            return;
        };

        out.push('<');
        out.push_str(tag);
        self.attributes.render_into(out);

        if is_void_element(tag) {
            if !self.text.is_empty() {
                out.push(' ');
                out.push_str(&self.text);
            }
            out.push_str(" />");
            return;
        }

        out.push('>');
        out.push_str(&self.text);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

/// Element wrapping one or more child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl ParentNode {
    /// Create a parent node that takes ownership of its children.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::EmptyTag`] if `tag` is empty and
    /// [`NodeError::NoChildren`] if `children` is empty.
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Result<Self, NodeError> {
        if tag.is_empty() {
            return Err(NodeError::EmptyTag);
        }
        if children.is_empty() {
            return Err(NodeError::NoChildren {
                tag: tag.to_owned(),
            });
        }
        Ok(Self {
            tag: tag.to_owned(),
            children,
            attributes: Attributes::new(),
        })
    }

    /// Add an attribute, replacing any previous value for the key.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        self.attributes.render_into(out);
        out.push('>');
        for child in &self.children {
            child.render_into(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// A node in the rendered HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Shorthand for [`LeafNode::new`].
    pub fn leaf(tag: Option<&str>, text: impl Into<String>) -> Result<Self, NodeError> {
        LeafNode::new(tag, text).map(Self::Leaf)
    }

    /// Shorthand for [`ParentNode::new`].
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Result<Self, NodeError> {
        ParentNode::new(tag, children).map(Self::Parent)
    }

    /// Element tag, `None` for raw text leaves.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => leaf.tag(),
            Self::Parent(parent) => Some(parent.tag()),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::Leaf(leaf) => leaf.attributes(),
            Self::Parent(parent) => parent.attributes(),
        }
    }

    /// Render the subtree to an HTML string.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(256);
        self.render_into(&mut out);
        out
    }

    /// Render the subtree, appending to `out`.
    pub fn render_into(&self, out: &mut String) {
        match self {
            Self::Leaf(leaf) => leaf.render_into(out),
            Self::Parent(parent) => parent.render_into(out),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        Self::Parent(parent)
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}
