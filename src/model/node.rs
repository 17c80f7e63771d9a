//! Content node types and kinds.

use serde::{Deserialize, Serialize};

use super::{Dict, Value};

/// The kind of a content node.
///
/// The named variants are the structural kinds this crate inspects. Anything
/// else the host produces (boxes, scales, rectangles, custom elements) is an
/// [`Kind::Element`] carrying the host's element name; consumers must treat
/// unknown element names gracefully.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Ordered run of children.
    Sequence,
    /// A child with a set of style rules applied (`styles` attribute).
    Styled,
    /// Leaf text (`text` attribute).
    Text,
    /// Raw/code text (`text`, optional `lang`, `block` attributes).
    Raw,
    /// Bullet list item.
    ListItem,
    /// Numbered list item.
    EnumItem,
    /// Term list item (`term` attribute, description in the body).
    TermItem,
    Linebreak,
    Parbreak,
    Strong,
    Emph,
    /// Hyperlink (`dest` attribute).
    Link,
    /// Section heading; level in `depth`.
    Heading,
    /// Invisible value carrier (`value` attribute).
    Metadata,
    /// Typographic quote (`double` attribute).
    Smartquote,
    /// Any other host element, by name.
    Element(String),
}

/// An opaque cross-reference identity attached to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub String);

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Label(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A node in a content tree.
///
/// Nodes are immutable: the builder methods consume and return a node, and
/// every rewriting operation produces a new tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Node {
    kind: Kind,
    #[serde(default, skip_serializing_if = "Dict::is_empty")]
    attrs: Dict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<Box<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    depth: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<Label>,
}

impl Node {
    /// Create a node of the given kind with no attributes or content.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            attrs: Dict::new(),
            children: None,
            body: None,
            depth: None,
            label: None,
        }
    }

    /// A host element by name.
    pub fn element(name: impl Into<String>) -> Self {
        Self::new(Kind::Element(name.into()))
    }

    /// A text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Kind::Text).with_attr("text", text.into())
    }

    /// A single-space text leaf.
    pub fn space() -> Self {
        Self::text(" ")
    }

    pub fn sequence(children: Vec<Node>) -> Self {
        Self::new(Kind::Sequence).with_children(children)
    }

    /// Content that renders nothing.
    pub fn empty() -> Self {
        Self::sequence(Vec::new())
    }

    /// Wrap `child` with a set of style rules.
    pub fn styled(child: Node, styles: Dict) -> Self {
        Self::new(Kind::Styled)
            .with_attr("styles", styles)
            .with_body(child)
    }

    pub fn raw(text: impl Into<String>, lang: Option<&str>, block: bool) -> Self {
        let mut node = Self::new(Kind::Raw).with_attr("text", text.into());
        if let Some(lang) = lang {
            node = node.with_attr("lang", lang);
        }
        node.with_attr("block", block)
    }

    pub fn list_item(body: Node) -> Self {
        Self::new(Kind::ListItem).with_body(body)
    }

    pub fn enum_item(body: Node) -> Self {
        Self::new(Kind::EnumItem).with_body(body)
    }

    pub fn term_item(term: Node, description: Node) -> Self {
        Self::new(Kind::TermItem)
            .with_attr("term", term)
            .with_body(description)
    }

    pub fn linebreak() -> Self {
        Self::new(Kind::Linebreak)
    }

    pub fn parbreak() -> Self {
        Self::new(Kind::Parbreak)
    }

    pub fn strong(body: Node) -> Self {
        Self::new(Kind::Strong).with_body(body)
    }

    pub fn emph(body: Node) -> Self {
        Self::new(Kind::Emph).with_body(body)
    }

    /// A hyperlink. String destinations are URLs; other values are host
    /// locations.
    pub fn link(dest: impl Into<Value>, body: Node) -> Self {
        Self::new(Kind::Link).with_attr("dest", dest).with_body(body)
    }

    pub fn heading(depth: u8, body: Node) -> Self {
        let mut node = Self::new(Kind::Heading).with_body(body);
        node.depth = Some(depth);
        node
    }

    pub fn metadata(value: impl Into<Value>) -> Self {
        Self::new(Kind::Metadata).with_attr("value", value)
    }

    pub fn smartquote(double: bool) -> Self {
        Self::new(Kind::Smartquote).with_attr("double", double)
    }

    /// Builder-style attribute insert.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn with_body(mut self, body: Node) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    pub(crate) fn set_body(&mut self, body: Option<Node>) {
        self.body = body.map(Box::new);
    }

    pub(crate) fn set_children(&mut self, children: Option<Vec<Node>>) {
        self.children = children;
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// The host element name, if this is a generic element.
    pub fn element_name(&self) -> Option<&str> {
        match &self.kind {
            Kind::Element(name) => Some(name),
            _ => None,
        }
    }

    pub fn attrs(&self) -> &Dict {
        &self.attrs
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }

    pub fn body(&self) -> Option<&Node> {
        self.body.as_deref()
    }

    pub fn depth(&self) -> Option<u8> {
        self.depth
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// The `text` attribute when it is a plain string.
    pub fn text_attr(&self) -> Option<&str> {
        self.attr("text").and_then(Value::as_str)
    }

    /// True for a sequence with no children.
    pub fn is_empty(&self) -> bool {
        self.kind == Kind::Sequence && self.children.as_ref().is_none_or(Vec::is_empty)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::text(text)
    }
}
