//! Structural predicates over content nodes.
//!
//! These compare a node's kind tag (and for metadata, the discriminator
//! embedded in its value) so callers can branch without depending on how a
//! node stores its fields.

use super::{Kind, Node, Value};

/// Check if a node is an ordered run of children.
pub fn is_sequence(node: &Node) -> bool {
    *node.kind() == Kind::Sequence
}

/// Check if a node wraps a child with style rules.
pub fn is_styled(node: &Node) -> bool {
    *node.kind() == Kind::Styled
}

/// Check if a node is metadata, optionally carrying a dictionary value whose
/// `kind` entry equals `kind`.
pub fn is_metadata(node: &Node, kind: Option<&str>) -> bool {
    if *node.kind() != Kind::Metadata {
        return false;
    }
    let Some(kind) = kind else {
        return true;
    };
    node.attr("value")
        .and_then(Value::as_dict)
        .and_then(|d| d.get("kind"))
        .and_then(Value::as_str)
        == Some(kind)
}

/// Check if a node is a heading, optionally no deeper than `max_depth`.
///
/// A heading without an explicit depth counts as depth 1.
pub fn is_heading(node: &Node, max_depth: Option<u8>) -> bool {
    if *node.kind() != Kind::Heading {
        return false;
    }
    max_depth.is_none_or(|max| node.depth().unwrap_or(1) <= max)
}

/// Check if a node is one entry of a bullet, numbered, or term list.
pub fn is_list_entry(node: &Node) -> bool {
    matches!(node.kind(), Kind::ListItem | Kind::EnumItem | Kind::TermItem)
}
