//! Label-preserving node reconstruction.
//!
//! Rewrites never touch the original node: they copy its kind, attributes,
//! depth, and label into a new node and swap only the body or children.

use super::predicates::is_styled;
use super::Node;

/// The content that replaces a node's body or children.
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    Body(Node),
    Children(Vec<Node>),
}

/// How the replacement is matched to the node's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMode {
    /// Write into the field the replacement names (`Body` → body,
    /// `Children` → children).
    #[default]
    Named,
    /// Write into whichever slot the node already uses. A body-shaped node
    /// receives children as a single node (or a sequence of them); a
    /// children-shaped node receives a body as a one-element list.
    Positional,
}

/// Rebuild `node` with its body or children replaced.
///
/// All attributes and the label carry over unchanged.
///
/// # Examples
///
/// ```
/// use unveil::model::{FieldMode, Label, Node, Replacement, reconstruct};
///
/// let item = Node::list_item(Node::text("old")).with_label(Label::new("first"));
/// let new = reconstruct(&item, Replacement::Body(Node::text("new")), FieldMode::Named);
///
/// assert_eq!(new.kind(), item.kind());
/// assert_eq!(new.label(), Some(&Label::new("first")));
/// assert_eq!(new.body().and_then(Node::text_attr), Some("new"));
/// ```
pub fn reconstruct(node: &Node, replacement: Replacement, mode: FieldMode) -> Node {
    let mut out = node.clone();
    match (mode, replacement) {
        (FieldMode::Named, Replacement::Body(body)) => out.set_body(Some(body)),
        (FieldMode::Named, Replacement::Children(children)) => out.set_children(Some(children)),
        (FieldMode::Positional, replacement) => {
            let body_shaped = node.body().is_some() && node.children().is_none();
            match (body_shaped, replacement) {
                (true, Replacement::Body(body)) => out.set_body(Some(body)),
                (true, Replacement::Children(mut children)) => {
                    let body = if children.len() == 1 {
                        children.remove(0)
                    } else {
                        Node::sequence(children)
                    };
                    out.set_body(Some(body));
                }
                (false, Replacement::Children(children)) => out.set_children(Some(children)),
                (false, Replacement::Body(body)) => {
                    if node.children().is_some() {
                        out.set_children(Some(vec![body]));
                    } else {
                        out.set_body(Some(body));
                    }
                }
            }
        }
    }
    out
}

/// Rebuild a styled node around a new child, keeping its style set.
///
/// # Panics
///
/// Panics if `node` is not a styled node.
pub fn reconstruct_styled(node: &Node, child: Node) -> Node {
    assert!(
        is_styled(node),
        "reconstruct_styled expects a styled node, got {:?}",
        node.kind()
    );
    reconstruct(node, Replacement::Body(child), FieldMode::Named)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dict, Kind, Label};

    fn labelled_link() -> Node {
        Node::link("https://example.com", Node::text("site")).with_label(Label::new("ref"))
    }

    #[test]
    fn test_roundtrip_with_current_body() {
        let node = labelled_link();
        let body = node.body().cloned().unwrap();
        let rebuilt = reconstruct(&node, Replacement::Body(body), FieldMode::Named);
        assert_eq!(rebuilt, node);
    }

    #[test]
    fn test_roundtrip_with_current_children() {
        let node = Node::sequence(vec![Node::text("a"), Node::space(), Node::text("b")])
            .with_label(Label::new("seq"));
        let children = node.children().unwrap().to_vec();
        let rebuilt = reconstruct(&node, Replacement::Children(children), FieldMode::Positional);
        assert_eq!(rebuilt, node);
    }

    #[test]
    fn test_replaces_only_body() {
        let node = labelled_link();
        let rebuilt = reconstruct(
            &node,
            Replacement::Body(Node::emph(Node::text("other"))),
            FieldMode::Named,
        );
        assert_eq!(rebuilt.kind(), &Kind::Link);
        assert_eq!(rebuilt.attrs(), node.attrs());
        assert_eq!(rebuilt.label(), node.label());
        assert_eq!(rebuilt.body().map(Node::kind), Some(&Kind::Emph));
    }

    #[test]
    fn test_positional_children_into_body() {
        let node = Node::strong(Node::text("x"));
        let one = reconstruct(
            &node,
            Replacement::Children(vec![Node::text("y")]),
            FieldMode::Positional,
        );
        assert_eq!(one.body().and_then(Node::text_attr), Some("y"));
        assert!(one.children().is_none());

        let many = reconstruct(
            &node,
            Replacement::Children(vec![Node::text("y"), Node::text("z")]),
            FieldMode::Positional,
        );
        let body = many.body().unwrap();
        assert_eq!(body.kind(), &Kind::Sequence);
        assert_eq!(body.children().map(<[Node]>::len), Some(2));
    }

    #[test]
    fn test_positional_body_into_children() {
        let node = Node::sequence(vec![Node::text("a")]);
        let rebuilt = reconstruct(
            &node,
            Replacement::Body(Node::text("b")),
            FieldMode::Positional,
        );
        assert!(rebuilt.body().is_none());
        assert_eq!(rebuilt.children().unwrap()[0].text_attr(), Some("b"));
    }

    #[test]
    fn test_original_is_untouched() {
        let node = labelled_link();
        let before = node.clone();
        let _ = reconstruct(&node, Replacement::Body(Node::text("new")), FieldMode::Named);
        assert_eq!(node, before);
    }

    #[test]
    fn test_reconstruct_styled_keeps_styles() {
        let styles = Dict::new().with("fill", "red");
        let node = Node::styled(Node::text("warm"), styles.clone()).with_label(Label::new("s"));
        let rebuilt = reconstruct_styled(&node, Node::text("cool"));
        assert_eq!(rebuilt.attr("styles").and_then(|v| v.as_dict()), Some(&styles));
        assert_eq!(rebuilt.body().and_then(Node::text_attr), Some("cool"));
        assert_eq!(rebuilt.label(), Some(&Label::new("s")));
    }

    #[test]
    #[should_panic(expected = "expects a styled node")]
    fn test_reconstruct_styled_rejects_other_kinds() {
        let _ = reconstruct_styled(&Node::text("x"), Node::text("y"));
    }
}
