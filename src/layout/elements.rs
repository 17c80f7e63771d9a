//! Builders for the host elements layout output is expressed in.
//!
//! The host engine interprets these by element name: `box`, `scale`, `v`,
//! `align`, `rect`, `stack`, and `hide`.

use super::geometry::Length;
use crate::model::{Dict, Node};
use crate::style::{Align, ToMarkup};

/// An inline box, optionally with a fixed width and/or height.
pub fn boxed(width: Option<Length>, height: Option<Length>, body: Node) -> Node {
    let mut node = Node::element("box");
    if let Some(w) = width {
        node = node.with_attr("width", w);
    }
    if let Some(h) = height {
        node = node.with_attr("height", h);
    }
    node.with_body(body)
}

/// Uniformly scale `body` by `factor` about `origin`. Scaling does not
/// change the footprint the surrounding layout reserves.
pub fn scale(factor: f64, origin: Align, body: Node) -> Node {
    Node::element("scale")
        .with_attr("x", factor)
        .with_attr("y", factor)
        .with_attr("origin", origin.to_markup_string())
        .with_body(body)
}

/// Vertical spacing; negative amounts pull following content up.
pub fn v(amount: Length) -> Node {
    Node::element("v").with_attr("amount", amount)
}

/// Align `body` inside its container.
pub fn align(position: Align, body: Node) -> Node {
    Node::element("align")
        .with_attr("alignment", position.to_markup_string())
        .with_body(body)
}

/// A rectangle with the given attributes (width, height, fill, ...).
pub fn rect(attrs: Dict) -> Node {
    attrs
        .into_iter()
        .fold(Node::element("rect"), |node, (k, v)| node.with_attr(k, v))
}

/// Stack children vertically with `spacing` between them.
pub fn stack(spacing: Length, children: Vec<Node>) -> Node {
    Node::element("stack")
        .with_attr("spacing", spacing)
        .with_children(children)
}

/// Render `body` invisibly while keeping its footprint.
pub fn hide(body: Node) -> Node {
    Node::element("hide").with_body(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    #[test]
    fn test_boxed_attrs() {
        let node = boxed(Some(Length::Pt(10.0)), None, Node::text("x"));
        assert_eq!(node.element_name(), Some("box"));
        assert_eq!(node.attr("width"), Some(&Value::Length(Length::Pt(10.0))));
        assert!(node.attr("height").is_none());
    }

    #[test]
    fn test_scale_attrs() {
        let node = scale(0.5, Align::TOP_LEFT, Node::text("x"));
        assert_eq!(node.attr("x"), Some(&Value::Float(0.5)));
        assert_eq!(node.attr("origin"), Some(&Value::Str("top + left".into())));
    }

    #[test]
    fn test_rect_keeps_attr_order() {
        let node = rect(Dict::new().with("width", Length::Pt(1.0)).with("fill", "red"));
        assert_eq!(node.attrs().keys().collect::<Vec<_>>(), vec!["width", "fill"]);
    }
}
