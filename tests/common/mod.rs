//! A deterministic host for integration tests.
//!
//! Text is `CHAR_WIDTH` points per character and `LINE_HEIGHT` tall, wrapping
//! at the region width. Sequences and stacks place children top to bottom.
//! Anchor markers are `ANCHOR_HEIGHT` tall so the marker correction in the
//! fit engine is observable.

#![allow(dead_code)]

use unveil::layout::{AnchorId, Length, Oracle, Point, Positions, Region, Size};
use unveil::model::{Kind, Node, Value};

pub const CHAR_WIDTH: f64 = 10.0;
pub const LINE_HEIGHT: f64 = 20.0;
pub const ANCHOR_HEIGHT: f64 = 2.0;

pub struct FixedMetrics;

impl FixedMetrics {
    fn length(&self, value: Option<&Value>, extent: Option<f64>, region: Region) -> Option<f64> {
        value
            .and_then(Value::as_length)
            .and_then(|l| l.resolve(extent, region.font_size))
    }

    fn stacked<'a>(&self, children: impl IntoIterator<Item = &'a Node>, region: Region) -> Size {
        children.into_iter().fold(Size::ZERO, |acc, child| {
            let size = self.size(child, region);
            Size::new(acc.width.max(size.width), acc.height + size.height)
        })
    }

    fn size(&self, node: &Node, region: Region) -> Size {
        if AnchorId::from_node(node).is_some() {
            return Size::new(0.0, ANCHOR_HEIGHT);
        }
        match (node.kind(), node.element_name()) {
            (Kind::Text, _) => {
                let chars = node.text_attr().map_or(0, |t| t.chars().count());
                if chars == 0 {
                    return Size::ZERO;
                }
                let width = chars as f64 * CHAR_WIDTH;
                if region.width.is_finite() && width > region.width {
                    let lines = (width / region.width).ceil();
                    Size::new(region.width, lines * LINE_HEIGHT)
                } else {
                    Size::new(width, LINE_HEIGHT)
                }
            }
            (_, Some("v")) => {
                let amount = self.length(node.attr("amount"), region.height, region);
                Size::new(0.0, amount.unwrap_or(0.0))
            }
            (_, Some("box")) => {
                let width = self.length(node.attr("width"), Some(region.width), region);
                let inner_region = Region {
                    width: width.unwrap_or(region.width),
                    ..region
                };
                let inner = node
                    .body()
                    .map_or(Size::ZERO, |body| self.size(body, inner_region));
                Size::new(
                    width.unwrap_or(inner.width),
                    self.length(node.attr("height"), region.height, region)
                        .unwrap_or(inner.height),
                )
            }
            (_, Some("rect")) => Size::new(
                self.length(node.attr("width"), Some(region.width), region)
                    .unwrap_or(0.0),
                self.length(node.attr("height"), region.height, region)
                    .unwrap_or(0.0),
            ),
            (_, Some("stack")) => {
                let children = node.children().unwrap_or_default();
                let spacing = self
                    .length(node.attr("spacing"), region.height, region)
                    .unwrap_or(0.0);
                let gaps = children.len().saturating_sub(1) as f64;
                let size = self.stacked(children, region);
                Size::new(size.width, (size.height + spacing * gaps).max(0.0))
            }
            _ => {
                if let Some(children) = node.children() {
                    self.stacked(children, region)
                } else if let Some(body) = node.body() {
                    self.size(body, region)
                } else {
                    Size::ZERO
                }
            }
        }
    }
}

impl Oracle for FixedMetrics {
    fn measure(&self, content: &Node, region: Region) -> Size {
        self.size(content, region)
    }

    /// Walk the draft's top-level children, recording each anchor at the
    /// running vertical offset. Fractional spacers take whatever height is
    /// left in the region after the closing anchor.
    fn resolve(&self, draft: &Node, region: Region) -> Positions {
        let mut positions = Positions::new();
        let mut y = 0.0;
        for child in draft.children().unwrap_or_default() {
            if let Some(id) = AnchorId::from_node(child) {
                positions.insert(id, Point::new(0.0, y));
            }
            let height = match child.attr("amount").and_then(Value::as_length) {
                Some(Length::Fr(_)) => {
                    (region.height.unwrap_or(0.0) - y - ANCHOR_HEIGHT).max(0.0)
                }
                _ => self.size(child, region).height,
            };
            y += height;
        }
        positions
    }
}

/// A region of 800 x 450 points at 20pt.
pub fn slide() -> Region {
    Region::new(800.0, Some(450.0)).with_font_size(20.0)
}
