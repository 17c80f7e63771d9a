//! Hiding content while keeping its layout footprint.

use tracing::debug;

use super::elements::{boxed, hide, rect, stack};
use super::geometry::Length;
use super::oracle::LayoutCtx;
use crate::error::{Error, Result};
use crate::model::{Dict, Node, Value, merge};
use crate::style::Paint;

/// Turns visible content into covered content of the same footprint.
pub trait CoverStrategy {
    fn cover(&self, content: Node, layout: &LayoutCtx) -> Result<Node>;
}

impl<F> CoverStrategy for F
where
    F: Fn(Node, &LayoutCtx) -> Result<Node>,
{
    fn cover(&self, content: Node, layout: &LayoutCtx) -> Result<Node> {
        self(content, layout)
    }
}

/// Overlay an opaque rectangle (see [`cover_with_rect`]).
#[derive(Debug, Clone, PartialEq)]
pub struct RectCover {
    pub fill: Paint,
    pub inline: bool,
    /// Extra rectangle attributes merged over the defaults.
    pub rect_args: Dict,
}

impl RectCover {
    pub fn new(fill: impl Into<Paint>) -> Self {
        Self {
            fill: fill.into(),
            inline: true,
            rect_args: Dict::new(),
        }
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn with_rect_args(mut self, rect_args: Dict) -> Self {
        self.rect_args = rect_args;
        self
    }
}

impl CoverStrategy for RectCover {
    fn cover(&self, content: Node, layout: &LayoutCtx) -> Result<Node> {
        cover_with_rect(content, self.fill, &self.rect_args, self.inline, layout)
    }
}

/// Let the host render the content invisibly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HideCover;

impl CoverStrategy for HideCover {
    fn cover(&self, content: Node, _layout: &LayoutCtx) -> Result<Node> {
        Ok(hide(content))
    }
}

/// Cover `content` with an opaque rectangle of its measured size.
///
/// The rectangle is stacked over the content with a negative spacing equal
/// to the content height, so the pair advances the layout exactly as the
/// content alone would. A small asymmetric outset (0.1em above, 0.25em
/// below) covers ascenders and descenders. `rect_args` is deep-merged over
/// the default rectangle attributes.
///
/// The fill must be a concrete color: the background behind the content
/// cannot be introspected, so `Paint::Auto` is a configuration error.
pub fn cover_with_rect(
    content: Node,
    fill: Paint,
    rect_args: &Dict,
    inline: bool,
    layout: &LayoutCtx,
) -> Result<Node> {
    let Some(color) = fill.color() else {
        return Err(Error::AutoFill);
    };

    let size = layout.measure(&content);
    debug!(width = size.width, height = size.height, inline, "covering content");

    let defaults = Dict::new()
        .with("width", Length::Pt(size.width))
        .with("height", Length::Pt(size.height))
        .with("fill", color)
        .with("stroke", Value::None)
        .with(
            "outset",
            Dict::new()
                .with("top", Length::Em(0.1))
                .with("bottom", Length::Em(0.25)),
        );
    let overlay = rect(merge(&defaults, [rect_args]));

    let covered = stack(Length::Pt(-size.height), vec![content, overlay]);
    Ok(if inline {
        boxed(None, None, covered)
    } else {
        covered
    })
}
