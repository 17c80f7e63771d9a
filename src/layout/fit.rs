//! Scale content to fill a target height or width.
//!
//! Both algorithms measure the content's natural size through the oracle,
//! compute a single uniform ratio, and only emit scaled output when the
//! grow/shrink policy allows it. Every no-op path returns the request's
//! content unchanged.

use tracing::debug;

use super::elements::{boxed, scale, v};
use super::geometry::{Length, Region, Size};
use super::oracle::{AnchorId, LayoutCtx};
use crate::error::{Error, Result};
use crate::model::Node;
use crate::style::{Align, ToMarkup};

/// Request to scale content to a target height.
#[derive(Debug, Clone, PartialEq)]
pub struct FitToHeight {
    pub content: Node,
    /// Height to fill. Anything but points and em needs a draft layout.
    pub height: Length,
    /// Cap on the scaled width; defaults to the region width.
    pub width: Option<Length>,
    /// Lay the content out at this width before measuring.
    pub prescale_width: Option<Length>,
    pub grow: bool,
    pub shrink: bool,
}

impl FitToHeight {
    pub fn new(height: Length, content: Node) -> Self {
        Self {
            content,
            height,
            width: None,
            prescale_width: None,
            grow: true,
            shrink: true,
        }
    }

    pub fn with_width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_prescale_width(mut self, width: Length) -> Self {
        self.prescale_width = Some(width);
        self
    }

    pub fn grow(mut self, grow: bool) -> Self {
        self.grow = grow;
        self
    }

    pub fn shrink(mut self, shrink: bool) -> Self {
        self.shrink = shrink;
        self
    }
}

/// Request to scale content to a target width.
#[derive(Debug, Clone, PartialEq)]
pub struct FitToWidth {
    pub content: Node,
    pub width: Length,
    pub grow: bool,
    pub shrink: bool,
}

impl FitToWidth {
    pub fn new(width: Length, content: Node) -> Self {
        Self {
            content,
            width,
            grow: true,
            shrink: true,
        }
    }

    pub fn grow(mut self, grow: bool) -> Self {
        self.grow = grow;
        self
    }

    pub fn shrink(mut self, shrink: bool) -> Self {
        self.shrink = shrink;
        self
    }
}

/// Whether the policy permits applying `ratio`.
fn permits(ratio: f64, grow: bool, shrink: bool) -> bool {
    (shrink && ratio < 1.0) || (grow && ratio > 1.0)
}

fn resolve_width(region: Region, width: Length, what: &str) -> Result<f64> {
    region.resolve_width(width).ok_or_else(|| {
        Error::Layout(format!(
            "{what} {} cannot be resolved against a region",
            width.to_markup_string()
        ))
    })
}

/// Height resolved through a draft layout.
struct AnchoredHeight {
    before: Node,
    marker_height: f64,
    available: f64,
}

/// Place two anchors separated by a spacer of `height`, lay the draft out,
/// and read the distance between them.
fn resolve_anchored_height(height: Length, layout: &mut LayoutCtx) -> Result<AnchoredHeight> {
    let (before_id, before) = layout.anchor();
    let (after_id, after) = layout.anchor();
    let draft = Node::sequence(vec![before.clone(), v(height), after]);
    let positions = layout.resolve(&draft);

    let lookup = |id: AnchorId| {
        positions
            .get(id)
            .ok_or_else(|| Error::Layout(format!("anchor {} was not resolved", id.0)))
    };
    let start = lookup(before_id)?;
    let end = lookup(after_id)?;

    let distance = end.y - start.y;
    if distance < 0.0 {
        return Err(Error::Layout(format!(
            "anchor {} resolved above anchor {}",
            after_id.0, before_id.0
        )));
    }

    let marker_height = layout.measure(&before).height;
    let available = (distance - marker_height).max(0.0);
    debug!(
        target_height = %height.to_markup_string(),
        distance,
        marker_height,
        available,
        "resolved elastic height"
    );

    Ok(AnchoredHeight {
        before,
        marker_height,
        available,
    })
}

/// Scale content so it fills the requested height without exceeding the
/// available width.
///
/// Point and em heights are used directly. Relative and fractional heights
/// go through a draft layout pass; the output then starts with the
/// before-anchor followed by a negative spacer of the anchor's own height,
/// so the scaled box lands where the spacer began.
pub fn fit_to_height(req: FitToHeight, layout: &mut LayoutCtx) -> Result<Node> {
    let region = layout.region();

    let (available, anchored) = match req.height.to_absolute(region.font_size) {
        Some(h) => (h, None),
        None => {
            let anchored = resolve_anchored_height(req.height, layout)?;
            (anchored.available, Some(anchored))
        }
    };

    let mut content = req.content.clone();
    if let Some(prescale) = req.prescale_width {
        let w = resolve_width(region, prescale, "prescale width")?;
        content = boxed(Some(Length::Pt(w)), None, content);
    }

    let natural = layout.measure(&content);
    if natural.is_degenerate() {
        debug!("content has no extent, leaving unscaled");
        return Ok(req.content);
    }

    let max_width = match req.width {
        Some(w) => resolve_width(region, w, "width")?,
        None => region.width,
    };
    let h_ratio = available / natural.height;
    let w_ratio = max_width / natural.width;
    let ratio = h_ratio.min(w_ratio);

    let applied = permits(ratio, req.grow, req.shrink);
    debug!(h_ratio, w_ratio, ratio, applied, "fit to height");
    if !applied {
        return Ok(req.content);
    }

    let scaled = boxed(
        Some(Length::Pt(natural.width * ratio)),
        Some(Length::Pt(available)),
        scale(ratio, Align::TOP_LEFT, content),
    );

    Ok(match anchored {
        None => scaled,
        Some(a) => Node::sequence(vec![a.before, v(Length::Pt(-a.marker_height)), scaled]),
    })
}

/// Scale content so its width matches the requested width.
///
/// The content is measured without a width limit, laid out in a box of its
/// natural width so it does not rewrap, scaled, and wrapped in an outer box
/// that reports the scaled size to the surrounding layout.
pub fn fit_to_width(req: FitToWidth, layout: &LayoutCtx) -> Result<Node> {
    let region = layout.region();
    let target = resolve_width(region, req.width, "width")?;

    let unbounded = Region {
        width: f64::INFINITY,
        ..region
    };
    let natural: Size = layout.measure_in(&req.content, unbounded);
    if natural.width == 0.0 {
        debug!("content has no width, leaving unscaled");
        return Ok(req.content);
    }

    let ratio = target / natural.width;
    let applied = permits(ratio, req.grow, req.shrink);
    debug!(target, natural_width = natural.width, ratio, applied, "fit to width");
    if !applied {
        return Ok(req.content);
    }

    let inner = boxed(Some(Length::Pt(natural.width)), None, req.content);
    Ok(boxed(
        Some(Length::Pt(natural.width * ratio)),
        Some(Length::Pt(natural.height * ratio)),
        scale(ratio, Align::TOP_LEFT, inner),
    ))
}
