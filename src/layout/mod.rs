//! Measurement-driven layout helpers.
//!
//! This module contains:
//! - Lengths, sizes, and regions (`geometry`)
//! - The [`Oracle`] seam to the host engine and the anchor protocol
//! - Host element builders ([`elements`])
//! - Fit-to-height / fit-to-width scaling
//! - Cover strategies for hiding content without collapsing its footprint

mod cover;
pub mod elements;
mod fit;
mod geometry;
mod oracle;

pub use cover::{CoverStrategy, HideCover, RectCover, cover_with_rect};
pub use fit::{FitToHeight, FitToWidth, fit_to_height, fit_to_width};
pub use geometry::{Length, Point, Region, Size};
pub use oracle::{AnchorId, LayoutCtx, Oracle, Positions};
