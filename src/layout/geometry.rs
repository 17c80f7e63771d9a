//! Lengths, sizes, and the region content is laid out in.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::style::ToMarkup;

/// Length value with unit.
///
/// `Pt` and `Em` resolve without the host's help. `Ratio` is relative to the
/// containing region's extent along the same axis and `Fr` is a share of the
/// remaining space, so both are only known after the host lays out a draft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    /// Absolute points.
    Pt(f64),
    /// Multiple of the region's font size.
    Em(f64),
    /// Fraction of the container extent (`1.0` = 100%).
    Ratio(f64),
    /// Fractional share of leftover space.
    Fr(f64),
}

impl Length {
    pub const ZERO: Length = Length::Pt(0.0);

    /// Resolve to points when no layout pass is needed.
    pub fn to_absolute(self, font_size: f64) -> Option<f64> {
        match self {
            Length::Pt(v) => Some(v),
            Length::Em(v) => Some(v * font_size),
            Length::Ratio(_) | Length::Fr(_) => None,
        }
    }

    /// Resolve against a known container extent. Fractions never resolve
    /// statically, and a ratio of an unbounded extent is unknown.
    pub fn resolve(self, extent: Option<f64>, font_size: f64) -> Option<f64> {
        match self {
            Length::Ratio(r) => extent.filter(|e| e.is_finite()).map(|e| r * e),
            other => other.to_absolute(font_size),
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::ZERO
    }
}

impl ToMarkup for Length {
    fn to_markup(&self, buf: &mut String) {
        match self {
            Length::Pt(v) => write!(buf, "{}pt", v).unwrap(),
            Length::Em(v) => write!(buf, "{}em", v).unwrap(),
            Length::Ratio(v) => write!(buf, "{}%", v * 100.0).unwrap(),
            Length::Fr(v) => write!(buf, "{}fr", v).unwrap(),
        }
    }
}

/// A resolved two-dimensional extent in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Element-wise maximum.
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// True if either dimension is zero (nothing to scale).
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// A resolved position in points, relative to the page origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The container content is laid out in.
///
/// `height` is `None` inside flowing content where the vertical extent is
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub width: f64,
    pub height: Option<f64>,
    pub font_size: f64,
}

impl Region {
    pub fn new(width: f64, height: Option<f64>) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Resolve a horizontal length against this region.
    pub fn resolve_width(&self, length: Length) -> Option<f64> {
        length.resolve(Some(self.width), self.font_size)
    }

    /// Resolve a vertical length against this region.
    pub fn resolve_height(&self, length: Length) -> Option<f64> {
        length.resolve(self.height, self.font_size)
    }
}

impl Default for Region {
    /// A 16:9 slide body at a 20pt base font.
    fn default() -> Self {
        Self {
            width: 800.0,
            height: Some(450.0),
            font_size: 20.0,
        }
    }
}
