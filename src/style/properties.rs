//! Color, paint, and alignment types and the keyword_enum! macro.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::ToMarkup;

/// Macro for defining markup keyword enums with automatic ToMarkup implementation.
///
/// # Example
///
/// ```ignore
/// keyword_enum! {
///     /// Horizontal alignment.
///     pub enum HAlign {
///         #[default]
///         Left => "left",
///         Right => "right",
///     }
/// }
/// ```
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $keyword:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Returns the markup keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $keyword,)*
                }
            }

            /// Parse a markup keyword into this enum.
            #[inline]
            pub fn from_keyword(s: &str) -> Option<Self> {
                match s {
                    $($keyword => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl ToMarkup for $name {
            fn to_markup(&self, buf: &mut String) {
                buf.push_str(self.as_str());
            }
        }
    };
}

keyword_enum! {
    /// Horizontal alignment.
    pub enum HAlign {
        #[default]
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

keyword_enum! {
    /// Vertical alignment.
    pub enum VAlign {
        #[default]
        Top => "top",
        Horizon => "horizon",
        Bottom => "bottom",
    }
}

/// Two-axis alignment, written `y + x` in markup (e.g. `bottom + left`).
///
/// Serializes as its markup string, so configuration files write
/// `"position": "horizon + center"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Align {
    pub x: HAlign,
    pub y: VAlign,
}

impl Align {
    pub const TOP_LEFT: Align = Align::new(HAlign::Left, VAlign::Top);
    pub const BOTTOM_LEFT: Align = Align::new(HAlign::Left, VAlign::Bottom);
    pub const CENTER: Align = Align::new(HAlign::Center, VAlign::Horizon);

    pub const fn new(x: HAlign, y: VAlign) -> Self {
        Self { x, y }
    }

    /// Parse `"bottom + left"`, `"left"`, `"horizon"`, etc. Missing axes default.
    pub fn parse(s: &str) -> Option<Self> {
        let mut align = Align::default();
        for part in s.split('+').map(str::trim) {
            if let Some(x) = HAlign::from_keyword(part) {
                align.x = x;
            } else if let Some(y) = VAlign::from_keyword(part) {
                align.y = y;
            } else {
                return None;
            }
        }
        Some(align)
    }
}

impl ToMarkup for Align {
    fn to_markup(&self, buf: &mut String) {
        self.y.to_markup(buf);
        buf.push_str(" + ");
        self.x.to_markup(buf);
    }
}

impl TryFrom<String> for Align {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Align::parse(&s).ok_or_else(|| format!("unknown alignment {s:?}"))
    }
}

impl From<Align> for String {
    fn from(align: Align) -> Self {
        align.to_markup_string()
    }
}

/// RGBA color (8 bits per channel).
///
/// Deserializes from either its channels or a hex string (`"#1e90ff"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Create a new opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color with alpha.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            3 => {
                let mut c = hex.chars().map(|ch| ch.to_digit(16).map(|d| (d * 17) as u8));
                Some(Color::rgb(c.next()??, c.next()??, c.next()??))
            }
            6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels(Channels),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Channels {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl TryFrom<ColorRepr> for Color {
    type Error = String;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(hex) => {
                Color::from_hex(&hex).ok_or_else(|| format!("invalid hex color {hex:?}"))
            }
            ColorRepr::Channels(Channels { r, g, b, a }) => Ok(Color::rgba(r, g, b, a)),
        }
    }
}

impl ToMarkup for Color {
    fn to_markup(&self, buf: &mut String) {
        if self.a == 255 {
            write!(buf, "rgb(\"#{:02x}{:02x}{:02x}\")", self.r, self.g, self.b).unwrap();
        } else {
            write!(
                buf,
                "rgb(\"#{:02x}{:02x}{:02x}{:02x}\")",
                self.r, self.g, self.b, self.a
            )
            .unwrap();
        }
    }
}

/// A fill that is either a concrete color or left to the host (`auto`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paint {
    #[default]
    Auto,
    Color(Color),
}

impl Paint {
    /// The concrete color, if resolved.
    pub fn color(&self) -> Option<Color> {
        match self {
            Paint::Auto => None,
            Paint::Color(c) => Some(*c),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Color(color)
    }
}
