//! Styling values shared by the reveal and layout layers.
//!
//! This module contains:
//! - Color and paint (concrete color or `auto`)
//! - Alignment keywords used to position content inside fixed boxes
//! - The [`ToMarkup`] trait for rendering values in native markup syntax

mod properties;

pub trait ToMarkup {
    /// Write this value as native markup to the buffer.
    fn to_markup(&self, buf: &mut String);

    /// Convert to a markup string (convenience method).
    fn to_markup_string(&self) -> String {
        let mut buf = String::new();
        self.to_markup(&mut buf);
        buf
    }
}

pub use properties::{Align, Color, HAlign, Paint, VAlign};
