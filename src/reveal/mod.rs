//! Progressive reveal across subslides.
//!
//! This module contains:
//! - The subslide range spec parser and [`Visibility`] predicates
//! - Reveal primitives bound to a [`RevealContext`] (`uncover`, `only`,
//!   `alternatives`, ...)
//! - The alternatives matcher that keeps every reveal step in one footprint

mod matcher;
mod primitives;
mod spec;

pub use matcher::alternatives_match;
pub use primitives::{RevealContext, Span};
pub use spec::{IntoVisibility, RangeSpec, Visibility, is_visible, max_required_index};
