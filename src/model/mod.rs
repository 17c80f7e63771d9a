//! Content tree model.
//!
//! This module contains:
//! - Content nodes and their kinds
//! - Dynamically typed attribute values
//! - The insertion-ordered [`Dict`] and its deep [`merge`]
//! - Structural predicates and label-preserving reconstruction

mod dict;
mod node;
pub mod predicates;
mod rewrite;
mod value;

// Re-export node types
pub use node::{Kind, Label, Node};

// Re-export values and dictionaries
pub use dict::{Dict, merge};
pub use value::Value;

// Re-export predicates
pub use predicates::{is_heading, is_metadata, is_sequence, is_styled};

// Re-export rewriting
pub use rewrite::{FieldMode, Replacement, reconstruct, reconstruct_styled};
