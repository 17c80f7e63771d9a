//! # unveil
//!
//! Progressive-reveal building blocks for slide decks built on a
//! measurement-driven layout engine.
//!
//! ## Features
//!
//! - Parse subslide range specs (`"-2,4,6-8,10-"`) and decide visibility
//! - Reveal primitives: `uncover`, `only`, `alternatives`, `one_by_one`, ...
//! - A content tree model with label-preserving reconstruction
//! - Serialize content trees back to native markup or Markdown
//! - Fit content to a height or width, and cover content without
//!   collapsing its footprint
//!
//! ## Quick Start
//!
//! ```
//! use unveil::reveal::{is_visible, max_required_index};
//!
//! assert!(!is_visible(3, "-2,4,6-8,10-").unwrap());
//! assert!(is_visible(7, "-2,4,6-8,10-").unwrap());
//! assert_eq!(max_required_index("2-5").unwrap(), 5);
//! ```
//!
//! ## Revealing Content
//!
//! Layout questions are answered by the host through the [`Oracle`] trait:
//!
//! ```
//! use unveil::{LayoutCtx, Node, Oracle, Positions, Region, RevealContext, Size};
//!
//! struct Host;
//! impl Oracle for Host {
//!     fn measure(&self, _: &Node, _: Region) -> Size { Size::new(100.0, 20.0) }
//!     fn resolve(&self, _: &Node, _: Region) -> Positions { Positions::new() }
//! }
//!
//! let mut ctx = RevealContext::new(1, LayoutCtx::new(&Host, Region::default()));
//! let shown = ctx.uncover("1-", Node::text("first")).unwrap();
//! let later = ctx.only(2u32, Node::text("second")).unwrap();
//!
//! assert_eq!(shown.text_attr(), Some("first"));
//! assert!(later.is_empty());
//! assert_eq!(ctx.required_subslides(), 2);
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod markup;
pub mod model;
pub mod reveal;
pub mod style;

pub use config::Config;
pub use error::{Error, Result};
pub use layout::{LayoutCtx, Oracle, Positions, Region, Size};
pub use markup::{Dialect, serialize};
pub use model::{Dict, Node, Value};
pub use reveal::{RevealContext, Visibility, is_visible, max_required_index};
