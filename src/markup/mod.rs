//! Pure markup generation from content trees.
//!
//! - `escape`: Fence/tick lengths for raw text and string literal quoting
//! - `render`: Core tree → markup rendering in the [`Dialect`]s
//!
//! ## Design Notes
//!
//! The renderer handles a closed set of structural kinds (raw text, list
//! items, breaks, strong/emph, links, headings, smart quotes). Every other
//! kind, including host elements this crate has never seen, degrades to its
//! children, body, or `text` attribute instead of failing.

mod escape;
mod render;

pub use escape::{calculate_fence_length, calculate_inline_code_ticks, quote_string};
pub use render::{Dialect, serialize};
