//! Alternatives sharing one footprint.

use tracing::debug;

use super::primitives::RevealContext;
use super::spec::Visibility;
use crate::error::Result;
use crate::layout::{Length, Size};
use crate::layout::elements::{align, boxed};
use crate::model::Node;
use crate::style::Align;

/// Render one entry per `(predicate, content)` pair, each visible only when
/// its predicate matches the current subslide.
///
/// Every entry is placed in a fixed box as large as the largest content, so
/// the slide does not shift when the visible alternative changes. Entries
/// whose predicates overlap are all rendered.
pub fn alternatives_match(
    ctx: &mut RevealContext<'_>,
    pairs: Vec<(Visibility, Node)>,
    position: Align,
) -> Result<Node> {
    if pairs.is_empty() {
        return Ok(Node::empty());
    }

    let footprint = pairs
        .iter()
        .map(|(_, content)| ctx.layout().measure(content))
        .fold(Size::ZERO, Size::max);
    debug!(
        alternatives = pairs.len(),
        width = footprint.width,
        height = footprint.height,
        "alternatives footprint"
    );

    let children = pairs
        .into_iter()
        .map(|(visibility, content)| {
            let placed = boxed(
                Some(Length::Pt(footprint.width)),
                Some(Length::Pt(footprint.height)),
                align(position, content),
            );
            ctx.only(visibility, placed)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::sequence(children))
}
