//! The measurement oracle seam and the draft/resolve anchor protocol.
//!
//! Relative and fractional lengths only resolve inside the host's own layout
//! pass. Callers that need them emit anchor markers into a draft, hand the
//! draft to the host, and look the resolved positions up by [`AnchorId`].

use std::collections::HashMap;

use tracing::trace;

use super::geometry::{Point, Region, Size};
use crate::model::predicates::is_metadata;
use crate::model::{Dict, Node, Value};

const ANCHOR_KIND: &str = "anchor";

/// Host capability that resolves layout geometry.
pub trait Oracle {
    /// Natural size of `content` laid out in `region` (wrapping at its width).
    fn measure(&self, content: &Node, region: Region) -> Size;

    /// Lay out `draft` in `region` and report where each anchor marker in it
    /// ended up.
    fn resolve(&self, draft: &Node, region: Region) -> Positions;
}

/// Identity of an anchor marker within one composition pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(pub u32);

impl AnchorId {
    /// The zero-content marker node carrying this identity.
    pub fn marker(self) -> Node {
        Node::metadata(
            Dict::new()
                .with("kind", ANCHOR_KIND)
                .with("id", self.0),
        )
    }

    /// Recover the identity from a marker node.
    pub fn from_node(node: &Node) -> Option<AnchorId> {
        if !is_metadata(node, Some(ANCHOR_KIND)) {
            return None;
        }
        let id = node
            .attr("value")
            .and_then(Value::as_dict)
            .and_then(|d| d.get("id"))
            .and_then(Value::as_int)?;
        u32::try_from(id).ok().map(AnchorId)
    }
}

/// Resolved anchor positions from one draft layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions {
    resolved: HashMap<AnchorId, Point>,
}

impl Positions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: AnchorId, point: Point) {
        self.resolved.insert(id, point);
    }

    pub fn get(&self, id: AnchorId) -> Option<Point> {
        self.resolved.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

/// Layout state for one composition pass: the oracle, the current region,
/// and the anchor identity counter.
pub struct LayoutCtx<'a> {
    oracle: &'a dyn Oracle,
    region: Region,
    next_anchor: u32,
}

impl<'a> LayoutCtx<'a> {
    pub fn new(oracle: &'a dyn Oracle, region: Region) -> Self {
        Self {
            oracle,
            region,
            next_anchor: 0,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Measure `content` in the current region.
    pub fn measure(&self, content: &Node) -> Size {
        self.measure_in(content, self.region)
    }

    /// Measure `content` in an explicit region.
    pub fn measure_in(&self, content: &Node, region: Region) -> Size {
        let size = self.oracle.measure(content, region);
        trace!(width = size.width, height = size.height, "measured content");
        size
    }

    /// Allocate a fresh anchor and its marker node.
    pub fn anchor(&mut self) -> (AnchorId, Node) {
        let id = AnchorId(self.next_anchor);
        self.next_anchor += 1;
        (id, id.marker())
    }

    /// Run the host layout over a draft.
    pub fn resolve(&self, draft: &Node) -> Positions {
        self.oracle.resolve(draft, self.region)
    }
}
