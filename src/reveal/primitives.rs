//! Reveal primitives bound to one subslide.

use tracing::trace;

use super::matcher::alternatives_match;
use super::spec::{IntoVisibility, RangeSpec, Visibility};
use crate::error::{Error, Result};
use crate::layout::{CoverStrategy, LayoutCtx, RectCover};
use crate::model::predicates::{is_list_entry, is_sequence};
use crate::model::{FieldMode, Node, Replacement, reconstruct};
use crate::style::{Align, Color};

/// Where a [`RevealContext::alternatives_fn`] range stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Exclusive end index.
    End(u32),
    /// Number of alternatives.
    Count(u32),
}

/// Everything a reveal primitive needs to decide what to emit: the current
/// subslide, the layout context, and how hidden content is covered.
///
/// Every primitive records how many subslides its predicate needs, so after
/// a slide's content has been built [`required_subslides`] reports how many
/// reveal steps the slide has.
///
/// [`required_subslides`]: RevealContext::required_subslides
pub struct RevealContext<'a> {
    subslide: u32,
    layout: LayoutCtx<'a>,
    cover: Box<dyn CoverStrategy + 'a>,
    position: Align,
    required: u32,
}

impl<'a> RevealContext<'a> {
    /// Create a context for `subslide` with the default white rectangle cover.
    pub fn new(subslide: u32, layout: LayoutCtx<'a>) -> Self {
        Self {
            subslide,
            layout,
            cover: Box::new(RectCover::new(Color::WHITE)),
            position: Align::BOTTOM_LEFT,
            required: 1,
        }
    }

    pub fn with_cover(mut self, cover: impl CoverStrategy + 'a) -> Self {
        self.cover = Box::new(cover);
        self
    }

    pub fn with_boxed_cover(mut self, cover: Box<dyn CoverStrategy + 'a>) -> Self {
        self.cover = cover;
        self
    }

    /// Alignment of alternatives inside their shared footprint.
    pub fn with_position(mut self, position: Align) -> Self {
        self.position = position;
        self
    }

    pub fn subslide(&self) -> u32 {
        self.subslide
    }

    pub fn position(&self) -> Align {
        self.position
    }

    /// The number of subslides needed by every predicate seen so far.
    pub fn required_subslides(&self) -> u32 {
        self.required
    }

    pub fn layout(&self) -> &LayoutCtx<'a> {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut LayoutCtx<'a> {
        &mut self.layout
    }

    fn require(&mut self, visibility: &Visibility) -> bool {
        self.required = self.required.max(visibility.max_required_index());
        let visible = visibility.is_visible(self.subslide);
        trace!(subslide = self.subslide, spec = %visibility, visible, "reveal decision");
        visible
    }

    /// Show `content` when the subslide matches, otherwise cover it while
    /// keeping its footprint.
    pub fn uncover(&mut self, spec: impl IntoVisibility, content: Node) -> Result<Node> {
        let visibility = spec.into_visibility()?;
        if self.require(&visibility) {
            Ok(content)
        } else {
            self.cover.cover(content, &self.layout)
        }
    }

    /// Show `content` when the subslide matches, otherwise emit nothing.
    pub fn only(&mut self, spec: impl IntoVisibility, content: Node) -> Result<Node> {
        let visibility = spec.into_visibility()?;
        Ok(if self.require(&visibility) {
            content
        } else {
            Node::empty()
        })
    }

    /// Show `items` one per subslide from `start`, all in one shared
    /// footprint. With `repeat_last`, the last item stays on every later
    /// subslide.
    ///
    /// # Examples
    ///
    /// ```
    /// use unveil::layout::{LayoutCtx, Oracle, Positions, Region, Size};
    /// use unveil::model::Node;
    /// use unveil::reveal::RevealContext;
    ///
    /// struct Constant;
    /// impl Oracle for Constant {
    ///     fn measure(&self, _: &Node, _: Region) -> Size { Size::new(10.0, 10.0) }
    ///     fn resolve(&self, _: &Node, _: Region) -> Positions { Positions::new() }
    /// }
    ///
    /// let mut ctx = RevealContext::new(5, LayoutCtx::new(&Constant, Region::default()));
    /// let items = vec![Node::text("a"), Node::text("b"), Node::text("c")];
    /// let out = ctx.alternatives(1, true, items).unwrap();
    /// assert_eq!(ctx.required_subslides(), 3);
    /// assert_eq!(out.children().map(<[Node]>::len), Some(3));
    /// ```
    pub fn alternatives(&mut self, start: u32, repeat_last: bool, items: Vec<Node>) -> Result<Node> {
        check_start(start)?;
        let last = items.len().saturating_sub(1);
        let pairs = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| -> Result<(Visibility, Node)> {
                let index = offset(start, i)?;
                let spec = if repeat_last && i == last {
                    RangeSpec::from(index)
                } else {
                    RangeSpec::Exact(index)
                };
                Ok((Visibility::new(vec![spec]), item))
            })
            .collect::<Result<Vec<_>>>()?;
        let position = self.position;
        alternatives_match(self, pairs, position)
    }

    /// Like [`alternatives`](Self::alternatives), with the content for each
    /// index produced by `f`.
    pub fn alternatives_fn(
        &mut self,
        start: u32,
        span: Span,
        repeat_last: bool,
        f: impl FnMut(u32) -> Node,
    ) -> Result<Node> {
        check_start(start)?;
        let end = match span {
            Span::End(end) => end,
            Span::Count(count) => start.saturating_add(count),
        };
        let items = (start..end).map(f).collect();
        self.alternatives(start, repeat_last, items)
    }

    /// One alternative per case: case `k` is shown when `cases[k]` matches,
    /// with content `f(k)`.
    pub fn alternatives_cases<S: IntoVisibility>(
        &mut self,
        cases: Vec<S>,
        mut f: impl FnMut(usize) -> Node,
    ) -> Result<Node> {
        let pairs = cases
            .into_iter()
            .enumerate()
            .map(|(k, case)| -> Result<(Visibility, Node)> {
                Ok((case.into_visibility()?, f(k)))
            })
            .collect::<Result<Vec<_>>>()?;
        let position = self.position;
        alternatives_match(self, pairs, position)
    }

    /// Uncover `items` cumulatively: item `i` appears on subslide
    /// `start + i` and stays.
    pub fn one_by_one(&mut self, start: u32, items: Vec<Node>) -> Result<Node> {
        check_start(start)?;
        let children = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| self.uncover(RangeSpec::from(offset(start, i)?), item))
            .collect::<Result<Vec<_>>>()?;
        Ok(Node::sequence(children))
    }

    /// Uncover the entries of a list one subslide at a time from `start`.
    ///
    /// Other children of the sequence (separators, surrounding text) are
    /// left alone. A lone list entry is uncovered from `start`; any other
    /// node is returned unchanged.
    pub fn line_by_line(&mut self, start: u32, node: &Node) -> Result<Node> {
        check_start(start)?;
        if is_list_entry(node) {
            return self.uncover(RangeSpec::from(start), node.clone());
        }
        let Some(children) = node.children().filter(|_| is_sequence(node)) else {
            return Ok(node.clone());
        };

        let mut entries = 0;
        let mut rewritten = Vec::with_capacity(children.len());
        for child in children {
            if is_list_entry(child) {
                let index = offset(start, entries)?;
                rewritten.push(self.uncover(RangeSpec::from(index), child.clone())?);
                entries += 1;
            } else {
                rewritten.push(child.clone());
            }
        }
        Ok(reconstruct(
            node,
            Replacement::Children(rewritten),
            FieldMode::Named,
        ))
    }
}

fn check_start(start: u32) -> Result<()> {
    if start == 0 {
        return Err(Error::InvalidSpec("subslide indices start at 1".into()));
    }
    Ok(())
}

/// The subslide `i` steps after `start`.
fn offset(start: u32, i: usize) -> Result<u32> {
    u32::try_from(i)
        .ok()
        .and_then(|i| start.checked_add(i))
        .ok_or_else(|| Error::InvalidSpec(format!("subslide {start} + {i} is out of range")))
}
