//! Fit engine against a fixed-metrics host.

mod common;

use common::{ANCHOR_HEIGHT, FixedMetrics, slide};
use unveil::Error;
use unveil::layout::{
    AnchorId, FitToHeight, FitToWidth, LayoutCtx, Length, Oracle, Point, Positions, Region, Size,
    fit_to_height, fit_to_width,
};
use unveil::model::{Node, Value};

/// Ten lines of ten characters: 100 x 200 points.
fn block() -> Node {
    Node::sequence((0..10).map(|_| Node::text("x".repeat(10))).collect())
}

fn pt(node: &Node, attr: &str) -> Option<f64> {
    match node.attr(attr)?.as_length()? {
        Length::Pt(v) => Some(v),
        _ => None,
    }
}

fn factor(node: &Node) -> Option<f64> {
    node.body()?.attr("x").and_then(Value::as_float)
}

// ============================================================================
// fit_to_height
// ============================================================================

#[test]
fn test_absolute_height_shrinks() {
    let mut layout = LayoutCtx::new(&FixedMetrics, slide());
    let out = fit_to_height(FitToHeight::new(Length::Pt(100.0), block()), &mut layout).unwrap();
    assert_eq!(factor(&out), Some(0.5));
    assert_eq!(FixedMetrics.measure(&out, slide()), Size::new(50.0, 100.0));
}

#[test]
fn test_em_height_is_static() {
    // 10em at 20pt is exactly the natural height.
    let mut layout = LayoutCtx::new(&FixedMetrics, slide());
    let out = fit_to_height(FitToHeight::new(Length::Em(10.0), block()), &mut layout).unwrap();
    assert_eq!(out, block());
}

#[test]
fn test_ratio_height_goes_through_anchors() {
    let mut layout = LayoutCtx::new(&FixedMetrics, slide());
    let out = fit_to_height(FitToHeight::new(Length::Ratio(0.5), block()), &mut layout).unwrap();

    let children = out.children().unwrap();
    assert!(AnchorId::from_node(&children[0]).is_some());
    assert_eq!(pt(&children[1], "amount"), Some(-ANCHOR_HEIGHT));
    assert_eq!(pt(&children[2], "height"), Some(225.0));
    assert_eq!(factor(&children[2]), Some(1.125));

    // The anchor and its correction cancel out.
    assert_eq!(FixedMetrics.measure(&out, slide()).height, 225.0);
}

#[test]
fn test_fraction_fills_remaining_height() {
    let mut layout = LayoutCtx::new(&FixedMetrics, slide());
    let out = fit_to_height(FitToHeight::new(Length::Fr(1.0), block()), &mut layout).unwrap();
    let scaled = &out.children().unwrap()[2];
    assert_eq!(pt(scaled, "height"), Some(450.0 - 2.0 * ANCHOR_HEIGHT));
}

#[test]
fn test_prescale_width_rewraps_before_measuring() {
    let mut layout = LayoutCtx::new(&FixedMetrics, slide());
    let req = FitToHeight::new(Length::Pt(80.0), Node::text("y".repeat(40)))
        .with_prescale_width(Length::Pt(200.0));
    let out = fit_to_height(req, &mut layout).unwrap();
    assert_eq!(factor(&out), Some(2.0));
    assert_eq!(pt(&out, "width"), Some(400.0));
    let prescaled = out.body().and_then(Node::body).unwrap();
    assert_eq!(pt(prescaled, "width"), Some(200.0));
}

#[test]
fn test_height_policy_noops() {
    let mut layout = LayoutCtx::new(&FixedMetrics, slide());
    let shrink_only = FitToHeight::new(Length::Pt(400.0), block()).grow(false);
    assert_eq!(fit_to_height(shrink_only, &mut layout).unwrap(), block());

    let grow_only = FitToHeight::new(Length::Pt(100.0), block()).shrink(false);
    assert_eq!(fit_to_height(grow_only, &mut layout).unwrap(), block());

    let empty = FitToHeight::new(Length::Pt(100.0), Node::empty());
    assert_eq!(fit_to_height(empty, &mut layout).unwrap(), Node::empty());
}

// ============================================================================
// Host failures
// ============================================================================

/// Resolves every anchor to the same point, or not at all.
struct BrokenHost {
    resolve_any: bool,
    inverted: bool,
}

impl Oracle for BrokenHost {
    fn measure(&self, content: &Node, region: Region) -> Size {
        FixedMetrics.measure(content, region)
    }

    fn resolve(&self, draft: &Node, _region: Region) -> Positions {
        let mut positions = Positions::new();
        if !self.resolve_any {
            return positions;
        }
        let anchors = draft
            .children()
            .unwrap_or_default()
            .iter()
            .filter_map(AnchorId::from_node);
        for (i, id) in anchors.enumerate() {
            let y = if self.inverted { -(i as f64) * 10.0 } else { 0.0 };
            positions.insert(id, Point::new(0.0, y));
        }
        positions
    }
}

#[test]
fn test_missing_anchor_is_layout_error() {
    let host = BrokenHost {
        resolve_any: false,
        inverted: false,
    };
    let mut layout = LayoutCtx::new(&host, slide());
    let err = fit_to_height(FitToHeight::new(Length::Ratio(1.0), block()), &mut layout)
        .unwrap_err();
    assert!(matches!(err, Error::Layout(_)));
}

#[test]
fn test_inverted_anchors_are_layout_error() {
    let host = BrokenHost {
        resolve_any: true,
        inverted: true,
    };
    let mut layout = LayoutCtx::new(&host, slide());
    let err = fit_to_height(FitToHeight::new(Length::Ratio(1.0), block()), &mut layout)
        .unwrap_err();
    assert!(matches!(err, Error::Layout(_)));
}

// ============================================================================
// fit_to_width
// ============================================================================

#[test]
fn test_width_grows_without_rewrapping() {
    let layout = LayoutCtx::new(&FixedMetrics, slide());
    let out = fit_to_width(FitToWidth::new(Length::Ratio(1.0), Node::text("z".repeat(40))), &layout)
        .unwrap();
    assert_eq!(factor(&out), Some(2.0));
    assert_eq!(FixedMetrics.measure(&out, slide()), Size::new(800.0, 40.0));
}

#[test]
fn test_width_measures_unbounded() {
    // 1000pt of text would wrap in the 800pt region; it is measured on one
    // line and shrunk instead.
    let layout = LayoutCtx::new(&FixedMetrics, slide());
    let out = fit_to_width(FitToWidth::new(Length::Pt(800.0), Node::text("z".repeat(100))), &layout)
        .unwrap();
    assert_eq!(factor(&out), Some(0.8));
    assert_eq!(pt(&out, "height"), Some(16.0));

    let kept = fit_to_width(
        FitToWidth::new(Length::Pt(800.0), Node::text("z".repeat(100))).shrink(false),
        &layout,
    )
    .unwrap();
    assert_eq!(kept, Node::text("z".repeat(100)));
}
