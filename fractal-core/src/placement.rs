//! Recursive subdivision into drawable leaf placements.

use crate::geometry::{self, BoundingBox};
use crate::types::{Depth, TriangleLabel};

/// Everything needed to draw one leaf triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub bbox: BoundingBox,
    pub label: TriangleLabel,
}

/// Subdivides `bbox` to `depth` levels and returns one [`Placement`]
/// per leaf triangle.
///
/// The recursion visits children in top, left, right order, so the
/// output sequence is deterministic for a fixed input. `label` is
/// broadcast unchanged to every leaf. A zero-area root box yields an
/// empty sequence; that happens transiently while the viewport is
/// unmeasured and is not an error.
///
/// Depth is already clamped by [`crate::config::Params`], so the leaf
/// count `3^depth` stays well within capacity.
///
/// ### Returns
/// Exactly `3^depth` placements, or none for a zero-area root.
pub fn compute_placements(depth: Depth, bbox: BoundingBox, label: TriangleLabel) -> Vec<Placement> {
    if bbox.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(3usize.pow(depth));
    collect(depth, bbox, label, &mut out);
    out
}

fn collect(depth: Depth, bbox: BoundingBox, label: TriangleLabel, out: &mut Vec<Placement>) {
    if depth == 0 {
        out.push(Placement { bbox, label });
        return;
    }

    // The animated shrink is already baked into the root box; children
    // follow the fixed halving rule.
    for child in geometry::subdivide(&bbox, 1.0) {
        collect(depth - 1, child, label, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn bbox(x: f32, y: f32, w: f32, h: f32) -> BoundingBox {
        BoundingBox::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn depth_zero_returns_the_root_as_single_leaf() {
        let root = bbox(50.0, 0.0, 100.0, 100.0);
        let placements = compute_placements(0, root, 7);

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0], Placement { bbox: root, label: 7 });
    }

    #[test]
    fn depth_one_yields_three_half_size_children() {
        let root = bbox(0.0, 0.0, 100.0, 100.0);
        let placements = compute_placements(1, root, 0);

        assert_eq!(placements.len(), 3);
        for p in &placements {
            assert_eq!(p.bbox.size, Vec2::new(50.0, 50.0));
        }

        // Top child keeps the apex; left/right drop by the child height
        // and shift by a quarter of the parent width.
        assert_eq!(placements[0].bbox.pos, Vec2::new(0.0, 0.0));
        assert_eq!(placements[1].bbox.pos, Vec2::new(-25.0, 50.0));
        assert_eq!(placements[2].bbox.pos, Vec2::new(25.0, 50.0));
    }

    #[test]
    fn leaf_count_is_three_to_the_depth() {
        let root = bbox(400.0, 0.0, 800.0, 600.0);
        for depth in 0..=8 {
            let placements = compute_placements(depth, root, 42);
            assert_eq!(placements.len(), 3usize.pow(depth));
        }
    }

    #[test]
    fn label_is_broadcast_to_every_leaf() {
        let root = bbox(400.0, 0.0, 800.0, 600.0);
        let placements = compute_placements(3, root, 99);
        assert!(placements.iter().all(|p| p.label == 99));
    }

    #[test]
    fn output_is_deterministic_for_fixed_input() {
        let root = bbox(123.0, 0.0, 640.0, 480.0);
        let a = compute_placements(4, root, 17);
        let b = compute_placements(4, root, 17);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_area_root_produces_no_placements() {
        assert!(compute_placements(5, bbox(0.0, 0.0, 0.0, 600.0), 1).is_empty());
        assert!(compute_placements(5, bbox(0.0, 0.0, 800.0, 0.0), 1).is_empty());
    }
}
