//! Triangle layout math.
//!
//! A triangle is described by an apex-anchored [`BoundingBox`]: `pos.x`
//! is the horizontal center (the apex), `pos.y` the top edge, and
//! `size` the full width and height of the box. The triangle itself has
//! its apex at `(pos.x, pos.y)` and its base corners at
//! `(pos.x ± size.x / 2, pos.y + size.y)`.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Axis-aligned region occupied by one triangle (or subtree).
///
/// `size` components are always non-negative; a zero-area box is valid
/// and means "nothing to draw" (e.g. an unmeasured viewport).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Apex anchor: horizontal center and top edge.
    pub pos: Vec2,
    /// Full width and height.
    pub size: Vec2,
}

impl BoundingBox {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// `true` when the box covers no area at all.
    pub fn is_empty(&self) -> bool {
        self.size.x * self.size.y == 0.0
    }
}

/// Vertical step from a parent's top edge down to its lower children,
/// as a fraction of the child height.
///
/// `sin(π/2)` is exactly `1`, so the lower children sit exactly one
/// child-height below the parent apex; kept symbolic because the value
/// is a projection of the subdivision angle, not an arbitrary constant.
#[inline]
pub fn dy() -> f32 {
    FRAC_PI_2.sin()
}

/// Splits a triangle's box into its three children.
///
/// Each child is half the parent's width and height, with the width
/// additionally scaled by `factor` (`1.0` = no shrink). The top child
/// keeps the parent's apex; the left and right children are offset by a
/// quarter of the parent width horizontally and by `dy()` child-heights
/// vertically. At `factor == 1.0` the three children tile the parent's
/// triangular area without overlap.
///
/// ### Returns
/// The child boxes in top, left, right order.
pub fn subdivide(bbox: &BoundingBox, factor: f32) -> [BoundingBox; 3] {
    let w2 = bbox.size.x / 2.0 * factor;
    let w4 = bbox.size.x / 4.0;
    let h2 = bbox.size.y / 2.0;
    let child_size = Vec2::new(w2, h2);
    let drop = dy() * h2;

    [
        BoundingBox::new(bbox.pos, child_size),
        BoundingBox::new(bbox.pos + Vec2::new(-w4, drop), child_size),
        BoundingBox::new(bbox.pos + Vec2::new(w4, drop), child_size),
    ]
}

/// Computes the root box for a viewport of `width` x `height`.
///
/// The box is centered horizontally and flush with the top edge.
/// `factor` scales only the width, which is what produces the
/// horizontal "breathing" motion when the factor is animated.
pub fn initial_box(width: f32, height: f32, factor: f32) -> BoundingBox {
    BoundingBox::new(
        Vec2::new(width / 2.0, 0.0),
        Vec2::new(width * factor, height),
    )
}
