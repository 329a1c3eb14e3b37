/// Numeric label drawn inside each leaf triangle.
///
/// Derived from the current animation factor as `trunc(factor * 100)`,
/// so it always falls in `0..=99`. The same value is broadcast to every
/// leaf of a render pass.
pub type TriangleLabel = u8;

/// Number of recursive splits applied to the root triangle.
///
/// Valid values are `0..=MAX_DEPTH`; callers clamp before invoking the
/// subdivider.
pub type Depth = u32;

/// Upper bound on [`Depth`]. Depth 8 already produces 6561 leaves.
pub const MAX_DEPTH: Depth = 8;
