use crate::types::{Depth, MAX_DEPTH};

/// User-adjustable animation parameters.
///
/// Both fields are driven by range-limited sliders in the viewer, so
/// in-range values are the norm; the setters clamp anyway so the core
/// never sees an out-of-range depth or speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Subdivision depth of the triangle, `0..=MAX_DEPTH`.
    pub depth: Depth,
    /// Speed slider position, `1..=100`. Mapped to an animation period
    /// through [`crate::motion::speed_to_period_ms`].
    pub speed_input: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            depth: 4,
            speed_input: 50,
        }
    }
}

impl Params {
    pub fn set_depth(&mut self, depth: Depth) {
        self.depth = depth.min(MAX_DEPTH);
    }

    pub fn set_speed_input(&mut self, speed_input: u32) {
        self.speed_input = speed_input.clamp(1, 100);
    }
}
