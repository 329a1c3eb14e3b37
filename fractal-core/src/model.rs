//! View model tying parameters, viewport, and animation together.

use glam::Vec2;

use crate::config::Params;
use crate::geometry::{self, BoundingBox};
use crate::motion;
use crate::placement::{self, Placement};
use crate::types::TriangleLabel;

/// Singular for `count <= 1`, plural otherwise: `numerus(3, "node")`
/// is `"3 nodes"`.
pub fn numerus(count: u64, noun: &str) -> String {
    if count <= 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Mutable state behind one animated triangle view.
///
/// Holds the user [`Params`], the last observed viewport size, and the
/// latest shrink factor published by the animation driver. Everything
/// else (counts, period, root box, placements) is derived on demand.
///
/// ### Fields
/// - `params` - Depth and speed slider state.
/// - `viewport` - Display area in pixels; zero until first measured.
/// - `factor` - Latest published shrink factor; starts at `1.0`.
#[derive(Clone, Debug)]
pub struct ViewModel {
    pub params: Params,
    pub viewport: Vec2,
    pub factor: f64,
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            params: Params::default(),
            viewport: Vec2::ZERO,
            factor: 1.0,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Number of leaf triangles at the current depth, `3^depth`.
    pub fn leaf_count(&self) -> u64 {
        3u64.pow(self.params.depth)
    }

    /// Total triangles across all recursion levels, leaves included.
    ///
    /// Closed form of the geometric series `sum(3^i, i = 0..=depth)`.
    pub fn node_count(&self) -> u64 {
        (3u64.pow(self.params.depth + 1) - 1) / 2
    }

    /// Animation period for the current speed slider position.
    pub fn period_ms(&self) -> f64 {
        motion::speed_to_period_ms(self.params.speed_input)
    }

    /// Label shown inside every leaf this render pass,
    /// `trunc(factor * 100)` clamped to the label range.
    pub fn label(&self) -> TriangleLabel {
        (self.factor * 100.0).trunc().clamp(0.0, 99.0) as TriangleLabel
    }

    /// Root bounding box for the current viewport and factor, or `None`
    /// while the viewport has no area.
    pub fn root_box(&self) -> Option<BoundingBox> {
        if self.viewport.x * self.viewport.y <= 0.0 {
            return None;
        }
        Some(geometry::initial_box(
            self.viewport.x,
            self.viewport.y,
            self.factor as f32,
        ))
    }

    /// Runs one full subdivision pass for the current state.
    pub fn placements(&self) -> Vec<Placement> {
        match self.root_box() {
            Some(root) => placement::compute_placements(self.params.depth, root, self.label()),
            None => Vec::new(),
        }
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
