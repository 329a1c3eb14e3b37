//! Core library for the animated Sierpinski triangle.
//!
//! Main components:
//! - [`geometry`] — bounding boxes, triangle subdivision, root layout.
//! - [`motion`] — easing and the logarithmic speed scale.
//! - [`placement`] — recursive subdivision into leaf placements.
//! - [`driver`] — wall-clock animation of the shrink factor.
//! - [`model`] — user parameters, viewport, derived counts.
//! - [`config`] — user-adjustable parameters and clamping.
//! - [`types`] — shared type aliases.

pub mod config;
pub mod driver;
pub mod geometry;
pub mod model;
pub mod motion;
pub mod placement;
pub mod types;
