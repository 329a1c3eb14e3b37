//! Easing and speed-scale math for the animation.
//!
//! Timing runs in `f64` because the phase is derived from wall-clock
//! milliseconds; geometry only sees the final factor.

use std::f64::consts::TAU;

/// Base of the exponential speed scale.
///
/// The slider maps `1..=100` to a period of `1.08^100` down to
/// `1.08^1` milliseconds-per-phase-unit, so the low end of the slider
/// covers large period changes and the high end fine ones.
pub const SPEED_BASE: f64 = 1.08;

/// Sine-based oscillation, `[0..1] -> [0..1]`.
///
/// Periodic with period 1: `ease(0) == ease(1) == 0.5`, peak `1` at
/// `t = 0.25`, trough `0` at `t = 0.75`. Applied to a sawtooth phase it
/// yields a smooth shrink/expand motion.
#[inline]
pub fn ease(t: f64) -> f64 {
    ((TAU * t).sin() + 1.0) / 2.0
}

/// Maps a speed slider value (`1..=100`) to an animation period.
///
/// `period = 1.08 ^ (101 - speed_input)`: strictly monotonic
/// decreasing, so a higher slider value means a shorter period and a
/// faster animation.
#[inline]
pub fn speed_to_period_ms(speed_input: u32) -> f64 {
    SPEED_BASE.powi(101 - speed_input as i32)
}

/// Inverse of [`speed_to_period_ms`], for display.
///
/// Returns the unrounded slider value `101 - log_1.08(period)`; callers
/// round for presentation. For any in-range slider value the round trip
/// recovers the value exactly after rounding.
#[inline]
pub fn period_to_speed(period_ms: f64) -> f64 {
    101.0 - period_ms.ln() / SPEED_BASE.ln()
}
