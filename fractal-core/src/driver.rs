//! Wall-clock driven animation of the shrink factor.

use crate::motion;
use tracing::debug;

/// Smallest nudge applied when two consecutive factors would be
/// bit-identical. The host only reacts to observable change, so a
/// repeated value would stall the self-re-arming render loop.
pub const FACTOR_EPSILON: f64 = 1e-9;

/// Width of the frame-rate statistics window in milliseconds.
const STATS_WINDOW_MS: f64 = 1000.0;

/// Whether the driver currently holds a tick subscription.
///
/// A driver starts [`Idle`](DriverState::Idle) and becomes
/// [`Running`](DriverState::Running) on its first tick. It stays
/// running until the host stops ticking it; a fresh instance starts
/// over in `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// Advances the shrink factor once per display frame.
///
/// The phase is computed from absolute wall-clock time rather than
/// accumulated deltas, so a dropped or delayed frame shifts timing but
/// never changes the animation speed.
#[derive(Debug)]
pub struct AnimationDriver {
    state: DriverState,
    factor: f64,
    fps: u32,
    renders: u32,
    window_start_ms: f64,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            state: DriverState::Idle,
            factor: 1.0,
            fps: 60,
            renders: 0,
            window_start_ms: 0.0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Last published shrink factor.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Frames counted in the last completed one-second window.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Advances the animation by one frame and returns the factor to
    /// publish.
    ///
    /// Steps, in order:
    /// 1. On the first tick, transition to `Running` and anchor the
    ///    statistics window at `now_ms`.
    /// 2. Count the frame; once the window spans at least one second,
    ///    snapshot the count as the observed fps and restart the window.
    /// 3. Wrap `now_ms / period_ms` into a sawtooth phase in `[0, 1)`
    ///    and run it through [`motion::ease`].
    /// 4. If the eased value is bit-identical to the previous factor,
    ///    nudge it by [`FACTOR_EPSILON`] so the published sequence never
    ///    repeats a value.
    ///
    /// ### Parameters
    /// - `now_ms` - Current wall-clock time in milliseconds.
    /// - `period_ms` - Animation period from
    ///   [`motion::speed_to_period_ms`]; always positive for in-range
    ///   speed inputs.
    ///
    /// ### Returns
    /// The factor published for this frame, in `[0, 1]` up to the
    /// epsilon nudge.
    pub fn tick(&mut self, now_ms: f64, period_ms: f64) -> f64 {
        if self.state == DriverState::Idle {
            self.state = DriverState::Running;
            self.window_start_ms = now_ms;
        }

        self.renders += 1;
        if now_ms - self.window_start_ms >= STATS_WINDOW_MS {
            self.fps = self.renders;
            self.renders = 0;
            self.window_start_ms = now_ms;
            debug!(fps = self.fps, "frame rate snapshot");
        }

        let t = (now_ms / period_ms) % 100.0 / 100.0;
        let mut next = motion::ease(t);
        if next == self.factor {
            next += FACTOR_EPSILON;
        }
        self.factor = next;
        next
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_transitions_to_running() {
        let mut driver = AnimationDriver::new();
        assert_eq!(driver.state(), DriverState::Idle);

        driver.tick(0.0, 50.0);
        assert_eq!(driver.state(), DriverState::Running);
    }

    #[test]
    fn tick_publishes_the_eased_sawtooth_phase() {
        let mut driver = AnimationDriver::new();
        let period = 10.0;

        // Phase 0 is the easing midpoint.
        let factor = driver.tick(0.0, period);
        assert!((factor - 0.5).abs() < 1e-12);

        // now = 250 ms, period 10 -> phase (250 / 10) % 100 / 100 = 0.25,
        // ease peak.
        let factor = driver.tick(250.0, period);
        assert!((factor - 1.0).abs() < 1e-12);

        // Phase 0.75 is the trough.
        let factor = driver.tick(750.0, period);
        assert!(factor.abs() < 1e-12);
    }

    #[test]
    fn repeated_factor_is_nudged_by_exactly_epsilon() {
        let mut driver = AnimationDriver::new();
        let period = 10.0;

        // Prime the driver away from its initial factor, then tick the
        // same wall-clock instant twice: the second publication must be
        // the first plus the epsilon, as f64 addition rounds it.
        driver.tick(0.0, period);
        let first = driver.tick(250.0, period);
        let second = driver.tick(250.0, period);

        assert_ne!(first, second);
        assert_eq!(second, first + FACTOR_EPSILON);
    }

    #[test]
    fn fps_snapshot_after_one_second_window() {
        let mut driver = AnimationDriver::new();
        let period = 50.0;

        // 60 frames at ~16.7 ms spacing, then one frame past the
        // window boundary.
        for i in 0..60 {
            driver.tick(i as f64 * 16.7, period);
        }
        assert_eq!(driver.fps(), 60, "snapshot not taken before the window closes");

        driver.tick(1003.0, period);
        assert_eq!(driver.fps(), 61);
    }

    #[test]
    fn phase_is_derived_from_absolute_time_not_deltas() {
        let period = 20.0;

        // Two drivers reaching the same wall-clock instant publish the
        // same factor, regardless of how many frames got dropped on the
        // way there.
        let mut steady = AnimationDriver::new();
        for i in 0..=100 {
            steady.tick(i as f64 * 10.0, period);
        }

        let mut choppy = AnimationDriver::new();
        choppy.tick(0.0, period);
        let last = choppy.tick(1000.0, period);

        assert_eq!(last, steady.factor());
    }
}
