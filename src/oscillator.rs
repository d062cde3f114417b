//! Cycle-counting oscillation driver.
//!
//! Both fortune tellers are animated by a sine wave of elapsed time:
//!
//! ```text
//! v(t) = sin(t / (BASE_TIME_SCALE_MS / speed))
//! ```
//!
//! The interactive renderer also needs to know how many times the paper has
//! opened and closed. A cycle is counted on every frame where the wave goes from
//! non-negative to negative. Negative-to-positive crossings are ignored, so one
//! full period yields exactly one increment.
//!
//! ```text
//!  +1 |   __           __
//!     |  /  \         /  \
//!   0 |-/----\-------/----\----   <- counted here (falling edge only)
//!     |       \__ __/      \__
//!  -1 |          v
//! ```

use thiserror::Error;

/// Time scale of the interactive fortune teller at speed 1, in milliseconds per radian.
pub const BASE_TIME_SCALE_MS: f64 = 666.67;

/// Playback speed of the oscillation. Always positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedMultiplier(f64);

/// Rejected speed multiplier.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("speed multiplier must be a positive finite number, got {0}")]
pub struct SpeedError(pub f64);

impl SpeedMultiplier {
    /// Normal speed.
    pub const NORMAL: Self = Self(1.0);

    /// Twice as fast. Used by the first animation and the color pickers.
    pub const DOUBLE: Self = Self(2.0);

    /// Three times as fast. Used by the final animation.
    pub const TRIPLE: Self = Self(3.0);

    /// Validate a speed multiplier.
    ///
    /// Zero, negative, NaN and infinite values would give a degenerate time
    /// scale and are rejected.
    pub fn new(value: f64) -> Result<Self, SpeedError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(SpeedError(value))
        }
    }

    /// Raw multiplier.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Milliseconds per radian at this speed.
    #[inline]
    pub fn time_scale_ms(self) -> f64 {
        BASE_TIME_SCALE_MS / self.0
    }
}

impl Default for SpeedMultiplier {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Sine value driving the animation at `time_ms`.
#[inline]
pub fn sine_at(time_ms: f64, speed: SpeedMultiplier) -> f32 {
    (time_ms / speed.time_scale_ms()).sin() as f32
}

// =============================================================================
// Cycle Counter
// =============================================================================

/// Counts falling zero crossings of a sampled sine wave.
#[derive(Clone, Copy, Debug, Default)]
pub struct CycleCounter {
    cycles: u32,
    previous: Option<f32>,
}

impl CycleCounter {
    /// Create a counter with no history.
    pub const fn new() -> Self {
        Self { cycles: 0, previous: None }
    }

    /// Feed the next sample. Returns `true` if it completed a cycle.
    pub fn observe(
        &mut self,
        value: f32,
    ) -> bool {
        let crossed = matches!(self.previous, Some(previous) if previous >= 0.0 && value < 0.0);
        if crossed {
            self.cycles = self.cycles.saturating_add(1);
        }
        self.previous = Some(value);
        crossed
    }

    /// Cycles counted since the last reset.
    #[inline]
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Forget the count and the previous sample.
    pub const fn reset(&mut self) {
        self.cycles = 0;
        self.previous = None;
    }
}

// =============================================================================
// Oscillation Driver
// =============================================================================

/// Playback state of an [`OscillationDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Not counting. The phase is frozen at its last value.
    Stopped,
    /// Counting crossings until `target` cycles have elapsed.
    Playing { target: u32 },
    /// The target was reached; completion has been reported.
    Completed,
}

/// Returned by [`OscillationDriver::tick`] on the frame the target is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completed {
    /// Cycles counted during the run.
    pub cycles: u32,
}

/// Per-instance oscillation state, advanced once per frame.
#[derive(Clone, Debug)]
pub struct OscillationDriver {
    speed: SpeedMultiplier,
    counter: CycleCounter,
    playback: Playback,
    sine: f32,
}

impl OscillationDriver {
    /// Create a stopped driver showing the phase at `time_ms`.
    pub fn new(
        speed: SpeedMultiplier,
        time_ms: f64,
    ) -> Self {
        Self {
            speed,
            counter: CycleCounter::new(),
            playback: Playback::Stopped,
            sine: sine_at(time_ms, speed),
        }
    }

    /// Start (or restart) playback towards `target` cycles.
    ///
    /// The counter and its previous sample are cleared so crossings from an
    /// earlier run are never counted twice.
    pub const fn start(
        &mut self,
        target: u32,
    ) {
        self.counter.reset();
        self.playback = Playback::Playing { target };
    }

    /// Stop playback without reporting completion.
    pub const fn stop(&mut self) {
        self.playback = Playback::Stopped;
    }

    /// Advance to `time_ms`.
    ///
    /// Does nothing unless playing. Returns `Some` exactly once per run, on the
    /// frame where the counter first reaches the target.
    pub fn tick(
        &mut self,
        time_ms: f64,
    ) -> Option<Completed> {
        let Playback::Playing { target } = self.playback else {
            return None;
        };

        self.sine = sine_at(time_ms, self.speed);
        self.counter.observe(self.sine);

        if self.counter.cycles() >= target {
            self.playback = Playback::Completed;
            Some(Completed {
                cycles: self.counter.cycles(),
            })
        } else {
            None
        }
    }

    /// Sine value of the last frame.
    #[inline]
    pub const fn sine(&self) -> f32 {
        self.sine
    }

    /// Cycles counted in the current run.
    #[inline]
    pub const fn cycles(&self) -> u32 {
        self.counter.cycles()
    }

    /// Current playback state.
    #[inline]
    pub const fn playback(&self) -> Playback {
        self.playback
    }

}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Milliseconds in one full period at the given speed.
    fn period_ms(speed: SpeedMultiplier) -> f64 {
        std::f64::consts::TAU * speed.time_scale_ms()
    }

    // -------------------------------------------------------------------------
    // SpeedMultiplier Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_speed_default_is_normal() {
        assert_eq!(SpeedMultiplier::default(), SpeedMultiplier::NORMAL);
        assert_eq!(SpeedMultiplier::default().get(), 1.0);
    }

    #[test]
    fn test_speed_rejects_non_positive() {
        assert_eq!(SpeedMultiplier::new(0.0), Err(SpeedError(0.0)));
        assert_eq!(SpeedMultiplier::new(-2.0), Err(SpeedError(-2.0)));
        assert!(SpeedMultiplier::new(f64::INFINITY).is_err());
        assert!(SpeedMultiplier::new(f64::NAN).is_err());
    }

    #[test]
    fn test_speed_scales_time() {
        let triple = SpeedMultiplier::new(3.0).unwrap();
        assert_eq!(triple, SpeedMultiplier::TRIPLE);
        assert!((triple.time_scale_ms() - BASE_TIME_SCALE_MS / 3.0).abs() < 1e-9);
    }

    // -------------------------------------------------------------------------
    // Sine Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_sine_bounded() {
        for speed in [SpeedMultiplier::NORMAL, SpeedMultiplier::DOUBLE, SpeedMultiplier::TRIPLE] {
            for step in 0..5000 {
                let v = sine_at(f64::from(step) * 7.3, speed);
                assert!((-1.0..=1.0).contains(&v), "sin out of range at step {step}: {v}");
            }
        }
    }

    #[test]
    fn test_sine_zero_at_origin() {
        assert_eq!(sine_at(0.0, SpeedMultiplier::NORMAL), 0.0);
    }

    // -------------------------------------------------------------------------
    // CycleCounter Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_counter_counts_falling_edges_only() {
        let mut counter = CycleCounter::new();
        for v in [0.1, -0.1, 0.2, -0.2] {
            counter.observe(v);
        }
        assert_eq!(counter.cycles(), 2, "Only positive-to-negative crossings count");
    }

    #[test]
    fn test_counter_first_sample_never_counts() {
        let mut counter = CycleCounter::new();
        assert!(!counter.observe(-0.5), "No previous sample, no crossing");
        assert_eq!(counter.cycles(), 0);
    }

    #[test]
    fn test_counter_zero_is_non_negative() {
        let mut counter = CycleCounter::new();
        counter.observe(0.0);
        assert!(counter.observe(-0.01), "0.0 -> negative is a crossing");
    }

    #[test]
    fn test_counter_rising_edge_ignored() {
        let mut counter = CycleCounter::new();
        counter.observe(-0.3);
        assert!(!counter.observe(0.3));
        assert_eq!(counter.cycles(), 0);
    }

    #[test]
    fn test_counter_reset_clears_previous() {
        let mut counter = CycleCounter::new();
        counter.observe(0.4);
        counter.observe(-0.4);
        counter.observe(0.4);
        counter.reset();
        assert_eq!(counter.cycles(), 0);

        // The 0.4 before the reset must not pair with the next sample.
        assert!(!counter.observe(-0.4));
        assert_eq!(counter.cycles(), 0);
    }

    // -------------------------------------------------------------------------
    // OscillationDriver Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_driver_one_increment_per_period() {
        let speed = SpeedMultiplier::DOUBLE;
        let mut driver = OscillationDriver::new(speed, 0.0);
        driver.start(u32::MAX);

        // Sample 10 full periods at ~60 FPS.
        let end = period_ms(speed) * 10.0;
        let mut t = 0.0;
        while t < end {
            driver.tick(t);
            t += 16.0;
        }
        assert_eq!(driver.cycles(), 10, "Expected one cycle per period");
    }

    #[test]
    fn test_driver_completes_exactly_once() {
        let speed = SpeedMultiplier::TRIPLE;
        let mut driver = OscillationDriver::new(speed, 0.0);
        driver.start(3);

        let mut completions = 0;
        let mut completed_at_cycles = None;
        let mut t = 0.0;
        while t < period_ms(speed) * 8.0 {
            if let Some(done) = driver.tick(t) {
                completions += 1;
                completed_at_cycles = Some(done.cycles);
            }
            t += 16.0;
        }

        assert_eq!(completions, 1, "Completion must fire once per run");
        assert_eq!(completed_at_cycles, Some(3), "Completion fires when the counter reaches the target");
        assert_eq!(driver.playback(), Playback::Completed);
        assert_eq!(driver.cycles(), 3, "No counting after completion");
    }

    #[test]
    fn test_driver_never_completes_early() {
        let speed = SpeedMultiplier::NORMAL;
        let mut driver = OscillationDriver::new(speed, 0.0);
        driver.start(2);

        let mut t = 0.0;
        while t < period_ms(speed) * 1.2 {
            assert!(driver.tick(t).is_none(), "Completed before two cycles at t={t}");
            t += 16.0;
        }
        assert!(matches!(driver.playback(), Playback::Playing { .. }));
    }

    #[test]
    fn test_driver_zero_target_completes_on_first_frame() {
        let mut driver = OscillationDriver::new(SpeedMultiplier::NORMAL, 0.0);
        driver.start(0);
        assert_eq!(driver.tick(10.0), Some(Completed { cycles: 0 }));
        assert_eq!(driver.tick(20.0), None);
    }

    #[test]
    fn test_driver_restart_resets_count() {
        let speed = SpeedMultiplier::DOUBLE;
        let mut driver = OscillationDriver::new(speed, 0.0);
        driver.start(100);

        let mut t = 0.0;
        while t < period_ms(speed) * 4.0 {
            driver.tick(t);
            t += 16.0;
        }
        assert!(driver.cycles() >= 3);

        driver.start(100);
        assert_eq!(driver.cycles(), 0, "Restart must reset the counter");
        assert!(matches!(driver.playback(), Playback::Playing { .. }));
    }

    #[test]
    fn test_driver_stopped_is_frozen() {
        let mut driver = OscillationDriver::new(SpeedMultiplier::NORMAL, 500.0);
        let frozen = driver.sine();

        assert!(driver.tick(1234.0).is_none());
        assert_eq!(driver.sine(), frozen, "Stopped driver must not advance the phase");
        assert_eq!(driver.cycles(), 0);
    }

    #[test]
    fn test_driver_stop_prevents_completion() {
        let mut driver = OscillationDriver::new(SpeedMultiplier::NORMAL, 0.0);
        driver.start(0);
        driver.stop();
        assert!(driver.tick(16.0).is_none());
        assert_eq!(driver.playback(), Playback::Stopped);
    }
}
