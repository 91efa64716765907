use std::time::Duration;

/// Fixed-interval update accumulator.
///
/// Elapsed time is accumulated and converted into whole update steps of
/// `interval`. Remainders carry over to the next call.
///
/// Steps per call are capped at `max_steps`; time beyond the cap is dropped
/// so a long stall does not trigger a burst of catch-up updates.
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    accumulator: Duration,
    max_steps: u32,
}

impl FixedStep {
    /// Default catch-up cap.
    pub const DEFAULT_MAX_STEPS: u32 = 8;

    /// Creates a stepper running `rate_hz` updates per second.
    ///
    /// Non-finite or non-positive rates fall back to one update per second.
    pub fn new(rate_hz: f32) -> Self {
        let rate = if rate_hz.is_finite() && rate_hz > 0.0 { rate_hz } else { 1.0 };
        Self::with_interval(Duration::from_secs_f64(1.0 / f64::from(rate)))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_micros(100)),
            accumulator: Duration::ZERO,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    /// Overrides the catch-up cap (at least one step).
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Time accumulated towards the next step.
    #[inline]
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Adds `dt` and returns how many updates are due now.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= self.interval && steps < self.max_steps {
            self.accumulator -= self.interval;
            steps += 1;
        }

        if steps == self.max_steps && self.accumulator >= self.interval {
            log::debug!(
                "dropping {:?} of backlog after {steps} steps",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        steps
    }

    /// Discards accumulated time.
    #[inline]
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

impl Default for FixedStep {
    /// Twelve updates per second.
    fn default() -> Self {
        Self::new(12.0)
    }
}
