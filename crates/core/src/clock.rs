//! Frame clock - turns wall-clock timestamps into per-tick elapsed seconds.

use std::time::Instant;

use crate::types::frame_period_secs;

/// Replace a non-positive (or non-finite) elapsed time with the nominal period.
///
/// Keeps a stalled or backwards clock from freezing or reversing the sprite.
pub fn sanitize_elapsed(elapsed: f64, period: f64) -> f64 {
    if elapsed.is_finite() && elapsed > 0.0 {
        elapsed
    } else {
        period
    }
}

/// Measures the time between consecutive ticks.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    period: f64,
}

impl FrameClock {
    pub fn new(now: Instant, fps: u32) -> Self {
        Self {
            last: now,
            period: frame_period_secs(fps),
        }
    }

    /// Nominal frame period in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Seconds since the previous call (or construction), then re-arm at `now`.
    pub fn elapsed(&mut self, now: Instant) -> f64 {
        let dt = now.saturating_duration_since(self.last).as_secs_f64();
        self.last = now;
        sanitize_elapsed(dt, self.period)
    }
}
