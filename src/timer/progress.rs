//! Progress fraction mapping and the smoothed ring transition

use std::time::Duration;
use tokio::time::Instant;

/// Default duration of a progress ring transition
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(900);

/// Elapsed share of the countdown, clamped to `[0, 1]`.
///
/// A degenerate timer with no duration is considered fully elapsed.
pub fn progress(seconds_left: u32, total_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 1.0;
    }
    let elapsed = f64::from(total_seconds) - f64::from(seconds_left);
    (elapsed / f64::from(total_seconds)).clamp(0.0, 1.0)
}

/// Linear interpolation of the displayed progress toward a target value.
///
/// The timer only provides the target; this tracks what a ring or bar should
/// currently show while it catches up.
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    from: f64,
    to: f64,
    started_at: Instant,
    duration: Duration,
}

impl ProgressAnimation {
    /// Create an animation resting at `value`
    pub fn new(value: f64, duration: Duration, now: Instant) -> Self {
        let value = value.clamp(0.0, 1.0);
        Self {
            from: value,
            to: value,
            started_at: now,
            duration,
        }
    }

    /// Begin a transition from the currently displayed value toward `target`
    pub fn retarget(&mut self, target: f64, now: Instant) {
        let target = target.clamp(0.0, 1.0);
        if (target - self.to).abs() < f64::EPSILON {
            return;
        }
        self.from = self.value_at(now);
        self.to = target;
        self.started_at = now;
    }

    /// Jump to `value` without a transition
    pub fn snap(&mut self, value: f64, now: Instant) {
        let value = value.clamp(0.0, 1.0);
        self.from = value;
        self.to = value;
        self.started_at = now;
    }

    /// Value the indicator should display at `now`
    pub fn value_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        (self.from + (self.to - self.from) * t).clamp(0.0, 1.0)
    }
}
