//! Challenge countdown state machine
//!
//! ```text
//! Idle --start--> Running <--pause_toggle--> Paused
//!                    |  tick to zero / complete   |
//!                    +---------> Completed <------+
//! Completed --start--> Running (restarted from the full duration)
//! ```
//!
//! Every operation is total: calls that make no sense in the current phase
//! leave the timer untouched and report `false`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{format_label, progress};

/// Immutable countdown configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub total_seconds: u32,
}

impl TimerConfig {
    /// Build a configuration from a requested duration.
    ///
    /// Non-positive durations produce a degenerate zero-length timer that is
    /// Completed from the start.
    pub fn new(total_seconds: i64) -> Self {
        if total_seconds <= 0 {
            warn!(
                "Invalid timer duration {}s, creating a completed timer",
                total_seconds
            );
            return Self { total_seconds: 0 };
        }
        Self {
            total_seconds: u32::try_from(total_seconds).unwrap_or(u32::MAX),
        }
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self::new(i64::from(minutes) * 60)
    }

    pub fn is_degenerate(&self) -> bool {
        self.total_seconds == 0
    }
}

/// Phase derived from the timer flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Completed,
}

impl TimerPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    config: TimerConfig,
    seconds_left: u32,
    started: bool,
    paused: bool,
}

impl CountdownTimer {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            seconds_left: config.total_seconds,
            started: false,
            paused: false,
        }
    }

    pub fn config(&self) -> TimerConfig {
        self.config
    }

    pub fn total_seconds(&self) -> u32 {
        self.config.total_seconds
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_completed(&self) -> bool {
        self.seconds_left == 0
    }

    pub fn phase(&self) -> TimerPhase {
        if self.is_completed() {
            TimerPhase::Completed
        } else if !self.started {
            TimerPhase::Idle
        } else if self.paused {
            TimerPhase::Paused
        } else {
            TimerPhase::Running
        }
    }

    pub fn label(&self) -> String {
        format_label(self.seconds_left)
    }

    pub fn progress(&self) -> f64 {
        progress(self.seconds_left, self.config.total_seconds)
    }

    /// Start the countdown, restarting from the full duration when it already
    /// ran out. Starting a paused timer resumes it; starting a running timer
    /// does nothing.
    pub fn start(&mut self) -> bool {
        let before = self.clone();
        if !self.started && self.seconds_left == 0 {
            self.seconds_left = self.config.total_seconds;
        }
        self.started = true;
        self.paused = false;
        self.settle();
        debug!("start: {:?} -> {:?}", before.phase(), self.phase());
        *self != before
    }

    /// Flip between Running and Paused. No effect without a running session.
    pub fn pause_toggle(&mut self) -> bool {
        if !self.started || self.is_completed() {
            return false;
        }
        self.paused = !self.paused;
        debug!("pause_toggle: paused={}", self.paused);
        true
    }

    /// Finish the countdown immediately
    pub fn complete(&mut self) -> bool {
        let before = self.clone();
        self.seconds_left = 0;
        self.settle();
        *self != before
    }

    /// Advance one second. Only a running, unpaused countdown with time left
    /// is affected.
    pub fn tick(&mut self) -> bool {
        if !self.started || self.paused || self.seconds_left == 0 {
            return false;
        }
        self.seconds_left -= 1;
        self.settle();
        true
    }

    // Reaching zero always ends the session.
    fn settle(&mut self) {
        if self.seconds_left == 0 {
            self.started = false;
            self.paused = false;
        }
    }
}
