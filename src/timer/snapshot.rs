//! Read model of the countdown consumed by the rendering layer

use serde::{Deserialize, Serialize};

use super::{CountdownTimer, TimerPhase};

/// Everything a client needs to draw the timer after an update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub total_seconds: u32,
    pub seconds_left: u32,
    pub started: bool,
    pub paused: bool,
    pub completed: bool,
    pub phase: TimerPhase,
    pub label: String,
    /// Exact target fraction of the progress ring
    pub progress: f64,
    pub status_text: String,
    /// Caption of the start button, present only while it is shown
    pub start_label: Option<String>,
    /// Caption of the pause button, present only while it is shown
    pub pause_label: Option<String>,
    pub pause_enabled: bool,
}

impl TimerSnapshot {
    pub fn of(timer: &CountdownTimer) -> Self {
        let phase = timer.phase();
        let status_text = match phase {
            TimerPhase::Completed => "Completed!",
            TimerPhase::Idle => "Ready to start",
            TimerPhase::Paused => "Paused",
            TimerPhase::Running => "Time remaining",
        };
        let start_label = (!timer.is_started()).then(|| {
            if timer.is_completed() { "Restart" } else { "Start" }.to_string()
        });
        let pause_label = (!timer.is_completed()).then(|| {
            if timer.is_paused() { "Resume" } else { "Pause" }.to_string()
        });

        Self {
            total_seconds: timer.total_seconds(),
            seconds_left: timer.seconds_left(),
            started: timer.is_started(),
            paused: timer.is_paused(),
            completed: timer.is_completed(),
            phase,
            label: timer.label(),
            progress: timer.progress(),
            status_text: status_text.to_string(),
            start_label,
            pause_label,
            pause_enabled: timer.is_started(),
        }
    }
}
