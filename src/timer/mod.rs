//! Challenge timer module
//! 
//! This module contains the countdown state machine and the pure helpers
//! that derive display values from it.

pub mod countdown;
pub mod label;
pub mod progress;
pub mod snapshot;

// Re-export main types
pub use countdown::{CountdownTimer, TimerConfig, TimerPhase};
pub use label::format_label;
pub use progress::{progress, ProgressAnimation, DEFAULT_TRANSITION};
pub use snapshot::TimerSnapshot;
