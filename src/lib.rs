//! Microbreak - An HTTP service driving guided micro-break challenges
//! 
//! This library provides the challenge countdown timer, the session that
//! ticks it, a static challenge suggestion and the HTTP API around them.

pub mod config;
pub mod challenge;
pub mod timer;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use timer::{CountdownTimer, TimerConfig, TimerSnapshot};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
