//! Background tasks module
//! 
//! This module contains the tasks that run alongside the HTTP server.

pub mod ticker;

// Re-export main items
pub use ticker::{challenge_ticker_task, TickerGuard, TICK_PERIOD};
