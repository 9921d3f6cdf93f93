//! State management module
//! 
//! This module contains the application state and the challenge session it owns.

pub mod app_state;
pub mod session;

// Re-export main types
pub use app_state::{AppState, OpenChallenge, SessionSettings};
pub use session::{ChallengeSession, SessionTimer};
