//! Challenge catalog module
//! 
//! Selection options offered on the home screen, the static suggestion and
//! the challenge description handed to a timer session.

pub mod catalog;
pub mod selection;

// Re-export main types
pub use catalog::{
    parse_duration_seconds, suggest, Challenge, SuggestError, DEFAULT_INSTRUCTIONS,
    DEFAULT_TITLE,
};
pub use selection::{EnergyLevel, Location, SuggestionRequest, TimeOption, WellnessGoal};
