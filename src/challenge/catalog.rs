//! Static challenge suggestion and challenge descriptions

use serde::{Deserialize, Serialize};

use super::selection::{EnergyLevel, Location, SuggestionRequest, TimeOption, WellnessGoal};

pub const DEFAULT_TITLE: &str = "Selected Challenge";

pub const DEFAULT_INSTRUCTIONS: [&str; 4] = [
    "Find a comfortable seated position and straighten your spine.",
    "Close your eyes and take slow, deep breaths for 2 minutes.",
    "Gently roll your shoulders and neck to release tension.",
    "Focus on a positive affirmation (e.g., \"I am calm and capable\").",
];

const SUGGESTED_ACTIVITIES: [&str; 4] = [
    "Deep breathing exercises (2 min)",
    "Gentle neck and shoulder stretches",
    "Mindfulness meditation",
    "Positive affirmation practice",
];

/// A challenge as suggested on the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    /// Human readable duration such as `"10 minutes"`
    pub duration: String,
    pub activities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<EnergyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_selected: Option<TimeOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<WellnessGoal>,
}

impl Challenge {
    /// Duration in seconds, if `duration` starts with a minute count
    pub fn duration_seconds(&self) -> Option<i64> {
        parse_duration_seconds(&self.duration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestError {
    Incomplete(Vec<&'static str>),
}

impl std::fmt::Display for SuggestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestError::Incomplete(missing) => {
                write!(f, "Missing selections: {}", missing.join(", "))
            }
        }
    }
}

impl std::error::Error for SuggestError {}

/// Suggest a challenge for a complete set of selections.
///
/// Recommendation is a fixed mock; only the duration follows the selection.
pub fn suggest(request: &SuggestionRequest) -> Result<Challenge, SuggestError> {
    let (Some(energy), Some(location), Some(time), Some(goal)) =
        (request.energy, request.location, request.time, request.goal)
    else {
        return Err(SuggestError::Incomplete(request.missing()));
    };

    Ok(Challenge {
        title: "Mindful Desk Break".to_string(),
        description: "A quick stress-relief session perfect for your office environment"
            .to_string(),
        duration: format!("{} minutes", time.minutes()),
        activities: SUGGESTED_ACTIVITIES.iter().map(|a| a.to_string()).collect(),
        energy_level: Some(energy),
        location: Some(location),
        time_selected: Some(time),
        goal: Some(goal),
    })
}

/// Parse the leading minute count of a duration string into seconds.
///
/// Reads an optionally signed run of digits after leading whitespace and
/// ignores whatever follows, so `"10 minutes"` and `"10min"` both give 600.
pub fn parse_duration_seconds(duration: &str) -> Option<i64> {
    let token = duration.trim_start();
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let minutes: i64 = digits[..end].parse().ok()?;
    let minutes = if negative { -minutes } else { minutes };
    minutes.checked_mul(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> SuggestionRequest {
        SuggestionRequest {
            energy: Some(EnergyLevel::Medium),
            location: Some(Location::Office),
            time: Some(TimeOption::Ten),
            goal: Some(WellnessGoal::Stress),
        }
    }

    #[test]
    fn suggestion_uses_selected_time() {
        let challenge = suggest(&full_request()).unwrap();
        assert_eq!(challenge.title, "Mindful Desk Break");
        assert_eq!(challenge.duration, "10 minutes");
        assert_eq!(challenge.duration_seconds(), Some(600));
        assert_eq!(challenge.activities.len(), 4);
        assert_eq!(challenge.location, Some(Location::Office));
    }

    #[test]
    fn suggestion_requires_every_selection() {
        let mut req = full_request();
        req.goal = None;
        let err = suggest(&req).unwrap_err();
        assert_eq!(err, SuggestError::Incomplete(vec!["goal"]));
        assert_eq!(err.to_string(), "Missing selections: goal");
    }

    #[test]
    fn parses_leading_minutes() {
        assert_eq!(parse_duration_seconds("5 minutes"), Some(300));
        assert_eq!(parse_duration_seconds("30"), Some(1_800));
        assert_eq!(parse_duration_seconds("  15 min"), Some(900));
        assert_eq!(parse_duration_seconds("10minutes"), Some(600));
        assert_eq!(parse_duration_seconds("-2 minutes"), Some(-120));
        assert_eq!(parse_duration_seconds("ten minutes"), None);
        assert_eq!(parse_duration_seconds("- 5"), None);
        assert_eq!(parse_duration_seconds(""), None);
    }
}
