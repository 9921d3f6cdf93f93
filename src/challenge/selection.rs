//! Home screen selections used to request a challenge

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Office,
    Gym,
    Outdoor,
    Home,
}

/// Available break lengths, serialized as their minute count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOption {
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "15")]
    Fifteen,
    #[serde(rename = "30")]
    Thirty,
}

impl TimeOption {
    pub fn minutes(self) -> u32 {
        match self {
            TimeOption::Five => 5,
            TimeOption::Ten => 10,
            TimeOption::Fifteen => 15,
            TimeOption::Thirty => 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellnessGoal {
    Stress,
    Sleep,
    Focus,
    Calm,
    Productivity,
    Physical,
}

/// Partial selection state; a suggestion needs every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub energy: Option<EnergyLevel>,
    pub location: Option<Location>,
    pub time: Option<TimeOption>,
    pub goal: Option<WellnessGoal>,
}

impl SuggestionRequest {
    /// Names of the selections still missing
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.energy.is_none() {
            missing.push("energy");
        }
        if self.location.is_none() {
            missing.push("location");
        }
        if self.time.is_none() {
            missing.push("time");
        }
        if self.goal.is_none() {
            missing.push("goal");
        }
        missing
    }
}
