//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    challenge::Challenge,
    state::OpenChallenge,
    timer::TimerSnapshot,
};

/// Body of POST /challenge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenChallengeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<i64>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
    #[serde(default)]
    pub challenge: Option<Challenge>,
}

impl From<OpenChallengeRequest> for OpenChallenge {
    fn from(request: OpenChallengeRequest) -> Self {
        Self {
            title: request.title,
            duration_seconds: request.duration_seconds,
            instructions: request.instructions,
            challenge: request.challenge,
        }
    }
}

/// Response of the timer control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
}

impl ControlResponse {
    pub fn new(message: String, timer: TimerSnapshot) -> Self {
        Self {
            status: timer.phase.as_str().to_string(),
            message,
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Full view of the open challenge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub title: String,
    pub description: Option<String>,
    pub instructions: Vec<String>,
    pub challenge: Option<Challenge>,
    pub opened_at: DateTime<Utc>,
    pub ticking: bool,
    pub timer: TimerSnapshot,
    /// Progress the ring should display right now, trailing `timer.progress`
    pub displayed_progress: f64,
}

/// Generic message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl MessageResponse {
    pub fn ok(message: String) -> Self {
        Self {
            status: "ok".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            timestamp: Utc::now(),
        }
    }
}

/// Server status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub challenge_open: bool,
    pub timer: Option<TimerSnapshot>,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
