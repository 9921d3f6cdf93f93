//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::info;

use super::{ChallengeSession, SessionTimer};
use crate::{
    challenge::{Challenge, DEFAULT_INSTRUCTIONS, DEFAULT_TITLE},
    config::Config,
    timer::{TimerConfig, TimerSnapshot},
};

/// Parameters for opening a challenge
#[derive(Debug, Clone, Default)]
pub struct OpenChallenge {
    pub title: Option<String>,
    pub duration_seconds: Option<i64>,
    pub instructions: Option<Vec<String>>,
    pub challenge: Option<Challenge>,
}

/// Timing settings applied to every session
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub default_seconds: i64,
    pub tick_period: Duration,
    pub transition: Duration,
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            default_seconds: i64::from(config.default_minutes) * 60,
            tick_period: config.tick_period(),
            transition: config.transition(),
        }
    }
}

/// Main application state that owns the active challenge session
#[derive(Debug)]
pub struct AppState {
    /// The open challenge, if any
    pub session: Mutex<Option<ChallengeSession>>,
    pub settings: SessionSettings,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    pub fn new(port: u16, host: String, settings: SessionSettings) -> Self {
        Self {
            session: Mutex::new(None),
            settings,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Open a challenge, replacing (and disposing) any session already open
    pub fn open_challenge(&self, request: OpenChallenge) -> Result<Arc<SessionTimer>, String> {
        let total_seconds = request
            .challenge
            .as_ref()
            .and_then(Challenge::duration_seconds)
            .or(request.duration_seconds)
            .unwrap_or(self.settings.default_seconds);

        // Blank titles fall through to the next source.
        let title = request
            .challenge
            .as_ref()
            .map(|c| c.title.clone())
            .filter(|t| !t.trim().is_empty())
            .or(request.title.filter(|t| !t.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let instructions = request
            .challenge
            .as_ref()
            .map(|c| c.activities.clone())
            .or(request.instructions)
            .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.iter().map(|s| s.to_string()).collect());

        let session = ChallengeSession::open(
            title,
            request.challenge,
            instructions,
            TimerConfig::new(total_seconds),
            self.settings.tick_period,
            self.settings.transition,
        );
        let timer = Arc::clone(session.timer());

        let mut slot = self.session.lock()
            .map_err(|e| format!("Failed to lock session: {}", e))?;
        if let Some(previous) = slot.replace(session) {
            info!("Replacing open challenge '{}'", previous.title);
            previous.dispose();
        }
        drop(slot);

        self.record_action("open");
        Ok(timer)
    }

    /// Dispose the open challenge. Returns whether one was open.
    pub fn close_challenge(&self) -> Result<bool, String> {
        let session = self.session.lock()
            .map_err(|e| format!("Failed to lock session: {}", e))?
            .take();

        match session {
            Some(session) => {
                session.dispose();
                self.record_action("close");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Run `f` against the open challenge, if any
    pub fn with_session<T, F>(&self, f: F) -> Result<Option<T>, String>
    where
        F: FnOnce(&ChallengeSession) -> T,
    {
        self.session.lock()
            .map(|slot| slot.as_ref().map(f))
            .map_err(|e| format!("Failed to lock session: {}", e))
    }

    /// Timer of the open challenge, if any
    pub fn session_timer(&self) -> Result<Option<Arc<SessionTimer>>, String> {
        self.with_session(|session| Arc::clone(session.timer()))
    }

    /// Apply a user intent to the open challenge's timer
    pub fn control<F>(&self, action: &str, intent: F) -> Result<Option<TimerSnapshot>, String>
    where
        F: FnOnce(&SessionTimer) -> Result<TimerSnapshot, String>,
    {
        let Some(timer) = self.session_timer()? else {
            return Ok(None);
        };

        info!("Challenge control: {}", action);
        let snapshot = intent(&timer)?;
        self.record_action(action);
        Ok(Some(snapshot))
    }

    pub fn start(&self) -> Result<Option<TimerSnapshot>, String> {
        self.control("start", SessionTimer::start)
    }

    pub fn pause_toggle(&self) -> Result<Option<TimerSnapshot>, String> {
        self.control("pause", SessionTimer::pause_toggle)
    }

    pub fn complete(&self) -> Result<Option<TimerSnapshot>, String> {
        self.control("complete", SessionTimer::complete)
    }

    /// Subscribe to snapshots of the open challenge
    pub fn subscribe(&self) -> Result<Option<watch::Receiver<TimerSnapshot>>, String> {
        Ok(self.session_timer()?.map(|timer| timer.subscribe()))
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerPhase;

    fn state() -> AppState {
        AppState::new(
            0,
            "127.0.0.1".to_string(),
            SessionSettings {
                default_seconds: 600,
                tick_period: Duration::from_secs(1),
                transition: Duration::from_millis(900),
            },
        )
    }

    #[tokio::test]
    async fn controls_without_session_return_none() {
        let state = state();
        assert!(state.start().unwrap().is_none());
        assert!(state.pause_toggle().unwrap().is_none());
        assert!(state.complete().unwrap().is_none());
        assert!(!state.close_challenge().unwrap());
    }

    #[tokio::test]
    async fn open_uses_default_duration_and_instructions() {
        let state = state();
        let timer = state.open_challenge(OpenChallenge::default()).unwrap();
        assert_eq!(timer.snapshot().unwrap().total_seconds, 600);

        let (title, instructions) = state
            .with_session(|s| (s.title.clone(), s.instructions.len()))
            .unwrap()
            .unwrap();
        assert_eq!(title, DEFAULT_TITLE);
        assert_eq!(instructions, DEFAULT_INSTRUCTIONS.len());
    }

    #[tokio::test]
    async fn challenge_duration_wins_over_explicit_seconds() {
        let state = state();
        let challenge = Challenge {
            title: "Stretch".to_string(),
            description: String::new(),
            duration: "5 minutes".to_string(),
            activities: vec!["Reach up".to_string()],
            energy_level: None,
            location: None,
            time_selected: None,
            goal: None,
        };
        let timer = state
            .open_challenge(OpenChallenge {
                duration_seconds: Some(42),
                challenge: Some(challenge),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(timer.snapshot().unwrap().total_seconds, 300);
    }

    #[tokio::test]
    async fn blank_titles_fall_back() {
        let state = state();
        let challenge = Challenge {
            title: String::new(),
            description: String::new(),
            duration: "10min".to_string(),
            activities: Vec::new(),
            energy_level: None,
            location: None,
            time_selected: None,
            goal: None,
        };
        let timer = state
            .open_challenge(OpenChallenge {
                title: Some("Walk".to_string()),
                challenge: Some(challenge),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(timer.snapshot().unwrap().total_seconds, 600);
        let title = state.with_session(|s| s.title.clone()).unwrap().unwrap();
        assert_eq!(title, "Walk");

        state
            .open_challenge(OpenChallenge {
                title: Some("  ".to_string()),
                ..Default::default()
            })
            .unwrap();
        let title = state.with_session(|s| s.title.clone()).unwrap().unwrap();
        assert_eq!(title, DEFAULT_TITLE);
    }

    #[tokio::test]
    async fn control_records_last_action() {
        let state = state();
        state
            .open_challenge(OpenChallenge {
                duration_seconds: Some(30),
                ..Default::default()
            })
            .unwrap();

        let snap = state.start().unwrap().unwrap();
        assert_eq!(snap.phase, TimerPhase::Running);
        assert_eq!(state.get_last_action().0.as_deref(), Some("start"));
    }

    #[tokio::test]
    async fn reopening_disposes_previous_session() {
        let state = state();
        let first = state.open_challenge(OpenChallenge::default()).unwrap();
        let second = state
            .open_challenge(OpenChallenge {
                duration_seconds: Some(60),
                ..Default::default()
            })
            .unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        let current = state.session_timer().unwrap().unwrap();
        assert!(Arc::ptr_eq(&current, &second));
    }
}
