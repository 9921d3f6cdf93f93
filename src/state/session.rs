//! Challenge session: one countdown, its tick task and its change channel

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use chrono::{DateTime, Utc};
use tokio::{sync::watch, time::Instant};
use tracing::{debug, info};

use crate::{
    challenge::Challenge,
    tasks::TickerGuard,
    timer::{CountdownTimer, ProgressAnimation, TimerConfig, TimerSnapshot},
};

/// Timer shared between the session owner and its tick task
#[derive(Debug)]
pub struct SessionTimer {
    timer: Mutex<CountdownTimer>,
    animation: Mutex<ProgressAnimation>,
    /// Channel for timer updates
    updates_tx: watch::Sender<TimerSnapshot>,
}

impl SessionTimer {
    pub fn new(config: TimerConfig, transition: Duration) -> Self {
        let timer = CountdownTimer::new(config);
        let snapshot = TimerSnapshot::of(&timer);
        let animation = ProgressAnimation::new(snapshot.progress, transition, Instant::now());
        let (updates_tx, _) = watch::channel(snapshot);

        Self {
            timer: Mutex::new(timer),
            animation: Mutex::new(animation),
            updates_tx,
        }
    }

    /// Apply a transition and notify watchers when it changed anything
    pub fn update<F>(&self, action: &str, transition: F) -> Result<TimerSnapshot, String>
    where
        F: FnOnce(&mut CountdownTimer) -> bool,
    {
        let mut timer = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))?;

        let was_completed = timer.is_completed();
        let changed = transition(&mut *timer);
        let snapshot = TimerSnapshot::of(&timer);

        if !changed {
            debug!("{} left the timer unchanged", action);
            return Ok(snapshot);
        }

        // The indicator and watchers are updated before the timer lock is
        // released so they observe mutations in the order they happened.
        let restarted = was_completed && snapshot.started;
        self.move_indicator(snapshot.progress, restarted)?;
        self.updates_tx.send_replace(snapshot.clone());
        drop(timer);

        if snapshot.completed && !was_completed {
            info!("Challenge completed via {}", action);
        }

        Ok(snapshot)
    }

    pub fn start(&self) -> Result<TimerSnapshot, String> {
        self.update("start", CountdownTimer::start)
    }

    pub fn pause_toggle(&self) -> Result<TimerSnapshot, String> {
        self.update("pause", CountdownTimer::pause_toggle)
    }

    pub fn complete(&self) -> Result<TimerSnapshot, String> {
        self.update("complete", CountdownTimer::complete)
    }

    pub fn tick(&self) -> Result<TimerSnapshot, String> {
        self.update("tick", CountdownTimer::tick)
    }

    pub fn snapshot(&self) -> Result<TimerSnapshot, String> {
        self.timer.lock()
            .map(|timer| TimerSnapshot::of(&timer))
            .map_err(|e| format!("Failed to lock timer: {}", e))
    }

    /// Progress value the indicator should be showing right now
    pub fn displayed_progress(&self) -> Result<f64, String> {
        self.animation.lock()
            .map(|animation| animation.value_at(Instant::now()))
            .map_err(|e| format!("Failed to lock progress animation: {}", e))
    }

    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.updates_tx.subscribe()
    }

    fn move_indicator(&self, target: f64, snap: bool) -> Result<(), String> {
        let mut animation = self.animation.lock()
            .map_err(|e| format!("Failed to lock progress animation: {}", e))?;
        let now = Instant::now();
        if snap {
            animation.snap(target, now);
        } else {
            animation.retarget(target, now);
        }
        Ok(())
    }
}

/// An open challenge and the resources tied to its lifetime.
///
/// Dropping the session cancels its tick task.
#[derive(Debug)]
pub struct ChallengeSession {
    pub title: String,
    pub challenge: Option<Challenge>,
    pub instructions: Vec<String>,
    pub opened_at: DateTime<Utc>,
    timer: Arc<SessionTimer>,
    ticker: TickerGuard,
}

impl ChallengeSession {
    /// Create the countdown and schedule its periodic tick.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn open(
        title: String,
        challenge: Option<Challenge>,
        instructions: Vec<String>,
        config: TimerConfig,
        tick_period: Duration,
        transition: Duration,
    ) -> Self {
        info!("Opening challenge '{}' ({}s)", title, config.total_seconds);

        let timer = Arc::new(SessionTimer::new(config, transition));
        let ticker = TickerGuard::spawn(Arc::clone(&timer), tick_period);

        Self {
            title,
            challenge,
            instructions,
            opened_at: Utc::now(),
            timer,
            ticker,
        }
    }

    pub fn timer(&self) -> &Arc<SessionTimer> {
        &self.timer
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    /// Tear the session down, cancelling the tick task
    pub fn dispose(mut self) {
        info!("Closing challenge '{}'", self.title);
        self.ticker.cancel();
    }
}
