//! Periodic countdown tick task

use std::{sync::Arc, time::Duration};
use tokio::{
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, error, info};

use crate::state::SessionTimer;

/// Default period of the countdown tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that ticks a session timer for as long as it is alive.
///
/// The interval keeps running through pauses and completion; the timer itself
/// ignores ticks outside the Running phase.
pub async fn challenge_ticker_task(timer: Arc<SessionTimer>, period: Duration) {
    info!("Starting challenge ticker ({}ms)", period.as_millis());

    let mut interval = interval(period);
    // A stalled scheduler must not replay missed seconds in a burst.
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately.
    interval.tick().await;

    loop {
        interval.tick().await;

        match timer.tick() {
            Ok(snapshot) if snapshot.started && !snapshot.paused => {
                debug!("Tick: {} left", snapshot.label);
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to tick challenge timer: {}", e);
            }
        }
    }
}

/// Owns the spawned ticker and aborts it when released
#[derive(Debug)]
pub struct TickerGuard {
    handle: Option<JoinHandle<()>>,
}

impl TickerGuard {
    /// Spawn the ticker for `timer` on the current runtime
    pub fn spawn(timer: Arc<SessionTimer>, period: Duration) -> Self {
        let handle = tokio::spawn(challenge_ticker_task(timer, period));
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Abort the ticker. Later calls do nothing.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Challenge ticker cancelled");
        }
    }
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}
