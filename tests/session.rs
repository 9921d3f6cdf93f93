//! Ticker and session lifecycle tests on a paused Tokio clock

use std::{sync::Arc, time::Duration};

use microbreak::{
    state::{ChallengeSession, SessionTimer},
    timer::{TimerConfig, TimerPhase},
};

fn open(total_seconds: i64) -> (ChallengeSession, Arc<SessionTimer>) {
    let session = ChallengeSession::open(
        "Test challenge".to_string(),
        None,
        Vec::new(),
        TimerConfig::new(total_seconds),
        Duration::from_secs(1),
        Duration::from_millis(900),
    );
    let timer = Arc::clone(session.timer());
    (session, timer)
}

async fn wait(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
}

#[tokio::test(start_paused = true)]
async fn ticks_only_count_down_after_start() {
    let (_session, timer) = open(60);

    wait(3_500).await;
    assert_eq!(timer.snapshot().unwrap().seconds_left, 60);

    timer.start().unwrap();
    wait(10_000).await;
    let snap = timer.snapshot().unwrap();
    assert_eq!(snap.seconds_left, 50);
    assert_eq!(snap.phase, TimerPhase::Running);
}

#[tokio::test(start_paused = true)]
async fn pause_holds_and_resume_continues() {
    let (_session, timer) = open(60);
    timer.start().unwrap();

    wait(2_500).await;
    assert_eq!(timer.snapshot().unwrap().seconds_left, 58);

    timer.pause_toggle().unwrap();
    wait(3_000).await;
    assert_eq!(timer.snapshot().unwrap().seconds_left, 58);

    timer.pause_toggle().unwrap();
    wait(1_000).await;
    assert_eq!(timer.snapshot().unwrap().seconds_left, 57);
}

#[tokio::test(start_paused = true)]
async fn ten_minute_challenge_runs_to_completion() {
    let (_session, timer) = open(600);
    timer.start().unwrap();

    wait(595_500).await;
    let snap = timer.snapshot().unwrap();
    assert_eq!(snap.seconds_left, 5);
    assert_eq!(snap.label, "0:05");
    assert!((snap.progress - 0.9917).abs() < 1e-4);

    wait(5_000).await;
    let snap = timer.snapshot().unwrap();
    assert!(snap.completed);
    assert!(!snap.started);
    assert!(!snap.paused);
    assert_eq!(snap.label, "0:00");
    assert_eq!(snap.progress, 1.0);

    // The ticker keeps running but leaves a completed timer alone.
    wait(5_000).await;
    assert_eq!(timer.snapshot().unwrap().seconds_left, 0);
}

#[tokio::test(start_paused = true)]
async fn dispose_stops_ticking() {
    let (session, timer) = open(60);
    assert!(session.is_ticking());
    timer.start().unwrap();

    wait(3_500).await;
    assert_eq!(timer.snapshot().unwrap().seconds_left, 57);

    session.dispose();
    wait(5_000).await;
    assert_eq!(timer.snapshot().unwrap().seconds_left, 57);
}

#[tokio::test(start_paused = true)]
async fn dropping_session_stops_ticking() {
    let (session, timer) = open(60);
    timer.start().unwrap();
    wait(1_500).await;

    drop(session);
    wait(5_000).await;
    assert_eq!(timer.snapshot().unwrap().seconds_left, 59);
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_ticks_and_completion() {
    let (_session, timer) = open(2);
    let mut rx = timer.subscribe();
    timer.start().unwrap();

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().phase, TimerPhase::Running);

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().seconds_left, 1);

    rx.changed().await.unwrap();
    let last = rx.borrow_and_update().clone();
    assert!(last.completed);
    assert_eq!(last.start_label.as_deref(), Some("Restart"));
}

#[tokio::test(start_paused = true)]
async fn degenerate_session_is_completed_and_cannot_start() {
    let (_session, timer) = open(0);
    let snap = timer.start().unwrap();
    assert!(snap.completed);
    assert!(!snap.started);
    assert_eq!(snap.label, "0:00");
    assert_eq!(snap.progress, 1.0);
}

#[tokio::test(start_paused = true)]
async fn stalled_clock_does_not_replay_missed_ticks() {
    let (_session, timer) = open(60);
    wait(500).await;
    timer.start().unwrap();

    // Jump past five deadlines at once, as a stalled scheduler would.
    tokio::time::advance(Duration::from_millis(5_000)).await;
    wait(100).await;
    assert_eq!(timer.snapshot().unwrap().seconds_left, 59);

    wait(1_000).await;
    assert_eq!(timer.snapshot().unwrap().seconds_left, 58);
}
