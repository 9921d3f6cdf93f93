//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc};
use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream};
use tracing::{error, info, warn};

use crate::{
    challenge::{suggest, Challenge, SuggestionRequest},
    state::AppState,
    timer::TimerSnapshot,
};
use super::responses::{
    ControlResponse, HealthResponse, MessageResponse, OpenChallengeRequest, SessionResponse,
    StatusResponse,
};

type ErrorReply = (StatusCode, Json<MessageResponse>);

fn error_reply(status: StatusCode, message: impl Into<String>) -> ErrorReply {
    (status, Json(MessageResponse::error(message.into())))
}

fn no_challenge() -> ErrorReply {
    error_reply(StatusCode::NOT_FOUND, "No challenge is open")
}

/// Handle POST /suggest - Suggest a challenge for the given selections
pub async fn suggest_handler(
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<Challenge>, ErrorReply> {
    match suggest(&request) {
        Ok(challenge) => {
            info!("Suggested '{}' ({})", challenge.title, challenge.duration);
            Ok(Json(challenge))
        }
        Err(e) => {
            warn!("Rejected suggestion request: {}", e);
            Err(error_reply(StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

/// Handle POST /challenge - Open a challenge session
pub async fn open_challenge_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OpenChallengeRequest>,
) -> Result<Json<SessionResponse>, ErrorReply> {
    if let Err(e) = state.open_challenge(request.into()) {
        error!("Failed to open challenge: {}", e);
        return Err(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e));
    }
    session_view(&state)
}

/// Handle GET /challenge - Return the open challenge
pub async fn get_challenge_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionResponse>, ErrorReply> {
    session_view(&state)
}

/// Handle DELETE /challenge - Close the open challenge
pub async fn close_challenge_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ErrorReply> {
    match state.close_challenge() {
        Ok(true) => Ok(Json(MessageResponse::ok("Challenge closed".to_string()))),
        Ok(false) => Err(no_challenge()),
        Err(e) => {
            error!("Failed to close challenge: {}", e);
            Err(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

/// Handle POST /challenge/start - Start or restart the countdown
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ControlResponse>, ErrorReply> {
    control_reply(state.start(), "Challenge started")
}

/// Handle POST /challenge/pause - Pause or resume the countdown
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ControlResponse>, ErrorReply> {
    let result = state.pause_toggle();
    let message = match &result {
        Ok(Some(snapshot)) if snapshot.paused => "Challenge paused",
        Ok(Some(snapshot)) if snapshot.started => "Challenge resumed",
        _ => "Nothing to pause",
    };
    control_reply(result, message)
}

/// Handle POST /challenge/complete - Mark the challenge complete
pub async fn complete_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ControlResponse>, ErrorReply> {
    control_reply(state.complete(), "Challenge completed")
}

/// Handle GET /challenge/events - Stream timer snapshots as server-sent events
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ErrorReply> {
    let rx = match state.subscribe() {
        Ok(Some(rx)) => rx,
        Ok(None) => return Err(no_challenge()),
        Err(e) => {
            error!("Failed to subscribe to timer updates: {}", e);
            return Err(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e));
        }
    };

    // Emit the current snapshot first, then one event per change until the
    // session is closed.
    let events = stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }
        let snapshot = rx.borrow_and_update().clone();
        Some((Ok::<_, Infallible>(snapshot_event(&snapshot)), (rx, false)))
    });

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// Handle GET /status - Return current server status
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.session_timer() {
        Ok(timer) => timer,
        Err(e) => {
            error!("Failed to get session: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let snapshot = match timer.map(|t| t.snapshot()).transpose() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        challenge_open: snapshot.is_some(),
        timer: snapshot,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

fn control_reply(
    result: Result<Option<TimerSnapshot>, String>,
    message: &str,
) -> Result<Json<ControlResponse>, ErrorReply> {
    match result {
        Ok(Some(snapshot)) => Ok(Json(ControlResponse::new(message.to_string(), snapshot))),
        Ok(None) => Err(no_challenge()),
        Err(e) => {
            error!("Failed to apply timer control: {}", e);
            Err(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

fn session_view(state: &AppState) -> Result<Json<SessionResponse>, ErrorReply> {
    let view = state.with_session(|session| -> Result<SessionResponse, String> {
        let timer = session.timer();
        Ok(SessionResponse {
            title: session.title.clone(),
            description: session.challenge.as_ref().map(|c| c.description.clone()),
            instructions: session.instructions.clone(),
            challenge: session.challenge.clone(),
            opened_at: session.opened_at,
            ticking: session.is_ticking(),
            timer: timer.snapshot()?,
            displayed_progress: timer.displayed_progress()?,
        })
    });

    match view {
        Ok(Some(Ok(view))) => Ok(Json(view)),
        Ok(None) => Err(no_challenge()),
        Ok(Some(Err(e))) | Err(e) => {
            error!("Failed to read challenge: {}", e);
            Err(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}

fn snapshot_event(snapshot: &TimerSnapshot) -> Event {
    Event::default()
        .event("timer")
        .json_data(snapshot)
        .unwrap_or_else(|e| {
            warn!("Failed to encode timer snapshot: {}", e);
            Event::default().comment("encode error")
        })
}
