//! HTTP API module
//! 
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/suggest", post(suggest_handler))
        .route(
            "/challenge",
            post(open_challenge_handler)
                .get(get_challenge_handler)
                .delete(close_challenge_handler),
        )
        .route("/challenge/start", post(start_handler))
        .route("/challenge/pause", post(pause_handler))
        .route("/challenge/complete", post(complete_handler))
        .route("/challenge/events", get(events_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
