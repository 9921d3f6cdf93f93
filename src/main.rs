//! Microbreak - An HTTP service driving guided micro-break challenges
//! 
//! This is the main entry point for the microbreak server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use microbreak::{
    config::Config,
    state::{AppState, SessionSettings},
    api::create_router,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("microbreak={},tower_http=info", config.log_level()))
        .init();

    info!("Starting microbreak server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, default={}min, tick={}ms, transition={}ms",
          config.host, config.port, config.default_minutes, config.tick_ms, config.transition_ms);

    // Create application state
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        SessionSettings::from(&config),
    ));

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST   /suggest            - Suggest a challenge");
    info!("  POST   /challenge          - Open a challenge");
    info!("  GET    /challenge          - Current challenge and timer");
    info!("  DELETE /challenge          - Close the challenge");
    info!("  POST   /challenge/start    - Start or restart the timer");
    info!("  POST   /challenge/pause    - Pause or resume the timer");
    info!("  POST   /challenge/complete - Mark the challenge complete");
    info!("  GET    /challenge/events   - Timer updates (SSE)");
    info!("  GET    /status             - Server status");
    info!("  GET    /health             - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Release the open challenge so its ticker stops with the server.
    if let Err(e) = state.close_challenge() {
        tracing::warn!("Failed to close challenge on shutdown: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
