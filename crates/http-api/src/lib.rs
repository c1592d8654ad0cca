//! HTTP API Library
//!
//! This crate exposes the user service over HTTP: a static routing table,
//! one handler per CRUD operation, and the server bootstrap.

pub mod cli;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

use tracing::info;

use common::{AppError, AppResult};

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server until a shutdown signal arrives.
pub async fn run_server(config: ApiConfig) -> AppResult<()> {
    // Create app state
    let state = AppState::new(user_service_lib::in_memory());

    // Build router
    let app = create_router(state);

    // Bind listener
    let addr = config.service.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("{} listening on http://{}", config.service.service_name, addr);

    // Run server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

/// Resolve once SIGINT (Ctrl+C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
