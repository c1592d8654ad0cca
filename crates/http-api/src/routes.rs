//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{unsupported_path, user_routes};
use crate::state::AppState;

/// Create the main router with all routes.
///
/// The table is built once; unknown paths fall through to 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(user_routes())
        .fallback(unsupported_path)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
