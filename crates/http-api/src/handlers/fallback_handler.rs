//! Fallback handlers for unmatched routes.

use axum::http::{Method, Uri};

use common::AppError;

/// Any path outside the routing table.
pub async fn unsupported_path(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = uri.path(), "No route for path");
    AppError::UnsupportedPath
}

/// Known path, method not in its entry.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = uri.path(), "Method not routed for path");
    AppError::MethodNotAllowed
}
