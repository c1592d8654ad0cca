//! User handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;

use common::{AppError, AppResult};
use domain::{
    User, MSG_ID_NOT_PROVIDED, MSG_USER_CREATED, MSG_USER_UPDATED, PATH_CREATE, PATH_DELETE,
    PATH_GET, PATH_LIST, PATH_UPDATE,
};

use crate::extractors::{JsonBody, QueryId};
use crate::handlers::method_not_allowed;
use crate::state::AppState;

/// Create user routes.
///
/// Each path accepts exactly one method; anything else on that path is
/// answered with 405. `get()` would also serve `HEAD`, so GET entries
/// route it to 405 explicitly.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(PATH_CREATE, post(create_user).fallback(method_not_allowed))
        .route(
            PATH_GET,
            get(get_user)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(PATH_UPDATE, put(update_user).fallback(method_not_allowed))
        .route(PATH_DELETE, delete(delete_user).fallback(method_not_allowed))
        .route(
            PATH_LIST,
            get(list_users)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}

/// Store the user from the body under its own id
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<User>,
) -> AppResult<(StatusCode, &'static str)> {
    state.user_service.create_user(user)?;
    Ok((StatusCode::CREATED, MSG_USER_CREATED))
}

/// Get user by `id` query parameter
pub async fn get_user(
    State(state): State<AppState>,
    QueryId(id): QueryId,
) -> AppResult<Response> {
    if id.is_empty() {
        return Err(AppError::bad_request(MSG_ID_NOT_PROVIDED));
    }

    let user = state.user_service.get_user(&id)?;
    json_response(&user)
}

/// Overwrite the user stored under the `id` query parameter.
///
/// The body's own `id` is not used for keying and the query id is not
/// validated, so a missing id stores under `""`.
pub async fn update_user(
    State(state): State<AppState>,
    QueryId(id): QueryId,
    JsonBody(user): JsonBody<User>,
) -> AppResult<(StatusCode, &'static str)> {
    state.user_service.update_user(&id, user)?;
    Ok((StatusCode::OK, MSG_USER_UPDATED))
}

/// Delete user by `id` query parameter (absent ids are a no-op)
pub async fn delete_user(
    State(state): State<AppState>,
    QueryId(id): QueryId,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(&id)?;
    // 204 carries no body
    Ok(StatusCode::NO_CONTENT)
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Response> {
    let users = state.user_service.list_users()?;
    json_response(&users)
}

/// Serialize `value` as an `application/json` response.
///
/// Serialization failures surface as 500 instead of an empty body.
fn json_response<T: Serialize>(value: &T) -> AppResult<Response> {
    let body = serde_json::to_vec(value)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
