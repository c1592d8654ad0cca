//! JSON body extractor.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use common::AppError;
use domain::MSG_INVALID_BODY;

/// JSON extractor that decodes the raw body regardless of `Content-Type`.
///
/// Any failure to read or decode the body is rejected with
/// `400 Invalid request body`.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Failed to read request body: {}", e);
            AppError::bad_request(MSG_INVALID_BODY)
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!("Failed to decode request body: {}", e);
            AppError::bad_request(MSG_INVALID_BODY)
        })?;

        Ok(JsonBody(value))
    }
}
