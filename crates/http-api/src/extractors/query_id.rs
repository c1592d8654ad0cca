//! `id` query parameter extractor.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use domain::ID_PARAM;

/// The first `id` query parameter, or `""` when absent.
///
/// Never rejects: handlers decide whether an empty id is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for QueryId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(pairs)| {
                pairs
                    .into_iter()
                    .find(|(key, _)| key == ID_PARAM)
                    .map(|(_, value)| value)
            })
            .unwrap_or_default();

        Ok(QueryId(id))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(uri: &str) -> String {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let QueryId(id) = QueryId::from_request_parts(&mut parts, &()).await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_reads_id() {
        assert_eq!(extract("/get?id=42").await, "42");
    }

    #[tokio::test]
    async fn test_missing_id_is_empty() {
        assert_eq!(extract("/get").await, "");
        assert_eq!(extract("/get?name=x").await, "");
        assert_eq!(extract("/get?id=").await, "");
    }

    #[tokio::test]
    async fn test_first_id_wins_and_is_percent_decoded() {
        assert_eq!(extract("/get?id=a%20b&id=c").await, "a b");
    }
}
