//! Request correlation ids.
//!
//! Each request is tagged with an id taken from `x-request-id` or freshly
//! generated. Handlers that log contest changes pull it in as a
//! [`RequestId`] and the response echoes it back.

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderMap, HeaderValue, StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

use super::errors::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id of the request being served
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Client-supplied id, or a new v4 UUID when the header is absent or not text
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let supplied = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty());

        match supplied {
            Some(id) => RequestId(id.to_string()),
            None => RequestId(Uuid::new_v4().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tag the request, time it and echo the id on the response
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(request.headers());
    request.extensions_mut().insert(request_id.clone());

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();
    tracing::debug!(request_id = %request_id.as_str(), %method, %path, "Request started");

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!(
        request_id = %request_id.as_str(),
        %method,
        %path,
        status = response.status().as_u16(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Request completed"
    );
    response
}

/// Only available behind [`request_id_middleware`]
impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestId>()
            .cloned()
            .ok_or_else(|| ApiError::Rejected {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "request id middleware is not installed".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn echo_app() -> Router {
        Router::new()
            .route("/", get(|id: RequestId| async move { id.0 }))
            .layer(axum::middleware::from_fn(request_id_middleware))
    }

    #[test]
    fn test_supplied_id_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("cup-42"));
        assert_eq!(RequestId::from_headers(&headers).as_str(), "cup-42");
    }

    #[test]
    fn test_missing_or_empty_id_is_generated() {
        let generated = RequestId::from_headers(&HeaderMap::new());
        assert!(Uuid::parse_str(generated.as_str()).is_ok());

        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(""));
        let generated = RequestId::from_headers(&headers);
        assert!(Uuid::parse_str(generated.as_str()).is_ok());
    }

    #[tokio::test]
    async fn test_handler_sees_echoed_id() {
        let response = echo_app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "abc-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-1");
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"abc-1");
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_fails() {
        let app = Router::new().route("/", get(|id: RequestId| async move { id.0 }));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
