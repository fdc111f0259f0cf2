//! Path and JSON extractors that reject with an [`ApiError`] body.
//!
//! axum's own extractors answer a bad UUID or a broken body with plain
//! text. These wrappers keep the status axum chose and put the message in
//! the usual `{"error": ...}` shape.

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};

use super::errors::ApiError;

/// Typed path parameters
#[derive(Debug)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) =
            axum::extract::Path::<T>::from_request_parts(parts, state).await?;
        Ok(Path(value))
    }
}

/// JSON request or response body
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Json(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::{get, post},
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    use crate::api::errors::ErrorResponse;

    #[derive(Deserialize)]
    struct Named {
        name: String,
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/items/{id}",
                get(|Path(id): Path<u32>| async move { id.to_string() }),
            )
            .route(
                "/items",
                post(|Json(item): Json<Named>| async move { Json(item.name) }),
            )
    }

    async fn error_of(response: Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice::<ErrorResponse>(&body).unwrap().error
    }

    #[tokio::test]
    async fn test_bad_path_parameter_is_json() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/items/seven")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_of(response).await.contains("seven"));
    }

    #[tokio::test]
    async fn test_broken_body_is_json() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"name\": "))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!error_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_content_type_is_json() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .body(Body::from("{\"name\": \"x\"}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(!error_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_valid_body_round_trips() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"name\": \"Tekken\"}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"\"Tekken\"");
    }
}
