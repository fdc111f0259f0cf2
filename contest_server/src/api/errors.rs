//! Mapping of service errors onto HTTP responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contest_core::{ErrorKind, ServiceError};
use serde::{Deserialize, Serialize};

use crate::logging::log_rejected_request;

/// JSON error body: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An error on its way to the client
#[derive(Debug)]
pub enum ApiError {
    /// Refused by the contest service
    Service(ServiceError),
    /// Refused by an extractor before reaching the service
    Rejected { status: StatusCode, message: String },
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// HTTP status for an error class
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::ModificationNotAllowed | ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::InvalidTransition | ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::Service(err) => {
                let kind = err.kind();
                let status = status_for(kind);
                log_rejected_request(status.as_u16(), &format!("{kind:?}"), &err.to_string());
                (status, err.client_message())
            }
            ApiError::Rejected { status, message } => {
                log_rejected_request(status.as_u16(), "Rejected", &message);
                (status, message)
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use contest_core::{ContestId, ContestStatus, DomainError, ValidationError};

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Conflict), StatusCode::CONFLICT);
        assert_eq!(
            status_for(ErrorKind::ModificationNotAllowed),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(ErrorKind::InvalidTransition),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(ErrorKind::Validation),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_into_response_uses_kind() {
        let response =
            ApiError::from(ServiceError::ContestNotFound(ContestId::new())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::from(ServiceError::Domain(DomainError::ModificationNotAllowed {
            status: ContestStatus::Completed,
        }))
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = ApiError::from(ServiceError::from(ValidationError::Draw(1))).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_rejected_keeps_status_and_json_body() {
        use http_body_util::BodyExt;

        let response = ApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid URL".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.error, "Invalid URL");
    }
}
