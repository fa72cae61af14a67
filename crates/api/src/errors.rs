use crate::dto::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tolldns_domain::DomainError;

/// Error leaving a handler: a status code plus a JSON `{error}` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let status = match &e {
            DomainError::InvalidName(_) | DomainError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            DomainError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            DomainError::CollaboratorUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::ReceiptStorage(_)
            | DomainError::PolicySource(_)
            | DomainError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
