//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Body shape: `{"error": {"message": "..."}}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::db::StoreError;
use crate::models::ValidationError;
use crate::service::ServiceError;

const NOT_FOUND_MESSAGE: &str = "Bookmark doesn't exist";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload rejected by the validator (400)
    Validation(ValidationError),

    /// Body is not a JSON object (400)
    BadRequest { message: String },

    /// Missing or wrong bearer token (401)
    Unauthorized,

    /// Bookmark does not exist (404)
    NotFound,

    /// Storage failure (500, logged)
    Store(StoreError),
}

fn message_body(message: &str) -> Value {
    json!({ "error": { "message": message } })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => {
                tracing::debug!(error = %e, "rejected bookmark payload");
                (StatusCode::BAD_REQUEST, message_body(&e.to_string()))
            }
            Self::BadRequest { message } => (StatusCode::BAD_REQUEST, message_body(message)),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "Unauthorized request" }),
            ),
            Self::NotFound => (StatusCode::NOT_FOUND, message_body(NOT_FOUND_MESSAGE)),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!("Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, message_body("server error"))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(e) => Self::Validation(e),
            ServiceError::NotFound => Self::NotFound,
            ServiceError::Store(e) => Self::Store(e),
        }
    }
}
