//! Maps pipeline failures to HTTP responses.
//!
//! Every failure — auth, validation, or internal — leaves the API in the
//! same envelope shape: `{error, message, details?}`. Internal causes are
//! logged server-side and never echoed to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use vetdesk_core::error::{AppError, ErrorKind};

use crate::validate::FieldError;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details (per-field validation errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// The API-boundary error type.
#[derive(Debug)]
pub enum ApiError {
    /// A domain failure carrying an [`ErrorKind`] tag.
    App(AppError),
    /// A request-shape failure with its ordered per-field errors.
    Validation(Vec<FieldError>),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            Self::App(err) => {
                let (status, error_code) = match err.kind {
                    ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
                    ErrorKind::Unauthenticated => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
                    ErrorKind::TokenExpired => (StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED"),
                    ErrorKind::TokenInvalid => (StatusCode::UNAUTHORIZED, "TOKEN_INVALID"),
                    ErrorKind::AuthFailed => (StatusCode::UNAUTHORIZED, "AUTH_FAILED"),
                    ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
                    ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
                    ErrorKind::Configuration | ErrorKind::Internal => {
                        tracing::error!(error = %err, "Internal server error");
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                    }
                };

                // Never leak the internal cause to the client.
                let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
                    "Internal server error".to_string()
                } else {
                    err.message
                };

                (status, error_code, message, None)
            }
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Request validation failed".to_string(),
                serde_json::to_value(errors).ok(),
            ),
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
