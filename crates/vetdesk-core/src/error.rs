//! Unified application error types for VetDesk.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Failure categories are carried as an
//! explicit [`ErrorKind`] tag so callers branch on data, never on downcasts.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Input validation failed.
    Validation,
    /// No usable bearer token accompanied the request.
    Unauthenticated,
    /// The presented token is past its expiry.
    TokenExpired,
    /// The presented token has a bad signature or malformed encoding.
    TokenInvalid,
    /// The caller is authenticated but lacks a required role.
    Forbidden,
    /// Login credentials did not match any account.
    AuthFailed,
    /// The requested resource was not found.
    NotFound,
    /// A conflict occurred (duplicate entry, concurrent modification, etc.).
    Conflict,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::Unauthenticated => write!(f, "UNAUTHENTICATED"),
            Self::TokenExpired => write!(f, "TOKEN_EXPIRED"),
            Self::TokenInvalid => write!(f, "TOKEN_INVALID"),
            Self::Forbidden => write!(f, "FORBIDDEN"),
            Self::AuthFailed => write!(f, "AUTH_FAILED"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout VetDesk.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// The single message returned for any failed login attempt.
///
/// Unknown email and wrong password deliberately produce the same text so a
/// caller cannot probe which half was wrong.
pub const AUTH_FAILED_MESSAGE: &str = "Not authorized";

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an unauthenticated error (missing/garbled bearer token).
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    /// Create a token-expired error.
    pub fn token_expired(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenExpired, message)
    }

    /// Create a token-invalid error.
    pub fn token_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenInvalid, message)
    }

    /// Create a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Create the login-failure error.
    ///
    /// There is intentionally no variant taking a message: every failed login
    /// surfaces [`AUTH_FAILED_MESSAGE`], whichever credential half was wrong.
    pub fn auth_failed() -> Self {
        Self::new(ErrorKind::AuthFailed, AUTH_FAILED_MESSAGE)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failed_carries_the_unified_message() {
        let err = AppError::auth_failed();
        assert_eq!(err.kind, ErrorKind::AuthFailed);
        assert_eq!(err.message, AUTH_FAILED_MESSAGE);
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::not_found("Pet not found");
        assert_eq!(err.to_string(), "NOT_FOUND: Pet not found");
    }
}
