//! Convenience result type alias for VetDesk.

use crate::error::AppError;

/// A specialized `Result` type for VetDesk operations.
pub type AppResult<T> = Result<T, AppError>;
