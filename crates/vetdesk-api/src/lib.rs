//! # vetdesk-api
//!
//! HTTP API layer for VetDesk: the router, the access guard and
//! schema-checking middleware, request/response DTOs, and the mapping from
//! domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod validate;

pub use error::ApiError;
pub use state::AppState;
