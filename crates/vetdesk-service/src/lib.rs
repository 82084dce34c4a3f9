//! # vetdesk-service
//!
//! Business logic services for VetDesk. The auth service owns the login use
//! case; the record services are thin pass-throughs over the store traits,
//! mapping absence to `NotFound` and duplicates to `Conflict`.

pub mod appointment;
pub mod auth;
pub mod context;
pub mod pet;
pub mod user;

pub use auth::{AuthService, LoginResult};
pub use context::RequestContext;
