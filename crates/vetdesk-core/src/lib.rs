//! # vetdesk-core
//!
//! Core crate for VetDesk. Contains configuration schemas, the store trait
//! consumed by services, and the unified error system.
//!
//! This crate has **no** internal dependencies on other VetDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
