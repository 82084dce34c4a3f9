//! # vetdesk-auth
//!
//! Authentication primitives for VetDesk.
//!
//! ## Modules
//!
//! - `jwt` — token creation and validation
//! - `password` — Argon2id password hashing
//! - `rbac` — role-based access checks (any-of semantics)

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, SignedToken};
pub use password::PasswordHasher;
pub use rbac::RbacEnforcer;
