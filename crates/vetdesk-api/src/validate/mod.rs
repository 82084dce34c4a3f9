//! Request payload validation against declared shapes.
//!
//! A [`Schema`] describes the expected fields of one endpoint's body. On
//! failure, validation reports *every* violated field in declaration order;
//! on success the body is handed to serde untouched, so the handler's typed
//! DTO is guaranteed to deserialize with all constraints already holding.

pub mod schema;
pub mod shapes;

pub use schema::{Field, FieldError, Schema};
