//! Traits shared across VetDesk crates.

pub mod store;

pub use store::Store;
