//! Pet entity.

pub mod model;

pub use model::Pet;
