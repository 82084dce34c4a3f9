//! Appointment entity.

pub mod model;

pub use model::Appointment;
