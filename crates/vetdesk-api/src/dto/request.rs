//! Request DTOs.
//!
//! These deserialize only after the matching shape in
//! [`crate::validate::shapes`] has accepted the payload, so every
//! constraint already holds by the time a handler sees one of these.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vetdesk_entity::user::Role;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Create user request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// First name.
    pub name: String,
    /// Last name.
    pub lastname: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: i64,
    /// Granted roles.
    pub roles: Vec<Role>,
    /// Plaintext password.
    pub password: String,
}

/// Update user request — no password field by design.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// First name.
    pub name: String,
    /// Last name.
    pub lastname: String,
    /// Email address.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number.
    pub phone: i64,
    /// Granted roles.
    pub roles: Vec<Role>,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// Current password.
    pub current_password: String,
    /// New password.
    pub new_password: String,
}

/// Create/replace pet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetRequest {
    /// Pet name.
    pub name: String,
    /// Species.
    pub species: String,
    /// Breed.
    pub breed: String,
    /// Size category.
    pub size: String,
    /// Age in years.
    pub age: u32,
    /// The owning user's id.
    pub owner_id: Uuid,
}

/// Create/replace appointment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRequest {
    /// Calendar date.
    pub date: NaiveDate,
    /// Time of day.
    pub time: NaiveTime,
    /// The attending vet's user id.
    pub vet_id: Uuid,
    /// The pet being seen.
    pub pet_id: Uuid,
    /// The booking owner's user id.
    pub owner_id: Uuid,
}
