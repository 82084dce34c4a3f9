//! User entity model — the credential record plus profile fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// A registered account in the clinic.
///
/// The password hash never leaves the process: serialization skips it, and
/// no API response type carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// First name.
    pub name: String,
    /// Last name.
    pub lastname: String,
    /// Email address. Unique across all records.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Contact phone number (digits only).
    pub phone: i64,
    /// Granted roles. Always non-empty.
    pub roles: Vec<Role>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    #[serde(default)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

