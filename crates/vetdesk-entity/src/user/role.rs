//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use vetdesk_core::AppError;

/// Roles available in the clinic.
///
/// This is a closed set: route guards authorize a request when the caller
/// holds *any* of the roles the route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full clinic administrator.
    Admin,
    /// Veterinary staff: manages pets and appointments.
    Vet,
    /// Pet owner: books appointments, views own records.
    Owner,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Vet => "vet",
            Self::Owner => "owner",
        }
    }

    /// The names accepted by [`FromStr`], in canonical order.
    pub const NAMES: &'static [&'static str] = &["admin", "vet", "owner"];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "vet" => Ok(Self::Vet),
            "owner" => Ok(Self::Owner),
            _ => Err(AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: admin, vet, owner"
            ))),
        }
    }
}
