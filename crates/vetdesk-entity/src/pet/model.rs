//! Pet entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pet registered at the clinic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    /// Unique pet identifier.
    pub id: Uuid,
    /// Pet name.
    pub name: String,
    /// Species (dog, cat, ...).
    pub species: String,
    /// Breed.
    pub breed: String,
    /// Size category (small, medium, large).
    pub size: String,
    /// Age in years.
    pub age: u32,
    /// The owning user's id.
    pub owner_id: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

