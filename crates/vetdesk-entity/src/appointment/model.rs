//! Appointment entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled consultation between a vet, a pet, and its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique appointment identifier.
    pub id: Uuid,
    /// Calendar date of the appointment.
    pub date: NaiveDate,
    /// Time of day, second precision.
    pub time: NaiveTime,
    /// The attending vet's user id.
    pub vet_id: Uuid,
    /// The pet being seen.
    pub pet_id: Uuid,
    /// The booking owner's user id.
    pub owner_id: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

