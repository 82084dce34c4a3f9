//! Appointment record management.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::info;
use uuid::Uuid;

use vetdesk_core::error::AppError;
use vetdesk_entity::appointment::Appointment;
use vetdesk_store::AppointmentStore;

/// Appointment fields supplied on create and full-replace update.
#[derive(Debug, Clone)]
pub struct AppointmentInput {
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

/// Handles appointment record operations.
#[derive(Clone)]
pub struct AppointmentService {
    /// Appointment store.
    appointments: Arc<dyn AppointmentStore>,
}

impl std::fmt::Debug for AppointmentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppointmentService").finish()
    }
}

impl AppointmentService {
    /// Creates a new appointment service.
    pub fn new(appointments: Arc<dyn AppointmentStore>) -> Self {
        Self { appointments }
    }

    /// Lists all appointments.
    pub async fn list(&self) -> Result<Vec<Appointment>, AppError> {
        self.appointments.find_all().await
    }

    /// Gets an appointment by id.
    pub async fn get(&self, id: Uuid) -> Result<Appointment, AppError> {
        self.appointments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment not found"))
    }

    /// Books a new appointment.
    pub async fn create(&self, input: AppointmentInput) -> Result<Appointment, AppError> {
        let now = Utc::now();
        let appointment = self
            .appointments
            .create(Appointment {
                id: Uuid::new_v4(),
                date: input.date,
                time: input.time,
                vet_id: input.vet_id,
                pet_id: input.pet_id,
                owner_id: input.owner_id,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(appointment_id = %appointment.id, "Appointment booked");

        Ok(appointment)
    }

    /// Replaces an existing appointment.
    pub async fn update(&self, id: Uuid, input: AppointmentInput) -> Result<Appointment, AppError> {
        let existing = self.get(id).await?;

        let updated = Appointment {
            id,
            date: input.date,
            time: input.time,
            vet_id: input.vet_id,
            pet_id: input.pet_id,
            owner_id: input.owner_id,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.appointments
            .update(id, updated)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment not found"))
    }

    /// Cancels an appointment, returning the removed record.
    pub async fn delete(&self, id: Uuid) -> Result<Appointment, AppError> {
        self.appointments
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment not found"))
    }
}
