//! # vetdesk-store
//!
//! Entity store traits and their in-memory implementation.
//!
//! The rest of the application only ever sees the traits: persistence is an
//! external collaborator behind `Arc<dyn ...Store>`, and a different backend
//! can be swapped in without touching services or handlers.

pub mod memory;

use async_trait::async_trait;

use vetdesk_core::AppResult;
use vetdesk_core::traits::Store;
use vetdesk_entity::appointment::Appointment;
use vetdesk_entity::pet::Pet;
use vetdesk_entity::user::User;

pub use memory::{MemoryAppointmentStore, MemoryPetStore, MemoryUserStore};

/// Credential-record store: keyed by id, with a unique-email lookup.
#[async_trait]
pub trait UserStore: Store<User> {
    /// Find a user by email. Emails are unique across all records.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// Pet record store.
pub trait PetStore: Store<Pet> {}

/// Appointment record store.
pub trait AppointmentStore: Store<Appointment> {}
