//! In-memory store implementation backed by `DashMap`.
//!
//! Each map is sharded internally, so concurrent requests operate without
//! any application-level locking. Lookups for absent ids return `Ok(None)`;
//! the store never turns absence into an error.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use vetdesk_core::AppResult;
use vetdesk_core::traits::Store;
use vetdesk_entity::appointment::Appointment;
use vetdesk_entity::pet::Pet;
use vetdesk_entity::user::User;

use crate::{AppointmentStore, PetStore, UserStore};

/// In-memory user store.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<Uuid, User>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store<User> for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by_key(|user| (user.created_at, user.id));
        Ok(users)
    }

    async fn create(&self, user: User) -> AppResult<User> {
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, user: User) -> AppResult<Option<User>> {
        if !self.users.contains_key(&id) {
            return Ok(None);
        }
        self.users.insert(id, user.clone());
        Ok(Some(user))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.remove(&id).map(|(_, user)| user))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().email == email)
            .map(|entry| entry.value().clone()))
    }
}

/// In-memory pet store.
#[derive(Debug, Default)]
pub struct MemoryPetStore {
    pets: DashMap<Uuid, Pet>,
}

impl MemoryPetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store<Pet> for MemoryPetStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Pet>> {
        Ok(self.pets.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Pet>> {
        let mut pets: Vec<Pet> = self
            .pets
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        pets.sort_by_key(|pet| (pet.created_at, pet.id));
        Ok(pets)
    }

    async fn create(&self, pet: Pet) -> AppResult<Pet> {
        self.pets.insert(pet.id, pet.clone());
        Ok(pet)
    }

    async fn update(&self, id: Uuid, pet: Pet) -> AppResult<Option<Pet>> {
        if !self.pets.contains_key(&id) {
            return Ok(None);
        }
        self.pets.insert(id, pet.clone());
        Ok(Some(pet))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Pet>> {
        Ok(self.pets.remove(&id).map(|(_, pet)| pet))
    }
}

impl PetStore for MemoryPetStore {}

/// In-memory appointment store.
#[derive(Debug, Default)]
pub struct MemoryAppointmentStore {
    appointments: DashMap<Uuid, Appointment>,
}

impl MemoryAppointmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store<Appointment> for MemoryAppointmentStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        Ok(self
            .appointments
            .get(&id)
            .map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Appointment>> {
        let mut appointments: Vec<Appointment> = self
            .appointments
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        appointments.sort_by_key(|appt| (appt.date, appt.time, appt.id));
        Ok(appointments)
    }

    async fn create(&self, appointment: Appointment) -> AppResult<Appointment> {
        self.appointments.insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn update(&self, id: Uuid, appointment: Appointment) -> AppResult<Option<Appointment>> {
        if !self.appointments.contains_key(&id) {
            return Ok(None);
        }
        self.appointments.insert(id, appointment.clone());
        Ok(Some(appointment))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        Ok(self.appointments.remove(&id).map(|(_, appt)| appt))
    }
}

impl AppointmentStore for MemoryAppointmentStore {}
