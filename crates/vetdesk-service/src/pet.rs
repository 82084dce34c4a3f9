//! Pet record management.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use vetdesk_core::error::AppError;
use vetdesk_entity::pet::Pet;
use vetdesk_store::PetStore;

/// Pet fields supplied on create and full-replace update.
#[derive(Debug, Clone)]
pub struct PetInput {
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

/// Handles pet record operations.
#[derive(Clone)]
pub struct PetService {
    /// Pet store.
    pets: Arc<dyn PetStore>,
}

impl std::fmt::Debug for PetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetService").finish()
    }
}

impl PetService {
    /// Creates a new pet service.
    pub fn new(pets: Arc<dyn PetStore>) -> Self {
        Self { pets }
    }

    /// Lists all pets.
    pub async fn list(&self) -> Result<Vec<Pet>, AppError> {
        self.pets.find_all().await
    }

    /// Gets a pet by id.
    pub async fn get(&self, id: Uuid) -> Result<Pet, AppError> {
        self.pets
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pet not found"))
    }

    /// Registers a new pet.
    pub async fn create(&self, input: PetInput) -> Result<Pet, AppError> {
        let now = Utc::now();
        let pet = self
            .pets
            .create(Pet {
                id: Uuid::new_v4(),
                name: input.name,
                species: input.species,
                breed: input.breed,
                size: input.size,
                age: input.age,
                owner_id: input.owner_id,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(pet_id = %pet.id, "Pet registered");

        Ok(pet)
    }

    /// Replaces an existing pet record.
    pub async fn update(&self, id: Uuid, input: PetInput) -> Result<Pet, AppError> {
        let existing = self.get(id).await?;

        let updated = Pet {
            id,
            name: input.name,
            species: input.species,
            breed: input.breed,
            size: input.size,
            age: input.age,
            owner_id: input.owner_id,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.pets
            .update(id, updated)
            .await?
            .ok_or_else(|| AppError::not_found("Pet not found"))
    }

    /// Deletes a pet, returning the removed record.
    pub async fn delete(&self, id: Uuid) -> Result<Pet, AppError> {
        self.pets
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pet not found"))
    }
}
