//! Generic store trait for entity persistence.
//!
//! Persistence is an external collaborator: the pipeline consumes these
//! operations and never assumes anything about the backing medium. Absence
//! is always an explicit `Ok(None)`, never an error from the store itself.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// Generic keyed-by-id store trait.
///
/// Entity-specific lookups (e.g. find-by-email for credential records) are
/// defined on the concrete store traits that extend this one.
#[async_trait]
pub trait Store<Entity>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Entity>>;

    /// Find all entities.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Persist a new entity and return it.
    async fn create(&self, entity: Entity) -> AppResult<Entity>;

    /// Replace an existing entity. Returns `None` when the id is absent.
    async fn update(&self, id: Uuid, entity: Entity) -> AppResult<Option<Entity>>;

    /// Delete an entity by id, returning the removed value if it existed.
    async fn delete(&self, id: Uuid) -> AppResult<Option<Entity>>;
}
