// Port for storing entities of one type.
//
// Purpose
// - Describe the data-access capabilities the use cases need, without binding them to a backend.
//
// Boundaries
// - Only the update operation reports a missing entity. Absence on read is `None`,
//   deleting an absent id is a no-op.

pub mod in_memory;

use crate::shared::core::entity::Entity;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("entity with id {0} not found")]
    NotFound(Uuid),
}

#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>, RepositoryError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// Stores `item` under a freshly minted id and returns the stored copy.
    /// Any id set by the caller is discarded.
    async fn insert(&self, item: T) -> Result<T, RepositoryError>;

    /// Replaces the entity sharing `item`'s id. Fails with `NotFound` when there is none.
    async fn update(&self, item: T) -> Result<(), RepositoryError>;
}
