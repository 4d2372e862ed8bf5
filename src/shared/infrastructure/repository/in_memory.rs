// In memory implementation of the Repository port.
//
// Purpose
// - Back the service for local development and tests, without a database.
//
// Responsibilities
// - Hold the entities of one type as an immutable snapshot, replaced on every mutation.
// - Serialize mutations: the write lock is held across each read-modify-write,
//   so concurrent inserts, updates and deletes never overwrite each other.
// - Hand out copies only. Readers clone the snapshot pointer and release the lock.

use crate::shared::core::entity::Entity;
use crate::shared::infrastructure::repository::{Repository, RepositoryError};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct InMemoryRepository<T: Entity> {
    data: RwLock<Arc<Vec<T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Builds the store from a seed collection. When the seed repeats an id,
    /// the first occurrence wins.
    pub fn new(seed: impl IntoIterator<Item = T>) -> Self {
        let mut seen = HashSet::new();
        let data: Vec<T> = seed
            .into_iter()
            .filter(|item| seen.insert(item.id()))
            .collect();
        Self {
            data: RwLock::new(Arc::new(data)),
        }
    }

    async fn snapshot(&self) -> Arc<Vec<T>> {
        self.data.read().await.clone()
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait::async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.snapshot().await.as_ref().clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>, RepositoryError> {
        Ok(self
            .snapshot()
            .await
            .iter()
            .find(|item| item.id() == id)
            .cloned())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut guard = self.data.write().await;
        if !guard.iter().any(|item| item.id() == id) {
            return Ok(());
        }
        let next: Vec<T> = guard.iter().filter(|item| item.id() != id).cloned().collect();
        *guard = Arc::new(next);
        Ok(())
    }

    async fn insert(&self, mut item: T) -> Result<T, RepositoryError> {
        let mut guard = self.data.write().await;
        let mut id = Uuid::now_v7();
        while id == item.id() || guard.iter().any(|existing| existing.id() == id) {
            id = Uuid::now_v7();
        }
        item.set_id(id);

        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(item.clone());
        *guard = Arc::new(next);
        Ok(item)
    }

    async fn update(&self, item: T) -> Result<(), RepositoryError> {
        let mut guard = self.data.write().await;
        let id = item.id();
        let Some(position) = guard.iter().position(|existing| existing.id() == id) else {
            return Err(RepositoryError::NotFound(id));
        };

        let mut next = guard.as_ref().clone();
        next[position] = item;
        *guard = Arc::new(next);
        Ok(())
    }
}
