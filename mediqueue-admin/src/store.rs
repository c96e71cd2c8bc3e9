//! Record storage behind the admin managers.

use dashmap::DashMap;
use thiserror::Error;

use crate::entity::{AdminEntity, EntityId};

/// Store error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: EntityId },
}

/// Backend trait for record storage.
pub trait Repository<E: AdminEntity>: Send + Sync {
    /// All records, ordered by id.
    fn list(&self) -> Vec<E>;

    fn get(&self, id: EntityId) -> Option<E>;

    /// Insert or overwrite the record with the entity's id.
    fn insert(&self, entity: E);

    /// Overwrite an existing record.
    fn replace(&self, entity: E) -> Result<(), StoreError>;

    fn remove(&self, id: EntityId) -> Result<E, StoreError>;

    /// One past the highest id in use, or 1 when empty.
    fn next_id(&self) -> EntityId;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local storage. Nothing outlives the repository.
pub struct InMemoryRepository<E> {
    records: DashMap<EntityId, E>,
}

impl<E: AdminEntity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// A repository pre-filled with `records`.
    pub fn from_records(records: impl IntoIterator<Item = E>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.id(), record))
                .collect(),
        }
    }
}

impl<E: AdminEntity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AdminEntity> Repository<E> for InMemoryRepository<E> {
    fn list(&self) -> Vec<E> {
        let mut records: Vec<E> = self.records.iter().map(|entry| entry.value().clone()).collect();
        records.sort_by_key(|record| record.id());
        records
    }

    fn get(&self, id: EntityId) -> Option<E> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }

    fn insert(&self, entity: E) {
        self.records.insert(entity.id(), entity);
    }

    fn replace(&self, entity: E) -> Result<(), StoreError> {
        let id = entity.id();
        match self.records.get_mut(&id) {
            Some(mut slot) => {
                *slot = entity;
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: E::KIND,
                id,
            }),
        }
    }

    fn remove(&self, id: EntityId) -> Result<E, StoreError> {
        self.records
            .remove(&id)
            .map(|(_, record)| record)
            .ok_or(StoreError::NotFound {
                entity: E::KIND,
                id,
            })
    }

    fn next_id(&self) -> EntityId {
        self.records
            .iter()
            .map(|entry| *entry.key())
            .max()
            .map_or(1, |max| max + 1)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
