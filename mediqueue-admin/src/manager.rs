//! Add/edit/delete/search over one kind of record.

use std::sync::Arc;

use log::info;

use crate::entity::{AdminEntity, EntityId};
use crate::session::{EditingSession, SessionMode};
use crate::store::{Repository, StoreError};

/// Management operations for one entity kind.
///
/// Wraps a [`Repository`]; clones share the same storage.
pub struct EntityManager<E: AdminEntity> {
    repository: Arc<dyn Repository<E>>,
}

impl<E: AdminEntity> Clone for EntityManager<E> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<E: AdminEntity> EntityManager<E> {
    /// Create a manager over the given repository.
    pub fn new(repository: impl Repository<E> + 'static) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All records, ordered by id.
    pub fn list(&self) -> Vec<E> {
        self.repository.list()
    }

    pub fn get(&self, id: EntityId) -> Option<E> {
        self.repository.get(id)
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Records whose searchable text contains `term`, ignoring case. An empty
    /// term matches everything.
    pub fn search(&self, term: &str) -> Vec<E> {
        self.search_where(term, |_| true)
    }

    /// [`search`](Self::search) narrowed by an extra predicate (a status
    /// filter, say).
    pub fn search_where(&self, term: &str, filter: impl Fn(&E) -> bool) -> Vec<E> {
        let needle = term.to_lowercase();
        self.repository
            .list()
            .into_iter()
            .filter(|record| record.matches(&needle) && filter(record))
            .collect()
    }

    /// Store a new record under the next free id.
    pub fn add(&self, draft: E::Draft) -> E {
        let id = self.repository.next_id();
        let record = E::from_draft(id, draft);
        self.repository.insert(record.clone());
        info!("Added {} {}", E::KIND, id);
        record
    }

    /// Replace a record, keeping its id.
    pub fn update(&self, id: EntityId, draft: E::Draft) -> Result<E, StoreError> {
        let record = E::from_draft(id, draft);
        self.repository.replace(record.clone())?;
        info!("Updated {} {}", E::KIND, id);
        Ok(record)
    }

    pub fn delete(&self, id: EntityId) -> Result<E, StoreError> {
        let record = self.repository.remove(id)?;
        info!("Deleted {} {}", E::KIND, id);
        Ok(record)
    }

    // -------------------------------------------------------------------------
    // Editing sessions
    // -------------------------------------------------------------------------

    /// Open the form for a new record.
    pub fn open_add(&self) -> EditingSession<E> {
        EditingSession::new(self.clone(), SessionMode::Add, None)
    }

    /// Open the form seeded with an existing record.
    pub fn open_edit(&self, id: EntityId) -> Result<EditingSession<E>, StoreError> {
        let record = self.get(id).ok_or(StoreError::NotFound {
            entity: E::KIND,
            id,
        })?;
        Ok(EditingSession::new(
            self.clone(),
            SessionMode::Edit(id),
            Some(&record),
        ))
    }
}
