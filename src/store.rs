// Market Directory - Document Store
// Four-operation storage contract (find all, find by id, save, count) plus
// the in-memory implementation the server runs on.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Store-layer failure. Handlers map this to a generic server error;
/// nothing in the store is retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store internal failure: {0}")]
    Internal(String),
}

/// A persisted record kind. The store assigns the id on first save and
/// treats it as the sole identity key afterwards.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Kind name used in logs and not-found responses.
    const KIND: &'static str;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
}

/// The document-store capability handlers are built against.
///
/// Every operation is non-blocking; handlers hold the store as
/// `Arc<dyn DocumentStore<E>>` and never assume exclusive access.
#[async_trait]
pub trait DocumentStore<E: Entity>: Send + Sync {
    /// All records of the kind, in store order.
    async fn find_all(&self) -> Result<Vec<E>, StoreError>;

    /// The record with the given id, or `None` when absent.
    async fn find_by_id(&self, id: &str) -> Result<Option<E>, StoreError>;

    /// Upsert. Assigns a fresh id when the entity has none; returns the
    /// record as persisted.
    async fn save(&self, entity: E) -> Result<E, StoreError>;

    /// Number of records of the kind.
    async fn count(&self) -> Result<u64, StoreError>;
}

/// In-memory document store. Store order is insertion order.
pub struct MemoryStore<E> {
    records: Arc<RwLock<Vec<E>>>,
}

impl<E> MemoryStore<E> {
    pub fn new() -> Self {
        MemoryStore {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::Internal("record lock poisoned".to_string())
}

#[async_trait]
impl<E: Entity> DocumentStore<E> for MemoryStore<E> {
    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<E>, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.iter().find(|r| r.id() == Some(id)).cloned())
    }

    async fn save(&self, mut entity: E) -> Result<E, StoreError> {
        let id = match entity.id() {
            Some(id) => id.to_owned(),
            None => Uuid::new_v4().to_string(),
        };
        entity.set_id(id.clone());

        let mut records = self.records.write().map_err(|_| poisoned())?;
        match records.iter_mut().find(|r| r.id() == Some(id.as_str())) {
            Some(slot) => *slot = entity.clone(),
            None => records.push(entity.clone()),
        }

        Ok(entity)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.len() as u64)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Store double for handler tests: same contract as `MemoryStore`,
    //! plus a counter of `save` calls so tests can verify how many writes
    //! an operation issued (including zero).

    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    pub(crate) struct RecordingStore<E> {
        inner: MemoryStore<E>,
        saves: AtomicUsize,
    }

    impl<E: Entity> RecordingStore<E> {
        pub(crate) fn new() -> Self {
            RecordingStore {
                inner: MemoryStore::new(),
                saves: AtomicUsize::new(0),
            }
        }

        /// Insert a record without counting it as a write.
        pub(crate) async fn preload(&self, entity: E) -> E {
            self.inner.save(entity).await.unwrap()
        }

        pub(crate) fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl<E: Entity> DocumentStore<E> for RecordingStore<E> {
        async fn find_all(&self) -> Result<Vec<E>, StoreError> {
            self.inner.find_all().await
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<E>, StoreError> {
            self.inner.find_by_id(id).await
        }

        async fn save(&self, entity: E) -> Result<E, StoreError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.inner.save(entity).await
        }

        async fn count(&self) -> Result<u64, StoreError> {
            self.inner.count().await
        }
    }
}
