//! Record storage.
//!
//! Every collection is an ordered list of records with integer ids. Services
//! only talk to the [`RecordStore`] trait so tests can swap the JSON file for
//! an in-memory list.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

/// A record that can be kept in a [`RecordStore`].
///
/// New records start life as a `Draft` (the create payload with defaults
/// resolved) and receive their id from the store on insert.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Data needed to create a record, minus the id.
    type Draft: Send + 'static;

    fn id(&self) -> i64;

    fn from_draft(id: i64, draft: Self::Draft) -> Self;
}

/// Errors raised while persisting a collection.
///
/// Reads never fail: a missing or corrupt file is an empty collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The largest stored id is already `i64::MAX`.
    #[error("No ids left in collection")]
    IdsExhausted,
}

/// Storage for one collection of records.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<T>;

    /// Find a record by id.
    async fn get(&self, id: i64) -> Option<T>;

    /// Assign the next id to `draft`, append it and persist the collection.
    ///
    /// Returns the stored record.
    async fn insert(&self, draft: T::Draft) -> Result<T, StoreError>;
}

/// Next free id: one more than the largest of `ids`, or 1 when empty.
///
/// Ids are never reused, gaps included.
pub fn next_id<I: IntoIterator<Item = i64>>(ids: I) -> Result<i64, StoreError> {
    ids.into_iter()
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(StoreError::IdsExhausted)
}
