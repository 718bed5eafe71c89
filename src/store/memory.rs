use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Record, RecordStore, StoreError, next_id};

/// In-memory collection. Used in tests in place of [`super::JsonFileStore`].
pub struct MemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from existing records, e.g. to seed fixtures.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MemoryStore<T> {
    async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    async fn get(&self, id: i64) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    async fn insert(&self, draft: T::Draft) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let id = next_id(records.iter().map(Record::id))?;
        let record = T::from_draft(id, draft);
        records.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{User, UserDraft};

    #[tokio::test]
    async fn seeded_records_keep_their_ids() -> Result<(), anyhow::Error> {
        let seeded = User::from_draft(
            5,
            UserDraft {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
            },
        );
        let store = MemoryStore::with_records(vec![seeded.clone()]);

        assert_eq!(store.get(5).await, Some(seeded));

        let next = store
            .insert(UserDraft {
                name: "Bo".to_string(),
                email: "bo@x.com".to_string(),
            })
            .await?;
        assert_eq!(next.id, 6);
        assert_eq!(store.list().await.len(), 2);
        Ok(())
    }
}
