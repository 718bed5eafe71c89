use std::{io::ErrorKind, marker::PhantomData, path::PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::{fs, sync::RwLock};

use super::{Record, RecordStore, StoreError, next_id};

/// Collection persisted as a pretty-printed JSON array.
///
/// The file is the source of truth: every call reads it again and every
/// insert rewrites it whole. The lock makes the read-modify-write of
/// [`RecordStore::insert`] exclusive, so concurrent creates get distinct ids
/// and readers never see a half-written file.
pub struct JsonFileStore<T> {
    file_path: PathBuf,
    lock: RwLock<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> JsonFileStore<T> {
    /// Use the file at `path`. The file does not need to exist yet.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            file_path: path.into(),
            lock: RwLock::new(()),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.file_path
    }

    /// Read the raw array. Absent, unreadable or non-array files load as empty.
    ///
    /// Elements are kept as JSON values so that entries which do not match
    /// `T` survive the next rewrite.
    async fn load_raw(&self) -> Vec<Value> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %self.file_path.display(),
                    "Could not read collection, treating as empty: {e}"
                );
                return Vec::new();
            }
        };

        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!(
                path = %self.file_path.display(),
                "Collection is not a valid JSON array, treating as empty: {e}"
            );
            Vec::new()
        })
    }

    /// Decode the collection, skipping elements that are not a valid `T`.
    async fn load(&self) -> Vec<T> {
        self.load_raw()
            .await
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(
                        path = %self.file_path.display(),
                        index,
                        "Skipping malformed record: {e}"
                    );
                    None
                }
            })
            .collect()
    }

    async fn save(&self, records: &[Value]) -> Result<(), StoreError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_vec_pretty(records)?;
        fs::write(&self.file_path, data).await?;
        Ok(())
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for JsonFileStore<T> {
    async fn list(&self) -> Vec<T> {
        let _guard = self.lock.read().await;
        self.load().await
    }

    async fn get(&self, id: i64) -> Option<T> {
        let _guard = self.lock.read().await;
        self.load().await.into_iter().find(|record| record.id() == id)
    }

    async fn insert(&self, draft: T::Draft) -> Result<T, StoreError> {
        let _guard = self.lock.write().await;

        // Malformed elements still reserve their id and are written back untouched
        let mut records = self.load_raw().await;
        let id = next_id(
            records
                .iter()
                .filter_map(|value| value.get("id").and_then(Value::as_i64)),
        )?;

        let record = T::from_draft(id, draft);
        records.push(serde_json::to_value(&record)?);
        self.save(&records).await?;

        Ok(record)
    }
}
