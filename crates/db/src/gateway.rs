//! The storage gateway handlers use to persist records.

use std::sync::Arc;
use std::time::{Duration, Instant};

use discontent_core::record::AnyRecord;
use discontent_core::types::RecordId;

use crate::document;
use crate::store::{DocumentStore, StoreError};

/// Upper bound on a single insert.
pub const DEFAULT_INSERT_TIMEOUT: Duration = Duration::from_secs(10);

/// Generic "insert a record, get its identifier back" entry point.
///
/// Built once at startup around a connected [`DocumentStore`] and shared
/// read-only between request handlers.
#[derive(Clone)]
pub struct StorageGateway {
    store: Arc<dyn DocumentStore>,
    insert_timeout: Duration,
}

impl StorageGateway {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_timeout(store, DEFAULT_INSERT_TIMEOUT)
    }

    pub fn with_timeout(store: Arc<dyn DocumentStore>, insert_timeout: Duration) -> Self {
        Self {
            store,
            insert_timeout,
        }
    }

    /// Persist `record` into `collection` and return the generated identifier.
    ///
    /// Any identifier already set on the record is not stored. The caller is
    /// responsible for merging the returned identifier back into its record.
    pub async fn insert(
        &self,
        record: &dyn AnyRecord,
        collection: &str,
    ) -> Result<RecordId, StoreError> {
        let document = document::from_record(record);
        let started = Instant::now();

        match tokio::time::timeout(self.insert_timeout, self.store.insert(collection, document))
            .await
        {
            Ok(result) => {
                let id = result?;
                tracing::debug!(
                    collection,
                    %id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Document inserted",
                );
                Ok(id)
            }
            Err(_) => {
                tracing::warn!(
                    collection,
                    timeout_ms = self.insert_timeout.as_millis() as u64,
                    "Document insert timed out",
                );
                Err(StoreError::Timeout {
                    collection: collection.to_string(),
                    elapsed: started.elapsed(),
                })
            }
        }
    }

    /// Check that the underlying store is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
