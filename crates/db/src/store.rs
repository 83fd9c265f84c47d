use std::time::Duration;

use async_trait::async_trait;
use discontent_core::types::RecordId;

use crate::document::Document;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Insert into {collection} timed out after {}ms", elapsed.as_millis())]
    Timeout {
        collection: String,
        elapsed: Duration,
    },

    #[error("Invalid collection name: {0}")]
    InvalidCollection(String),

    #[error("Error creating entity in collection {collection}: {source}")]
    Insert {
        collection: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Backend that persists documents, one collection per record type.
///
/// Implementations must be safe to call concurrently; the gateway does not
/// serialize inserts.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist `document` in `collection` and return the identifier the store
    /// generated for it.
    async fn insert(&self, collection: &str, document: Document) -> Result<RecordId, StoreError>;

    /// Confirm the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
