use std::collections::HashMap;

use async_trait::async_trait;
use discontent_core::types::{RecordId, Timestamp};
use tokio::sync::RwLock;

use crate::document::Document;
use crate::store::{DocumentStore, StoreError};

/// A document held by [`MemoryDocumentStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: RecordId,
    pub document: Document,
    pub stored_at: Timestamp,
}

/// In-process document store.
///
/// Thread-safe via interior `RwLock`; identifiers are generated locally.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every document stored in `collection`, in insertion order.
    pub async fn documents(&self, collection: &str) -> Vec<StoredDocument> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, document: Document) -> Result<RecordId, StoreError> {
        let id = RecordId::generate();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id,
                document,
                stored_at: chrono::Utc::now(),
            });
        Ok(id)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
