//! Postgres-backed document store.
//!
//! Each collection is a table with a generated `_id UUID` key and a JSONB
//! `document` column (see `migrations/`).

use async_trait::async_trait;
use discontent_core::types::RecordId;
use sqlx::types::Json;
use uuid::Uuid;

use crate::document::Document;
use crate::store::{DocumentStore, StoreError};
use crate::DbPool;

/// Stores documents in per-collection Postgres tables.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Fetch a stored document by identifier.
    pub async fn find(
        &self,
        collection: &str,
        id: RecordId,
    ) -> Result<Option<Document>, StoreError> {
        let table = table_name(collection)?;
        let query = format!("SELECT document FROM \"{table}\" WHERE _id = $1");
        let row: Option<(Json<Document>,)> = sqlx::query_as(&query)
            .bind(*id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(Json(document),)| document))
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, document: Document) -> Result<RecordId, StoreError> {
        let table = table_name(collection)?;
        let query = format!("INSERT INTO \"{table}\" (document) VALUES ($1) RETURNING _id");

        let id: Uuid = sqlx::query_scalar(&query)
            .bind(Json(document))
            .fetch_one(&self.pool)
            .await
            .map_err(|source| StoreError::Insert {
                collection: collection.to_string(),
                source,
            })?;

        Ok(RecordId::from_uuid(id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

/// Collection names end up as table identifiers, so only `[a-z_]` is allowed.
fn table_name(collection: &str) -> Result<&str, StoreError> {
    let valid = !collection.is_empty()
        && collection
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_');
    if valid {
        Ok(collection)
    } else {
        Err(StoreError::InvalidCollection(collection.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn table_name_accepts_registered_collections() {
        for name in ["articles", "categories", "comments", "page_views"] {
            assert_eq!(table_name(name).unwrap(), name);
        }
    }

    #[test]
    fn table_name_rejects_unsafe_identifiers() {
        for name in ["", "Articles", "articles; DROP TABLE x", "a\"b", "posts2"] {
            assert_matches!(table_name(name), Err(StoreError::InvalidCollection(_)));
        }
    }
}
