//! Document storage for Discontent records.
//!
//! [`StorageGateway`] is the only thing handlers talk to. It turns a record
//! into a [`Document`] and hands it to a [`DocumentStore`] implementation:
//! [`PgDocumentStore`] in production, [`MemoryDocumentStore`] in tests.

use sqlx::postgres::PgPoolOptions;

pub mod document;
pub mod gateway;
pub mod memory;
pub mod postgres;
pub mod store;

pub use document::Document;
pub use gateway::{StorageGateway, DEFAULT_INSERT_TIMEOUT};
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use store::{DocumentStore, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the collection tables bundled with this crate.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
