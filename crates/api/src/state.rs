use std::sync::Arc;

use discontent_core::registry::RecordRegistry;
use discontent_db::StorageGateway;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable and read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Registered record types, keyed by collection name.
    pub registry: Arc<RecordRegistry>,
    /// Storage gateway around the connected document store.
    pub gateway: Arc<StorageGateway>,
}
