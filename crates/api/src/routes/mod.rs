pub mod entities;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /entities/{collection}      GET blank form, POST create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/entities", entities::router())
}
