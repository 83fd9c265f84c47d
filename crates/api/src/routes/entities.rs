//! Route definitions for the generic entity form endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::entities;
use crate::state::AppState;

/// Entity routes mounted at `/api/entities`.
///
/// ```text
/// GET    /{collection}    -> show_form
/// POST   /{collection}    -> create_entity
/// HEAD   /{collection}    -> method_not_supported (405)
/// *      /{collection}    -> method_not_supported (405)
/// ```
///
/// HEAD is routed explicitly; axum would otherwise answer it with the GET
/// handler.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{collection}",
        get(entities::show_form)
            .head(entities::method_not_supported)
            .post(entities::create_entity)
            .fallback(entities::method_not_supported),
    )
}
