//! Handlers for the generic entity form endpoint.
//!
//! `GET` renders a blank form for the collection's record type, `POST`
//! decodes the submitted form, stores it and renders the saved record
//! (including its generated identifier). Every other method is rejected
//! once the collection is known to exist.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Form;
use discontent_core::form::{self, FormSubmission};
use discontent_core::reflect;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::ui;

/// GET /api/entities/{collection}
///
/// Render an empty form for the collection's record type.
pub async fn show_form(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> AppResult<Html<String>> {
    let record_type = state.registry.resolve(&collection)?;
    let record = record_type.instantiate();

    Ok(Html(ui::entity_page(
        record_type,
        &form::encode(record.as_ref()),
    )))
}

/// POST /api/entities/{collection}
///
/// Store the submitted form as a new record and render it back with the
/// identifier the store generated.
pub async fn create_entity(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let record_type = state.registry.resolve(&collection)?;

    let Form(pairs) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let submission = FormSubmission::from_pairs(pairs);

    let mut record = form::decode(&submission, record_type)?;

    let id = state
        .gateway
        .insert(record.as_ref(), record_type.collection())
        .await?;
    reflect::set_identifier(record.as_mut(), id)?;

    tracing::info!(
        collection = record_type.collection(),
        %id,
        "Entity created",
    );

    Ok((
        StatusCode::CREATED,
        Html(ui::entity_page(record_type, &form::encode(record.as_ref()))),
    ))
}

/// Any other method on /api/entities/{collection}.
///
/// Unknown collections still answer 404 before the method is considered.
pub async fn method_not_supported(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    method: Method,
) -> AppResult<()> {
    state.registry.resolve(&collection)?;

    Err(AppError::MethodNotAllowed(method.to_string()))
}
