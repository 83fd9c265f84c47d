use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use discontent_core::error::CoreError;
use discontent_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
///
/// Error bodies are always JSON, never plain text:
///
/// ```text
/// {"error": "Collection not found", "code": "NOT_FOUND"}
/// ```
///
/// 5xx responses carry `An internal error occurred`; the detail is only logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `discontent_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `discontent_db`, including insert timeouts.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The route exists but does not support the request method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                ),
                CoreError::InvalidEncoding { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_ENCODING", core.to_string())
                }
                CoreError::InvalidRecordType(msg) | CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Storage errors ---
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::MethodNotAllowed(method) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                format!("Invalid request method: {method}"),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 500 response parts with the detail withheld from the client.
fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
