//! Integration tests for the status/health endpoints and general HTTP behaviour.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, StatusCode};
use common::{body_json, body_text, get, send};
use discontent_core::types::RecordId;
use discontent_db::{Document, DocumentStore, StoreError};

/// A store that is never reachable.
struct UnreachableStore;

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn insert(&self, _: &str, _: Document) -> Result<RecordId, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

// ---------------------------------------------------------------------------
// Test: GET / returns the plain status body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_status_ok() {
    let (app, _) = common::build_test_app();
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "status ok");
}

// ---------------------------------------------------------------------------
// Test: GET /health reports store health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let (app, _) = common::build_test_app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_store() {
    let app = common::build_test_app_with(Arc::new(UnreachableStore), Duration::from_secs(1));
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: static assets are served for unmatched paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn static_asset_is_served() {
    let (app, _) = common::build_test_app();
    let response = get(app, "/app.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("discontent"));
}

#[tokio::test]
async fn missing_static_asset_returns_404() {
    let (app, _) = common::build_test_app();
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _) = common::build_test_app();
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a valid UUID (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: OPTIONS is routed like any other method
// ---------------------------------------------------------------------------

#[tokio::test]
async fn options_on_root_is_not_intercepted() {
    let (app, _) = common::build_test_app();
    let response = send(app, Method::OPTIONS, "/", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
