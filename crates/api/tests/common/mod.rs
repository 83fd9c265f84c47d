#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use discontent_api::config::ServerConfig;
use discontent_api::router::build_app_router;
use discontent_api::state::AppState;
use discontent_core::registry::RecordRegistry;
use discontent_db::{DocumentStore, MemoryDocumentStore, StorageGateway};

/// Build a test `ServerConfig` with safe defaults.
///
/// Static assets come from `tests/fixtures/static`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        store_timeout_secs: 10,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/static").into(),
    }
}

/// Build the full application router around `store`, with the same
/// middleware stack production uses.
pub fn build_test_app_with(store: Arc<dyn DocumentStore>, insert_timeout: Duration) -> Router {
    let state = AppState {
        registry: Arc::new(RecordRegistry::builtin().unwrap()),
        gateway: Arc::new(StorageGateway::with_timeout(store, insert_timeout)),
    };
    build_app_router(state, &test_config())
}

/// Build the application router around a fresh in-memory store.
pub fn build_test_app() -> (Router, Arc<MemoryDocumentStore>) {
    let store = Arc::new(MemoryDocumentStore::new());
    let app = build_test_app_with(store.clone(), Duration::from_secs(10));
    (app, store)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

/// POST a URL-encoded form body.
pub async fn post_form(app: Router, uri: &str, form: &str) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(form.to_string())).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract the rendered `value` attribute of the input named `name`.
pub fn input_value(html: &str, name: &str) -> Option<String> {
    let marker = format!("name=\"{name}\" value=\"");
    let start = html.find(&marker)? + marker.len();
    let end = html[start..].find('"')? + start;
    Some(html[start..end].to_string())
}
