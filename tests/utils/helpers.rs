/// Test helper functions and service builders
use super::fake_store::InMemoryCatalogStore;
use axum::{body::Body, http::Request, Router};
use prateleira_lib::modules::lookup::{router, LookupService, LookupSettings};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Build the HTTP router over an in-memory store
pub fn build_test_router(store: Arc<InMemoryCatalogStore>) -> Router {
    build_test_router_with(store, LookupSettings::default())
}

pub fn build_test_router_with(
    store: Arc<InMemoryCatalogStore>,
    settings: LookupSettings,
) -> Router {
    let service = LookupService::with_settings(store, settings).unwrap();
    router(Arc::new(service))
}

/// Issue a GET and return the status with the decoded JSON body
pub async fn get_json(app: Router, uri: &str) -> (u16, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
