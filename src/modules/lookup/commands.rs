use axum::{
    extract::{Query, Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use futures::FutureExt;
use serde::Serialize;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use super::application::{
    dto::{LookupRequest, LookupResponse},
    service::LookupService,
};
use crate::shared::errors::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// HTTP surface of the lookup module
pub fn router(service: Arc<LookupService>) -> Router {
    Router::new()
        .route("/api/lookup", get(lookup_product))
        .route("/health", get(health))
        .with_state(service)
        .layer(middleware::from_fn(catch_panic))
}

pub async fn lookup_product(
    State(service): State<Arc<LookupService>>,
    Query(request): Query<LookupRequest>,
) -> Result<Json<LookupResponse>, AppError> {
    service.lookup(&request).await.map(Json)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Turns a panicking handler into a 500 `InternalError` response
pub async fn catch_panic(request: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => AppError::InternalError(panic_message(panic.as_ref())).into_response(),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}
