//! Health HTTP Route
//!
//! Reports whether the store root can be listed, plus the record count.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use super::product_routes::ProductState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" when the store root can be listed, "degraded" otherwise
    pub status: &'static str,
    pub version: &'static str,
    /// Number of stored records, absent when the listing failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
}

impl HealthResponse {
    fn from_listing(records: Option<usize>) -> Self {
        Self {
            status: if records.is_some() { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            records,
        }
    }
}

/// Create the health route
pub fn health_routes(state: Arc<ProductState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<ProductState>>) -> (StatusCode, Json<HealthResponse>) {
    let records = state.store.list_all_paths().ok().map(|paths| paths.len());
    let response = HealthResponse::from_listing(records);

    let status = if response.records.is_some() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}
