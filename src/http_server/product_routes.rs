//! Product HTTP Routes
//!
//! Bulk upsert, bulk fetch, paginated fetch, bulk delete and clear.
//! Successful calls answer `202 Accepted`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    routing::{delete, get},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use crate::observability::{Event, Logger};
use crate::product::{Product, ValidationError};
use crate::store::{FileStore, Paginator, DEFAULT_PAGE_LIMIT};

/// Response header carrying the cursor for the next page
pub const NEXT_CURSOR_HEADER: &str = "x-next-cursor";

// ==================
// Shared State
// ==================

/// Product state shared across handlers
pub struct ProductState {
    pub store: FileStore,
}

impl ProductState {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Cursor: id of the last product of the previous page
    #[serde(default, alias = "cursor")]
    pub channel_product_code: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl PageQuery {
    /// Parsed limit; absent or empty means the default
    pub fn limit(&self) -> Result<usize, ValidationError> {
        match self.limit.as_deref() {
            None | Some("") => Ok(DEFAULT_PAGE_LIMIT),
            Some(raw) => raw.parse().map_err(|_| ValidationError::InvalidLimit),
        }
    }
}

type Accepted<T> = (StatusCode, Json<T>);

fn accepted<T>(payload: T) -> Accepted<T> {
    (StatusCode::ACCEPTED, Json(payload))
}

/// Decode a JSON request body regardless of its content type
fn decode_body<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::from(ValidationError::MalformedBody(e.to_string())))
}

// ==================
// Product Routes
// ==================

/// Create product routes
pub fn product_routes(state: Arc<ProductState>) -> Router {
    Router::new()
        .route(
            "/products",
            get(get_products_handler)
                .post(put_products_handler)
                .delete(delete_products_handler),
        )
        .route("/products/page", get(page_products_handler))
        .route("/clean", delete(clean_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn put_products_handler(
    State(state): State<Arc<ProductState>>,
    body: Bytes,
) -> ApiResult<Accepted<Vec<Product>>> {
    let products: Vec<Product> = decode_body(&body)?;
    let written = state.store.put(products)?;

    let count = written.len().to_string();
    Logger::event(Event::ProductsPut, &[("count", count.as_str())]);
    Ok(accepted(written))
}

async fn get_products_handler(
    State(state): State<Arc<ProductState>>,
    body: Bytes,
) -> ApiResult<Accepted<Vec<Product>>> {
    let ids: Vec<String> = decode_body(&body)?;
    let products = state.store.get(&ids)?;

    let count = products.len().to_string();
    Logger::event(Event::ProductsGet, &[("count", count.as_str())]);
    Ok(accepted(products))
}

async fn page_products_handler(
    State(state): State<Arc<ProductState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<(StatusCode, HeaderMap, Json<Vec<Product>>)> {
    let Query(query) =
        query.map_err(|e| ApiError::from(ValidationError::MalformedBody(e.body_text())))?;
    let limit = query.limit()?;
    let cursor = query.channel_product_code.as_deref();
    let page = Paginator::new(&state.store).page(cursor, limit)?;

    let mut headers = HeaderMap::new();
    if let Some(next) = page
        .next_cursor
        .as_deref()
        .and_then(|c| HeaderValue::from_str(c).ok())
    {
        headers.insert(NEXT_CURSOR_HEADER, next);
    }

    let count = page.len().to_string();
    let limit = limit.to_string();
    Logger::event(
        Event::ProductsPage,
        &[
            ("count", count.as_str()),
            ("cursor", cursor.unwrap_or("")),
            ("limit", limit.as_str()),
        ],
    );
    Ok((StatusCode::ACCEPTED, headers, Json(page.products)))
}

async fn delete_products_handler(
    State(state): State<Arc<ProductState>>,
    body: Bytes,
) -> ApiResult<Accepted<Value>> {
    let ids: Vec<String> = decode_body(&body)?;
    let removed = state.store.delete(&ids)?;

    let removed = removed.to_string();
    Logger::event(Event::ProductsDelete, &[("removed", removed.as_str())]);
    Ok(accepted(Value::Null))
}

async fn clean_handler(State(state): State<Arc<ProductState>>) -> ApiResult<Accepted<Value>> {
    let removed = state.store.clear()?;

    let removed = removed.to_string();
    Logger::event(Event::StoreCleared, &[("removed", removed.as_str())]);
    Ok(accepted(Value::Null))
}
