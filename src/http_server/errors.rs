//! # API Errors
//!
//! The wire contract only distinguishes "accepted" from "bad request":
//! every failure is answered with 400 and the error message as a JSON
//! string body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::observability::{Event, Logger};
use crate::product::ValidationError;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the product API
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request could not be decoded or is structurally invalid
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Store operation failed
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Store(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Short category name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::Store(e) => e.kind(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        Logger::event(
            Event::RequestFailed,
            &[("error", message.as_str()), ("kind", self.kind())],
        );
        (self.status_code(), Json(message)).into_response()
    }
}
