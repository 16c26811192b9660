//! Error responses for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::orders::OrderError;

/// An error that ends a request. Rendered as `{ "error": "<message>" }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed path parameter or body, or a rejected write.
    #[error("{0}")]
    BadRequest(String),
    /// The addressed record does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The path exists but does not accept the request's method.
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// A body that failed to decode into the expected payload.
    pub fn invalid_body(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("invalid request body: {err}"))
    }

    /// A path id of the given record kind that is not a usable id.
    pub fn invalid_id(kind: &str) -> Self {
        ApiError::BadRequest(format!("invalid {kind} id"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(_) => ApiError::NotFound(err.to_string()),
            OrderError::UserUnverified(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}

/// Parse a path segment as a record id.
pub(crate) fn parse_id(raw: &str, kind: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_id(kind))
}
