//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`folio_core::Error`] so that route handlers
//! can return `Result<T, AppError>` and use `?` on storage calls directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::middleware::request_id::current_request_id;

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: folio_core::Error,
    request_id: Option<String>,
}

impl AppError {
    pub fn new(inner: folio_core::Error) -> Self {
        Self {
            inner,
            request_id: current_request_id(),
        }
    }
}

impl From<folio_core::Error> for AppError {
    fn from(e: folio_core::Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in handler"
            );
        } else if let folio_core::Error::NotFound { entity, id } = &self.inner {
            tracing::debug!(entity = %entity, id = %id, "Lookup missed");
        }

        let body = json!({
            "detail": self.inner.to_string(),
            "code": self.inner.code(),
            "request_id": self.request_id,
        });

        (status, axum::Json(body)).into_response()
    }
}
