/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * - Validation-style errors (400): `{"errors": [{"msg": ..., "param": ..., "location": ...}]}`
 * - Auth and not-found errors (401/404): `{"msg": ...}`
 * - Unexpected errors (500): plain-text `Server Error`
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
            return (status, "Server Error").into_response();
        }

        if let Some(errors) = self.field_errors() {
            tracing::debug!("Request rejected with {} field error(s)", errors.len());
            return (status, Json(serde_json::json!({ "errors": errors }))).into_response();
        }

        if let BackendError::UpstreamError { message } = &self {
            tracing::warn!("Upstream lookup failed: {}", message);
        }

        (status, Json(serde_json::json!({ "msg": self.public_message() }))).into_response()
    }
}
