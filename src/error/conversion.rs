/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for the API error type, so handlers
 * can return `Result<_, ApiError>` and rely on Axum for rendering.
 *
 * # Response Format
 *
 * Errors with a field-scoped message render as JSON:
 * ```json
 * {
 *   "error": {
 *     "password": "not match"
 *   }
 * }
 * ```
 *
 * `NotFound` renders as a bare 404 with an empty body.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {:?}", self);
        }

        match self.field_error() {
            Some((field, message)) => {
                let mut fields = serde_json::Map::new();
                fields.insert(field.to_string(), serde_json::Value::String(message));
                let body = serde_json::json!({ "error": fields });
                (status, Json(body)).into_response()
            }
            None => status.into_response(),
        }
    }
}
