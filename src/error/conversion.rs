/**
 * Error Conversion
 *
 * Implements `IntoResponse` for `AuthError`, allowing handlers to return
 * the error directly. The error is converted to a JSON body with the
 * appropriate status code.
 *
 * # Response Format
 *
 * Most errors produce:
 * ```json
 * { "message": "Login not successful", "status": 401 }
 * ```
 *
 * Validation failures carry the per-field report instead:
 * ```json
 * { "message": { "name": {...}, "email": {...}, "password": {...} } }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::AuthError;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR || status == StatusCode::SERVICE_UNAVAILABLE
        {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let body = match &self {
            AuthError::Validation(report) => serde_json::json!({
                "message": report,
            }),
            other => serde_json::json!({
                "message": other.public_message(),
                "status": status.as_u16(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
