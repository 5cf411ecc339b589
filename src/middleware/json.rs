/**
 * JSON Body Extraction
 *
 * Wraps axum's `Json` extractor so a body that fails to deserialize is
 * reported through the crate's error taxonomy as a 400, with the same
 * structured `{message}` body every other client error uses, instead of
 * axum's stock 422 rejection.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AuthError;

/// JSON extractor and responder for the authentication endpoints.
///
/// Extraction rejects with [`AuthError::MalformedBody`] (400) when the
/// body is missing, not JSON, or has fields of the wrong type; responses
/// delegate to axum's own `Json`.
#[derive(Debug, Clone)]
pub struct Json<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => {
                tracing::warn!("Malformed request body: {}", rejection.body_text());
                Err(AuthError::MalformedBody(rejection.body_text()))
            }
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
