/**
 * Logout Handler
 *
 * Implements POST /api/auth/logout.
 *
 * Logout is an explicit, checked transition: a request without a live
 * session is rejected with 401 by the [`CurrentSession`] extractor rather
 * than treated as a no-op. A deletion the store cannot confirm returns
 * 500 - the client must never be told it is logged out while a valid
 * session persists.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;

use crate::auth::handlers::types::MessageResponse;
use crate::auth::sessions::{destroy_session, removal_cookie};
use crate::error::AuthError;
use crate::middleware::CurrentSession;
use crate::server::state::AppState;

/// Logout handler
///
/// # Errors
///
/// * `401 Unauthorized` - no live session (anonymous logout)
/// * `500 Internal Server Error` - session deletion unconfirmed
pub async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), AuthError> {
    tracing::info!("Logout request for session: {}", session.id);

    state.store(destroy_session(&state.db, session.id)).await?;

    let jar = jar.remove(removal_cookie(&state.config.session));
    Ok((jar, Json(MessageResponse::new("Logged out successfully"))))
}
