/**
 * Session Extraction
 *
 * Extracts the live session for a request from its session cookie. The
 * cookie value is only a lookup key; the store is the sole authority for
 * whether the session exists and has not expired.
 */

use axum::extract::FromRequestParts;
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::sessions::find_session;
use crate::auth::Session;
use crate::error::AuthError;
use crate::server::state::AppState;

/// Axum extractor for the request's live session.
///
/// Rejects with [`AuthError::NotAuthenticated`] (401) when the cookie is
/// absent, malformed, or names a session the store no longer holds.
#[derive(Clone, Debug)]
pub struct CurrentSession(pub Session);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let cookie = jar
            .get(&state.config.session.cookie_name)
            .ok_or(AuthError::NotAuthenticated)?;

        let session_id = Uuid::parse_str(cookie.value()).map_err(|_| {
            tracing::warn!("Malformed session cookie");
            AuthError::NotAuthenticated
        })?;

        let session = state
            .store(find_session(&state.db, session_id))
            .await?
            .ok_or(AuthError::NotAuthenticated)?;

        Ok(CurrentSession(session))
    }
}
