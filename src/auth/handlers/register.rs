/**
 * Registration Handler
 *
 * Implements POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate name, email, and password (all fields, all rules)
 * 2. Hash the password with bcrypt
 * 3. Insert the user; a duplicate email fails atomically at the store
 * 4. Issue a session bound to the new user id
 * 5. Return the success message with the session cookie set
 *
 * # Validation
 *
 * Validation failures return the full per-field report so the client can
 * render feedback rule by rule, not just pass/fail.
 */

use axum::extract::State;
use axum_extra::extract::CookieJar;

use crate::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::middleware::Json;
use crate::auth::sessions::{create_session, session_cookie};
use crate::auth::users::create_user;
use crate::error::AuthError;
use crate::server::state::AppState;
use crate::validation::ValidationReport;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, validation failure (with
///   per-field report), or duplicate email
/// * `500 / 503` - store or hash failure
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), AuthError> {
    tracing::info!("Registration request for email: {}", request.email);

    let report = ValidationReport::check(&request.name, &request.email, &request.password);
    if !report.is_valid() {
        tracing::warn!("Registration rejected by validation: {}", request.email);
        return Err(AuthError::Validation(report));
    }

    let password_hash = state.hasher.hash(&request.password).await?;

    let user = state
        .store(create_user(
            &state.db,
            &request.name,
            &request.email,
            &password_hash,
        ))
        .await?;

    let session = state
        .store(create_session(&state.db, user.id, state.config.session.ttl))
        .await?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    let jar = jar.add(session_cookie(&state.config.session, session.id));
    Ok((jar, Json(MessageResponse::new("User successfully created"))))
}
