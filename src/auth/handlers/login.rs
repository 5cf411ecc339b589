/**
 * Login Handler
 *
 * Implements POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Require both email and password to be present
 * 2. Look up the user by email
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a session bound to the user id
 *
 * # Security
 *
 * Unknown email and wrong password both produce the same generic
 * "Login not successful" response, so the endpoint cannot be used to
 * enumerate accounts.
 */

use axum::extract::State;
use axum_extra::extract::CookieJar;

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::middleware::Json;
use crate::auth::sessions::{create_session, session_cookie};
use crate::auth::users::find_user_by_email;
use crate::error::AuthError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, or email or password missing
/// * `401 Unauthorized` - unknown email or wrong password (generic)
/// * `500 / 503` - store or hash failure
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AuthError> {
    let (email, password) = match (request.email, request.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(AuthError::MissingCredentials),
    };

    tracing::info!("Login request for: {}", email);

    let user = state
        .store(find_user_by_email(&state.db, &email))
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", email);
            AuthError::InvalidCredentials
        })?;

    let valid = state.hasher.verify(&password, &user.password_hash).await?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(AuthError::InvalidCredentials);
    }

    let session = state
        .store(create_session(&state.db, user.id, state.config.session.ttl))
        .await?;

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    let jar = jar.add(session_cookie(&state.config.session, session.id));
    Ok((
        jar,
        Json(LoginResponse {
            message: "Login successful".to_string(),
            user: user.into(),
        }),
    ))
}
