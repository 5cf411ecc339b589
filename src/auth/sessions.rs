/**
 * Session Management
 *
 * Server-side sessions keyed by an opaque UUID carried in a cookie. The
 * store is the sole authority for session state: handlers never trust
 * the cookie beyond using it as a lookup key.
 *
 * # Lifecycle
 *
 * - Issued on successful register or login, bound to the user id
 * - Read on demand; an elapsed expiry is treated as absent
 * - Destroyed on logout; a delete that removes no row is surfaced as
 *   `SessionNotCleared`, never reported as success
 * - Expired rows are swept periodically by a background task
 */

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

use crate::error::AuthError;
use crate::server::config::SessionConfig;

/// A persisted session record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    /// Opaque session identifier, carried by the client cookie
    pub id: Uuid,
    /// The authenticated user this session is bound to
    pub user_id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Expiry; the session is invalid from this instant on
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session's time-to-live has elapsed.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Issue a new session for a user.
pub async fn create_session(
    pool: &PgPool,
    user_id: Uuid,
    ttl: Duration,
) -> Result<Session, AuthError> {
    let now = Utc::now();
    let expires_at = now
        + chrono::Duration::from_std(ttl)
            .map_err(|e| AuthError::internal(format!("session ttl out of range: {e}")))?;

    let session = sqlx::query_as::<_, Session>(
        r#"
        INSERT INTO sessions (id, user_id, created_at, expires_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, created_at, expires_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(now)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(session)
}

/// Look up a live session by id.
///
/// Expired sessions are filtered at the query so callers never see them;
/// the sweeper removes the rows later.
pub async fn find_session(pool: &PgPool, id: Uuid) -> Result<Option<Session>, AuthError> {
    let session = sqlx::query_as::<_, Session>(
        r#"
        SELECT id, user_id, created_at, expires_at
        FROM sessions
        WHERE id = $1 AND expires_at > $2
        "#,
    )
    .bind(id)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

/// Destroy a session.
///
/// Fails with [`AuthError::SessionNotCleared`] when the delete removes no
/// row: the caller must not report a logout it cannot confirm.
pub async fn destroy_session(pool: &PgPool, id: Uuid) -> Result<(), AuthError> {
    let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AuthError::SessionNotCleared);
    }

    Ok(())
}

/// Delete all expired session rows, returning how many were removed.
pub async fn purge_expired_sessions(pool: &PgPool) -> Result<u64, AuthError> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
        .bind(Utc::now())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Build the session cookie for a freshly issued session.
///
/// HttpOnly and SameSite=Lax, with Max-Age set to the session TTL so
/// well-behaved clients drop the cookie when the session dies. The store
/// remains authoritative either way: a cookie outliving its row is just
/// a key to nothing.
pub fn session_cookie(config: &SessionConfig, session_id: Uuid) -> Cookie<'static> {
    let max_age = time::Duration::try_from(config.ttl).unwrap_or(time::Duration::MAX);
    Cookie::build((config.cookie_name.clone(), session_id.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .build()
}

/// Build the removal cookie that clears the session cookie on logout.
pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), ""))
        .path("/")
        .build()
}
