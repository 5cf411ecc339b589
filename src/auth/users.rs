/**
 * User Model and Credential Store
 *
 * This module defines the persisted user record and the two credential
 * store operations: create and find-by-email.
 *
 * # Uniqueness
 *
 * Email uniqueness is enforced by a UNIQUE constraint, so the check and
 * the insert are one atomic statement. Two concurrent registrations with
 * the same email produce exactly one row and one `DuplicateEmail` error;
 * there is no separate existence check to race against.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AuthError;

/// A persisted user record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name (1-50 chars, letter runs separated by single spaces)
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// bcrypt hash of the password; the plaintext is never stored
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role, defaults to "user"
    pub role: String,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
}

/// Create a new user.
///
/// The row is inserted in a single statement; a duplicate email surfaces
/// as [`AuthError::DuplicateEmail`] via the unique constraint.
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `name` - Validated display name
/// * `email` - Validated email address
/// * `password_hash` - bcrypt hash of the password
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, AuthError> {
    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, email, password_hash, role, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            Err(AuthError::DuplicateEmail)
        }
        Err(e) => Err(AuthError::Persistence(e)),
    }
}

/// Look up a user by email. Pure read, no side effects.
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, AuthError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
