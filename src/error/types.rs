/**
 * Authentication Error Types
 *
 * This enum represents every failure the authentication endpoints can
 * produce. Each variant maps to an HTTP status code and a public message;
 * variants wrapping store or hash errors keep the underlying error for
 * server-side logging only.
 *
 * # Error Categories
 *
 * - Recoverable client errors: validation failures, missing credentials,
 *   duplicate email, bad login, logout without a session
 * - Server errors: store failures, hash failures, timeouts, an
 *   unconfirmed session deletion
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::validation::ValidationReport;

/// Authentication backend errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more registration fields failed validation.
    ///
    /// Carries the per-field report so the response can tell the caller
    /// exactly which rules failed.
    #[error("validation failed")]
    Validation(ValidationReport),

    /// Request body that is not JSON or has fields of the wrong type.
    ///
    /// Raised by the JSON extractor so malformed input is a 400 like
    /// every other client error, not axum's stock 422.
    #[error("{0}")]
    MalformedBody(String),

    /// Login request without an email or password.
    #[error("Email or Password not present")]
    MissingCredentials,

    /// Registration with an email that already has an account.
    #[error("Email already registered")]
    DuplicateEmail,

    /// Unknown email or wrong password.
    ///
    /// The two cases are deliberately indistinguishable to the client to
    /// avoid account enumeration.
    #[error("Login not successful")]
    InvalidCredentials,

    /// Logout without an authenticated session.
    #[error("Not logged in, unable to log out")]
    NotAuthenticated,

    /// A session deletion could not be confirmed.
    ///
    /// The client must not be told it is logged out while a valid
    /// session may persist.
    #[error("Logout failed")]
    SessionNotCleared,

    /// Unexpected store failure.
    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// A store operation exceeded its deadline.
    #[error("Store operation timed out")]
    PersistenceTimeout,

    /// Unexpected bcrypt failure.
    #[error("Hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// A hash computation exceeded its deadline.
    #[error("Hashing timed out")]
    HashTimeout,

    /// Internal failure with no better classification.
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message (server-side only)
        message: String,
    },
}

impl AuthError {
    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotAuthenticated => StatusCode::UNAUTHORIZED,
            Self::SessionNotCleared => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PersistenceTimeout => StatusCode::SERVICE_UNAVAILABLE,
            Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::HashTimeout => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message exposed to clients.
    ///
    /// Store and hash variants collapse to a generic message; their
    /// details are logged server-side only.
    pub fn public_message(&self) -> String {
        match self {
            Self::Persistence(_) | Self::Hash(_) | Self::Internal { .. } => {
                "An error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}
