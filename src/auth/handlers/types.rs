/**
 * Authentication Handler Types
 *
 * Request and response types shared across the register, login, and
 * logout handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name (validated before use)
    pub name: String,
    /// Email address (validated before use)
    pub email: String,
    /// Plaintext password (hashed before storage, never persisted)
    pub password: String,
}

/// Login request.
///
/// Both fields are optional so a missing credential is reported with the
/// explicit "Email or Password not present" error rather than a generic
/// deserialization failure.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Simple message response, used by register and logout.
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response: message plus the authenticated user.
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
}

/// User information safe to return to clients.
///
/// Never includes the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_user_response_drops_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "jane@doe.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            role: "user".to_string(),
            created_at: Utc::now(),
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["name"], "Jane Doe");
    }

    #[test]
    fn test_login_request_tolerates_missing_fields() {
        let request: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(request.email.is_none());
        assert!(request.password.is_none());
    }
}
