//! Authentication Module
//!
//! This module handles user registration, login, and logout. It owns the
//! credential store, the password hasher, and the session lifecycle, and
//! provides the HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - Credential store (create, find-by-email)
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - Session issue, lookup, destroy, expiry
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── logout.rs   - Session destruction handler
//! ```
//!
//! # Session Lifecycle
//!
//! A session is created on successful register or login, holding the
//! authenticated user id and an expiry. It is destroyed explicitly on
//! logout (the row is deleted and the cookie cleared) or implicitly when
//! its time-to-live elapses. Logout without a live session is an error,
//! not a no-op.
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt and a fresh salt per call
//! - Verification delegates to bcrypt's constant-time comparison
//! - Unknown email and wrong password are indistinguishable to clients

/// Credential store
pub mod users;

/// Password hashing
pub mod password;

/// Session lifecycle
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse};
pub use handlers::{login, logout, register};
pub use password::PasswordHasher;
pub use sessions::Session;
pub use users::User;
