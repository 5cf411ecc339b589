//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── logout.rs   - Session destruction handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`**    - POST /api/auth/login
//! - **`logout`**   - POST /api/auth/logout
//!
//! # Session State Machine
//!
//! - Anonymous --register(success)--> Authenticated (session issued)
//! - Anonymous --login(success)-->    Authenticated (session issued)
//! - Authenticated --logout-->        Destroyed (row deleted, cookie cleared)
//! - Authenticated --expiry-->        Destroyed (time-driven)
//! - Anonymous --logout-->            401, explicit precondition failure

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

pub use login::login;
pub use logout::logout;
pub use register::register;
pub use types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse};
