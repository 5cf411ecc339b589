//! Error Module
//!
//! This module defines the error taxonomy for the authentication backend
//! and its conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - AuthError definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Propagation Policy
//!
//! Every failure is caught at the request boundary and converted to a
//! structured JSON response. Store and hash internals are logged
//! server-side but never exposed to clients beyond a generic message.
//! Nothing here crashes the process; only startup failures abort.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::AuthError;
