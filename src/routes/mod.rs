//! Route Configuration Module
//!
//! HTTP route configuration for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports
//! ├── router.rs      - Router assembly, tracing layer, 404 fallback
//! └── auth_routes.rs - /api/auth route group
//! ```

/// Main router creation
pub mod router;

/// Authentication route group
pub mod auth_routes;

pub use router::create_router;
