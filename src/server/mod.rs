//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration
//! ├── state.rs  - AppState shared across handlers
//! └── init.rs   - Pool connection, migrations, app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. `Config::from_env` loads and validates configuration
//! 2. `create_app` connects the pool, runs migrations, builds state,
//!    starts the session sweeper, and assembles the router
//!
//! Every step is fatal on failure: the server either starts healthy or
//! not at all.

/// Environment configuration
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::{Config, SessionConfig};
pub use init::create_app;
pub use state::AppState;
