//! authd - Main Library
//!
//! authd is a minimal user-authentication backend built with Rust. It exposes
//! register, login, and logout endpoints over HTTP, backed by PostgreSQL and
//! cookie-based server-side sessions.
//!
//! # Overview
//!
//! This library provides the core functionality for authd, including:
//! - Input validation for names, emails, and passwords
//! - Credential storage with atomic email uniqueness
//! - bcrypt password hashing with per-call salts
//! - Server-side session issuance, lookup, and destruction
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`validation`** - Pure validators for name, email, and password
//! - **`auth`** - Credential store, password hasher, session manager,
//!   and the HTTP handlers for the authentication endpoints
//! - **`middleware`** - Session-cookie extraction for protected routes
//! - **`error`** - The `AuthError` taxonomy and its HTTP conversion
//! - **`routes`** - Router assembly and the `/api/auth` route group
//! - **`server`** - Configuration, application state, and initialization
//!
//! # Request Flow
//!
//! A registration or login request is validated, then the credential store
//! and password hasher are consulted, and on success the session manager
//! binds the authenticated user id to a new session carried in a cookie.

/// Pure input validators
pub mod validation;

/// Credential store, password hashing, sessions, and HTTP handlers
pub mod auth;

/// Session-cookie extraction middleware
pub mod middleware;

/// Error types and HTTP response conversion
pub mod error;

/// HTTP route configuration
pub mod routes;

/// Server configuration, state, and initialization
pub mod server;
