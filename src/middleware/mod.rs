//! Middleware Module
//!
//! Request-processing helpers applied before handlers run: resolving the
//! session cookie to a live session, and extracting JSON bodies with the
//! crate's own rejection.

pub mod json;
pub mod session;

pub use json::Json;
pub use session::CurrentSession;
