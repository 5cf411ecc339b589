//! Validation Module
//!
//! Pure validators for the three registration fields. No side effects,
//! no I/O: each function takes a string slice and returns a
//! [`ValidationResult`] describing which rules failed.
//!
//! # Module Structure
//!
//! ```text
//! validation/
//! ├── mod.rs       - Module exports
//! ├── types.rs     - ValidationResult and the register-wide report
//! ├── name.rs      - Display name validation
//! ├── email.rs     - Email address validation
//! └── password.rs  - Password strength validation
//! ```
//!
//! # Return Shape
//!
//! All three validators share a single return shape:
//! `ValidationResult { valid, messages }`, where `messages` maps each
//! failed rule to a human-readable detail. A caller can therefore render
//! field-by-field feedback, not just pass/fail.
//!
//! The "input is not a string" cases are handled at the type boundary:
//! serde rejects non-string JSON fields before these validators run.

/// ValidationResult and the per-field registration report
pub mod types;

/// Display name validation
pub mod name;

/// Email address validation
pub mod email;

/// Password strength validation
pub mod password;

pub use email::validate_email;
pub use name::validate_name;
pub use password::validate_password;
pub use types::{ValidationReport, ValidationResult};
