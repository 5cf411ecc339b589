/**
 * Validation Result Types
 *
 * This module defines the shared return shape of all validators and the
 * per-field report produced when a registration request is validated.
 */

use serde::Serialize;
use std::collections::BTreeMap;

use crate::validation::{validate_email, validate_name, validate_password};

/// Outcome of a single validation call.
///
/// `messages` maps each failed rule to a human-readable detail. A valid
/// result carries an empty map. The map is ordered so serialized output
/// is stable across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// True only if every rule passed
    pub valid: bool,
    /// Failed rule name -> human-readable detail
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub messages: BTreeMap<&'static str, &'static str>,
}

impl ValidationResult {
    /// A result with every rule passing.
    pub fn ok() -> Self {
        Self {
            valid: true,
            messages: BTreeMap::new(),
        }
    }

    /// A result with a single failed rule.
    pub fn fail(rule: &'static str, detail: &'static str) -> Self {
        let mut result = Self::ok();
        result.push(rule, detail);
        result
    }

    /// Record a failed rule, marking the result invalid.
    pub fn push(&mut self, rule: &'static str, detail: &'static str) {
        self.valid = false;
        self.messages.insert(rule, detail);
    }

    /// Whether a specific rule failed.
    pub fn failed(&self, rule: &str) -> bool {
        self.messages.contains_key(rule)
    }
}

/// Per-field validation report for a registration request.
///
/// Serialized as the `message` body of a 400 response so clients can
/// render feedback for each field independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub name: ValidationResult,
    pub email: ValidationResult,
    pub password: ValidationResult,
}

impl ValidationReport {
    /// Validate all three registration fields.
    pub fn check(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: validate_name(name),
            email: validate_email(email),
            password: validate_password(password),
        }
    }

    /// True only if every field is valid.
    pub fn is_valid(&self) -> bool {
        self.name.valid && self.email.valid && self.password.valid
    }
}
