/**
 * Password Strength Validation
 *
 * Six independent predicates, each reported as its own rule so callers
 * can render per-rule feedback:
 *
 * - `length`         - at least 6 characters
 * - `capital_letter` - contains an ASCII uppercase letter
 * - `lowercase`      - contains an ASCII lowercase letter
 * - `digit`          - contains an ASCII digit
 * - `underscore`     - contains an underscore
 * - `whitespace`     - contains no whitespace
 *
 * The special-character rule is literally the underscore: other
 * punctuation does not satisfy it.
 */

use crate::validation::types::ValidationResult;

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Validate a password against all six rules.
///
/// The result is valid only if every rule passes; each failing rule is
/// reported independently in `messages`.
pub fn validate_password(password: &str) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if password.chars().count() < PASSWORD_MIN_LEN {
        result.push("length", "Password must be at least 6 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        result.push("capital_letter", "Password must contain a capital letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        result.push("lowercase", "Password must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        result.push("digit", "Password must contain a number");
    }
    if !password.contains('_') {
        result.push("underscore", "Password must contain an underscore");
    }
    if password.chars().any(char::is_whitespace) {
        result.push("whitespace", "Password must not contain spaces");
    }

    result
}
