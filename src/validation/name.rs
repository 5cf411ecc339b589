/**
 * Display Name Validation
 *
 * A display name is one or more runs of ASCII letters separated by single
 * spaces: no digits, no punctuation, no leading, trailing, or doubled
 * spaces. Length is checked first so the two rules report independently.
 */

use crate::validation::types::ValidationResult;

/// Maximum raw length of a display name, in characters.
pub const NAME_MAX_LEN: usize = 50;

/// Validate a display name.
///
/// # Rules
///
/// - `length` - trimmed length must be at least 1 and raw length at most 50
/// - `format` - letter runs separated by single spaces only
///
/// # Examples
///
/// ```
/// use authd::validation::validate_name;
///
/// assert!(validate_name("Jane Doe").valid);
/// assert!(!validate_name("Jane  Doe").valid);
/// assert!(!validate_name("Jane D0e").valid);
/// ```
pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() || name.chars().count() > NAME_MAX_LEN {
        return ValidationResult::fail(
            "length",
            "Name length should be between 1 and 50 characters",
        );
    }

    if !matches_name_pattern(name) {
        return ValidationResult::fail(
            "format",
            "Name should contain only letters and spaces between words",
        );
    }

    ValidationResult::ok()
}

/// Equivalent to `^[a-zA-Z]+( [a-zA-Z]+)*$`.
fn matches_name_pattern(name: &str) -> bool {
    // Tracks whether the previous character was a separator; starting at
    // true rejects a leading space, and the final check rejects a
    // trailing one.
    let mut after_separator = true;
    for c in name.chars() {
        if c == ' ' {
            if after_separator {
                return false;
            }
            after_separator = true;
        } else if c.is_ascii_alphabetic() {
            after_separator = false;
        } else {
            return false;
        }
    }
    !after_separator
}
