/**
 * Email Address Validation
 *
 * An address must contain exactly one `@`. The local part must be an
 * alphanumeric token sequence allowing single interior `-`, `_`, or `.`
 * separators, and must not be purely numeric with separators. The domain
 * must be dotted labels ending in a top-level label of at least two
 * letters.
 *
 * The patterns are deliberately exact: `a@b.co` is valid, `123@domain.com`
 * and `a..b@domain.com` are not.
 */

use regex::Regex;
use std::sync::LazyLock;

use crate::validation::types::ValidationResult;

static SINGLE_AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]*@[^@]*$").unwrap());

static NUMERIC_LOCAL_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+([-_.][0-9]+)*$").unwrap());

static LOCAL_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+([-_.]?[a-zA-Z0-9]+)*$").unwrap());

static DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+([._-][a-zA-Z0-9]+)*(\.[a-zA-Z]{2,})+$").unwrap());

/// Validate an email address.
///
/// Reports a single `format` rule; the address either matches the
/// documented patterns or it does not.
pub fn validate_email(email: &str) -> ValidationResult {
    if is_valid_email(email) {
        ValidationResult::ok()
    } else {
        ValidationResult::fail("format", "Invalid email address")
    }
}

fn is_valid_email(email: &str) -> bool {
    if !SINGLE_AT.is_match(email) {
        return false;
    }

    // SINGLE_AT guarantees exactly one '@'.
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    if NUMERIC_LOCAL_PART.is_match(local) {
        return false;
    }
    if !LOCAL_PART.is_match(local) {
        return false;
    }
    DOMAIN.is_match(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        for email in [
            "a@b.co",
            "jane@doe.com",
            "jane.doe@example.org",
            "user_name@sub.example.co",
            "abc123@domain.com",
        ] {
            assert!(validate_email(email).valid, "expected {email:?} valid");
        }
    }

    #[test]
    fn test_at_sign_count() {
        for email in ["plainaddress", "a@@b.co", "a@b@c.co", "@b.co@"] {
            assert!(!validate_email(email).valid, "expected {email:?} invalid");
        }
    }

    #[test]
    fn test_purely_numeric_local_part_is_invalid() {
        assert!(!validate_email("123@domain.com").valid);
        assert!(!validate_email("12.34@domain.com").valid);
        // Mixed alphanumeric local parts are fine.
        assert!(validate_email("1a2b@domain.com").valid);
    }

    #[test]
    fn test_local_part_separators() {
        assert!(validate_email("a.b@domain.com").valid);
        assert!(validate_email("a-b_c@domain.com").valid);
        // Doubled or dangling separators do not match the pattern.
        assert!(!validate_email("a..b@domain.com").valid);
        assert!(!validate_email(".a@domain.com").valid);
        assert!(!validate_email("a.@domain.com").valid);
    }

    #[test]
    fn test_domain_shape() {
        assert!(!validate_email("a@domain").valid); // no dot
        assert!(!validate_email("a@domain.c").valid); // one-letter TLD
        assert!(!validate_email("a@.com").valid);
        assert!(validate_email("a@my-domain.com").valid);
        assert!(validate_email("a@a.b.co").valid);
    }

    #[test]
    fn test_empty_sides() {
        assert!(!validate_email("@domain.com").valid);
        assert!(!validate_email("a@").valid);
        assert!(!validate_email("@").valid);
    }
}
