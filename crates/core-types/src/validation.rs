//! Pure validation rules for user-supplied customer fields.
//!
//! Every function here trims its input first and returns the cleaned value on
//! success. None of them touch the console; the retry loops that drive them
//! live in the `console` crate.

use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("static regex must compile"));

/// Accepts any value that is not blank after trimming.
pub fn validate_non_empty(raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(value.to_string())
}

/// Accepts `local@domain.tld` where local and domain are made of word
/// characters, dots and hyphens, and the final label is word characters only.
///
/// Length is not checked here; the column width is the only upper bound.
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(value.to_string())
}

/// Accepts exactly ten ASCII digits.
pub fn validate_phone(raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.len() != PHONE_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(value.to_string())
}

/// Parses a customer id. Only plain ASCII digits are accepted, so signs,
/// whitespace inside the value and non-ASCII numerals are all rejected.
pub fn validate_numeric_id(raw: &str) -> Result<u64, ValidationError> {
    let value = raw.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidId);
    }
    // All digits, so the only possible failure is overflow.
    value.parse::<u64>().map_err(|_| ValidationError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_trims_and_rejects_blank() {
        assert_eq!(validate_non_empty("  Ada Lovelace \n").unwrap(), "Ada Lovelace");
        assert_eq!(validate_non_empty(""), Err(ValidationError::Empty));
        assert_eq!(validate_non_empty(" \t "), Err(ValidationError::Empty));
    }

    #[test]
    fn email_accepts_well_formed_addresses() {
        for ok in ["a.b@c-d.com", "john_smith@mail.example.org", "x@y.z", "A-1@b.c.io"] {
            assert_eq!(validate_email(ok).unwrap(), ok, "{ok} should be accepted");
        }
        assert_eq!(validate_email("  a@b.com  ").unwrap(), "a@b.com");
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in ["a@b", "@b.com", "a@.", "a b@c.com", "a@b.c om", "a@@b.com", "plain", "a@b.", ""] {
            assert_eq!(
                validate_email(bad),
                Err(ValidationError::InvalidEmail),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn email_is_case_sensitive_but_accepts_either_case() {
        assert!(validate_email("John.Smith@Example.COM").is_ok());
    }

    #[test]
    fn phone_requires_exactly_ten_ascii_digits() {
        assert_eq!(validate_phone("1234567890").unwrap(), "1234567890");
        assert_eq!(validate_phone(" 0987654321 ").unwrap(), "0987654321");
        for bad in ["12345", "12345abcde", "12345678901", "123-456-78", "+123456789", ""] {
            assert_eq!(validate_phone(bad), Err(ValidationError::InvalidPhone), "{bad:?}");
        }
        // Full-width digits are numeric but not ASCII.
        assert!(validate_phone("１２３４５６７８９０").is_err());
    }

    #[test]
    fn numeric_id_is_one_shot_digits_only() {
        assert_eq!(validate_numeric_id("42"), Ok(42));
        assert_eq!(validate_numeric_id(" 7 "), Ok(7));
        assert_eq!(validate_numeric_id("0"), Ok(0));
        for bad in ["", "-1", "+1", "4 2", "abc", "1.5", "99999999999999999999999"] {
            assert_eq!(validate_numeric_id(bad), Err(ValidationError::InvalidId), "{bad:?}");
        }
    }
}
