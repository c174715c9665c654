//! Lexical RFC validation.
//!
//! An RFC is three or four characters from `A-Z`, `Ñ` or `&`, then six
//! digits, then an optional three character homoclave from `A-Z0-9`.
//! Only the shape is checked: the six digits are not parsed as a date and
//! the homoclave check digit is not verified.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::rfc::types::{timestamp, ValidationResult};

/// Source of the compiled `RFC_PATTERN`.
///
/// `[0-9]` rather than `\d`: the regex crate's `\d` is Unicode-aware and
/// would accept e.g. Arabic-Indic digits.
pub const RFC_PATTERN_SOURCE: &str = r"^[A-ZÑ&]{3,4}[0-9]{6}(?:[A-Z0-9]{3})?$";

lazy_static! {
    /// Compiled once, shared read-only by every request.
    pub static ref RFC_PATTERN: Regex = Regex::new(RFC_PATTERN_SOURCE).unwrap();
}

/// Trim surrounding whitespace, then uppercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Match an already normalized string against the full grammar.
pub fn is_valid_rfc(normalized: &str) -> bool {
    RFC_PATTERN.is_match(normalized)
}

/// Normalize and match `raw`, stamped with the current time.
pub fn validate(raw: &str) -> ValidationResult {
    validate_at(raw, Utc::now())
}

/// Like [`validate`] with a caller-supplied timestamp.
pub fn validate_at(raw: &str, at: DateTime<Utc>) -> ValidationResult {
    let rfc = normalize(raw);
    let is_valid = is_valid_rfc(&rfc);

    tracing::trace!(rfc = %rfc, is_valid, "Validated RFC");

    ValidationResult {
        rfc,
        is_valid,
        created_at: timestamp(at),
    }
}
