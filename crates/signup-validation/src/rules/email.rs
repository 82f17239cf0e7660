use super::INVALID_EMAIL;
use crate::result::FieldValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;

/// Longest accepted address, in bytes
pub const MAX_EMAIL_LEN: usize = 254;

// local part: letters, digits, '.', '-', '_'
// domain: one or more non-empty labels, then an alphabetic TLD of 2+ letters
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Whether `raw` is an acceptable email address
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    raw.len() <= MAX_EMAIL_LEN && raw.matches('@').count() == 1 && EMAIL_PATTERN.is_match(raw)
}

/// Validate the email field
#[must_use]
pub fn validate_email(raw: &str) -> FieldValidationResult {
    FieldValidationResult::check(is_valid_email(raw), INVALID_EMAIL)
}
