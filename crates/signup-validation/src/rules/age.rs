use super::INVALID_AGE;
use crate::result::FieldValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;

/// Ages must be strictly above this value
pub const MIN_AGE_EXCLUSIVE: f64 = 0.0;
/// Ages must be strictly below this value
pub const MAX_AGE_EXCLUSIVE: f64 = 200.0;

// Optional sign, ASCII digits, at most one period. No whitespace, no exponent.
static AGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("age pattern is a valid regex")
});

/// Parse a well-formed decimal numeral, without range checking
///
/// Returns `None` for anything `f64::from_str` would accept but the form
/// does not, such as `"1e2"`, `"inf"` or `" 30"`.
#[must_use]
pub fn parse_age(raw: &str) -> Option<f64> {
    if !AGE_PATTERN.is_match(raw) {
        return None;
    }
    raw.parse::<f64>().ok()
}

/// Validate the age field: a decimal numeral in the open interval (0, 200)
#[must_use]
pub fn validate_age(raw: &str) -> FieldValidationResult {
    let in_range = parse_age(raw)
        .is_some_and(|age| age > MIN_AGE_EXCLUSIVE && age < MAX_AGE_EXCLUSIVE);
    FieldValidationResult::check(in_range, INVALID_AGE)
}
