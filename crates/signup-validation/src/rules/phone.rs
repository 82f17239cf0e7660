use super::INVALID_PHONE_NUMBER;
use crate::result::FieldValidationResult;

/// Shortest accepted number, sign excluded
pub const MIN_PHONE_LEN: usize = 6;
/// Longest accepted number, sign excluded
pub const MAX_PHONE_LEN: usize = 12;
/// Most digits a number may carry
pub const MAX_PHONE_DIGITS: usize = 11;
/// Fewest digits in any hyphen-separated group
pub const MIN_GROUP_DIGITS: usize = 3;
/// Exact digit count of the final group of a hyphenated number
pub const LAST_GROUP_DIGITS: usize = 4;

/// Whether `raw` is an acceptable phone number
///
/// One leading `+` or `-` may precede the number. The rest is 6 to 12
/// characters of digits and hyphens holding at most 11 digits. When
/// hyphenated, every group has at least 3 digits and the last exactly 4.
#[must_use]
pub fn is_valid_phone_number(raw: &str) -> bool {
    let number = raw.strip_prefix(&['+', '-'][..]).unwrap_or(raw);

    if !number.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return false;
    }
    if !(MIN_PHONE_LEN..=MAX_PHONE_LEN).contains(&number.len()) {
        return false;
    }
    if number.bytes().filter(u8::is_ascii_digit).count() > MAX_PHONE_DIGITS {
        return false;
    }
    if !number.contains('-') {
        return true;
    }

    let groups: Vec<&str> = number.split('-').collect();
    match groups.split_last() {
        Some((last, leading)) => {
            last.len() == LAST_GROUP_DIGITS && leading.iter().all(|g| g.len() >= MIN_GROUP_DIGITS)
        }
        None => false,
    }
}

/// Validate the phone number field
#[must_use]
pub fn validate_phone_number(raw: &str) -> FieldValidationResult {
    FieldValidationResult::check(is_valid_phone_number(raw), INVALID_PHONE_NUMBER)
}
