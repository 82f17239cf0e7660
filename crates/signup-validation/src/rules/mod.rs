//! Format rules, one per field
//!
//! Every validator is a pure, deterministic function of the raw string.
//! Nothing is trimmed, coerced or completed before checking; the one
//! exception is the name rule, which is defined on the trimmed value.

mod age;
mod email;
mod homepage;
mod password;
mod phone;

pub use age::{parse_age, validate_age, MAX_AGE_EXCLUSIVE, MIN_AGE_EXCLUSIVE};
pub use email::{is_valid_email, validate_email, MAX_EMAIL_LEN};
pub use homepage::{is_valid_homepage, validate_homepage};
pub use password::{validate_password, CharacterClasses, MIN_PASSWORD_LEN};
pub use phone::{
    is_valid_phone_number, validate_phone_number, LAST_GROUP_DIGITS, MAX_PHONE_DIGITS,
    MAX_PHONE_LEN, MIN_GROUP_DIGITS, MIN_PHONE_LEN,
};

use crate::result::FieldValidationResult;

/// Error shown for an empty name
pub const NAME_REQUIRED: &str = "Name Required";
/// Error shown for a malformed email
pub const INVALID_EMAIL: &str = "Invalid Email";
/// Error shown for a malformed or out-of-range age
pub const INVALID_AGE: &str = "Invalid Age";
/// Error shown for a malformed phone number
pub const INVALID_PHONE_NUMBER: &str = "Invalid Phone Number";
/// Error shown for a password missing a required character class
pub const WEAK_PASSWORD: &str = "Weak Password";
/// Error shown for a malformed homepage
pub const INVALID_URL: &str = "Invalid URL";

/// Name is required: anything but whitespace
#[must_use]
pub fn validate_name(raw: &str) -> FieldValidationResult {
    FieldValidationResult::check(!raw.trim().is_empty(), NAME_REQUIRED)
}
