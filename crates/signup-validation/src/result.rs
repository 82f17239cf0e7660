//! Validation outcome for a single field

use std::fmt;

/// Outcome of running one field validator
///
/// A message is present exactly when the value is invalid, and it is always
/// the field's fixed error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldValidationResult {
    /// Value satisfies the field's format rule
    Valid,
    /// Value violates the field's format rule
    Invalid {
        /// Fixed per-field error message
        message: &'static str,
    },
}

impl FieldValidationResult {
    /// Build a result from a boolean check and the message to use on failure
    #[inline]
    #[must_use]
    pub fn check(passed: bool, message: &'static str) -> Self {
        if passed {
            Self::Valid
        } else {
            Self::Invalid { message }
        }
    }

    /// Whether the value is valid
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Error message, `None` when valid
    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Invalid { message } => Some(message),
        }
    }
}

impl fmt::Display for FieldValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid { message } => f.write_str(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_maps_pass_and_fail() {
        assert_eq!(FieldValidationResult::check(true, "x"), FieldValidationResult::Valid);
        assert_eq!(
            FieldValidationResult::check(false, "Invalid Age"),
            FieldValidationResult::Invalid {
                message: "Invalid Age"
            }
        );
    }

    #[test]
    fn message_present_only_when_invalid() {
        assert_eq!(FieldValidationResult::Valid.message(), None);
        let invalid = FieldValidationResult::check(false, "Weak Password");
        assert!(!invalid.is_valid());
        assert_eq!(invalid.message(), Some("Weak Password"));
        assert_eq!(invalid.to_string(), "Weak Password");
    }
}
