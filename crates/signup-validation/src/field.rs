//! Field catalogue
//!
//! The six sign-up fields in form order, with the presentation metadata
//! each one carries on the page and the validator that gates it.

use crate::result::FieldValidationResult;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six sign-up form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    /// Full name
    Name,
    /// Email address
    Email,
    /// Age in years
    Age,
    /// Phone number
    PhoneNumber,
    /// Account password
    Password,
    /// Homepage URL
    Homepage,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Age,
        FieldName::PhoneNumber,
        FieldName::Password,
        FieldName::Homepage,
    ];

    /// Number of fields on the form
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this field in [`FieldName::ALL`]
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            FieldName::Name => 0,
            FieldName::Email => 1,
            FieldName::Age => 2,
            FieldName::PhoneNumber => 3,
            FieldName::Password => 4,
            FieldName::Homepage => 5,
        }
    }

    /// Name of the form input
    #[inline]
    #[must_use]
    pub fn input_name(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Age => "age",
            FieldName::PhoneNumber => "phoneNumber",
            FieldName::Password => "password",
            FieldName::Homepage => "homepage",
        }
    }

    /// Label rendered next to the input
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::Email => "Email",
            FieldName::Age => "Age",
            FieldName::PhoneNumber => "Phone Number",
            FieldName::Password => "Password",
            FieldName::Homepage => "Homepage",
        }
    }

    /// Example value shown in the empty input
    #[inline]
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            FieldName::Name => "Pat Smith",
            FieldName::Email => "pat@smith.com",
            FieldName::Age => "33",
            FieldName::PhoneNumber => "800-555-1212",
            FieldName::Password => "Str0ngP@ssword~",
            FieldName::Homepage => "https://smith.com/pat",
        }
    }

    /// Fixed error message for an invalid value
    #[inline]
    #[must_use]
    pub fn error_message(self) -> &'static str {
        match self {
            FieldName::Name => rules::NAME_REQUIRED,
            FieldName::Email => rules::INVALID_EMAIL,
            FieldName::Age => rules::INVALID_AGE,
            FieldName::PhoneNumber => rules::INVALID_PHONE_NUMBER,
            FieldName::Password => rules::WEAK_PASSWORD,
            FieldName::Homepage => rules::INVALID_URL,
        }
    }

    /// Run this field's validator over a raw value
    #[must_use]
    pub fn validate(self, raw: &str) -> FieldValidationResult {
        match self {
            FieldName::Name => rules::validate_name(raw),
            FieldName::Email => rules::validate_email(raw),
            FieldName::Age => rules::validate_age(raw),
            FieldName::PhoneNumber => rules::validate_phone_number(raw),
            FieldName::Password => rules::validate_password(raw),
            FieldName::Homepage => rules::validate_homepage(raw),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_name())
    }
}

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.input_name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Input name that does not belong to the sign-up form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: '{0}'")]
pub struct UnknownField(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_form_order() {
        for (i, field) in FieldName::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn input_names_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(field.input_name().parse::<FieldName>(), Ok(field));
        }
    }

    #[test]
    fn unknown_input_name_rejected() {
        let err = "phone".parse::<FieldName>().unwrap_err();
        assert_eq!(err, UnknownField("phone".to_string()));
        assert_eq!(err.to_string(), "unknown field: 'phone'");
    }

    #[test]
    fn placeholders_are_valid_values() {
        for field in FieldName::ALL {
            assert!(
                field.validate(field.placeholder()).is_valid(),
                "placeholder for {field} should validate"
            );
        }
    }

    #[test]
    fn empty_value_carries_field_message() {
        for field in FieldName::ALL {
            assert_eq!(field.validate("").message(), Some(field.error_message()));
        }
    }

    #[test]
    fn serde_uses_input_names() {
        let json = serde_json::to_string(&FieldName::PhoneNumber).unwrap();
        assert_eq!(json, "\"phoneNumber\"");
    }
}
