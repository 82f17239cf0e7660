//! Draft and accepted person records
//!
//! Values stay raw strings until accepted: the age `"30.0."` must reach the
//! validator as typed, not as whatever a numeric parse would make of it.

use serde::{Deserialize, Serialize};
use signup_validation::FieldName;

/// Six-field record as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDraft {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Age, as typed
    pub age: String,
    /// Phone number, as typed
    pub phone_number: String,
    /// Password
    pub password: String,
    /// Homepage URL
    pub homepage: String,
}

impl PersonDraft {
    /// Raw value of one field
    #[must_use]
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Age => &self.age,
            FieldName::PhoneNumber => &self.phone_number,
            FieldName::Password => &self.password,
            FieldName::Homepage => &self.homepage,
        }
    }

    /// Replace one field's raw value
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Age => &mut self.age,
            FieldName::PhoneNumber => &mut self.phone_number,
            FieldName::Password => &mut self.password,
            FieldName::Homepage => &mut self.homepage,
        };
        *slot = value.into();
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields whose current value fails validation, in form order
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|&field| !field.validate(self.get(field)).is_valid())
            .collect()
    }
}

/// Person accepted after a successful save
///
/// Only the submission flow creates these; holding one means the draft was
/// valid when submitted and the persistence call reported success.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Person(PersonDraft);

impl Person {
    pub(crate) fn accept(draft: PersonDraft) -> Self {
        Self(draft)
    }

    /// Email, which keys the person in the roster
    #[inline]
    #[must_use]
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Submitted values
    #[inline]
    #[must_use]
    pub fn values(&self) -> &PersonDraft {
        &self.0
    }

    /// Unwrap into the submitted values
    #[inline]
    #[must_use]
    pub fn into_values(self) -> PersonDraft {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> PersonDraft {
        FieldName::ALL
            .into_iter()
            .fold(PersonDraft::default(), |draft, field| draft.with(field, field.placeholder()))
    }

    #[test]
    fn get_set_each_field() {
        let mut draft = PersonDraft::default();
        for field in FieldName::ALL {
            draft.set(field, field.input_name());
        }
        for field in FieldName::ALL {
            assert_eq!(draft.get(field), field.input_name());
        }
    }

    #[test]
    fn invalid_fields_in_form_order() {
        assert_eq!(PersonDraft::default().invalid_fields(), FieldName::ALL.to_vec());
        assert!(reference().invalid_fields().is_empty());

        let draft = reference().with(FieldName::Homepage, "x").with(FieldName::Age, "0");
        assert_eq!(draft.invalid_fields(), vec![FieldName::Age, FieldName::Homepage]);
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let json = serde_json::to_value(reference()).unwrap();
        assert_eq!(json["phoneNumber"], "800-555-1212");

        let back: PersonDraft = serde_json::from_value(json).unwrap();
        assert_eq!(back, reference());
    }
}
