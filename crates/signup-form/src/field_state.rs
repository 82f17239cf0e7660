//! Per-field state: raw value, current validity, touched flag

use signup_validation::{FieldName, FieldValidationResult};

/// Runtime state of one form field
///
/// Validity is recomputed on every value change, so it is always current.
/// The touched flag only decides whether an error is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    field: FieldName,
    value: String,
    result: FieldValidationResult,
    touched: bool,
}

impl FieldState {
    /// Empty, untouched state for a field
    #[must_use]
    pub fn new(field: FieldName) -> Self {
        Self {
            field,
            value: String::new(),
            result: field.validate(""),
            touched: false,
        }
    }

    /// Store a new raw value and revalidate it
    pub fn set_value(&mut self, raw: impl Into<String>) -> FieldValidationResult {
        self.value = raw.into();
        self.result = self.field.validate(&self.value);
        self.result
    }

    /// Record that the field lost focus
    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    /// Which field this is
    #[inline]
    #[must_use]
    pub fn field(&self) -> FieldName {
        self.field
    }

    /// Current raw value
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Latest validation result
    #[inline]
    #[must_use]
    pub fn result(&self) -> FieldValidationResult {
        self.result
    }

    /// Whether the current value is valid
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    /// Whether the field has lost focus at least once
    #[inline]
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Error to render: only once touched, only while invalid
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        if self.touched {
            self.result.message()
        } else {
            None
        }
    }
}
