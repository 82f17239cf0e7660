//! Render model handed to the presentation layer

use crate::field_state::FieldState;
use serde::Serialize;
use signup_validation::FieldName;

/// What the page renders for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    /// Which field
    pub name: FieldName,
    /// Label next to the input
    pub label: &'static str,
    /// Placeholder shown while empty
    pub placeholder: &'static str,
    /// Current raw value
    pub value: String,
    /// Whether the value validates
    pub is_valid: bool,
    /// Error to show, present only once touched and invalid
    pub visible_error: Option<&'static str>,
}

impl From<&FieldState> for FieldView {
    fn from(state: &FieldState) -> Self {
        let name = state.field();
        Self {
            name,
            label: name.label(),
            placeholder: name.placeholder(),
            value: state.value().to_string(),
            is_valid: state.is_valid(),
            visible_error: state.error_message(),
        }
    }
}

/// What the page renders for the whole form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    /// Fields in form order
    pub fields: Vec<FieldView>,
    /// Whether the submit control is enabled
    pub can_submit: bool,
    /// Text of the submit control
    pub submit_label: &'static str,
    /// Most recent save failure, if the last save failed
    pub submission_error: Option<String>,
}

impl FormView {
    /// View of one field
    #[must_use]
    pub fn field(&self, name: FieldName) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.name == name)
    }

    /// Errors currently on screen, in form order
    #[must_use]
    pub fn visible_errors(&self) -> Vec<(FieldName, &'static str)> {
        self.fields
            .iter()
            .filter_map(|view| view.visible_error.map(|message| (view.name, message)))
            .collect()
    }
}
