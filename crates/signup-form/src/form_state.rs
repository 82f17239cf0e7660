//! Form aggregate: six field states plus the submission phase
//!
//! `can_submit` holds exactly when every field is valid and no save is in
//! flight. A submission can only start from that state, so a form in
//! `Saving` always carries a draft that was fully valid when it began.

use crate::draft::{Person, PersonDraft};
use crate::error::{PhaseError, RejectReason};
use crate::field_state::FieldState;
use crate::phase::{validate_transition, SubmissionPhase};
use crate::presentation::{FieldView, FormView};
use signup_validation::{FieldName, FieldValidationResult};

/// State of one sign-up form instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: [FieldState; FieldName::COUNT],
    phase: SubmissionPhase,
    in_flight: Option<PersonDraft>,
    last_failure: Option<String>,
}

impl FormState {
    /// Fresh form: every field empty and untouched, phase idle
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL.map(FieldState::new),
            phase: SubmissionPhase::Idle,
            in_flight: None,
            last_failure: None,
        }
    }

    /// Set a field's raw value; allowed in every phase
    pub fn update_field(&mut self, field: FieldName, raw: impl Into<String>) -> FieldValidationResult {
        let result = self.fields[field.index()].set_value(raw);
        tracing::trace!(%field, valid = result.is_valid(), "field updated");
        result
    }

    /// Mark a field as having lost focus
    pub fn touch_field(&mut self, field: FieldName) {
        self.fields[field.index()].mark_touched();
    }

    /// State of one field
    #[inline]
    #[must_use]
    pub fn field(&self, field: FieldName) -> &FieldState {
        &self.fields[field.index()]
    }

    /// All field states in form order
    pub fn fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.iter()
    }

    /// Whether every field currently validates
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.fields.iter().all(FieldState::is_valid)
    }

    /// Fields that currently fail validation, in form order
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        self.fields
            .iter()
            .filter(|state| !state.is_valid())
            .map(FieldState::field)
            .collect()
    }

    /// Current submission phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Whether a submission may start now
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == SubmissionPhase::Idle && self.all_valid()
    }

    /// Current field values as a draft
    #[must_use]
    pub fn draft(&self) -> PersonDraft {
        self.fields.iter().fold(PersonDraft::default(), |mut draft, state| {
            draft.set(state.field(), state.value());
            draft
        })
    }

    /// Draft being saved, if a save is in flight
    #[inline]
    #[must_use]
    pub fn in_flight(&self) -> Option<&PersonDraft> {
        self.in_flight.as_ref()
    }

    /// Reason the most recent save failed, cleared when the next one starts
    #[inline]
    #[must_use]
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Start a submission: `Idle -> Saving`
    ///
    /// # Errors
    /// - `RejectReason::InFlight` while a save is running or its success is
    ///   still on display
    /// - `RejectReason::InvalidFields` if any field is invalid
    ///
    /// A rejected call changes nothing.
    pub fn begin_submission(&mut self) -> Result<PersonDraft, RejectReason> {
        if self.phase != SubmissionPhase::Idle {
            return Err(RejectReason::InFlight);
        }
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            return Err(RejectReason::InvalidFields(invalid));
        }

        self.transition(SubmissionPhase::Saving)
            .map_err(|_| RejectReason::InFlight)?;
        let draft = self.draft();
        self.in_flight = Some(draft.clone());
        self.last_failure = None;
        Ok(draft)
    }

    /// Finish a submission with the store's verdict
    ///
    /// On success returns the accepted person and leaves the form in
    /// `Saved` until [`FormState::acknowledge_saved`]; on failure returns
    /// `None` and keeps every entered value for a retry.
    ///
    /// # Errors
    /// `PhaseError::IllegalTransition` when no save is in flight.
    pub fn complete_submission(&mut self, success: bool) -> Result<Option<Person>, PhaseError> {
        if success {
            self.finish_saved().map(Some)
        } else {
            self.finish_failed("save failed").map(|()| None)
        }
    }

    /// `Saving -> Saved`, returning the person that was submitted
    ///
    /// The form keeps showing "Saved!" with submit disabled until
    /// [`FormState::acknowledge_saved`] resets it.
    ///
    /// # Errors
    /// `PhaseError::IllegalTransition` when no save is in flight.
    pub fn finish_saved(&mut self) -> Result<Person, PhaseError> {
        self.transition(SubmissionPhase::Saved)?;
        let draft = self.in_flight.take().unwrap_or_else(|| self.draft());
        Ok(Person::accept(draft))
    }

    /// `Saved -> Idle`, resetting every field for the next person
    ///
    /// # Errors
    /// `PhaseError::IllegalTransition` unless the form is in `Saved`.
    pub fn acknowledge_saved(&mut self) -> Result<(), PhaseError> {
        if self.phase != SubmissionPhase::Saved {
            return Err(PhaseError::IllegalTransition {
                from: self.phase,
                to: SubmissionPhase::Idle,
            });
        }
        self.transition(SubmissionPhase::Idle)?;
        *self = Self::new();
        Ok(())
    }

    /// `Saving -> Idle`, keeping field values
    ///
    /// # Errors
    /// `PhaseError::IllegalTransition` when no save is in flight.
    pub fn finish_failed(&mut self, reason: impl Into<String>) -> Result<(), PhaseError> {
        self.transition(SubmissionPhase::Idle)?;
        self.in_flight = None;
        self.last_failure = Some(reason.into());
        Ok(())
    }

    /// Render model for the current state
    #[must_use]
    pub fn view(&self) -> FormView {
        FormView {
            fields: self.fields.iter().map(FieldView::from).collect(),
            can_submit: self.can_submit(),
            submit_label: self.phase.submit_label(),
            submission_error: self.last_failure.clone(),
        }
    }

    fn transition(&mut self, to: SubmissionPhase) -> Result<(), PhaseError> {
        validate_transition(self.phase, to)?;
        tracing::debug!(from = %self.phase, %to, "phase transition");
        self.phase = to;
        Ok(())
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new();
        for field in FieldName::ALL {
            form.update_field(field, field.placeholder());
        }
        form
    }

    #[test]
    fn new_form_cannot_submit() {
        let form = FormState::new();
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert!(!form.can_submit());
        assert_eq!(form.invalid_fields(), FieldName::ALL.to_vec());
    }

    #[test]
    fn submittable_exactly_when_all_valid() {
        let mut form = FormState::new();
        for (i, field) in FieldName::ALL.into_iter().enumerate() {
            assert!(!form.can_submit(), "submittable after {i} fields");
            form.update_field(field, field.placeholder());
        }
        assert!(form.can_submit());

        form.update_field(FieldName::Email, "hello@gmail.c");
        assert!(!form.can_submit());
        form.update_field(FieldName::Email, "pat@smith.com");
        assert!(form.can_submit());
    }

    #[test]
    fn begin_rejects_invalid_form_without_change() {
        let mut form = filled();
        form.update_field(FieldName::Age, "200");
        let before = form.clone();

        let result = form.begin_submission();
        assert_eq!(result, Err(RejectReason::InvalidFields(vec![FieldName::Age])));
        assert_eq!(form, before);
    }

    #[test]
    fn begin_moves_to_saving_and_blocks_resubmit() {
        let mut form = filled();
        let draft = form.begin_submission().unwrap();

        assert_eq!(draft.email, "pat@smith.com");
        assert_eq!(form.phase(), SubmissionPhase::Saving);
        assert!(!form.can_submit());
        assert_eq!(form.begin_submission(), Err(RejectReason::InFlight));
    }

    #[test]
    fn edits_during_save_are_kept() {
        let mut form = filled();
        form.begin_submission().unwrap();
        form.update_field(FieldName::Name, "Sam Smith");
        assert_eq!(form.field(FieldName::Name).value(), "Sam Smith");
        assert_eq!(form.in_flight().unwrap().name, "Pat Smith");
    }

    #[test]
    fn success_shows_saved_then_resets() {
        let mut form = filled();
        form.touch_field(FieldName::Name);
        form.begin_submission().unwrap();
        form.update_field(FieldName::Name, "Sam Smith");

        let person = form.complete_submission(true).unwrap().unwrap();
        assert_eq!(person.values().name, "Pat Smith");
        assert_eq!(form.phase(), SubmissionPhase::Saved);
        assert_eq!(form.view().submit_label, "Saved!");
        assert!(!form.can_submit());
        assert!(form.in_flight().is_none());
        assert_eq!(form.begin_submission(), Err(RejectReason::InFlight));

        form.acknowledge_saved().unwrap();
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn acknowledge_requires_saved_phase() {
        let mut form = filled();
        assert!(form.acknowledge_saved().is_err());
        form.begin_submission().unwrap();
        assert_eq!(
            form.acknowledge_saved(),
            Err(PhaseError::IllegalTransition {
                from: SubmissionPhase::Saving,
                to: SubmissionPhase::Idle,
            })
        );
        assert_eq!(form.phase(), SubmissionPhase::Saving);
    }

    #[test]
    fn failure_keeps_values_and_allows_retry() {
        let mut form = filled();
        form.begin_submission().unwrap();

        assert_eq!(form.complete_submission(false), Ok(None));
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.field(FieldName::Email).value(), "pat@smith.com");
        assert_eq!(form.last_failure(), Some("save failed"));
        assert!(form.can_submit());

        form.begin_submission().unwrap();
        assert_eq!(form.last_failure(), None);
    }

    #[test]
    fn completing_without_save_is_illegal() {
        let mut form = filled();
        assert_eq!(
            form.complete_submission(true),
            Err(PhaseError::IllegalTransition {
                from: SubmissionPhase::Idle,
                to: SubmissionPhase::Saved,
            })
        );
        assert!(form.finish_failed("x").is_err());
    }

    #[test]
    fn view_reflects_touch_and_phase() {
        let mut form = filled();
        form.update_field(FieldName::Password, "weak");
        form.touch_field(FieldName::Password);

        let view = form.view();
        assert!(!view.can_submit);
        assert_eq!(view.submit_label, "Submit");
        let password = &view.fields[FieldName::Password.index()];
        assert_eq!(password.visible_error, Some("Weak Password"));
        assert_eq!(view.fields[FieldName::Name.index()].visible_error, None);
    }
}
