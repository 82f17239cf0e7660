//! Testing utilities for the sign-up workspace
//!
//! Shared fixtures, scripted stores, and form-filling helpers.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use signup_form::{FormState, PersonDraft, PersonStore, SubmissionController};
use signup_validation::FieldName;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

/// The reference person: every field holds its placeholder
pub fn reference_person() -> PersonDraft {
    FieldName::ALL
        .into_iter()
        .fold(PersonDraft::default(), |draft, field| draft.with(field, field.placeholder()))
}

pub fn person_with_email(email: &str) -> PersonDraft {
    reference_person().with(FieldName::Email, email)
}

/// One invalid sample per field, as typed on the reference page
pub fn invalid_samples() -> Vec<(FieldName, &'static str)> {
    vec![
        (FieldName::Name, "   "),
        (FieldName::Email, "hell@o@gmail.co"),
        (FieldName::Age, "30.0."),
        (FieldName::PhoneNumber, "333-33-3333"),
        (FieldName::Password, "11qqqWwW"),
        (FieldName::Homepage, "https:/johndoe.com"),
    ]
}

/// Type every field of `draft` into the form, blurring each one
pub fn enter_person(form: &mut FormState, draft: &PersonDraft) {
    for field in FieldName::ALL {
        form.update_field(field, draft.get(field));
        form.touch_field(field);
    }
}

/// Same as [`enter_person`], through a controller
pub fn enter_person_via(controller: &SubmissionController, draft: &PersonDraft) {
    for field in FieldName::ALL {
        controller.update_field(field, draft.get(field));
        controller.touch_field(field);
    }
}

/// Store that records every call and fails on request
///
/// - `failing_first(n)` fails the first `n` saves
/// - `gated()` holds every save until [`RecordingStore::release`]
#[derive(Debug, Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<PersonDraft>>,
    failures_left: AtomicUsize,
    gate: Option<Semaphore>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_first(failures: usize) -> Self {
        Self {
            failures_left: AtomicUsize::new(failures),
            ..Self::default()
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    /// Let one held save complete
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    pub fn calls(&self) -> Vec<PersonDraft> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl PersonStore for RecordingStore {
    async fn save(&self, draft: &PersonDraft) -> anyhow::Result<()> {
        self.calls.lock().push(draft.clone());

        if let Some(gate) = &self.gate {
            gate.acquire().await?.forget();
        }

        let failed = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failed {
            anyhow::bail!("store unavailable");
        }
        Ok(())
    }
}
