//! Submission controller
//!
//! Owns one form instance and drives it through
//! `Idle -> Saving -> Saved -> Idle` around the external save call.
//!
//! # Concurrency
//! - Field edits and touches are synchronous and allowed in every phase
//! - The save call is the only suspension point; the form lock is never
//!   held across it
//! - A `submit` while another save is in flight is rejected without
//!   calling the store
//! - Dropping a `submit` future (timeout, `select!`, task abort, panicking
//!   store) returns the form to `Idle`; it is never left in `Saving`

use crate::collaborators::{PersonStore, Roster};
use crate::config::SubmissionConfig;
use crate::draft::{Person, PersonDraft};
use crate::error::{ConfigError, SubmitError};
use crate::form_state::FormState;
use crate::phase::SubmissionPhase;
use crate::presentation::FormView;
use parking_lot::Mutex;
use signup_validation::{FieldName, FieldValidationResult};
use std::fmt;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Failure recorded when a submission is dropped before the store answers
pub const SAVE_CANCELLED: &str = "save cancelled";

/// Change published to subscribers while a submission runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// Form entered a new phase
    Phase(SubmissionPhase),
    /// Save failed; the form is editable again
    SaveFailed {
        /// Display text of the failure
        reason: String,
    },
}

/// Drives submissions for one form instance
pub struct SubmissionController {
    form: Mutex<FormState>,
    store: Arc<dyn PersonStore>,
    roster: Arc<dyn Roster>,
    config: SubmissionConfig,
    events: broadcast::Sender<SubmissionEvent>,
}

impl SubmissionController {
    /// Controller with default configuration
    #[must_use]
    pub fn new<S, R>(store: S, roster: R) -> Self
    where
        S: PersonStore + 'static,
        R: Roster + 'static,
    {
        let config = SubmissionConfig::default();
        let (events, _) = broadcast::channel(config.event_capacity);
        Self {
            form: Mutex::new(FormState::new()),
            store: Arc::new(store),
            roster: Arc::new(roster),
            config,
            events,
        }
    }

    /// Controller with custom configuration
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` if the configuration does not validate.
    pub fn with_config<S, R>(store: S, roster: R, config: SubmissionConfig) -> Result<Self, ConfigError>
    where
        S: PersonStore + 'static,
        R: Roster + 'static,
    {
        config.validate()?;
        let (events, _) = broadcast::channel(config.event_capacity);
        Ok(Self {
            form: Mutex::new(FormState::new()),
            store: Arc::new(store),
            roster: Arc::new(roster),
            config,
            events,
        })
    }

    /// Set a field's value (keystroke)
    pub fn update_field(&self, field: FieldName, raw: impl Into<String>) -> FieldValidationResult {
        self.form.lock().update_field(field, raw)
    }

    /// Mark a field as blurred
    pub fn touch_field(&self, field: FieldName) {
        self.form.lock().touch_field(field);
    }

    /// Whether the submit control is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.form.lock().can_submit()
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.form.lock().phase()
    }

    /// Render model for the current state
    #[must_use]
    pub fn view(&self) -> FormView {
        self.form.lock().view()
    }

    /// Read the form state under the lock
    pub fn with_form<T>(&self, f: impl FnOnce(&FormState) -> T) -> T {
        f(&self.form.lock())
    }

    /// Subscribe to phase changes and save failures
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SubmissionEvent> {
        self.events.subscribe()
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SubmissionConfig {
        &self.config
    }

    /// Submit the current values
    ///
    /// # Workflow
    /// 1. Start the submission, or reject if the form is invalid or saving
    /// 2. Await the store, bounded by the configured timeout
    /// 3. On success show `Saved`, append the person to the roster, and
    ///    reset the form after the configured display interval
    /// 4. On failure return to idle with every value kept
    ///
    /// # Errors
    /// - `SubmitError::Rejected` when no save was attempted
    /// - `SubmitError::SaveFailed` / `SubmitError::TimedOut` when the save
    ///   did not succeed; the caller may resubmit
    pub async fn submit(&self) -> Result<Person, SubmitError> {
        let started = self.form.lock().begin_submission();
        let draft = match started {
            Ok(draft) => draft,
            Err(reason) => {
                tracing::warn!(%reason, "submission rejected");
                return Err(SubmitError::Rejected(reason));
            }
        };
        let mut guard = InFlightGuard::new(self);
        self.publish(SubmissionEvent::Phase(SubmissionPhase::Saving));
        tracing::info!(email = %draft.email, "saving person");

        match self.save(&draft).await {
            Ok(()) => {
                let person = self.form.lock().finish_saved()?;
                self.publish(SubmissionEvent::Phase(SubmissionPhase::Saved));
                self.roster.append_person(person.clone());
                tracing::info!(email = person.email(), "person saved");

                let display = self.config.saved_display();
                if !display.is_zero() {
                    tokio::time::sleep(display).await;
                }
                self.form.lock().acknowledge_saved()?;
                guard.disarm();
                self.publish(SubmissionEvent::Phase(SubmissionPhase::Idle));
                Ok(person)
            }
            Err(e) => {
                let reason = e.to_string();
                self.form.lock().finish_failed(reason.clone())?;
                guard.disarm();
                tracing::error!(error = %reason, "save failed");
                self.publish(SubmissionEvent::SaveFailed { reason });
                self.publish(SubmissionEvent::Phase(SubmissionPhase::Idle));
                Err(e)
            }
        }
    }

    async fn save(&self, draft: &PersonDraft) -> Result<(), SubmitError> {
        let Some(after_ms) = self.config.save_timeout_ms else {
            return self
                .store
                .save(draft)
                .await
                .map_err(|e| SubmitError::SaveFailed(format!("{e:#}")));
        };
        let limit = std::time::Duration::from_millis(after_ms);
        match tokio::time::timeout(limit, self.store.save(draft)).await {
            Ok(saved) => saved.map_err(|e| SubmitError::SaveFailed(format!("{e:#}"))),
            Err(_) => Err(SubmitError::TimedOut { after_ms }),
        }
    }

    /// Leave whatever phase an abandoned submission was holding
    fn recover_abandoned(&self) {
        let mut form = self.form.lock();
        match form.phase() {
            SubmissionPhase::Saving => {
                if form.finish_failed(SAVE_CANCELLED).is_ok() {
                    drop(form);
                    tracing::warn!("submission dropped while saving");
                    self.publish(SubmissionEvent::SaveFailed {
                        reason: SAVE_CANCELLED.to_string(),
                    });
                    self.publish(SubmissionEvent::Phase(SubmissionPhase::Idle));
                }
            }
            SubmissionPhase::Saved => {
                if form.acknowledge_saved().is_ok() {
                    drop(form);
                    tracing::debug!("submission dropped while showing saved");
                    self.publish(SubmissionEvent::Phase(SubmissionPhase::Idle));
                }
            }
            SubmissionPhase::Idle => {}
        }
    }

    fn publish(&self, event: SubmissionEvent) {
        // no subscribers is fine
        let _ = self.events.send(event);
    }
}

/// Holds the form's non-idle phase for one `submit` call
///
/// Dropped while armed, it moves the form back to `Idle`.
struct InFlightGuard<'a> {
    controller: &'a SubmissionController,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(controller: &'a SubmissionController) -> Self {
        Self {
            controller,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.controller.recover_abandoned();
        }
    }
}

impl fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionController")
            .field("form", &*self.form.lock())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
