use crate::error::PhaseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the form is in its save lifecycle
///
/// `Saved` is transient: the form shows it after a successful save and
/// resets to `Idle` once the confirmation has been displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPhase {
    /// Editable, no save in flight
    #[default]
    Idle,
    /// Save in flight
    Saving,
    /// Save succeeded, reset pending
    Saved,
}

impl SubmissionPhase {
    /// Every phase
    pub const ALL: [SubmissionPhase; 3] = [
        SubmissionPhase::Idle,
        SubmissionPhase::Saving,
        SubmissionPhase::Saved,
    ];

    /// Text of the submit control in this phase
    #[inline]
    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "Submit",
            SubmissionPhase::Saving => "Saving…",
            SubmissionPhase::Saved => "Saved!",
        }
    }
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Saving => "saving",
            SubmissionPhase::Saved => "saved",
        };
        f.write_str(name)
    }
}

/// Validates a phase transition.
pub fn validate_transition(from: SubmissionPhase, to: SubmissionPhase) -> Result<(), PhaseError> {
    if allowed(from, to) {
        Ok(())
    } else {
        Err(PhaseError::IllegalTransition { from, to })
    }
}

/// Phases reachable from `from` in one step
pub fn allowed_transitions(from: SubmissionPhase) -> Vec<SubmissionPhase> {
    use SubmissionPhase::*;
    match from {
        Idle => vec![Saving],
        Saving => vec![Saved, Idle],
        Saved => vec![Idle],
    }
}

fn allowed(from: SubmissionPhase, to: SubmissionPhase) -> bool {
    allowed_transitions(from).into_iter().any(|s| s == to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(SubmissionPhase::Idle.submit_label(), "Submit");
        assert_eq!(SubmissionPhase::Saving.submit_label(), "Saving…");
        assert_eq!(SubmissionPhase::Saved.submit_label(), "Saved!");
    }

    #[test]
    fn no_self_transitions() {
        for phase in SubmissionPhase::ALL {
            assert!(validate_transition(phase, phase).is_err());
        }
    }

    #[test]
    fn saved_only_reachable_from_saving() {
        assert!(validate_transition(SubmissionPhase::Saving, SubmissionPhase::Saved).is_ok());
        assert_eq!(
            validate_transition(SubmissionPhase::Idle, SubmissionPhase::Saved),
            Err(PhaseError::IllegalTransition {
                from: SubmissionPhase::Idle,
                to: SubmissionPhase::Saved,
            })
        );
    }
}
