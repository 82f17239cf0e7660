//! Error types for the sign-up form
//!
//! Field-format problems are not errors here: they live in
//! [`FieldValidationResult`](signup_validation::FieldValidationResult) as data.
//! These types cover:
//! - Submissions refused before any save is attempted
//! - Saves that fail or time out
//! - Illegal submission phase transitions
//! - Configuration loading

use crate::phase::SubmissionPhase;
use signup_validation::FieldName;
use std::path::PathBuf;

/// Submission failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Refused before calling the store; nothing changed
    #[error("submission rejected: {0}")]
    Rejected(#[from] RejectReason),

    /// The store reported a failure; field values are kept
    #[error("save failed: {0}")]
    SaveFailed(String),

    /// The store did not answer in time; field values are kept
    #[error("save timed out after {after_ms}ms")]
    TimedOut {
        /// Configured limit in milliseconds
        after_ms: u64,
    },

    /// Phase machine refused a transition
    #[error("phase error: {0}")]
    Phase(#[from] PhaseError),
}

impl SubmitError {
    /// Whether the store was never called
    #[inline]
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Whether resubmitting the same values may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::SaveFailed(_) | Self::TimedOut { .. } | Self::Rejected(RejectReason::InFlight)
        )
    }
}

/// Why a submission was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// One or more fields are currently invalid
    #[error("invalid fields: {0:?}")]
    InvalidFields(Vec<FieldName>),

    /// A save for this form is already in flight
    #[error("a save is already in flight")]
    InFlight,
}

/// Submission phase machine errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhaseError {
    /// Transition not allowed from the current phase
    #[error("illegal transition: {from} -> {to}")]
    IllegalTransition {
        /// Current phase
        from: SubmissionPhase,
        /// Requested phase
        to: SubmissionPhase,
    },
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Could not read the configuration file
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for this configuration
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of its accepted range
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// Offending key
        key: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
