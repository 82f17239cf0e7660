//! Sign-up Form Core
//!
//! Form state and submission lifecycle for the person sign-up form:
//! - Per-field state with touch-gated error display
//! - Aggregate validity and the `Idle -> Saving -> Saved -> Idle` phase machine
//! - A submission controller around an injected async store
//! - An in-memory roster of accepted people
//!
//! # Example
//!
//! ```rust,ignore
//! use signup_form::{InMemoryRoster, SubmissionController};
//! use signup_validation::FieldName;
//! use std::sync::Arc;
//!
//! # async fn example(store: impl signup_form::PersonStore + 'static) -> Result<(), Box<dyn std::error::Error>> {
//! let roster = Arc::new(InMemoryRoster::new());
//! let controller = SubmissionController::new(store, roster.clone());
//!
//! for field in FieldName::ALL {
//!     controller.update_field(field, field.placeholder());
//! }
//! let person = controller.submit().await?;
//! assert!(roster.row(person.email()).is_some());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod collaborators;
pub mod config;
pub mod controller;
pub mod draft;
pub mod error;
pub mod field_state;
pub mod form_state;
pub mod phase;
pub mod presentation;
pub mod roster;

// Re-exports for convenience
pub use collaborators::{PersonStore, Roster};
pub use config::SubmissionConfig;
pub use controller::{SubmissionController, SubmissionEvent, SAVE_CANCELLED};
pub use draft::{Person, PersonDraft};
pub use error::{ConfigError, PhaseError, RejectReason, SubmitError};
pub use field_state::FieldState;
pub use form_state::FormState;
pub use phase::SubmissionPhase;
pub use presentation::{FieldView, FormView};
pub use roster::{Cell, InMemoryRoster, RosterRow, COLUMNS};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the sign-up form
    pub use crate::{
        FormState, FormView, InMemoryRoster, Person, PersonDraft, PersonStore, Roster,
        SubmissionConfig, SubmissionController, SubmissionEvent, SubmissionPhase, SubmitError,
    };
    pub use signup_validation::FieldName;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
