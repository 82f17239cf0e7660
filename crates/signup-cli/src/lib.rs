//! Command implementations for the `signup` binary
//!
//! Each command is a plain function returning its output, so the binary
//! only parses arguments, prints, and picks an exit status.

#![allow(missing_docs)]

use anyhow::Context;
use async_trait::async_trait;
use signup_form::{
    InMemoryRoster, PersonDraft, PersonStore, RosterRow, SubmissionConfig, SubmissionController,
    SubmitError, COLUMNS,
};
use signup_validation::{FieldName, FieldValidationResult};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Field catalogue as an aligned table
pub fn fields_table() -> String {
    let mut out = format!("{:<12} {:<13} {:<22} {}\n", "INPUT", "LABEL", "PLACEHOLDER", "ERROR");
    for field in FieldName::ALL {
        let _ = writeln!(
            out,
            "{:<12} {:<13} {:<22} {}",
            field.input_name(),
            field.label(),
            field.placeholder(),
            field.error_message()
        );
    }
    out
}

/// Validate one value against a field given by input name
pub fn validate_value(field: &str, value: &str) -> anyhow::Result<FieldValidationResult> {
    let field: FieldName = field.parse()?;
    Ok(field.validate(value))
}

/// Read a JSON draft (camelCase keys)
pub fn load_draft(path: &Path) -> anyhow::Result<PersonDraft> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading draft {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing draft {}", path.display()))
}

/// Every invalid field of a draft with its message, in form order
pub fn check_draft(draft: &PersonDraft) -> Vec<(FieldName, &'static str)> {
    draft
        .invalid_fields()
        .into_iter()
        .map(|field| (field, field.error_message()))
        .collect()
}

/// Store that fails a fixed number of saves before accepting
#[derive(Debug, Default)]
pub struct FlakyStore {
    failures_left: AtomicUsize,
    attempts: AtomicUsize,
}

impl FlakyStore {
    pub fn new(fail_first: usize) -> Self {
        Self {
            failures_left: AtomicUsize::new(fail_first),
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PersonStore for FlakyStore {
    async fn save(&self, draft: &PersonDraft) -> anyhow::Result<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(attempt, email = %draft.email, "store save");
        if self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok()
        {
            anyhow::bail!("simulated outage on attempt {attempt}");
        }
        Ok(())
    }
}

/// Outcome of a simulated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub attempts: usize,
    pub failures: Vec<String>,
    pub rows: Vec<RosterRow>,
}

/// Type a draft into a fresh form and submit until saved
///
/// Gives up on the first rejection, since resubmitting unchanged invalid
/// values cannot succeed.
pub async fn simulate(
    draft: &PersonDraft,
    fail_first: usize,
    config: SubmissionConfig,
) -> anyhow::Result<SimulationReport> {
    let store = Arc::new(FlakyStore::new(fail_first));
    let roster = Arc::new(InMemoryRoster::new());
    let controller = SubmissionController::with_config(store.clone(), roster.clone(), config)?;

    for field in FieldName::ALL {
        controller.update_field(field, draft.get(field));
        controller.touch_field(field);
    }

    let mut failures = Vec::new();
    loop {
        match controller.submit().await {
            Ok(person) => {
                tracing::info!(email = person.email(), attempts = store.attempts(), "simulation saved");
                break;
            }
            Err(e @ SubmitError::Rejected(_)) => return Err(e.into()),
            Err(e) => failures.push(e.to_string()),
        }
    }

    Ok(SimulationReport {
        attempts: store.attempts(),
        failures,
        rows: roster.rows(),
    })
}

/// Roster rows as an aligned table
pub fn roster_table(rows: &[RosterRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", COLUMNS.join(" | "));
    for row in rows {
        let cells: Vec<String> = row.cells().into_iter().map(|cell| cell.text).collect();
        let _ = writeln!(out, "{}", cells.join(" | "));
    }
    out
}
