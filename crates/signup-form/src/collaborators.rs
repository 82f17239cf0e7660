//! External collaborators of the submission flow
//!
//! - **PersonStore**: persists a draft; asynchronous, may fail
//! - **Roster**: receives each accepted person exactly once

use crate::draft::{Person, PersonDraft};
use async_trait::async_trait;
use std::sync::Arc;

/// Persistence call made for every submission
///
/// Failure causes are opaque to the form; only success or failure matters.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Persist a validated draft
    async fn save(&self, draft: &PersonDraft) -> anyhow::Result<()>;
}

#[async_trait]
impl<T: PersonStore + ?Sized> PersonStore for Arc<T> {
    async fn save(&self, draft: &PersonDraft) -> anyhow::Result<()> {
        (**self).save(draft).await
    }
}

/// Receiver of accepted people
pub trait Roster: Send + Sync {
    /// Append a person after a successful save
    fn append_person(&self, person: Person);
}

impl<T: Roster + ?Sized> Roster for Arc<T> {
    fn append_person(&self, person: Person) {
        (**self).append_person(person);
    }
}
