//! In-memory roster of accepted people
//!
//! Rows are keyed by email and kept in insertion order. Appending an email
//! already present overwrites that row in place.

use crate::collaborators::Roster;
use crate::draft::Person;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Serialize;

/// Column headers, in display order
pub const COLUMNS: [&str; 5] = ["Name", "Email", "Age", "Phone", "Homepage"];

/// One rendered table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Displayed text
    pub text: String,
    /// Link target, for cells rendered as anchors
    pub href: Option<String>,
}

impl Cell {
    fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            href: None,
        }
    }

    fn link(text: &str, href: String) -> Self {
        Self {
            text: text.to_string(),
            href: Some(href),
        }
    }
}

/// Displayed row for one person; the password is never shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRow {
    /// Full name
    pub name: String,
    /// Email, the row key
    pub email: String,
    /// Age as entered
    pub age: String,
    /// Phone number as entered
    pub phone_number: String,
    /// Homepage URL
    pub homepage: String,
}

impl RosterRow {
    /// Cells in [`COLUMNS`] order
    #[must_use]
    pub fn cells(&self) -> [Cell; 5] {
        [
            Cell::text(&self.name),
            Cell::text(&self.email),
            Cell::text(&self.age),
            Cell::link(&self.phone_number, format!("tel:{}", self.phone_number)),
            Cell::link(&self.homepage, self.homepage.clone()),
        ]
    }
}

impl From<&Person> for RosterRow {
    fn from(person: &Person) -> Self {
        let values = person.values();
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            age: values.age.clone(),
            phone_number: values.phone_number.clone(),
            homepage: values.homepage.clone(),
        }
    }
}

/// Roster held in memory
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    rows: RwLock<IndexMap<String, RosterRow>>,
}

impl InMemoryRoster {
    /// Empty roster
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Whether the table body has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Row for an email
    #[must_use]
    pub fn row(&self, email: &str) -> Option<RosterRow> {
        self.rows.read().get(email).cloned()
    }

    /// All rows in display order
    #[must_use]
    pub fn rows(&self) -> Vec<RosterRow> {
        self.rows.read().values().cloned().collect()
    }
}

impl Roster for InMemoryRoster {
    fn append_person(&self, person: Person) {
        let row = RosterRow::from(&person);
        let replaced = self.rows.write().insert(row.email.clone(), row).is_some();
        tracing::debug!(email = person.email(), replaced, "roster row appended");
    }
}
