//! Column identifiers and the display registry for the board.

use super::ParseColumnError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one of the board's fixed columns.
///
/// The column set is closed: columns are never created or destroyed at
/// runtime, and keying board storage by this enum lets the "every task in
/// exactly one column" invariant be checked structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    /// Work that has not been started.
    Todo,
    /// Work currently underway.
    InProgress,
    /// Completed work.
    Done,
}

impl ColumnId {
    /// All columns in board display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Column that newly created tasks are appended to.
    pub const DEFAULT: Self = Self::Todo;

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable column heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnError(value.to_owned())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered registry of the board's columns and their display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRegistry {
    entries: Vec<ColumnEntry>,
}

/// A single column registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnEntry {
    /// Column identifier.
    pub id: ColumnId,
    /// Display label shown as the column heading.
    pub label: String,
}

impl ColumnRegistry {
    /// Creates a registry covering every column with its default label.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: ColumnId::ALL
                .into_iter()
                .map(|id| ColumnEntry {
                    id,
                    label: id.label().to_owned(),
                })
                .collect(),
        }
    }

    /// Returns the registered columns in board display order.
    #[must_use]
    pub fn entries(&self) -> &[ColumnEntry] {
        &self.entries
    }

    /// Returns the display label for a column.
    #[must_use]
    pub fn label(&self, id: ColumnId) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map_or_else(|| id.label(), |entry| entry.label.as_str())
    }
}

impl Default for ColumnRegistry {
    fn default() -> Self {
        Self::new()
    }
}
