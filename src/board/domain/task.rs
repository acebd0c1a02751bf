//! Task aggregate root and related card types.

use super::{BoardDomainError, MemberName, ParsePriorityError, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency level of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Should be picked up soon.
    Medium,
    /// Needs attention now.
    High,
}

impl Priority {
    /// All priority levels in ascending order of urgency.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated field set for a task that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    due_date: NaiveDate,
    assignee: Option<MemberName>,
    priority: Priority,
}

impl TaskDraft {
    /// Creates a draft with required card fields.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] or
    /// [`BoardDomainError::EmptyDescription`] when the respective field is
    /// empty after trimming. The due date is validated against the clock
    /// when the draft becomes a [`Task`].
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
        priority: Priority,
    ) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }

        let raw_description = description.into();
        let normalized_description = raw_description.trim();
        if normalized_description.is_empty() {
            return Err(BoardDomainError::EmptyDescription);
        }

        Ok(Self {
            title: normalized_title.to_owned(),
            description: normalized_description.to_owned(),
            due_date,
            assignee: None,
            priority,
        })
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: MemberName) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the draft title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    due_date: NaiveDate,
    assignee: Option<MemberName>,
    priority: Priority,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DueDateNotInFuture`] when the draft's due
    /// date is not strictly after the clock's current calendar day.
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Result<Self, BoardDomainError> {
        let timestamp = clock.utc();
        let today = timestamp.date_naive();
        if draft.due_date <= today {
            return Err(BoardDomainError::DueDateNotInFuture {
                due: draft.due_date,
                today,
            });
        }

        Ok(Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            assignee: draft.assignee,
            priority: draft.priority,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&MemberName> {
        self.assignee.as_ref()
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the signed number of days between `as_of` and the due date.
    ///
    /// Negative when the task is overdue, zero when it is due on `as_of`.
    #[must_use]
    pub fn days_remaining(&self, as_of: NaiveDate) -> i64 {
        self.due_date.signed_duration_since(as_of).num_days()
    }

    /// Returns `true` when the due date is strictly before `as_of`.
    ///
    /// A task due on `as_of` itself is not overdue yet.
    #[must_use]
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        self.due_date < as_of
    }
}
