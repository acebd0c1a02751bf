//! Member roster value objects for task assignment.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated display name of a team member.
///
/// Member names must be non-empty after trimming. No uniqueness or
/// directory lookup is enforced here; the roster is an in-memory list the
/// host UI manages alongside the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberName(String);

impl MemberName {
    /// Creates a validated member name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyMemberName`] if the name is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyMemberName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the member name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of members available for task assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRoster {
    members: Vec<MemberName>,
}

impl MemberRoster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Appends a member to the roster.
    pub fn add(&mut self, member: MemberName) {
        self.members.push(member);
    }

    /// Removes the first member with the given name.
    ///
    /// Returns `true` when a member was removed. Tasks already assigned to
    /// the removed member keep their assignee.
    pub fn remove(&mut self, name: &MemberName) -> bool {
        self.members
            .iter()
            .position(|member| member == name)
            .map(|index| self.members.remove(index))
            .is_some()
    }

    /// Returns the members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[MemberName] {
        &self.members
    }

    /// Returns the number of members on the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when the roster has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
