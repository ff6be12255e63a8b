//! Domain types: users, todos and their identifiers.

use crate::error::{Result, TodoError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a `UserId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub title: String,
    /// When it is due
    pub deadline: DateTime<Utc>,
    /// Whether the todo is completed
    pub done: bool,
    /// When the todo was created
    pub created_at: DateTime<Utc>,
}

/// A registered account and the todos it owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name, no uniqueness constraint
    pub name: String,
    /// Login handle, unique across the store
    pub username: String,
    /// Owned todos in creation order
    pub todos: Vec<Todo>,
}

impl User {
    pub(crate) fn position_of(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }
}

/// A deadline as supplied by a client.
///
/// Accepts an integer number of milliseconds since the Unix epoch or one of
/// the textual forms handled by [`DeadlineInput::resolve`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeadlineInput {
    /// Milliseconds since 1970-01-01T00:00:00Z
    Millis(i64),
    /// Date or date-time text
    Text(String),
}

impl DeadlineInput {
    /// An empty string is treated the same as no deadline at all.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// Resolve the input to a UTC instant.
    ///
    /// Text may be RFC 3339 (`2025-01-01T10:00:00+02:00`), a naive date-time
    /// read as UTC (`2025-01-01T10:00` or `2025-01-01T10:00:00.250`), or a bare
    /// date read as UTC midnight (`2025-01-01`).
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidDeadline`] if the value matches none of the
    /// accepted forms or falls outside the representable range.
    pub fn resolve(&self) -> Result<DateTime<Utc>> {
        match self {
            Self::Millis(millis) => DateTime::from_timestamp_millis(*millis)
                .ok_or_else(|| TodoError::InvalidDeadline(millis.to_string())),
            Self::Text(text) => parse_deadline_text(text.trim())
                .ok_or_else(|| TodoError::InvalidDeadline(text.clone())),
        }
    }
}

impl From<&str> for DeadlineInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

fn parse_deadline_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
