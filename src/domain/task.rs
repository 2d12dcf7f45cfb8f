use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Opaque unique identifier for a task (seed ids like "1", generated ids are UUIDs)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub(crate) String);

impl TaskId {
    /// Generates a fresh identifier for a newly created task
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TaskId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(crate::error::BoardError::InvalidTaskId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trims raw user input, returning `None` when nothing is left.
pub fn normalize_text(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
}

impl Task {
    /// Creates a new task with the given ID and label
    pub fn new(id: TaskId, text: String) -> Self {
        Self { id, text }
    }

    /// Replaces the label with the trimmed input.
    ///
    /// Blank input leaves the current label untouched and returns `false`.
    pub fn set_text(&mut self, raw: &str) -> bool {
        match normalize_text(raw) {
            Some(text) => {
                self.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring match against an already lowercased needle
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.text.to_lowercase().contains(needle_lower)
    }
}
