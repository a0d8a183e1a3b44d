//! Task domain model.
//!
//! # Responsibility
//! - Define the single checkable item displayed inside a todo list.
//! - Validate display text once, at creation.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty after trimming; it is never re-validated after
//!   creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task within the session.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation failure raised by task construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is empty after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single checkable item with display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID, unique within the session.
    pub id: TaskId,
    /// Trimmed display text, non-empty.
    pub text: String,
    /// Completion flag, starts unchecked.
    pub checked: bool,
}

impl Task {
    /// Creates an unchecked task from user input.
    ///
    /// The text is trimmed before storage. Returns `EmptyText` when nothing
    /// remains after trimming, leaving no way to build a blank task.
    pub fn new(text: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            text: trimmed.to_string(),
            checked: false,
        })
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskValidationError};

    #[test]
    fn new_trims_and_starts_unchecked() {
        let task = Task::new("  Milk  ").unwrap();
        assert_eq!(task.text, "Milk");
        assert!(!task.checked);
        assert!(!task.id.is_nil());
    }

    #[test]
    fn new_rejects_blank_text() {
        assert_eq!(Task::new("   ").unwrap_err(), TaskValidationError::EmptyText);
        assert_eq!(Task::new("").unwrap_err(), TaskValidationError::EmptyText);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut task = Task::new("Eggs").unwrap();
        task.toggle();
        assert!(task.checked);
        task.toggle();
        assert!(!task.checked);
    }
}
