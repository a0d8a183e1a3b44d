//! Todo list domain model.
//!
//! # Responsibility
//! - Define the named, ordered task collection ("Todo") shown on the home
//!   screen.
//! - Validate title and initial task input at creation.
//! - Derive the unchecked/checked partition the view renders.
//!
//! # Invariants
//! - `title` is non-empty after trimming.
//! - A list holds at least one task at creation; there is no delete
//!   operation, so it can never become empty afterwards.
//! - `tasks` preserves insertion order; `partition` never reorders within
//!   either group.

use crate::model::task::{Task, TaskId, TaskValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a todo list within the session.
pub type TodoId = Uuid;

/// Validation failure raised by list construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// List title is empty after trimming.
    EmptyTitle,
    /// No task text survived trimming; a list needs at least one task.
    NoTasks,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "todo title cannot be empty"),
            Self::NoTasks => write!(f, "a todo needs at least one task"),
        }
    }
}

impl Error for TodoValidationError {}

/// A named, ordered collection of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    /// Stable ID, unique within the session.
    pub id: TodoId,
    /// Trimmed display title, non-empty.
    pub title: String,
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Creates a list from user input.
    ///
    /// # Contract
    /// - The title is trimmed; an empty result rejects the whole creation.
    /// - `task_texts` entries blank after trimming are dropped silently; if
    ///   none survive, creation is rejected with `NoTasks`.
    /// - Surviving entries become unchecked tasks in input order.
    pub fn new<S: AsRef<str>>(
        title: impl AsRef<str>,
        task_texts: &[S],
    ) -> Result<Self, TodoValidationError> {
        let trimmed_title = title.as_ref().trim();
        if trimmed_title.is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }

        let tasks = task_texts
            .iter()
            .filter_map(|text| match Task::new(text.as_ref()) {
                Ok(task) => Some(task),
                Err(TaskValidationError::EmptyText) => None,
            })
            .collect::<Vec<_>>();

        if tasks.is_empty() {
            return Err(TodoValidationError::NoTasks);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            title: trimmed_title.to_string(),
            tasks,
        })
    }

    /// Looks up one task by ID.
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Returns whether every task in the list is checked.
    ///
    /// Used for the "Completed all tasks!" banner; a list is never empty, so
    /// this is `true` only when real work is done.
    pub fn all_checked(&self) -> bool {
        self.tasks.iter().all(|task| task.checked)
    }

    /// Number of checked tasks, shown in the "Show N Completed" toggle.
    pub fn checked_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.checked).count()
    }

    /// Splits tasks into (unchecked, checked) groups for display.
    ///
    /// Pure read-side derivation: both groups keep insertion order, cover
    /// the full task sequence between them, and share no task.
    pub fn partition(&self) -> (Vec<&Task>, Vec<&Task>) {
        self.tasks.iter().partition(|task| !task.checked)
    }
}
