//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the home screen's entry points over the in-memory store.
//! - Emit structured diagnostics for applied and rejected mutations.
//! - Derive render-ready view snapshots with the unchecked/checked split.
//!
//! # Invariants
//! - Rejections never mutate state; the UI keeps its input and may retry.
//! - `views()` ordering follows list creation order.

use crate::model::task::{Task, TaskId};
use crate::model::todo::{TaskList, TodoId};
use crate::store::todo_store::{StoreResult, SubscriberId, TodoEvent, TodoStore};
use log::{info, warn};

/// Render-ready snapshot of one todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    /// Stable list ID.
    pub id: TodoId,
    /// Display title.
    pub title: String,
    /// Unfinished tasks, insertion order.
    pub unchecked: Vec<Task>,
    /// Finished tasks, insertion order; drives the "Show N Completed" group.
    pub checked: Vec<Task>,
    /// Mass-check icon state (flag-driven, see store docs).
    pub mass_checked: bool,
    /// True when every task is checked; drives the completion banner.
    pub all_done: bool,
}

/// Use-case facade over the session todo store.
#[derive(Default)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    /// Creates a service with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over an existing store (tests, pre-seeded state).
    pub fn with_store(store: TodoStore) -> Self {
        Self { store }
    }

    /// Registers a view binding for store change events.
    pub fn subscribe(&mut self, callback: Box<dyn Fn(&TodoEvent) + Send>) -> SubscriberId {
        self.store.subscribe(callback)
    }

    /// Drops a previously registered subscriber.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.store.unsubscribe(id)
    }

    /// Creates a todo list from modal input.
    pub fn create_todo<S: AsRef<str>>(
        &mut self,
        title: impl AsRef<str>,
        task_texts: &[S],
    ) -> StoreResult<TodoId> {
        match self.store.create_list(title, task_texts) {
            Ok(list_id) => {
                info!("event=create_todo module=todo status=ok list_id={list_id}");
                Ok(list_id)
            }
            Err(err) => {
                warn!("event=create_todo module=todo status=rejected reason={err}");
                Err(err)
            }
        }
    }

    /// Appends one task to an existing list.
    pub fn add_task(&mut self, list_id: TodoId, text: impl AsRef<str>) -> StoreResult<TaskId> {
        match self.store.add_task(list_id, text) {
            Ok(task_id) => {
                info!("event=add_task module=todo status=ok list_id={list_id} task_id={task_id}");
                Ok(task_id)
            }
            Err(err) => {
                warn!("event=add_task module=todo status=rejected list_id={list_id} reason={err}");
                Err(err)
            }
        }
    }

    /// Flips one task's completion flag; unknown IDs are ignored.
    pub fn toggle_task(&mut self, list_id: TodoId, task_id: TaskId) {
        self.store.toggle_task(list_id, task_id);
    }

    /// Runs the mass-check cycle on one list; unknown IDs are ignored.
    pub fn toggle_all(&mut self, list_id: TodoId) {
        self.store.toggle_all(list_id);
    }

    /// Snapshot of one list, or `None` when the ID does not resolve.
    pub fn view(&self, list_id: TodoId) -> Option<TodoView> {
        self.store.list(list_id).map(|list| self.snapshot(list))
    }

    /// Snapshots of every list, creation order.
    pub fn views(&self) -> Vec<TodoView> {
        self.store
            .lists()
            .iter()
            .map(|list| self.snapshot(list))
            .collect()
    }

    fn snapshot(&self, list: &TaskList) -> TodoView {
        let (unchecked, checked) = list.partition();
        TodoView {
            id: list.id,
            title: list.title.clone(),
            unchecked: unchecked.into_iter().cloned().collect(),
            checked: checked.into_iter().cloned().collect(),
            mass_checked: self.store.is_mass_checked(list.id),
            all_done: list.all_checked(),
        }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &TodoStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::TodoService;

    #[test]
    fn view_partitions_and_flags() {
        let mut service = TodoService::new();
        let list_id = service.create_todo("Groceries", &["Milk", "Eggs"]).unwrap();

        let milk = service.store().list(list_id).unwrap().tasks[0].id;
        service.toggle_task(list_id, milk);

        let view = service.view(list_id).unwrap();
        assert_eq!(view.title, "Groceries");
        assert_eq!(view.unchecked.len(), 1);
        assert_eq!(view.unchecked[0].text, "Eggs");
        assert_eq!(view.checked.len(), 1);
        assert_eq!(view.checked[0].text, "Milk");
        assert!(!view.mass_checked);
        assert!(!view.all_done);
    }

    #[test]
    fn all_done_after_mass_check() {
        let mut service = TodoService::new();
        let list_id = service.create_todo("T", &["a", "b"]).unwrap();

        service.toggle_all(list_id);
        let view = service.view(list_id).unwrap();
        assert!(view.all_done);
        assert!(view.mass_checked);
        assert!(view.unchecked.is_empty());
    }

    #[test]
    fn views_follow_creation_order() {
        let mut service = TodoService::new();
        let first = service.create_todo("First", &["a"]).unwrap();
        let second = service.create_todo("Second", &["b"]).unwrap();

        let ids: Vec<_> = service.views().into_iter().map(|view| view.id).collect();
        assert_eq!(ids, [first, second]);
    }
}
