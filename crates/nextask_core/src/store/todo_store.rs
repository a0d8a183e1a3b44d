//! Observable in-memory todo store.
//!
//! # Responsibility
//! - Hold every `TaskList` created this session, in creation order.
//! - Apply create/add/toggle mutations and the per-list mass-check cycle.
//! - Push change events to subscribed view bindings after each mutation.
//!
//! # Invariants
//! - The store is the single owner of list state; views only read snapshots
//!   and dispatch mutation requests back here.
//! - Rejected mutations leave state untouched, so the user may retry as-is.
//! - Events fire synchronously after the mutation applies, in call order.
//! - Unknown IDs in toggle paths are silent no-ops; `add_task` on an unknown
//!   list returns `ListNotFound`, which callers may discard to get the same
//!   no-op behavior.

use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::model::todo::{TaskList, TodoId, TodoValidationError};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Mutation failure for store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// List creation input failed validation.
    InvalidTodo(TodoValidationError),
    /// Task input failed validation.
    InvalidTask(TaskValidationError),
    /// Addressed list does not exist.
    ListNotFound(TodoId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTodo(err) => write!(f, "{err}"),
            Self::InvalidTask(err) => write!(f, "{err}"),
            Self::ListNotFound(id) => write!(f, "todo not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTodo(err) => Some(err),
            Self::InvalidTask(err) => Some(err),
            Self::ListNotFound(_) => None,
        }
    }
}

impl From<TodoValidationError> for StoreError {
    fn from(value: TodoValidationError) -> Self {
        Self::InvalidTodo(value)
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidTask(value)
    }
}

/// Change notification pushed to subscribers after a mutation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoEvent {
    /// A new list was appended to the collection.
    ListCreated { list_id: TodoId },
    /// A task was appended to an existing list.
    TaskAdded { list_id: TodoId, task_id: TaskId },
    /// One task's completion flag flipped; `checked` is the new value.
    TaskToggled {
        list_id: TodoId,
        task_id: TaskId,
        checked: bool,
    },
    /// Mass-check applied; `checked` is the uniform value written.
    MassToggled { list_id: TodoId, checked: bool },
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn Fn(&TodoEvent) + Send>;

/// Single-owner observable store for the session's todo lists.
#[derive(Default)]
pub struct TodoStore {
    lists: Vec<TaskList>,
    // Per-list mass-check flag. Tracked independently of per-task state,
    // matching the home screen's cycling icon; may desync after individual
    // toggles. `TaskList::all_checked` is the derived truth.
    mass_checked: HashMap<TodoId, bool>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
}

impl TodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a view binding for change notifications.
    pub fn subscribe(&mut self, callback: Subscriber) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, callback));
        id
    }

    /// Drops a previously registered subscriber. Unknown IDs are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    /// All lists in creation order.
    pub fn lists(&self) -> &[TaskList] {
        &self.lists
    }

    /// Looks up one list by ID.
    pub fn list(&self, list_id: TodoId) -> Option<&TaskList> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    /// Current mass-check flag for a list; absent entries read as `false`.
    pub fn is_mass_checked(&self, list_id: TodoId) -> bool {
        self.mass_checked.get(&list_id).copied().unwrap_or(false)
    }

    /// Validates and appends a new list built from user input.
    ///
    /// # Contract
    /// - Rejects a blank title or an input set with no non-blank task text.
    /// - On success the list lands at the end of the collection and a
    ///   `ListCreated` event fires.
    pub fn create_list<S: AsRef<str>>(
        &mut self,
        title: impl AsRef<str>,
        task_texts: &[S],
    ) -> StoreResult<TodoId> {
        let list = TaskList::new(title, task_texts)?;
        let list_id = list.id;
        self.lists.push(list);
        self.notify(&TodoEvent::ListCreated { list_id });
        Ok(list_id)
    }

    /// Appends one unchecked task to an existing list.
    ///
    /// # Contract
    /// - Rejects blank text before touching the list.
    /// - Rejects unknown `list_id` with `ListNotFound`.
    /// - Insertion order is preserved; a `TaskAdded` event fires on success.
    pub fn add_task(&mut self, list_id: TodoId, text: impl AsRef<str>) -> StoreResult<TaskId> {
        let task = Task::new(text)?;
        let task_id = task.id;

        let list = self
            .lists
            .iter_mut()
            .find(|list| list.id == list_id)
            .ok_or(StoreError::ListNotFound(list_id))?;
        list.tasks.push(task);

        self.notify(&TodoEvent::TaskAdded { list_id, task_id });
        Ok(task_id)
    }

    /// Flips one task's completion flag.
    ///
    /// Silent no-op when either ID does not resolve.
    pub fn toggle_task(&mut self, list_id: TodoId, task_id: TaskId) {
        let Some(list) = self.lists.iter_mut().find(|list| list.id == list_id) else {
            return;
        };
        let Some(task) = list.tasks.iter_mut().find(|task| task.id == task_id) else {
            return;
        };

        task.toggle();
        let checked = task.checked;
        self.notify(&TodoEvent::TaskToggled {
            list_id,
            task_id,
            checked,
        });
    }

    /// Mass-check cycle: writes the negation of the per-list flag to every
    /// task, then flips the flag.
    ///
    /// First invocation checks everything, the second unchecks everything,
    /// regardless of individual toggles in between. Silent no-op on an
    /// unknown list.
    pub fn toggle_all(&mut self, list_id: TodoId) {
        let Some(list) = self.lists.iter_mut().find(|list| list.id == list_id) else {
            return;
        };

        let flag = self.mass_checked.get(&list_id).copied().unwrap_or(false);
        let checked = !flag;
        for task in &mut list.tasks {
            task.checked = checked;
        }
        self.mass_checked.insert(list_id, checked);

        self.notify(&TodoEvent::MassToggled { list_id, checked });
    }

    fn notify(&self, event: &TodoEvent) {
        for (_, subscriber) in &self.subscribers {
            subscriber(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreError, TodoEvent, TodoStore};
    use crate::model::todo::TodoValidationError;
    use std::sync::mpsc;
    use uuid::Uuid;

    #[test]
    fn create_list_rejections_leave_store_empty() {
        let mut store = TodoStore::new();

        let err = store.create_list("", &["a"]).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidTodo(TodoValidationError::EmptyTitle)
        );

        let err = store.create_list("T", &["", "  "]).unwrap_err();
        assert_eq!(err, StoreError::InvalidTodo(TodoValidationError::NoTasks));

        assert!(store.lists().is_empty());
    }

    #[test]
    fn add_task_to_unknown_list_is_rejected() {
        let mut store = TodoStore::new();
        let missing = Uuid::new_v4();
        let err = store.add_task(missing, "orphan").unwrap_err();
        assert_eq!(err, StoreError::ListNotFound(missing));
    }

    #[test]
    fn toggle_paths_ignore_unknown_ids() {
        let mut store = TodoStore::new();
        let list_id = store.create_list("T", &["a"]).unwrap();

        store.toggle_task(Uuid::new_v4(), Uuid::new_v4());
        store.toggle_task(list_id, Uuid::new_v4());
        store.toggle_all(Uuid::new_v4());

        let list = store.list(list_id).unwrap();
        assert!(list.tasks.iter().all(|task| !task.checked));
        assert!(!store.is_mass_checked(list_id));
    }

    #[test]
    fn subscribers_observe_mutations_in_order() {
        let (sender, receiver) = mpsc::channel();
        let mut store = TodoStore::new();
        store.subscribe(Box::new(move |event| {
            sender.send(*event).unwrap();
        }));

        let list_id = store.create_list("T", &["a"]).unwrap();
        let task_id = store.add_task(list_id, "b").unwrap();
        store.toggle_task(list_id, task_id);
        store.toggle_all(list_id);

        assert_eq!(receiver.recv().unwrap(), TodoEvent::ListCreated { list_id });
        assert_eq!(
            receiver.recv().unwrap(),
            TodoEvent::TaskAdded { list_id, task_id }
        );
        assert_eq!(
            receiver.recv().unwrap(),
            TodoEvent::TaskToggled {
                list_id,
                task_id,
                checked: true,
            }
        );
        assert_eq!(
            receiver.recv().unwrap(),
            TodoEvent::MassToggled {
                list_id,
                checked: true,
            }
        );
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let (sender, receiver) = mpsc::channel();
        let mut store = TodoStore::new();
        let subscription = store.subscribe(Box::new(move |event| {
            sender.send(*event).unwrap();
        }));

        store.unsubscribe(subscription);
        store.create_list("T", &["a"]).unwrap();
        assert!(receiver.try_recv().is_err());
    }
}
