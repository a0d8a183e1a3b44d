//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for UI integration: envelope structs, no
//!   exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The todo board is process-global, in-memory session state; only the
//!   onboarding flag touches storage.

use nextask_core::db::open_db;
use nextask_core::{
    core_version as core_version_inner, default_slides, init_logging as init_logging_inner,
    ping as ping_inner, OnboardingFlow, SqliteSettingsRepository, Task, TodoId, TodoService,
};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

const SETTINGS_DB_FILE_NAME: &str = "nextask_settings.sqlite3";
static SETTINGS_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static BOARD: OnceLock<Mutex<TodoService>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; conflicts return an error.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One onboarding slide for carousel rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideItem {
    pub title: String,
    pub description: String,
}

/// Onboarding transition envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingResponse {
    /// Whether the flow reached `Completed`.
    pub ok: bool,
    /// Whether the `hasOnboarded` flag reached storage.
    pub persisted: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Generic action response envelope for board mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Created entity ID, when the operation creates one.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// One task inside a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

impl From<&Task> for TaskItem {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            text: task.text.clone(),
            checked: task.checked,
        }
    }
}

/// Render-ready snapshot of one todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoSnapshot {
    pub id: String,
    pub title: String,
    /// Unfinished tasks, insertion order.
    pub unchecked: Vec<TaskItem>,
    /// Finished tasks, insertion order.
    pub checked: Vec<TaskItem>,
    /// Mass-check icon state.
    pub mass_checked: bool,
    /// Drives the "Completed all tasks!" banner.
    pub all_done: bool,
}

/// Returns the built-in slide deck.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn onboarding_slides() -> Vec<SlideItem> {
    default_slides()
        .into_iter()
        .map(|slide| SlideItem {
            title: slide.title,
            description: slide.description,
        })
        .collect()
}

/// Reads the persisted onboarding flag.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; a storage failure reads as not-onboarded so the slides
///   show.
#[flutter_rust_bridge::frb(sync)]
pub fn has_onboarded() -> bool {
    let db_path = resolve_settings_db_path();
    let Ok(conn) = open_db(&db_path) else {
        return false;
    };
    let repo = SqliteSettingsRepository::new(&conn);
    OnboardingFlow::start(repo, default_slides()).is_completed()
}

/// Completes onboarding from the last slide ("Get Started").
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; the transition succeeds even when the flag write fails,
///   reported through `persisted`.
#[flutter_rust_bridge::frb(sync)]
pub fn complete_onboarding() -> OnboardingResponse {
    finish_onboarding(false)
}

/// Completes onboarding through the skip path.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Gated on persistence identically to `complete_onboarding`.
#[flutter_rust_bridge::frb(sync)]
pub fn skip_onboarding() -> OnboardingResponse {
    finish_onboarding(true)
}

fn finish_onboarding(via_skip: bool) -> OnboardingResponse {
    let db_path = resolve_settings_db_path();
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            // Storage is unreachable; honor the non-blocking contract and
            // let the user through anyway.
            log::error!("event=onboarding_complete module=ffi status=error error={err}");
            return OnboardingResponse {
                ok: true,
                persisted: false,
                message: format!("settings DB open failed: {err}"),
            };
        }
    };

    let repo = SqliteSettingsRepository::new(&conn);
    let mut flow = OnboardingFlow::new(repo, default_slides());
    let outcome = if via_skip {
        flow.skip()
    } else {
        while !flow.is_last_slide() && !flow.is_completed() {
            flow.advance();
        }
        flow.advance()
    };

    match outcome {
        Some(outcome) => OnboardingResponse {
            ok: true,
            persisted: outcome.persisted,
            message: if outcome.persisted {
                "Onboarding completed.".to_string()
            } else {
                "Onboarding completed; flag not persisted.".to_string()
            },
        },
        None => OnboardingResponse {
            ok: true,
            persisted: false,
            message: "Onboarding already completed.".to_string(),
        },
    }
}

/// Creates a todo list from the add-todo modal.
///
/// # FFI contract
/// - Sync call against in-memory session state.
/// - Never panics; validation rejections come back as `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn create_todo(title: String, task_texts: Vec<String>) -> ActionResponse {
    let mut board = board();
    match board.create_todo(&title, task_texts.as_slice()) {
        Ok(list_id) => ActionResponse::success("Todo created.", Some(list_id.to_string())),
        Err(err) => ActionResponse::failure(format!("create_todo failed: {err}")),
    }
}

/// Appends one task to an existing todo list.
///
/// # FFI contract
/// - Sync call against in-memory session state.
/// - Never panics; validation rejections come back as `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(todo_id: String, text: String) -> ActionResponse {
    let list_id = match parse_id(&todo_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let mut board = board();
    match board.add_task(list_id, &text) {
        Ok(task_id) => ActionResponse::success("Task added.", Some(task_id.to_string())),
        Err(err) => ActionResponse::failure(format!("add_task failed: {err}")),
    }
}

/// Flips one task's checkbox.
///
/// # FFI contract
/// - Sync call against in-memory session state.
/// - Unknown IDs are silent no-ops, matching the home screen behavior.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_task(todo_id: String, task_id: String) -> ActionResponse {
    let (Ok(list_id), Ok(task_id)) = (parse_id(&todo_id), parse_id(&task_id)) else {
        return ActionResponse::failure("invalid id");
    };
    board().toggle_task(list_id, task_id);
    ActionResponse::success("Toggled.", None)
}

/// Runs the mass-check cycle on one list.
///
/// # FFI contract
/// - Sync call against in-memory session state.
/// - Unknown IDs are silent no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_all(todo_id: String) -> ActionResponse {
    let list_id = match parse_id(&todo_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    board().toggle_all(list_id);
    ActionResponse::success("Toggled all.", None)
}

/// Snapshots every todo list for home screen rendering.
///
/// # FFI contract
/// - Sync call, non-blocking, never panics.
/// - Snapshots follow list creation order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_todos() -> Vec<TodoSnapshot> {
    board()
        .views()
        .into_iter()
        .map(|view| TodoSnapshot {
            id: view.id.to_string(),
            title: view.title,
            unchecked: view.unchecked.iter().map(TaskItem::from).collect(),
            checked: view.checked.iter().map(TaskItem::from).collect(),
            mass_checked: view.mass_checked,
            all_done: view.all_done,
        })
        .collect()
}

fn parse_id(raw: &str) -> Result<TodoId, ActionResponse> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ActionResponse::failure(format!("invalid id `{raw}`")))
}

fn board() -> MutexGuard<'static, TodoService> {
    BOARD
        .get_or_init(|| Mutex::new(TodoService::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn resolve_settings_db_path() -> PathBuf {
    SETTINGS_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("NEXTASK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(SETTINGS_DB_FILE_NAME)
        })
        .clone()
}
