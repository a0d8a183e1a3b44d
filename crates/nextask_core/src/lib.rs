//! Core domain logic for NexTask.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod onboarding;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use model::todo::{TaskList, TodoId, TodoValidationError};
pub use onboarding::{
    default_slides, CompletionOutcome, OnboardingFlow, OnboardingState, Slide,
};
pub use repo::settings_repo::{
    RepoError, RepoResult, SettingsRepository, SqliteSettingsRepository, HAS_ONBOARDED_KEY,
    HAS_ONBOARDED_VALUE,
};
pub use service::todo_service::{TodoService, TodoView};
pub use store::todo_store::{StoreError, StoreResult, SubscriberId, TodoEvent, TodoStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
