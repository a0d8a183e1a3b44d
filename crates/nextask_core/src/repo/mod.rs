//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value data access contract used by onboarding.
//! - Isolate SQLite query details from flow orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors in addition to DB transport
//!   errors; they never panic.

pub mod settings_repo;
