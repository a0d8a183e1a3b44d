//! Domain model for NexTask todo lists.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Enforce creation-time validation so invalid entities never exist.
//!
//! # Invariants
//! - Every domain object carries a stable UUID, never reused in-session.
//! - Entities are never physically deleted; lifecycle is create -> mutate
//!   until session end.

pub mod task;
pub mod todo;
