//! In-memory session state for the home screen.
//!
//! # Responsibility
//! - Own the ordered todo collection and its mutation operations.
//! - Notify view bindings after each applied mutation.
//!
//! # Invariants
//! - Task/list state lives only for the session; durability is out of scope.
//! - Mutations apply strictly in call order from the single UI event context.

pub mod todo_store;
