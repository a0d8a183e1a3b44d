//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations into use-case level APIs.
//! - Keep UI/FFI layers decoupled from store internals.

pub mod todo_service;
