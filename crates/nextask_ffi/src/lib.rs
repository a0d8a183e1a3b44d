//! Flutter-facing FFI layer for NexTask core.

pub mod api;
