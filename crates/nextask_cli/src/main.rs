//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nextask_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("nextask_core ping={}", nextask_core::ping());
    println!("nextask_core version={}", nextask_core::core_version());
}
