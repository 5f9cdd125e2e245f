//! Shared helpers for tests and diagnostics.

pub mod testing;
