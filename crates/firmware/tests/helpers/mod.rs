//! Shared helpers for firmware integration tests.

#[allow(dead_code)]
pub mod log_capture;
