//! Pure, deterministic logic for the capture loop.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! bytes and return deterministic outputs suitable for tests.

pub mod buffer;
pub mod sentinel;
