//! Sentinel-terminated line capture into a file.
//!
//! This crate implements a small relay: lines arriving on an input stream are
//! appended verbatim to a capture file (`./a.txt`, truncated on open) until a
//! line equal to `quit` arrives, which stops the loop without being written.
//! Lines are raw bytes, capped at 1023 bytes per read; longer lines are split
//! and each chunk captured on its own. The architecture enforces a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (the line buffer, the sentinel
//!   check). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (bounded stream reads, capture
//!   file handling). Isolated to enable substitution in tests.
//!
//! The orchestration module ([`relay`]) coordinates core logic with I/O to
//! implement the capture loop the binary runs.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod relay;
