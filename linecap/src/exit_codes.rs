//! Stable exit codes for the linecap binary.

/// The sentinel line arrived and the capture finished cleanly.
pub const OK: i32 = 0;
/// The capture file could not be opened or an I/O operation failed.
pub const IO_ERROR: i32 = 1;
/// Standard input closed before any sentinel line.
pub const INPUT_CLOSED: i32 = 2;
