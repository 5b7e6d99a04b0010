//! Side-effecting helpers: bounded stream reads and capture file handling.

pub mod sink;
pub mod source;
