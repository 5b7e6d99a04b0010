//! Bounded line reads from an input stream.

use std::io::{BufRead, ErrorKind};

use anyhow::{Context, Result};

use crate::core::buffer::LineBuffer;

/// Read one line into `buf`: bytes up to and including the next newline, or
/// up to the buffer's spare payload capacity, whichever comes first.
///
/// Returns the number of bytes stored. `Ok(0)` means the stream reached end
/// of input before any byte of a new line arrived (for a buffer with no
/// spare capacity it is returned without touching the stream). Bytes are
/// appended at the buffer's current length; the capture loop resets the
/// buffer between lines, so a line longer than the capacity is consumed as
/// consecutive chunks, each looking like a line of its own.
///
/// Interrupted reads are retried, matching what a plain blocking read-line
/// call does.
pub fn read_line_bounded<R: BufRead>(reader: &mut R, buf: &mut LineBuffer) -> Result<usize> {
    let mut total = 0usize;
    loop {
        if buf.spare() == 0 {
            return Ok(total);
        }
        let (done, used) = {
            let chunk = match reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err).context("read input stream"),
            };
            if chunk.is_empty() {
                return Ok(total);
            }
            let window = &chunk[..chunk.len().min(buf.spare())];
            match window.iter().position(|&b| b == b'\n') {
                Some(pos) => (true, buf.push_bytes(&window[..=pos])),
                None => (false, buf.push_bytes(window)),
            }
        };
        reader.consume(used);
        total += used;
        if done {
            return Ok(total);
        }
    }
}
