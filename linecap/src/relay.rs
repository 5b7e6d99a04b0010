//! The capture loop: read lines from an input stream and append them to a
//! sink until the sentinel line arrives or the input closes.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, instrument, trace};

use crate::core::buffer::LineBuffer;
use crate::core::sentinel::is_sentinel;
use crate::io::sink::open_truncate;
use crate::io::source::read_line_bounded;

/// Where captured lines land, relative to the working directory.
pub const OUTPUT_PATH: &str = "./a.txt";

/// Why the capture loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayStop {
    /// The sentinel line arrived. It is not written to the sink.
    Sentinel,
    /// The input stream closed before any sentinel line.
    InputClosed,
}

/// What a finished capture loop did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOutcome {
    /// Lines written to the sink. A long line split at the payload cap
    /// counts once per chunk.
    pub lines_relayed: u64,
    /// Bytes written to the sink.
    pub bytes_relayed: u64,
    /// Why the loop stopped.
    pub stop: RelayStop,
}

/// Relay lines from `input` to `output` until the sentinel or end of input.
///
/// Each line is checked against the sentinel before it is written, so the
/// sentinel itself never reaches the sink. The buffer is re-zeroed between
/// lines; the sentinel check sees exactly one line at a time even when a
/// long line was split at the payload cap.
pub fn run_relay<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<RelayOutcome> {
    let mut buf = LineBuffer::new();
    let mut lines_relayed = 0u64;
    let mut bytes_relayed = 0u64;
    let stop = loop {
        let n = read_line_bounded(input, &mut buf)?;
        if n == 0 {
            break RelayStop::InputClosed;
        }
        if is_sentinel(buf.raw()) {
            break RelayStop::Sentinel;
        }
        output.write_all(buf.line()).context("write captured line")?;
        trace!(len = n, "line relayed");
        lines_relayed += 1;
        bytes_relayed += n as u64;
        buf.reset();
    };
    debug!(?stop, lines_relayed, bytes_relayed, "relay stopped");
    Ok(RelayOutcome {
        lines_relayed,
        bytes_relayed,
        stop,
    })
}

/// Run the capture loop against a freshly truncated file at `path`.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn relay_to_path<R: BufRead>(input: &mut R, path: &Path) -> Result<RelayOutcome> {
    let mut sink = open_truncate(path)?;
    run_relay(input, &mut sink)
}
