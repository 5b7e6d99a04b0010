//! Capture file handling.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Open the capture file at `path` for writing, creating it if missing and
/// discarding any previous contents. Every run starts from an empty file.
///
/// The handle is returned unbuffered so each captured line reaches the file
/// as soon as it is written; dropping it closes the file.
pub fn open_truncate(path: &Path) -> Result<File> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("open capture file {}", path.display()))?;
    debug!(path = %path.display(), "capture file opened");
    Ok(file)
}
