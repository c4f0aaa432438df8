//! Append-only failure log
//!
//! One line per failure, `[error] <message>`, appended so a long crawl
//! accumulates a reviewable record of which pages failed and why. Console
//! reporting goes through tracing; this file is the durable side.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Appends one `[error]` line to the log, creating the file if absent
pub fn append_error(path: &Path, message: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "[error] {}", message)
}
