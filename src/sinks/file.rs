//! Append-only file sink

use crate::core::FileSink;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Terminator written after every file line, on every platform
pub const LINE_TERMINATOR: &str = "\r\n";

/// Opens, appends to and closes the target file on every call.
///
/// No handle is kept between calls, so the file may be truncated, moved or
/// deleted by something else between writes; the next write reopens it.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppendFile;

impl AppendFile {
    pub fn new() -> Self {
        Self
    }
}

impl FileSink for AppendFile {
    fn append_line(&mut self, path: &Path, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        // Whole line in a single write.
        let mut output = String::with_capacity(line.len() + LINE_TERMINATOR.len());
        output.push_str(line);
        output.push_str(LINE_TERMINATOR);

        file.write_all(output.as_bytes())?;
        file.flush()
    }
}
