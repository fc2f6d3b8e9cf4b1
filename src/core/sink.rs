//! Sink traits for log output destinations
//!
//! The emitter only ever asks a console to change colour or write a line,
//! and a file system to append a line. Anything satisfying these traits can
//! stand in for the terminal or the disk.

use colored::Color;
use std::io;
use std::path::Path;

pub trait ConsoleSink: Send {
    /// Switch the foreground colour for subsequent writes.
    fn set_foreground(&mut self, color: Color) -> io::Result<()>;

    /// Write `line` followed by the host newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

pub trait FileSink: Send {
    /// Append `line` plus a terminator to the file at `path`, creating it if
    /// absent.
    fn append_line(&mut self, path: &Path, line: &str) -> io::Result<()>;
}

impl<T: ConsoleSink + ?Sized> ConsoleSink for Box<T> {
    fn set_foreground(&mut self, color: Color) -> io::Result<()> {
        (**self).set_foreground(color)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<T: FileSink + ?Sized> FileSink for Box<T> {
    fn append_line(&mut self, path: &Path, line: &str) -> io::Result<()> {
        (**self).append_line(path, line)
    }
}
