//! Sink implementations

pub mod console;
pub mod file;

pub use console::TerminalConsole;
pub use file::{AppendFile, LINE_TERMINATOR};

pub use crate::core::{ConsoleSink, FileSink};
