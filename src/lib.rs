//! # Leveled Logger
//!
//! A small synchronous logger: messages tagged with a [`Severity`] are
//! filtered against a minimum level, formatted as
//! `[timestamp][source] LEVEL: message`, and written to a coloured console
//! and/or an append-only file.
//!
//! ## Features
//!
//! - **Two scopes**: a process-wide [`shared`] logger and independently
//!   built [`Logger`] instances, each with its own configuration and lock
//! - **Per-call routing**: [`OutputPreference`] narrows a call to the console,
//!   the file, or both
//! - **Failures surface**: a sink that cannot be written is reported to the
//!   caller after the other sink has been tried
//!
//! ```no_run
//! use leveled_logger::prelude::*;
//! use colored::Color;
//!
//! let worker = Logger::builder()
//!     .console(true, Color::White)
//!     .file(true, "worker.log")
//!     .source_name("worker-1")
//!     .build();
//!
//! worker.success("job finished")?;
//! worker.error_to("disk nearly full", OutputPreference::FileOnly)?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        reset_shared, shared, ColorMap, ConsoleSink, FileSink, LogRecord, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, OutputPreference, Result, Severity,
        DEFAULT_TIMESTAMP_FORMAT,
    };
    pub use crate::sinks::{AppendFile, TerminalConsole};
}

pub use crate::core::{
    format_line, format_timestamp, reset_shared, shared, validate_timestamp_format, ColorGuard,
    ColorMap, ConsoleSink, Emitter, FileSink, LogRecord, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, OutputPreference, Result, Severity, DEFAULT_LOG_FILE,
    DEFAULT_TIMESTAMP_FORMAT,
};
pub use sinks::{AppendFile, TerminalConsole};
