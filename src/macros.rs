//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to a
//! call on the logger and evaluates to its [`Result`](crate::Result).
//!
//! An optional `to: <OutputPreference>` right after the logger narrows the
//! call to one sink.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, warning};
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! // Console only
//! warning!(logger, to: OutputPreference::ConsoleOnly, "{} retries left", 2)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::log;
/// log!(logger, Severity::Info, "Simple message")?;
/// log!(logger, Severity::Error, "Error code: {}", 500)?;
/// log!(logger, Severity::Error, to: OutputPreference::FileOnly, "Error code: {}", 503)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, to: $preference:expr, $($arg:tt)+) => {
        $logger.log_to($severity, format!($($arg)+), $preference)
    };
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// # logger.set_min_severity(Severity::Debug);
/// use leveled_logger::debug;
/// debug!(logger, "Entering function: calculate()")?;
/// debug!(logger, "Variable value: {}", 42)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, to: $preference:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, to: $preference, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, to: $preference:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, to: $preference, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a success-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::success;
/// success!(logger, "Backup completed")?;
/// success!(logger, "Uploaded {} files", 12)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! success {
    ($logger:expr, to: $preference:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Success, to: $preference, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Success, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, to: $preference:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, to: $preference, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::error;
/// error!(logger, "Failed to connect to database")?;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, to: $preference:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, to: $preference, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, to: $preference:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, to: $preference, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}
