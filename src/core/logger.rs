//! Logger facade
//!
//! A [`Logger`] owns one [`Emitter`] and therefore one configuration and one
//! lock. Independent loggers never block each other. The process-wide
//! instance lives in [`crate::core::shared`].

use super::{
    config::LoggerConfig,
    emitter::Emitter,
    error::Result,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    output_preference::OutputPreference,
    severity::Severity,
    sink::{ConsoleSink, FileSink},
};
use crate::sinks::{AppendFile, TerminalConsole};
use colored::Color;
use std::path::PathBuf;

pub struct Logger {
    emitter: Emitter,
}

impl Logger {
    /// Logger with [`LoggerBuilder`] defaults: console on, file off,
    /// minimum severity INFO.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Logger writing to the terminal and the file system
    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        Self::with_sinks(config, TerminalConsole::new(), AppendFile::new())
    }

    /// Logger writing to caller-supplied sinks
    #[must_use]
    pub fn with_sinks(
        config: LoggerConfig,
        console: impl ConsoleSink + 'static,
        file: impl FileSink + 'static,
    ) -> Self {
        Self {
            emitter: Emitter::new(config, Box::new(console), Box::new(file)),
        }
    }

    /// Log to both sinks, subject to which are enabled.
    ///
    /// Returns the sink failure if either sink could not be written; the
    /// other sink has still been attempted.
    pub fn log(&self, severity: Severity, message: impl Into<String>) -> Result<()> {
        self.log_to(severity, message, OutputPreference::Both)
    }

    /// Log to the enabled sinks allowed by `preference`.
    pub fn log_to(
        &self,
        severity: Severity,
        message: impl Into<String>,
        preference: OutputPreference,
    ) -> Result<()> {
        let record = LogRecord::new(severity, message);
        self.emitter.emit(&record, preference)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Debug, message)
    }

    #[inline]
    pub fn debug_to(&self, message: impl Into<String>, preference: OutputPreference) -> Result<()> {
        self.log_to(Severity::Debug, message, preference)
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Info, message)
    }

    #[inline]
    pub fn info_to(&self, message: impl Into<String>, preference: OutputPreference) -> Result<()> {
        self.log_to(Severity::Info, message, preference)
    }

    #[inline]
    pub fn success(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Success, message)
    }

    #[inline]
    pub fn success_to(&self, message: impl Into<String>, preference: OutputPreference) -> Result<()> {
        self.log_to(Severity::Success, message, preference)
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Warning, message)
    }

    #[inline]
    pub fn warning_to(&self, message: impl Into<String>, preference: OutputPreference) -> Result<()> {
        self.log_to(Severity::Warning, message, preference)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Error, message)
    }

    #[inline]
    pub fn error_to(&self, message: impl Into<String>, preference: OutputPreference) -> Result<()> {
        self.log_to(Severity::Error, message, preference)
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Critical, message)
    }

    #[inline]
    pub fn critical_to(&self, message: impl Into<String>, preference: OutputPreference) -> Result<()> {
        self.log_to(Severity::Critical, message, preference)
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.emitter.config()
    }

    /// Change several settings at once, atomically with respect to logging.
    ///
    /// Must not log through the same logger from inside `f`: the lock is not
    /// re-entrant and the call would deadlock.
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::prelude::*;
    ///
    /// let logger = Logger::new();
    /// logger.configure(|cfg| {
    ///     cfg.min_severity = Severity::Warning;
    ///     cfg.source_name = Some("worker-3".to_string());
    /// });
    /// assert_eq!(logger.config().min_severity, Severity::Warning);
    /// ```
    pub fn configure<R>(&self, f: impl FnOnce(&mut LoggerConfig) -> R) -> R {
        self.emitter.update(f)
    }

    pub fn replace_config(&self, config: LoggerConfig) {
        self.emitter.replace_config(config);
    }

    pub fn set_min_severity(&self, severity: Severity) {
        self.configure(|cfg| cfg.min_severity = severity);
    }

    pub fn set_console_enabled(&self, enabled: bool) {
        self.configure(|cfg| cfg.console_enabled = enabled);
    }

    pub fn set_file_enabled(&self, enabled: bool) {
        self.configure(|cfg| cfg.file_enabled = enabled);
    }

    pub fn set_file_path(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.configure(|cfg| cfg.file_path = path);
    }

    pub fn set_timestamp_format(&self, format: impl Into<String>) {
        let format = format.into();
        self.configure(|cfg| cfg.timestamp_format = format);
    }

    /// Change the colour restored after each console line.
    ///
    /// INFO keeps the colour it was built with; call
    /// [`Logger::resync_info_color`] to follow the new default.
    pub fn set_default_color(&self, color: Color) {
        self.configure(|cfg| cfg.default_color = color);
    }

    pub fn set_source_name(&self, name: Option<String>) {
        self.configure(|cfg| cfg.source_name = name);
    }

    pub fn set_severity_color(&self, severity: Severity, color: Color) {
        self.configure(|cfg| cfg.colors.set(severity, color));
    }

    pub fn resync_info_color(&self) {
        self.configure(LoggerConfig::resync_info_color);
    }

    /// Counters for filtered, written and failed calls
    pub fn metrics(&self) -> &LoggerMetrics {
        self.emitter.metrics()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
/// use colored::Color;
///
/// let logger = Logger::builder()
///     .min_severity(Severity::Debug)
///     .console(true, Color::Cyan)
///     .file(false, "worker.log")
///     .source_name("worker-1")
///     .build();
///
/// assert_eq!(logger.config().colors.get(Severity::Info), Color::Cyan);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console: Option<Box<dyn ConsoleSink>>,
    file: Option<Box<dyn FileSink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::new(),
            console: None,
            file: None,
        }
    }

    /// strftime pattern for the timestamp, `%Y-%m-%d %H:%M:%S%.3f` by default
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.config.timestamp_format = format.into();
        self
    }

    /// Minimum severity, INFO by default
    #[must_use = "builder methods return a new value"]
    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.config.min_severity = severity;
        self
    }

    /// Console on/off and its default colour; on and white by default.
    /// INFO lines use the same colour.
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, enabled: bool, default_color: Color) -> Self {
        self.config = self.config.with_console(enabled, default_color);
        self
    }

    /// File on/off and its path; off and `log.txt` by default
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, enabled: bool, path: impl Into<PathBuf>) -> Self {
        self.config = self.config.with_file(enabled, path);
        self
    }

    /// Tag written as `[name]` after the timestamp; none by default
    #[must_use = "builder methods return a new value"]
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.config.source_name = Some(name.into());
        self
    }

    /// Replace the terminal with another console sink
    #[must_use = "builder methods return a new value"]
    pub fn console_sink<C: ConsoleSink + 'static>(mut self, sink: C) -> Self {
        self.console = Some(Box::new(sink));
        self
    }

    /// Replace the append-file writer with another file sink
    #[must_use = "builder methods return a new value"]
    pub fn file_sink<F: FileSink + 'static>(mut self, sink: F) -> Self {
        self.file = Some(Box::new(sink));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let console = self
            .console
            .unwrap_or_else(|| Box::new(TerminalConsole::new()));
        let file = self.file.unwrap_or_else(|| Box::new(AppendFile::new()));

        Logger {
            emitter: Emitter::new(self.config, console, file),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
