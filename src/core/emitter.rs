//! Message emitter
//!
//! The filter, format and dispatch routine shared by every logger. Each
//! emitter owns its configuration and sinks behind a single mutex, so calls
//! on one emitter are fully serialized while separate emitters never contend.

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_record::LogRecord,
    metrics::LoggerMetrics,
    output_format::format_line,
    output_preference::OutputPreference,
    sink::{ConsoleSink, FileSink},
};
use colored::Color;
use parking_lot::Mutex;
use std::io;

struct EmitterState {
    config: LoggerConfig,
    console: Box<dyn ConsoleSink>,
    file: Box<dyn FileSink>,
}

pub struct Emitter {
    state: Mutex<EmitterState>,
    metrics: LoggerMetrics,
}

impl Emitter {
    pub fn new(config: LoggerConfig, console: Box<dyn ConsoleSink>, file: Box<dyn FileSink>) -> Self {
        Self {
            state: Mutex::new(EmitterState {
                config,
                console,
                file,
            }),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Filter, format and write `record` to the sinks selected by the
    /// configuration and `preference`.
    ///
    /// A record below the minimum severity is dropped silently. Otherwise the
    /// console and the file are each attempted regardless of how the other
    /// fared; any failure is returned after both have been tried.
    pub fn emit(&self, record: &LogRecord, preference: OutputPreference) -> Result<()> {
        let mut state = self.state.lock();
        let EmitterState {
            config,
            console,
            file,
        } = &mut *state;

        if !config.should_log(record.severity()) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let line = format_line(record, &config.timestamp_format, config.source_name.as_deref())?;

        let console_result = if config.console_enabled && preference.includes_console() {
            write_console(
                &mut **console,
                config.colors.get(record.severity()),
                config.default_color,
                &line,
            )
            .map_err(LoggerError::console_write)
        } else {
            Ok(())
        };

        let file_result = if config.file_enabled && preference.includes_file() {
            file.append_line(&config.file_path, &line)
                .map_err(|e| LoggerError::file_write(config.file_path.display().to_string(), e))
        } else {
            Ok(())
        };

        if console_result.is_err() {
            self.metrics.record_console_failure();
        }
        if file_result.is_err() {
            self.metrics.record_file_failure();
        }

        match (console_result, file_result) {
            (Ok(()), Ok(())) => {
                self.metrics.record_emitted();
                Ok(())
            }
            (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
            (Err(console_err), Err(file_err)) => Err(LoggerError::sinks(console_err, file_err)),
        }
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.state.lock().config.clone()
    }

    /// Mutate the configuration under the emitter's lock.
    ///
    /// Must not log through the same emitter from inside `f`.
    pub fn update<R>(&self, f: impl FnOnce(&mut LoggerConfig) -> R) -> R {
        f(&mut self.state.lock().config)
    }

    pub fn replace_config(&self, config: LoggerConfig) {
        self.state.lock().config = config;
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

/// Restores the default foreground colour when it goes out of scope.
///
/// [`ColorGuard::restore`] restores explicitly and reports the outcome; if
/// the guard is dropped without it (early return, panic in a sink) the
/// restore is still attempted and its result discarded.
pub struct ColorGuard<'a> {
    console: &'a mut dyn ConsoleSink,
    restore_to: Color,
    armed: bool,
}

impl<'a> ColorGuard<'a> {
    pub fn new(console: &'a mut dyn ConsoleSink, restore_to: Color) -> Self {
        Self {
            console,
            restore_to,
            armed: true,
        }
    }

    pub fn console(&mut self) -> &mut dyn ConsoleSink {
        &mut *self.console
    }

    pub fn restore(mut self) -> io::Result<()> {
        self.armed = false;
        self.console.set_foreground(self.restore_to)
    }
}

impl Drop for ColorGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let _ = self.console.set_foreground(self.restore_to);
        }
    }
}

fn write_console(
    console: &mut dyn ConsoleSink,
    color: Color,
    default_color: Color,
    line: &str,
) -> io::Result<()> {
    let mut guard = ColorGuard::new(console, default_color);
    // A colour failure must not cost the line; the first error wins.
    let painted = guard.console().set_foreground(color);
    let written = guard.console().write_line(line);
    let restored = guard.restore();
    painted.and(written).and(restored)
}
