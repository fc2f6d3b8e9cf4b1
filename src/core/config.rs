//! Logger configuration
//!
//! A [`LoggerConfig`] is a plain bundle of settings. Nothing here is
//! validated: a bad file path or timestamp pattern only fails when a record
//! is actually written.

use super::severity::Severity;
use super::timestamp::DEFAULT_TIMESTAMP_FORMAT;
use colored::Color;
use std::path::PathBuf;

/// File written to when no path is configured
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Console colour for each severity, exactly one entry per level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMap {
    colors: [Color; Severity::ALL.len()],
}

impl ColorMap {
    /// Stock colours with INFO mapped to `info`.
    pub fn with_info(info: Color) -> Self {
        let mut colors = Severity::ALL.map(|severity| severity.default_color());
        colors[Severity::Info.index()] = info;
        Self { colors }
    }

    #[inline]
    pub fn get(&self, severity: Severity) -> Color {
        self.colors[severity.index()]
    }

    pub fn set(&mut self, severity: Severity, color: Color) {
        self.colors[severity.index()] = color;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Severity, Color)> + '_ {
        Severity::ALL.iter().map(move |&severity| (severity, self.get(severity)))
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::with_info(Color::White)
    }
}

/// Settings owned by one logger instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    /// Records below this severity are dropped
    pub min_severity: Severity,
    pub console_enabled: bool,
    pub file_enabled: bool,
    pub file_path: PathBuf,
    /// strftime pattern for the leading timestamp
    pub timestamp_format: String,
    /// Foreground colour restored after every console line
    pub default_color: Color,
    /// Optional `[name]` tag written after the timestamp
    pub source_name: Option<String>,
    pub colors: ColorMap,
}

impl LoggerConfig {
    /// Defaults for an independently constructed logger: console on, file off.
    pub fn new() -> Self {
        let default_color = Color::White;
        Self {
            min_severity: Severity::Info,
            console_enabled: true,
            file_enabled: false,
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            default_color,
            source_name: None,
            colors: ColorMap::with_info(default_color),
        }
    }

    /// Defaults for the process-wide logger: console off, file on.
    pub fn shared_defaults() -> Self {
        Self {
            console_enabled: false,
            file_enabled: true,
            ..Self::new()
        }
    }

    /// Whether a record of `severity` passes the minimum-severity filter
    #[inline]
    pub fn should_log(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    /// Copy the current default colour into INFO's entry.
    ///
    /// Setting `default_color` alone leaves INFO at the colour it had when
    /// the configuration was built.
    pub fn resync_info_color(&mut self) {
        self.colors.set(Severity::Info, self.default_color);
    }

    #[must_use]
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Enable or disable the console and set its default colour.
    ///
    /// INFO's colour is reset to `default_color` as well, since this is a
    /// construction-time setting.
    #[must_use]
    pub fn with_console(mut self, enabled: bool, default_color: Color) -> Self {
        self.console_enabled = enabled;
        self.default_color = default_color;
        self.resync_info_color();
        self
    }

    #[must_use]
    pub fn with_file(mut self, enabled: bool, path: impl Into<PathBuf>) -> Self {
        self.file_enabled = enabled;
        self.file_path = path.into();
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_map_has_entry_per_severity() {
        let map = ColorMap::with_info(Color::Cyan);
        assert_eq!(map.iter().count(), Severity::ALL.len());
        assert_eq!(map.get(Severity::Info), Color::Cyan);
        assert_eq!(map.get(Severity::Error), Color::Red);
    }

    #[test]
    fn test_scoped_defaults() {
        let config = LoggerConfig::new();
        assert_eq!(config.min_severity, Severity::Info);
        assert!(config.console_enabled);
        assert!(!config.file_enabled);
        assert_eq!(config.file_path, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(config.default_color, Color::White);
        assert!(config.source_name.is_none());
        assert_eq!(config.colors.get(Severity::Info), config.default_color);
    }

    #[test]
    fn test_shared_defaults() {
        let config = LoggerConfig::shared_defaults();
        assert!(!config.console_enabled);
        assert!(config.file_enabled);
        assert_eq!(config.min_severity, Severity::Info);
    }

    #[test]
    fn test_info_color_is_a_snapshot() {
        let mut config = LoggerConfig::new().with_console(true, Color::Blue);
        assert_eq!(config.colors.get(Severity::Info), Color::Blue);

        config.default_color = Color::Magenta;
        assert_eq!(config.colors.get(Severity::Info), Color::Blue);

        config.resync_info_color();
        assert_eq!(config.colors.get(Severity::Info), Color::Magenta);
    }

    #[test]
    fn test_should_log() {
        let config = LoggerConfig::new().with_min_severity(Severity::Warning);
        assert!(!config.should_log(Severity::Info));
        assert!(config.should_log(Severity::Warning));
        assert!(config.should_log(Severity::Critical));
    }

    #[test]
    fn test_builder_pattern() {
        let config = LoggerConfig::new()
            .with_file(true, "/tmp/app.log")
            .with_timestamp_format("%H:%M")
            .with_source_name("worker-1");

        assert!(config.file_enabled);
        assert_eq!(config.file_path, PathBuf::from("/tmp/app.log"));
        assert_eq!(config.timestamp_format, "%H:%M");
        assert_eq!(config.source_name.as_deref(), Some("worker-1"));
    }
}
