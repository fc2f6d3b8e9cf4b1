//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Console sink failed to change colour or write the line
    #[error("Console write failed: {source}")]
    ConsoleWrite {
        #[source]
        source: std::io::Error,
    },

    /// File sink failed to open or append
    #[error("File write failed for '{path}': {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Both sinks failed during the same call
    #[error("Both sinks failed: {console}; {file}")]
    Sinks {
        console: Box<LoggerError>,
        file: Box<LoggerError>,
    },

    /// Timestamp format string could not be rendered
    #[error("Invalid timestamp format '{format}'")]
    TimestampFormat { format: String },
}

impl LoggerError {
    /// Create a console write error
    pub fn console_write(source: std::io::Error) -> Self {
        LoggerError::ConsoleWrite { source }
    }

    /// Create a file write error for the given path
    pub fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Combine the failures of both sinks
    pub fn sinks(console: LoggerError, file: LoggerError) -> Self {
        LoggerError::Sinks {
            console: Box::new(console),
            file: Box::new(file),
        }
    }

    /// Create a timestamp format error
    pub fn timestamp_format(format: impl Into<String>) -> Self {
        LoggerError::TimestampFormat {
            format: format.into(),
        }
    }

    /// Whether the console sink contributed to this failure
    pub fn involves_console(&self) -> bool {
        matches!(self, LoggerError::ConsoleWrite { .. } | LoggerError::Sinks { .. })
    }

    /// Whether the file sink contributed to this failure
    pub fn involves_file(&self) -> bool {
        matches!(self, LoggerError::FileWrite { .. } | LoggerError::Sinks { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = LoggerError::file_write(
            "/var/log/app.log",
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        );
        assert_eq!(
            err.to_string(),
            "File write failed for '/var/log/app.log': access denied"
        );

        let err = LoggerError::timestamp_format("%Q");
        assert_eq!(err.to_string(), "Invalid timestamp format '%Q'");
    }

    #[test]
    fn test_combined_sinks_error() {
        let err = LoggerError::sinks(
            LoggerError::console_write(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
            LoggerError::file_write("out.log", io::Error::new(io::ErrorKind::Other, "disk full")),
        );

        assert!(err.involves_console());
        assert!(err.involves_file());
        let text = err.to_string();
        assert!(text.contains("closed"));
        assert!(text.contains("disk full"));
    }

    #[test]
    fn test_single_sink_involvement() {
        let err = LoggerError::console_write(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.involves_console());
        assert!(!err.involves_file());
    }

    #[test]
    fn test_timestamp_error_involves_no_sink() {
        let err = LoggerError::timestamp_format("%Q");
        assert!(!err.involves_console());
        assert!(!err.involves_file());
    }
}
