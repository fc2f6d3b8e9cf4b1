//! Log record structure

use super::severity::Severity;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single message on its way to the sinks.
///
/// Records are built per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    severity: Severity,
    timestamp: DateTime<Local>,
    message: String,
}

/// Escape backslashes, line breaks and tabs so text always renders on one
/// line and cannot forge extra entries.
///
/// Backslash is escaped first, so distinct inputs stay distinct.
pub(crate) fn escape_control(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

impl LogRecord {
    /// Create a record stamped with the current local time.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self::at(severity, Local::now(), message)
    }

    /// Create a record with an explicit timestamp.
    pub fn at(severity: Severity, timestamp: DateTime<Local>, message: impl Into<String>) -> Self {
        Self {
            severity,
            timestamp,
            message: escape_control(&message.into()),
        }
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[inline]
    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}
