//! Line formatting for log records
//!
//! Every sink receives the same text:
//!
//! ```text
//! [2025-01-08 10:30:45.123][worker-1] WARNING: disk almost full
//! [2025-01-08 10:30:45.123] WARNING: disk almost full
//! ```

use super::error::Result;
use super::log_record::{escape_control, LogRecord};
use super::timestamp::format_timestamp;

/// Format `record` as a single line without a terminator.
///
/// The `[source]` segment is present only when `source_name` is `Some`;
/// line breaks in it are escaped the same way as in messages.
pub fn format_line(
    record: &LogRecord,
    timestamp_format: &str,
    source_name: Option<&str>,
) -> Result<String> {
    let timestamp = format_timestamp(record.timestamp(), timestamp_format)?;

    let line = match source_name {
        Some(source) => format!(
            "[{}][{}] {}: {}",
            timestamp,
            escape_control(source),
            record.severity().as_str(),
            record.message()
        ),
        None => format!(
            "[{}] {}: {}",
            timestamp,
            record.severity().as_str(),
            record.message()
        ),
    };

    Ok(line)
}
