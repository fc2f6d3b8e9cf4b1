//! Timestamp formatting utilities
//!
//! Timestamps are rendered with chrono's strftime syntax. Format strings are
//! not checked when they are configured; a bad pattern only surfaces as an
//! error when a record is formatted with it.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::{self, Write};

/// Default timestamp pattern: `2025-01-08 10:30:45.123`
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Render `datetime` with a strftime-compatible `pattern`.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use leveled_logger::core::timestamp::{format_timestamp, DEFAULT_TIMESTAMP_FORMAT};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let text = format_timestamp(&at, DEFAULT_TIMESTAMP_FORMAT).unwrap();
/// assert_eq!(text, "2025-01-08 10:30:45.000");
/// ```
pub fn format_timestamp<Tz>(datetime: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    // `to_string()` on a DelayedFormat panics on bad items; `write!` reports them.
    let mut out = String::with_capacity(pattern.len() + 16);
    write!(out, "{}", datetime.format(pattern))
        .map_err(|_| LoggerError::timestamp_format(pattern))?;
    Ok(out)
}

/// Check a pattern ahead of time.
///
/// The logger never calls this itself; it is offered to callers that want to
/// reject a bad pattern before handing it to a logger.
pub fn validate_timestamp_format(pattern: &str) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(LoggerError::timestamp_format(pattern));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, Utc};

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_default_format() {
        let result = format_timestamp(&fixed_datetime(), DEFAULT_TIMESTAMP_FORMAT).unwrap();
        assert_eq!(result, "2025-01-08 10:30:45.123");
    }

    #[test]
    fn test_custom_format() {
        let result = format_timestamp(&fixed_datetime(), "%Y/%m/%d %H:%M").unwrap();
        assert_eq!(result, "2025/01/08 10:30");
    }

    #[test]
    fn test_custom_apache_format() {
        let result = format_timestamp(&fixed_datetime(), "%d/%b/%Y:%H:%M:%S").unwrap();
        assert_eq!(result, "08/Jan/2025:10:30:45");
    }

    #[test]
    fn test_local_time() {
        let at = Local
            .with_ymd_and_hms(2025, 1, 8, 23, 59, 1)
            .single()
            .expect("valid local datetime");
        assert_eq!(format_timestamp(&at, "%H:%M:%S").unwrap(), "23:59:01");
    }

    #[test]
    fn test_invalid_format_is_an_error() {
        let err = format_timestamp(&fixed_datetime(), "%Y-%Q").unwrap_err();
        assert!(matches!(err, LoggerError::TimestampFormat { .. }));
    }

    #[test]
    fn test_validate() {
        assert!(validate_timestamp_format(DEFAULT_TIMESTAMP_FORMAT).is_ok());
        assert!(validate_timestamp_format("plain text").is_ok());
        assert!(validate_timestamp_format("%Y-%Q").is_err());
    }
}
