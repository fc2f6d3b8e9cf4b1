//! Core logger types and traits

pub mod config;
pub mod emitter;
pub mod error;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod output_preference;
pub mod severity;
pub mod shared;
pub mod sink;
pub mod timestamp;

pub use config::{ColorMap, LoggerConfig, DEFAULT_LOG_FILE};
pub use emitter::{ColorGuard, Emitter};
pub use error::{LoggerError, Result};
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::format_line;
pub use output_preference::OutputPreference;
pub use severity::Severity;
pub use shared::{reset_shared, shared};
pub use sink::{ConsoleSink, FileSink};
pub use timestamp::{format_timestamp, validate_timestamp_format, DEFAULT_TIMESTAMP_FORMAT};
