//! Process-wide logger
//!
//! One [`Logger`] reachable from anywhere through [`shared`], created on
//! first use with [`LoggerConfig::shared_defaults`]: file sink on
//! (`log.txt` in the working directory), console off, minimum severity INFO.
//!
//! ```no_run
//! use leveled_logger::prelude::*;
//!
//! let log = Logger::shared();
//! log.set_console_enabled(true);
//! log.info("service started")?;
//! # Ok::<(), LoggerError>(())
//! ```

use super::{config::LoggerConfig, logger::Logger};
use std::sync::OnceLock;

static SHARED: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger
pub fn shared() -> &'static Logger {
    SHARED.get_or_init(|| Logger::from_config(LoggerConfig::shared_defaults()))
}

/// Restore the process-wide logger to its startup configuration and clear
/// its counters.
pub fn reset_shared() {
    let logger = shared();
    logger.replace_config(LoggerConfig::shared_defaults());
    logger.metrics().reset();
}

impl Logger {
    /// The process-wide logger, see [`shared`]
    #[inline]
    pub fn shared() -> &'static Logger {
        shared()
    }
}
