//! Logger metrics for observability
//!
//! Counters describing what happened to each call: written, filtered out,
//! or failed at a sink.

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-logger counters
///
/// # Example
///
/// ```
/// use leveled_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.emitted(), 1);
/// assert_eq!(metrics.filtered(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Calls that passed the filter and reached every selected sink
    emitted: AtomicU64,

    /// Calls dropped by the minimum-severity filter
    filtered: AtomicU64,

    console_failures: AtomicU64,

    file_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            console_failures: AtomicU64::new(0),
            file_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn console_failures(&self) -> u64 {
        self.console_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_failures(&self) -> u64 {
        self.file_failures.load(Ordering::Relaxed)
    }

    /// Returns the previous value
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_console_failure(&self) -> u64 {
        self.console_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_failure(&self) -> u64 {
        self.file_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Total sink failures across both sinks
    pub fn failures(&self) -> u64 {
        self.console_failures() + self.file_failures()
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.console_failures.store(0, Ordering::Relaxed);
        self.file_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            emitted: AtomicU64::new(self.emitted()),
            filtered: AtomicU64::new(self.filtered()),
            console_failures: AtomicU64::new(self.console_failures()),
            file_failures: AtomicU64::new(self.file_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.emitted(), 0);
        assert_eq!(metrics.filtered(), 0);
        assert_eq!(metrics.failures(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_emitted(), 0);
        assert_eq!(metrics.record_emitted(), 1);
        assert_eq!(metrics.emitted(), 2);
    }

    #[test]
    fn test_failures_sum_both_sinks() {
        let metrics = LoggerMetrics::new();
        metrics.record_console_failure();
        metrics.record_file_failure();
        metrics.record_file_failure();
        assert_eq!(metrics.console_failures(), 1);
        assert_eq!(metrics.file_failures(), 2);
        assert_eq!(metrics.failures(), 3);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();
        metrics.record_filtered();
        metrics.record_console_failure();

        metrics.reset();

        assert_eq!(metrics.emitted(), 0);
        assert_eq!(metrics.filtered(), 0);
        assert_eq!(metrics.failures(), 0);
    }

    #[test]
    fn test_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();

        let snapshot = metrics.clone();
        metrics.record_emitted();

        assert_eq!(snapshot.emitted(), 1);
        assert_eq!(metrics.emitted(), 2);
    }
}
