//! Logger metrics for observability
//!
//! Counters for how many print calls produced output, how many were
//! suppressed by the threshold or the enabled flag, and how many sink writes
//! failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use console_logger_system::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_printed();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.printed_count(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Print calls that produced a line
    printed: AtomicU64,

    /// Print calls that produced nothing
    suppressed: AtomicU64,

    /// Individual sink writes that returned an error
    failed_writes: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            printed: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn printed_count(&self) -> u64 {
        self.printed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_write_count(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    /// Record a printed line; returns the previous count
    #[inline]
    pub fn record_printed(&self) -> u64 {
        self.printed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_write(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of print calls that were suppressed, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been printed yet.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed_count() as f64;
        let total = self.printed_count() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.printed.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.failed_writes.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            printed: AtomicU64::new(self.printed_count()),
            suppressed: AtomicU64::new(self.suppressed_count()),
            failed_writes: AtomicU64::new(self.failed_write_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.printed_count(), 0);
        assert_eq!(metrics.suppressed_count(), 0);
        assert_eq!(metrics.failed_write_count(), 0);
    }

    #[test]
    fn test_metrics_record_returns_previous() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_failed_write(), 0);
        assert_eq!(metrics.failed_write_count(), 1);
        metrics.record_failed_write();
        assert_eq!(metrics.failed_write_count(), 2);
    }

    #[test]
    fn test_suppression_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.suppression_rate(), 0.0);

        for _ in 0..3 {
            metrics.record_printed();
        }
        metrics.record_suppressed();
        assert_eq!(metrics.suppression_rate(), 25.0);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_printed();
        metrics.record_suppressed();
        metrics.record_failed_write();

        metrics.reset();

        assert_eq!(metrics.printed_count(), 0);
        assert_eq!(metrics.suppressed_count(), 0);
        assert_eq!(metrics.failed_write_count(), 0);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_printed();

        let snapshot = metrics.clone();
        metrics.record_printed();

        assert_eq!(metrics.printed_count(), 2);
        assert_eq!(snapshot.printed_count(), 1);
    }
}
