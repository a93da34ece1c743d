//! Logger metrics for observability
//!
//! Counters are updated on the emitting paths only. Filtered-out calls are not
//! counted, so the suppressed path stays a single load and compare.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what a logger has done.
///
/// # Example
///
/// ```
/// use rust_category_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_emitted();
/// metrics.record_write_error();
///
/// assert_eq!(metrics.emitted(), 1);
/// assert_eq!(metrics.write_errors(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Lines handed to the sink, successfully or not
    emitted: AtomicU64,

    /// Messages delivered to an output override instead of the sink
    overridden: AtomicU64,

    /// Sink writes that returned an error
    write_errors: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            overridden: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn overridden(&self) -> u64 {
        self.overridden.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_overridden(&self) -> u64 {
        self.overridden.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of emitted lines whose sink write failed, as a percentage.
    ///
    /// Returns 0.0 if nothing has been emitted.
    pub fn error_rate(&self) -> f64 {
        let emitted = self.emitted();
        if emitted == 0 {
            return 0.0;
        }
        (self.write_errors() as f64 / emitted as f64) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.overridden.store(0, Ordering::Relaxed);
        self.write_errors.store(0, Ordering::Relaxed);
    }
}
