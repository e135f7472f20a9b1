use std::time::{Duration, Instant};
use tracing::info;

/// Application-level metrics for tracking message intake and translation
pub struct AppMetrics {
    /// Number of non-blank input lines read
    pub lines_read: u64,
    /// Number of lines that failed to read or parse as a JSON object
    pub read_errors: u64,
    /// Number of messages skipped by the type filter
    pub filtered: u64,
    /// Number of gpsd reports produced
    pub reports: u64,
    /// Number of messages dropped because translation failed
    pub translate_errors: u64,
}

impl AppMetrics {
    /// Create a new AppMetrics instance with all counters at zero
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            read_errors: 0,
            filtered: 0,
            reports: 0,
            translate_errors: 0,
        }
    }

    /// Reset all counters to zero
    pub fn reset(&mut self) {
        self.lines_read = 0;
        self.read_errors = 0;
        self.filtered = 0;
        self.reports = 0;
        self.translate_errors = 0;
    }

    /// Log current metrics to the info log
    pub fn log(&self) {
        info!(
            "[Metrics] Lines: {}, Read errors: {}, Filtered: {}, Reports: {}, Translate errors: {}",
            self.lines_read,
            self.read_errors,
            self.filtered,
            self.reports,
            self.translate_errors
        );
    }
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Manages periodic logging of application metrics
pub struct MetricsLogger {
    last_log: Instant,
    log_interval: Duration,
}

impl MetricsLogger {
    /// Create a new MetricsLogger with the specified logging interval
    pub fn new(log_interval: Duration) -> Self {
        Self {
            last_log: Instant::now(),
            log_interval,
        }
    }

    /// Check if it's time to log metrics, and if so, log them and reset
    /// Returns true if metrics were logged
    pub fn check_and_log(&mut self, metrics: &mut AppMetrics) -> bool {
        if self.last_log.elapsed() >= self.log_interval {
            self.flush(metrics);
            true
        } else {
            false
        }
    }

    /// Log and reset regardless of the interval (used at shutdown)
    pub fn flush(&mut self, metrics: &mut AppMetrics) {
        metrics.log();
        metrics.reset();
        self.last_log = Instant::now();
    }
}
