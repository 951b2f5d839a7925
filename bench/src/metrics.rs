//! Metrics collection module

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for benchmark
pub struct Metrics {
    ops_count: AtomicU64,
    latency_sum: AtomicU64,
    latency_max: AtomicU64,
    errors: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            ops_count: AtomicU64::new(0),
            latency_sum: AtomicU64::new(0),
            latency_max: AtomicU64::new(0),
            errors: AtomicU64::new(0),
        }
    }

    pub fn record_op(&self, latency_ns: u64) {
        self.ops_count.fetch_add(1, Ordering::Relaxed);
        self.latency_sum.fetch_add(latency_ns, Ordering::Relaxed);
        self.latency_max.fetch_max(latency_ns, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total_ops(&self) -> u64 {
        self.ops_count.load(Ordering::Relaxed)
    }

    pub fn total_latency_ns(&self) -> u64 {
        self.latency_sum.load(Ordering::Relaxed)
    }

    pub fn max_latency_ns(&self) -> u64 {
        self.latency_max.load(Ordering::Relaxed)
    }

    pub fn total_errors(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }

    /// Mean latency in nanoseconds, 0 when nothing ran
    pub fn avg_latency_ns(&self) -> u64 {
        let ops = self.total_ops();
        if ops == 0 { 0 } else { self.total_latency_ns() / ops }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_accumulate() {
        let metrics = Metrics::new();
        assert_eq!(metrics.avg_latency_ns(), 0);

        metrics.record_op(100);
        metrics.record_op(300);
        metrics.record_error();

        assert_eq!(metrics.total_ops(), 2);
        assert_eq!(metrics.total_latency_ns(), 400);
        assert_eq!(metrics.max_latency_ns(), 300);
        assert_eq!(metrics.avg_latency_ns(), 200);
        assert_eq!(metrics.total_errors(), 1);
    }
}
