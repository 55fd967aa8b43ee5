use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::BoxMetricsSnapshot;
use crate::metrics::traits::{BoxMetricsReadRecorder, BoxMetricsRecorder, FifoMetricsRecorder};

/// Counters embedded in every engine when the `metrics` feature is on.
#[derive(Debug, Default)]
pub struct BoxMetrics {
    pub insert_calls: u64,
    pub insert_rejected: u64,
    pub remove_calls: u64,
    pub remove_empty: u64,
    pub clear_calls: u64,
    pub grow_events: u64,
    pub peek_calls: MetricsCell,
    pub peek_empty: MetricsCell,
}

impl BoxMetrics {
    pub fn new() -> BoxMetrics {
        Self::default()
    }

    /// Copies the counters and attaches the given gauges.
    pub fn snapshot(&self, len: usize, capacity: usize, max_size: usize) -> BoxMetricsSnapshot {
        BoxMetricsSnapshot {
            insert_calls: self.insert_calls,
            insert_rejected: self.insert_rejected,
            remove_calls: self.remove_calls,
            remove_empty: self.remove_empty,
            peek_calls: self.peek_calls.get(),
            peek_empty: self.peek_empty.get(),
            clear_calls: self.clear_calls,
            grow_events: self.grow_events,
            len,
            capacity,
            max_size,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl BoxMetricsRecorder for BoxMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_rejected(&mut self) {
        self.insert_rejected += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_remove_empty(&mut self) {
        self.remove_empty += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl BoxMetricsReadRecorder for BoxMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_empty(&self) {
        self.peek_empty.incr();
    }
}

impl FifoMetricsRecorder for BoxMetrics {
    fn record_grow(&mut self) {
        self.grow_events += 1;
    }
}
