//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and exporting are split into small traits so the
//! engines only ever write counters, while tests and monitoring only read them.
//!
//! ```text
//!              ┌──────────────────────────────┐
//!              │      BoxMetricsRecorder      │   (&mut self)
//!              │  insert / reject / remove    │
//!              │  remove_empty / clear        │
//!              └──────────────┬───────────────┘
//!                             │
//!                             ▼
//!              ┌──────────────────────────────┐
//!              │     FifoMetricsRecorder      │
//!              │  grow                        │
//!              └──────────────────────────────┘
//!
//!   BoxMetricsReadRecorder (&self): peek / peek_empty
//!
//!   Consumption:
//!   MetricsSnapshotProvider<S> (tests)   MetricsExporter<S> (monitoring)
//! ```

/// Counters every engine records on mutating paths.
pub trait BoxMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_insert_rejected(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_empty(&mut self);
    fn record_clear(&mut self);
}

/// Counters recorded from `&self` paths (interior mutability).
pub trait BoxMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_empty(&self);
}

/// Ring-buffer specific counters.
pub trait FifoMetricsRecorder: BoxMetricsRecorder {
    fn record_grow(&mut self);
}

/// Snapshot provider for tests and benchmarks.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
