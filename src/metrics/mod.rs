//! Operation counters for the container engines (requires the `metrics` feature).

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
