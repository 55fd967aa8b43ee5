pub use crate::builder::{Container, ContainerBuilder, Strategy};
#[cfg(feature = "concurrency")]
pub use crate::concurrent::ConcurrentBox;
pub use crate::error::BoxError;
pub use crate::policy::fifo::FifoBox;
pub use crate::policy::lifo::LifoBox;
pub use crate::policy::random::RandomBox;
pub use crate::traits::{ConcurrentContainer, CoreBox, ReadOnlyBox};

#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::BoxMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
