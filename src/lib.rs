//! boxkit: strategy-selectable containers with FIFO, LIFO and random retrieval.
//!
//! One logical "box" accepts items of any type and hands them back according
//! to a retrieval strategy fixed at construction:
//!
//! | Strategy | Engine                                  | `remove` returns   |
//! |----------|-----------------------------------------|--------------------|
//! | FIFO     | [`FifoBox`] (growable ring buffer)      | oldest item        |
//! | LIFO     | [`LifoBox`] (stack)                     | newest item        |
//! | Random   | [`RandomBox`] (swap-remove pool)        | uniform draw       |
//!
//! Every engine honours an optional maximum size (`0` = unlimited) and fails
//! fast with [`BoxError`] instead of blocking. [`ContainerBuilder`] picks an
//! engine from a declarative option set, and `ConcurrentBox` (feature
//! `concurrency`) serializes access for multi-threaded use.
//!
//! ```
//! use boxkit::prelude::*;
//!
//! let mut stack = ContainerBuilder::new()
//!     .strategy(Strategy::Lifo)
//!     .max_size(2)
//!     .build::<&str>();
//! stack.insert("a").unwrap();
//! stack.insert("b").unwrap();
//! assert_eq!(stack.insert("c"), Err(BoxError::Full));
//! assert_eq!(stack.remove(), Ok("b"));
//! ```

pub mod builder;
#[cfg(feature = "concurrency")]
pub mod concurrent;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod traits;

pub use crate::builder::{Container, ContainerBuilder, Strategy};
#[cfg(feature = "concurrency")]
pub use crate::concurrent::ConcurrentBox;
pub use crate::error::{BoxError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::BoxMetricsSnapshot;
pub use crate::policy::fifo::FifoBox;
pub use crate::policy::lifo::LifoBox;
pub use crate::policy::random::RandomBox;
