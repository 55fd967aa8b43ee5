//! # Container Trait Hierarchy
//!
//! This module defines the capability contract shared by every retrieval
//! strategy (FIFO, LIFO, Random) so that the builder and the serializing
//! wrapper can treat all engines uniformly.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌─────────────────────────────────────────┐
//!                 │            ReadOnlyBox<T>               │
//!                 │                                         │
//!                 │  len(&) → usize                         │
//!                 │  is_empty(&) → bool                     │
//!                 │  max_size(&) → usize   (0 = unlimited)  │
//!                 │  is_full(&) → bool                      │
//!                 │  capacity(&) → usize                    │
//!                 └──────────────────┬──────────────────────┘
//!                                    │
//!                                    ▼
//!                 ┌─────────────────────────────────────────┐
//!                 │              CoreBox<T>                 │
//!                 │                                         │
//!                 │  insert(&mut, T) → Result<(), BoxError> │
//!                 │  remove(&mut) → Result<T, BoxError>     │
//!                 │  peek(&mut) → Result<&T, BoxError>      │
//!                 │  clear(&mut)                            │
//!                 │  snapshot(&) → Vec<T>      (T: Clone)   │
//!                 │  drain_all(&mut) → Vec<T>               │
//!                 └──────────────────┬──────────────────────┘
//!                                    │
//!        ┌───────────────┬───────────┴───────┬──────────────────┐
//!        ▼               ▼                   ▼                  ▼
//!   ┌─────────┐     ┌─────────┐        ┌───────────┐     ┌───────────────┐
//!   │ FifoBox │     │ LifoBox │        │ RandomBox │     │ Container<T>  │
//!   │ (ring)  │     │ (Vec)   │        │ (Vec+rng) │     │ (enum of 3)   │
//!   └─────────┘     └─────────┘        └───────────┘     └───────────────┘
//! ```
//!
//! ## Why `peek` takes `&mut self`
//!
//! The random engine draws a fresh index on every peek, which advances its
//! generator. The FIFO and LIFO engines also expose an inherent
//! `peek(&self)` for callers that hold a concrete type.
//!
//! ## Thread Safety
//!
//! - Engines are **not** thread-safe; they are built for exclusive ownership.
//! - [`ConcurrentBox`](crate::concurrent::ConcurrentBox) serializes every call
//!   behind a mutex and carries the [`ConcurrentContainer`] marker.

use crate::error::BoxError;

/// Read-only queries every container supports.
///
/// # Example
///
/// ```
/// use boxkit::policy::fifo::FifoBox;
/// use boxkit::traits::{CoreBox, ReadOnlyBox};
///
/// fn describe<B: ReadOnlyBox<u32>>(b: &B) -> String {
///     format!("{}/{}", b.len(), b.max_size())
/// }
///
/// let mut queue = FifoBox::new(10, 4);
/// queue.insert(1).unwrap();
/// assert_eq!(describe(&queue), "1/10");
/// ```
pub trait ReadOnlyBox<T> {
    /// Returns the number of live items.
    fn len(&self) -> usize;

    /// Returns `true` if there are no live items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the configured maximum size; `0` means unlimited.
    fn max_size(&self) -> usize;

    /// Returns `true` if a maximum size is set and has been reached.
    fn is_full(&self) -> bool {
        let max = self.max_size();
        max > 0 && self.len() >= max
    }

    /// Returns the current backing capacity.
    ///
    /// Informational only: capacity grows on demand and never limits inserts.
    fn capacity(&self) -> usize;
}

/// Core container operations shared by all retrieval strategies.
///
/// # Example
///
/// ```
/// use boxkit::builder::{ContainerBuilder, Strategy};
/// use boxkit::traits::CoreBox;
///
/// fn load<B: CoreBox<u32>>(b: &mut B, items: &[u32]) -> usize {
///     items.iter().filter(|&&i| b.insert(i).is_ok()).count()
/// }
///
/// let mut stack = ContainerBuilder::new()
///     .strategy(Strategy::Lifo)
///     .max_size(2)
///     .build::<u32>();
/// assert_eq!(load(&mut stack, &[1, 2, 3]), 2);
/// assert_eq!(stack.remove(), Ok(2));
/// ```
pub trait CoreBox<T>: ReadOnlyBox<T> {
    /// Inserts an item.
    ///
    /// Returns [`BoxError::Full`] if the container is bounded and full.
    fn insert(&mut self, item: T) -> Result<(), BoxError>;

    /// Removes and returns the next item according to the strategy.
    ///
    /// Returns [`BoxError::Empty`] if there are no live items.
    fn remove(&mut self) -> Result<T, BoxError>;

    /// Returns the item the strategy would hand out, without removing it.
    ///
    /// Returns [`BoxError::Empty`] if there are no live items. For the random
    /// strategy each call draws independently.
    fn peek(&mut self) -> Result<&T, BoxError>;

    /// Removes all live items; backing capacity is kept.
    fn clear(&mut self);

    /// Returns a copy of all live items.
    ///
    /// FIFO order is oldest first; LIFO order is bottom first; Random order
    /// is storage order.
    fn snapshot(&self) -> Vec<T>
    where
        T: Clone;

    /// Removes every item in retrieval order.
    ///
    /// # Example
    ///
    /// ```
    /// use boxkit::policy::fifo::FifoBox;
    /// use boxkit::traits::CoreBox;
    ///
    /// let mut queue = FifoBox::from_items(&[1, 2, 3], 0);
    /// assert_eq!(queue.drain_all(), vec![1, 2, 3]);
    /// assert!(queue.is_empty());
    /// ```
    fn drain_all(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Ok(item) = self.remove() {
            out.push(item);
        }
        out
    }
}

/// Marker trait for containers that may be shared across threads.
pub trait ConcurrentContainer: Send + Sync {}
