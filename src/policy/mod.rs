//! Retrieval engines.
//!
//! | Engine                      | Store            | `remove` returns        |
//! |-----------------------------|------------------|-------------------------|
//! | [`fifo::FifoBox`]           | ring buffer      | oldest item             |
//! | [`lifo::LifoBox`]           | `Vec<T>`         | newest item             |
//! | [`random::RandomBox`]       | `Vec<T>` + rng   | uniformly drawn item    |
//!
//! All engines enforce the same maximum-size rule (`0` = unlimited) and
//! implement [`CoreBox`](crate::traits::CoreBox).

pub mod fifo;
pub mod lifo;
pub mod random;

use crate::ds::DEFAULT_RING_CAPACITY;

/// Capacity used when a caller asks for zero.
pub const DEFAULT_INITIAL_CAPACITY: usize = DEFAULT_RING_CAPACITY;

/// Replaces a zero capacity hint with [`DEFAULT_INITIAL_CAPACITY`].
#[inline]
pub(crate) fn coerce_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        DEFAULT_INITIAL_CAPACITY
    } else {
        capacity
    }
}

/// Widens a nonzero `max_size` that is smaller than the number of items
/// being loaded. Unlimited (`0`) stays unlimited.
#[inline]
pub(crate) fn widen_max_size(max_size: usize, item_count: usize) -> usize {
    if max_size != 0 && max_size < item_count {
        item_count
    } else {
        max_size
    }
}
