//! FIFO (First In, First Out) container engine.
//!
//! Items are handed out in exactly the order they were inserted. Storage is a
//! [`RingBuffer`] that grows lazily: it only reallocates when every slot is
//! live, doubling the slot count (clamped to `max_size` when one is set).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                           FifoBox<T> Layout                                 │
//! │                                                                             │
//! │   ┌─────────────────────────────────────────────────────────────────────┐   │
//! │   │  ring: RingBuffer<T>                  max_size: usize (0 = ∞)       │   │
//! │   │                                                                     │   │
//! │   │          head                  tail                                 │   │
//! │   │           ▼                     ▼                                   │   │
//! │   │   [ ]  [ A ]  [ B ]  [ C ]  [ ]  [ ]  [ ]  [ ]                      │   │
//! │   │         oldest        newest                                        │   │
//! │   │         REMOVE        (insert goes to tail)                         │   │
//! │   └─────────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────────┘
//!
//! Insert Flow
//! ───────────
//!
//!   insert(item):
//!     1. len == max_size (bounded)?  → Err(Full)
//!     2. every slot live?            → grow: min(capacity × 2, max_size),
//!                                      linearize, head = 0, tail = len
//!     3. write at tail, advance tail, len += 1
//!
//! Remove Flow
//! ───────────
//!
//!   remove():
//!     1. len == 0?  → Err(Empty)
//!     2. take slot at head (slot becomes empty), advance head, len -= 1
//! ```
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                      |
//! |-------------|--------|--------------------------------------------|
//! | `insert`    | O(1)*  | *Amortized, O(n) on growth                 |
//! | `remove`    | O(1)   | Releases the slot's item immediately       |
//! | `peek`      | O(1)   | Oldest item                                |
//! | `snapshot`  | O(n)   | Linearized copy, oldest first              |
//! | `clear`     | O(n)   | Keeps slot count                           |
//!
//! ## Example Usage
//!
//! ```
//! use boxkit::policy::fifo::FifoBox;
//!
//! let mut queue = FifoBox::new(0, 4);
//! for i in 1..=10 {
//!     queue.insert(i).unwrap();
//! }
//! assert_eq!(queue.peek(), Ok(&1));
//!
//! let drained: Vec<i32> = (0..10).map(|_| queue.remove().unwrap()).collect();
//! assert_eq!(drained, (1..=10).collect::<Vec<_>>());
//! assert!(queue.is_empty());
//! ```
//!
//! ## Thread Safety
//!
//! - [`FifoBox`]: Not thread-safe, designed for single-threaded use
//! - For concurrent access, wrap in [`ConcurrentBox`](crate::concurrent::ConcurrentBox)

use crate::ds::RingBuffer;
use crate::error::{BoxError, InvariantError};
use crate::policy::{coerce_capacity, widen_max_size};
use crate::traits::{CoreBox, ReadOnlyBox};

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::BoxMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BoxMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    BoxMetricsReadRecorder, BoxMetricsRecorder, FifoMetricsRecorder, MetricsSnapshotProvider,
};

/// First-in, first-out container backed by a growable ring buffer.
///
/// # Example
///
/// ```
/// use boxkit::error::BoxError;
/// use boxkit::policy::fifo::FifoBox;
///
/// let mut queue = FifoBox::new(2, 2);
/// queue.insert("a").unwrap();
/// queue.insert("b").unwrap();
/// assert_eq!(queue.insert("c"), Err(BoxError::Full));
///
/// assert_eq!(queue.remove(), Ok("a"));
/// queue.insert("c").unwrap();
/// assert_eq!(queue.snapshot(), vec!["b", "c"]);
/// ```
pub struct FifoBox<T> {
    ring: RingBuffer<T>,
    /// Hard cap on live items; 0 = unlimited
    max_size: usize,
    #[cfg(feature = "metrics")]
    metrics: BoxMetrics,
}

impl<T> FifoBox<T> {
    /// Creates an empty queue.
    ///
    /// - `max_size`: hard cap on live items, `0` for unlimited
    /// - `capacity`: initial slot count, `0` for the default
    ///
    /// # Example
    ///
    /// ```
    /// use boxkit::policy::fifo::FifoBox;
    /// use boxkit::policy::DEFAULT_INITIAL_CAPACITY;
    ///
    /// let queue: FifoBox<u8> = FifoBox::new(0, 0);
    /// assert_eq!(queue.capacity(), DEFAULT_INITIAL_CAPACITY);
    /// assert_eq!(queue.max_size(), 0);
    /// ```
    pub fn new(max_size: usize, capacity: usize) -> Self {
        Self {
            ring: RingBuffer::with_capacity(coerce_capacity(capacity)),
            max_size,
            #[cfg(feature = "metrics")]
            metrics: BoxMetrics::default(),
        }
    }

    /// Creates a queue pre-loaded with a copy of `items` (first = oldest).
    ///
    /// A nonzero `max_size` smaller than `items.len()` is widened to fit.
    ///
    /// # Example
    ///
    /// ```
    /// use boxkit::policy::fifo::FifoBox;
    ///
    /// let source = vec![1, 2, 3];
    /// let mut queue = FifoBox::from_items(&source, 1);
    /// assert_eq!(queue.max_size(), 3);
    /// assert_eq!(queue.remove(), Ok(1));
    /// assert_eq!(source, vec![1, 2, 3]);
    /// ```
    pub fn from_items(items: &[T], max_size: usize) -> Self
    where
        T: Clone,
    {
        Self::from_vec(items.to_vec(), max_size, items.len())
    }

    /// Creates a queue holding a copy of `source`'s live items.
    ///
    /// Items keep `source`'s retrieval-independent storage order as reported
    /// by [`CoreBox::snapshot`]. `max_size = None` inherits `source.max_size()`.
    /// Either way the result is widened to the item count if smaller.
    ///
    /// # Example
    ///
    /// ```
    /// use boxkit::policy::fifo::FifoBox;
    /// use boxkit::policy::lifo::LifoBox;
    ///
    /// let stack = LifoBox::from_items(&[1, 2, 3], 10);
    /// let mut queue = FifoBox::from_box(&stack, None);
    /// assert_eq!(queue.max_size(), 10);
    /// assert_eq!(queue.remove(), Ok(1));
    /// assert_eq!(stack.len(), 3);
    /// ```
    pub fn from_box<B>(source: &B, max_size: Option<usize>) -> Self
    where
        T: Clone,
        B: CoreBox<T> + ?Sized,
    {
        let items = source.snapshot();
        let max_size = max_size.unwrap_or_else(|| source.max_size());
        let capacity = items.len();
        Self::from_vec(items, max_size, capacity)
    }

    /// Loads an owned vector; `capacity` is raised to `items.len()` if needed.
    pub(crate) fn from_vec(items: Vec<T>, max_size: usize, capacity: usize) -> Self {
        let max_size = widen_max_size(max_size, items.len());
        let mut ring = RingBuffer::with_capacity(coerce_capacity(capacity.max(items.len())));
        for item in items {
            ring.push_back(item);
        }
        Self {
            ring,
            max_size,
            #[cfg(feature = "metrics")]
            metrics: BoxMetrics::default(),
        }
    }

    /// Appends `item` at the tail.
    ///
    /// Returns [`BoxError::Full`] without touching the queue when bounded and
    /// full. Grows the ring first if every slot is live.
    pub fn insert(&mut self, item: T) -> Result<(), BoxError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if self.max_size > 0 && self.ring.len() >= self.max_size {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_rejected();
            return Err(BoxError::Full);
        }

        if self.ring.is_full() {
            let limit = (self.max_size > 0).then_some(self.max_size);
            self.ring.grow(limit);
            #[cfg(feature = "metrics")]
            self.metrics.record_grow();
        }

        self.ring.push_back(item);
        Ok(())
    }

    /// Removes and returns the oldest item.
    pub fn remove(&mut self) -> Result<T, BoxError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        match self.ring.pop_front() {
            Some(item) => Ok(item),
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_remove_empty();
                Err(BoxError::Empty)
            },
        }
    }

    /// Returns the oldest item without removing it.
    pub fn peek(&self) -> Result<&T, BoxError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        match self.ring.front() {
            Some(item) => Ok(item),
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_peek_empty();
                Err(BoxError::Empty)
            },
        }
    }

    /// Returns the number of live items.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if there are no live items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns the maximum size (0 = unlimited).
    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns `true` if bounded and at the maximum size.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.max_size > 0 && self.ring.len() >= self.max_size
    }

    /// Returns the current slot count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Iterates live items, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.ring.iter()
    }

    /// Copies live items, oldest first.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.ring.iter().cloned().collect()
    }

    /// Drops all live items and rewinds the ring; slot count is kept.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.ring.clear();
    }

    /// Validates ring bounds, slot occupancy and the maximum-size cap.
    ///
    /// # Example
    ///
    /// ```
    /// use boxkit::policy::fifo::FifoBox;
    ///
    /// let mut queue = FifoBox::new(0, 2);
    /// for i in 0..5 {
    ///     queue.insert(i).unwrap();
    /// }
    /// assert!(queue.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.ring.check_invariants()?;
        if self.max_size > 0 && self.ring.len() > self.max_size {
            return Err(InvariantError::new(format!(
                "len {} exceeds max_size {}",
                self.ring.len(),
                self.max_size
            )));
        }
        Ok(())
    }
}

impl<T> Default for FifoBox<T> {
    /// Unbounded queue with the default capacity.
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T> std::fmt::Debug for FifoBox<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FifoBox")
            .field("len", &self.ring.len())
            .field("capacity", &self.ring.capacity())
            .field("max_size", &self.max_size)
            .field("head", &self.ring.head())
            .field("tail", &self.ring.tail())
            .finish_non_exhaustive()
    }
}

impl<T> ReadOnlyBox<T> for FifoBox<T> {
    #[inline]
    fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    fn max_size(&self) -> usize {
        self.max_size
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}

impl<T> CoreBox<T> for FifoBox<T> {
    #[inline]
    fn insert(&mut self, item: T) -> Result<(), BoxError> {
        FifoBox::insert(self, item)
    }

    #[inline]
    fn remove(&mut self) -> Result<T, BoxError> {
        FifoBox::remove(self)
    }

    #[inline]
    fn peek(&mut self) -> Result<&T, BoxError> {
        FifoBox::peek(self)
    }

    fn clear(&mut self) {
        FifoBox::clear(self);
    }

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        FifoBox::snapshot(self)
    }
}

/// Metrics functionality (requires `metrics` feature).
#[cfg(feature = "metrics")]
impl<T> FifoBox<T> {
    /// Returns a snapshot of the queue's counters.
    pub fn metrics_snapshot(&self) -> BoxMetricsSnapshot {
        self.metrics
            .snapshot(self.ring.len(), self.ring.capacity(), self.max_size)
    }

    /// Zeroes every counter.
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<BoxMetricsSnapshot> for FifoBox<T> {
    fn snapshot(&self) -> BoxMetricsSnapshot {
        self.metrics_snapshot()
    }
}
