//! Random retrieval container engine.
//!
//! Every `remove` hands out an item drawn uniformly at random from the live
//! set. Storage is a dense `Vec<T>`; the drawn slot is filled by the last
//! element (`swap_remove`), so removal is O(1) and storage order is not
//! preserved.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                         RandomBox<T> Layout                                 │
//! │                                                                             │
//! │   ┌─────────────────────────────────────────────────────────────────────┐   │
//! │   │  items: Vec<T>        rng: SmallRng        max_size: usize (0 = ∞)  │   │
//! │   │                                                                     │   │
//! │   │   [A] [B] [C] [D] [E]                                               │   │
//! │   │            ↑                                                        │   │
//! │   │       i = rng ∈ [0, len)                                            │   │
//! │   │                                                                     │   │
//! │   │   remove():  swap_remove(i) → C,  items = [A] [B] [E] [D]           │   │
//! │   └─────────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Seeding
//!
//! A fixed seed makes the sequence of drawn indices reproducible: two boxes
//! seeded alike and fed the same operations return identical items. Without
//! a seed the generator is seeded from the system clock mixed with a
//! process-wide counter, so boxes created back to back still diverge.
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                      |
//! |-------------|--------|--------------------------------------------|
//! | `insert`    | O(1)*  | *Amortized                                 |
//! | `remove`    | O(1)   | Uniform draw + swap-remove                 |
//! | `peek`      | O(1)   | Independent uniform draw, advances the rng |
//! | `snapshot`  | O(n)   | Storage order                              |
//! | `clear`     | O(n)   | Keeps allocation                           |
//!
//! ## Example Usage
//!
//! ```
//! use boxkit::policy::random::RandomBox;
//!
//! let mut bag = RandomBox::new(3, 0, Some(42));
//! bag.insert(1).unwrap();
//! bag.insert(2).unwrap();
//! bag.insert(3).unwrap();
//! assert!(bag.insert(4).is_err());
//!
//! let mut out: Vec<i32> = (0..3).map(|_| bag.remove().unwrap()).collect();
//! out.sort();
//! assert_eq!(out, vec![1, 2, 3]);
//! ```
//!
//! ## Thread Safety
//!
//! - [`RandomBox`]: Not thread-safe, designed for single-threaded use
//! - For concurrent access, wrap in [`ConcurrentBox`](crate::concurrent::ConcurrentBox)

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{BoxError, InvariantError};
use crate::policy::{coerce_capacity, widen_max_size};
use crate::traits::{CoreBox, ReadOnlyBox};

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::BoxMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BoxMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{BoxMetricsReadRecorder, BoxMetricsRecorder, MetricsSnapshotProvider};

const SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Seed for an unseeded box: clock nanos mixed with a per-call counter.
fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(SEED_MIX);
    let step = SEED_COUNTER.fetch_add(SEED_MIX, Ordering::Relaxed);
    nanos ^ step
}

/// Container that removes a uniformly random live item.
///
/// # Example
///
/// ```
/// use boxkit::policy::random::RandomBox;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut bag = RandomBox::with_rng(0, 4, SmallRng::seed_from_u64(9));
/// for i in [10, 20, 30, 40] {
///     bag.insert(i).unwrap();
/// }
/// let drawn = bag.remove().unwrap();
/// assert!([10, 20, 30, 40].contains(&drawn));
/// assert_eq!(bag.len(), 3);
/// ```
pub struct RandomBox<T> {
    items: Vec<T>,
    rng: SmallRng,
    max_size: usize,
    #[cfg(feature = "metrics")]
    metrics: BoxMetrics,
}

impl<T> RandomBox<T> {
    /// Creates an empty box.
    ///
    /// - `max_size`: hard cap on live items, `0` for unlimited
    /// - `capacity`: initial allocation hint, `0` for the default
    /// - `seed`: fixed seed for reproducible draws, `None` for a clock seed
    ///
    /// # Example
    ///
    /// ```
    /// use boxkit::policy::random::RandomBox;
    ///
    /// let mut a = RandomBox::new(0, 0, Some(7));
    /// let mut b = RandomBox::new(0, 0, Some(7));
    /// for i in 0..10 {
    ///     a.insert(i).unwrap();
    ///     b.insert(i).unwrap();
    /// }
    /// for _ in 0..10 {
    ///     assert_eq!(a.remove(), b.remove());
    /// }
    /// ```
    pub fn new(max_size: usize, capacity: usize, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(clock_seed);
        Self::with_rng(max_size, capacity, SmallRng::seed_from_u64(seed))
    }

    /// Creates an empty box driven by a caller-supplied generator.
    pub fn with_rng(max_size: usize, capacity: usize, rng: SmallRng) -> Self {
        Self {
            items: Vec::with_capacity(coerce_capacity(capacity)),
            rng,
            max_size,
            #[cfg(feature = "metrics")]
            metrics: BoxMetrics::default(),
        }
    }

    /// Creates a clock-seeded box pre-loaded with a copy of `items`.
    ///
    /// A nonzero `max_size` smaller than `items.len()` is widened to fit.
    pub fn from_items(items: &[T], max_size: usize) -> Self
    where
        T: Clone,
    {
        Self::from_vec(items.to_vec(), max_size, items.len(), None)
    }

    /// Creates a clock-seeded box holding a copy of `source`'s live items.
    ///
    /// `max_size = None` inherits `source.max_size()`.
    ///
    /// # Example
    ///
    /// ```
    /// use boxkit::policy::fifo::FifoBox;
    /// use boxkit::policy::random::RandomBox;
    ///
    /// let queue = FifoBox::from_items(&[1, 2, 3], 1);
    /// let bag = RandomBox::from_box(&queue, Some(20));
    /// assert_eq!(bag.max_size(), 20);
    /// assert_eq!(bag.len(), 3);
    /// ```
    pub fn from_box<B>(source: &B, max_size: Option<usize>) -> Self
    where
        T: Clone,
        B: CoreBox<T> + ?Sized,
    {
        let items = source.snapshot();
        let max_size = max_size.unwrap_or_else(|| source.max_size());
        let capacity = items.len();
        Self::from_vec(items, max_size, capacity, None)
    }

    pub(crate) fn from_vec(
        mut items: Vec<T>,
        max_size: usize,
        capacity: usize,
        seed: Option<u64>,
    ) -> Self {
        let max_size = widen_max_size(max_size, items.len());
        let wanted = coerce_capacity(capacity.max(items.len()));
        items.reserve(wanted.saturating_sub(items.len()));
        let seed = seed.unwrap_or_else(clock_seed);
        Self {
            items,
            rng: SmallRng::seed_from_u64(seed),
            max_size,
            #[cfg(feature = "metrics")]
            metrics: BoxMetrics::default(),
        }
    }

    /// Adds `item` to the live set.
    pub fn insert(&mut self, item: T) -> Result<(), BoxError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if self.max_size > 0 && self.items.len() >= self.max_size {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_rejected();
            return Err(BoxError::Full);
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes and returns a uniformly drawn item.
    pub fn remove(&mut self) -> Result<T, BoxError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        if self.items.is_empty() {
            #[cfg(feature = "metrics")]
            self.metrics.record_remove_empty();
            return Err(BoxError::Empty);
        }

        let index = self.rng.random_range(0..self.items.len());
        Ok(self.items.swap_remove(index))
    }

    /// Returns a uniformly drawn item without removing it.
    ///
    /// The draw is independent of the next `remove`, and consumes a value
    /// from the generator.
    pub fn peek(&mut self) -> Result<&T, BoxError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        if self.items.is_empty() {
            #[cfg(feature = "metrics")]
            self.metrics.record_peek_empty();
            return Err(BoxError::Empty);
        }

        let index = self.rng.random_range(0..self.items.len());
        Ok(&self.items[index])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum size (0 = unlimited).
    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.max_size > 0 && self.items.len() >= self.max_size
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Iterates live items in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Copies live items in storage order.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Drops all items. The generator state is kept.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.items.clear();
    }

    /// Validates the maximum-size cap.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.max_size > 0 && self.items.len() > self.max_size {
            return Err(InvariantError::new(format!(
                "len {} exceeds max_size {}",
                self.items.len(),
                self.max_size
            )));
        }
        Ok(())
    }
}

impl<T> Default for RandomBox<T> {
    /// Unbounded, clock-seeded box with the default capacity.
    fn default() -> Self {
        Self::new(0, 0, None)
    }
}

impl<T> std::fmt::Debug for RandomBox<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomBox")
            .field("len", &self.items.len())
            .field("capacity", &self.items.capacity())
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

impl<T> ReadOnlyBox<T> for RandomBox<T> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn max_size(&self) -> usize {
        self.max_size
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl<T> CoreBox<T> for RandomBox<T> {
    #[inline]
    fn insert(&mut self, item: T) -> Result<(), BoxError> {
        RandomBox::insert(self, item)
    }

    #[inline]
    fn remove(&mut self) -> Result<T, BoxError> {
        RandomBox::remove(self)
    }

    #[inline]
    fn peek(&mut self) -> Result<&T, BoxError> {
        RandomBox::peek(self)
    }

    fn clear(&mut self) {
        RandomBox::clear(self);
    }

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        RandomBox::snapshot(self)
    }
}

#[cfg(feature = "metrics")]
impl<T> RandomBox<T> {
    pub fn metrics_snapshot(&self) -> BoxMetricsSnapshot {
        self.metrics
            .snapshot(self.items.len(), self.items.capacity(), self.max_size)
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<BoxMetricsSnapshot> for RandomBox<T> {
    fn snapshot(&self) -> BoxMetricsSnapshot {
        self.metrics_snapshot()
    }
}
