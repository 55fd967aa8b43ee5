//! LIFO (Last In, First Out) container engine.
//!
//! A plain stack: the most recently inserted item is handed out first.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                          LifoBox<T> Layout                                  │
//! │                                                                             │
//! │   ┌─────────────────────────────────────────────────────────────────────┐   │
//! │   │  items: Vec<T>                        max_size: usize (0 = ∞)       │   │
//! │   │                                                                     │   │
//! │   │    ┌─────────────────────────┐                                      │   │
//! │   │    │ Bottom        Top       │                                      │   │
//! │   │    ├─────────────────────────┤                                      │   │
//! │   │    │ [A]  [B]  [C]  [D]      │                                      │   │
//! │   │    │  ↑              ↑       │                                      │   │
//! │   │    │ oldest       newest     │                                      │   │
//! │   │    │ stays        REMOVE     │                                      │   │
//! │   │    └─────────────────────────┘                                      │   │
//! │   └─────────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────────┘
//!
//!   insert(item):  len == max_size? → Err(Full)  else push to top
//!   remove():      empty?           → Err(Empty) else pop from top
//!   peek():        empty?           → Err(Empty) else &top
//! ```
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                      |
//! |-------------|--------|--------------------------------------------|
//! | `insert`    | O(1)*  | *Amortized                                 |
//! | `remove`    | O(1)   | Pops the top                               |
//! | `peek`      | O(1)   | Top of stack                               |
//! | `snapshot`  | O(n)   | Bottom first                               |
//! | `clear`     | O(n)   | Keeps allocation                           |
//!
//! ## Example Usage
//!
//! ```
//! use boxkit::policy::lifo::LifoBox;
//!
//! let mut stack = LifoBox::new(0, 4);
//! stack.insert(1).unwrap();
//! stack.insert(2).unwrap();
//! stack.insert(3).unwrap();
//!
//! assert_eq!(stack.peek(), Ok(&3));
//! assert_eq!(stack.remove(), Ok(3));
//! assert_eq!(stack.remove(), Ok(2));
//! assert_eq!(stack.remove(), Ok(1));
//! assert!(stack.remove().is_err());
//! ```
//!
//! ## Thread Safety
//!
//! - [`LifoBox`]: Not thread-safe, designed for single-threaded use
//! - For concurrent access, wrap in [`ConcurrentBox`](crate::concurrent::ConcurrentBox)

use crate::error::{BoxError, InvariantError};
use crate::policy::{coerce_capacity, widen_max_size};
use crate::traits::{CoreBox, ReadOnlyBox};

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::BoxMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BoxMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{BoxMetricsReadRecorder, BoxMetricsRecorder, MetricsSnapshotProvider};

/// Last-in, first-out container backed by a `Vec`.
pub struct LifoBox<T> {
    /// Top of stack is the last element
    items: Vec<T>,
    max_size: usize,
    #[cfg(feature = "metrics")]
    metrics: BoxMetrics,
}

impl<T> LifoBox<T> {
    /// Creates an empty stack.
    ///
    /// `max_size = 0` means unlimited; `capacity = 0` uses the default.
    ///
    /// # Example
    ///
    /// ```
    /// use boxkit::policy::lifo::LifoBox;
    ///
    /// let stack: LifoBox<String> = LifoBox::new(16, 4);
    /// assert_eq!(stack.max_size(), 16);
    /// assert!(stack.capacity() >= 4);
    /// assert!(stack.is_empty());
    /// ```
    pub fn new(max_size: usize, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(coerce_capacity(capacity)),
            max_size,
            #[cfg(feature = "metrics")]
            metrics: BoxMetrics::default(),
        }
    }

    /// Creates a stack pre-loaded with a copy of `items`.
    ///
    /// The last element of `items` is the top of the stack. A nonzero
    /// `max_size` smaller than `items.len()` is widened to fit.
    ///
    /// # Example
    ///
    /// ```
    /// use boxkit::policy::lifo::LifoBox;
    ///
    /// let mut stack = LifoBox::from_items(&["a", "b"], 0);
    /// assert_eq!(stack.remove(), Ok("b"));
    /// ```
    pub fn from_items(items: &[T], max_size: usize) -> Self
    where
        T: Clone,
    {
        Self::from_vec(items.to_vec(), max_size, items.len())
    }

    /// Creates a stack holding a copy of `source`'s live items.
    ///
    /// The last element of `source.snapshot()` becomes the top.
    /// `max_size = None` inherits `source.max_size()`.
    ///
    /// # Example
    ///
    /// ```
    /// use boxkit::policy::fifo::FifoBox;
    /// use boxkit::policy::lifo::LifoBox;
    ///
    /// let mut queue = FifoBox::from_items(&[1, 2, 3], 0);
    /// queue.remove().unwrap();
    ///
    /// let mut stack = LifoBox::from_box(&queue, None);
    /// assert_eq!(stack.remove(), Ok(3));
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

    pub(crate) fn from_vec(mut items: Vec<T>, max_size: usize, capacity: usize) -> Self {
        let max_size = widen_max_size(max_size, items.len());
        let wanted = coerce_capacity(capacity.max(items.len()));
        items.reserve(wanted.saturating_sub(items.len()));
        Self {
            items,
            max_size,
            #[cfg(feature = "metrics")]
            metrics: BoxMetrics::default(),
        }
    }

    /// Pushes `item` onto the top of the stack.
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

    /// Pops the top of the stack.
    pub fn remove(&mut self) -> Result<T, BoxError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let item = self.items.pop();

        #[cfg(feature = "metrics")]
        if item.is_none() {
            self.metrics.record_remove_empty();
        }

        item.ok_or(BoxError::Empty)
    }

    /// Returns the top of the stack without removing it.
    pub fn peek(&self) -> Result<&T, BoxError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let top = self.items.last();

        #[cfg(feature = "metrics")]
        if top.is_none() {
            self.metrics.record_peek_empty();
        }

        top.ok_or(BoxError::Empty)
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

    /// Returns the allocated capacity of the backing vector.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Iterates live items, bottom first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Copies live items, bottom first.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Drops all items; the allocation is kept.
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

impl<T> Default for LifoBox<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T> std::fmt::Debug for LifoBox<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifoBox")
            .field("len", &self.items.len())
            .field("capacity", &self.items.capacity())
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

impl<T> ReadOnlyBox<T> for LifoBox<T> {
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

impl<T> CoreBox<T> for LifoBox<T> {
    #[inline]
    fn insert(&mut self, item: T) -> Result<(), BoxError> {
        LifoBox::insert(self, item)
    }

    #[inline]
    fn remove(&mut self) -> Result<T, BoxError> {
        LifoBox::remove(self)
    }

    #[inline]
    fn peek(&mut self) -> Result<&T, BoxError> {
        LifoBox::peek(self)
    }

    fn clear(&mut self) {
        LifoBox::clear(self);
    }

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        LifoBox::snapshot(self)
    }
}

#[cfg(feature = "metrics")]
impl<T> LifoBox<T> {
    pub fn metrics_snapshot(&self) -> BoxMetricsSnapshot {
        self.metrics
            .snapshot(self.items.len(), self.items.capacity(), self.max_size)
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<BoxMetricsSnapshot> for LifoBox<T> {
    fn snapshot(&self) -> BoxMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============================================
    // LifoBox Basic Operations
    // ==============================================

    mod basic_operations {
        use super::*;

        #[test]
        fn new_stack_is_empty() {
            let stack: LifoBox<i32> = LifoBox::new(0, 0);
            assert!(stack.is_empty());
            assert_eq!(stack.len(), 0);
            assert!(!stack.is_full());
        }

        #[test]
        fn empty_stack_errors() {
            let mut stack: LifoBox<i32> = LifoBox::new(0, 4);
            assert_eq!(stack.peek(), Err(BoxError::Empty));
            assert_eq!(stack.remove(), Err(BoxError::Empty));
        }

        #[test]
        fn peek_does_not_remove() {
            let mut stack = LifoBox::new(0, 4);
            stack.insert("only").unwrap();
            assert_eq!(stack.peek(), Ok(&"only"));
            assert_eq!(stack.peek(), Ok(&"only"));
            assert_eq!(stack.len(), 1);
        }

        #[test]
        fn clear_is_idempotent() {
            let mut stack = LifoBox::new(0, 4);
            stack.clear();
            for i in 0..20 {
                stack.insert(i).unwrap();
            }
            stack.clear();
            stack.clear();
            assert!(stack.is_empty());
            assert_eq!(stack.remove(), Err(BoxError::Empty));

            stack.insert(5).unwrap();
            assert_eq!(stack.peek(), Ok(&5));
        }
    }

    // ==============================================
    // LIFO-Specific Behavior
    // ==============================================

    mod lifo_behavior {
        use super::*;

        #[test]
        fn removes_newest_first() {
            let mut stack = LifoBox::new(0, 4);
            stack.insert(1).unwrap();
            stack.insert(2).unwrap();
            stack.insert(3).unwrap();

            assert_eq!(stack.peek(), Ok(&3));
            assert_eq!(stack.remove(), Ok(3));
            assert_eq!(stack.remove(), Ok(2));
            assert_eq!(stack.remove(), Ok(1));
            assert_eq!(stack.remove(), Err(BoxError::Empty));
        }

        #[test]
        fn interleaved_push_pop() {
            let mut stack = LifoBox::new(0, 2);
            stack.insert('a').unwrap();
            stack.insert('b').unwrap();
            assert_eq!(stack.remove(), Ok('b'));
            stack.insert('c').unwrap();
            assert_eq!(stack.snapshot(), vec!['a', 'c']);
            assert_eq!(stack.remove(), Ok('c'));
            assert_eq!(stack.remove(), Ok('a'));
        }

        #[test]
        fn bounded_stack_rejects_when_full() {
            let mut stack = LifoBox::new(2, 0);
            stack.insert(1).unwrap();
            stack.insert(2).unwrap();
            assert!(stack.is_full());
            assert_eq!(stack.insert(3), Err(BoxError::Full));
            assert_eq!(stack.peek(), Ok(&2));

            stack.remove().unwrap();
            assert_eq!(stack.insert(3), Ok(()));
            assert_eq!(stack.snapshot(), vec![1, 3]);
        }

        #[test]
        fn unbounded_grows_past_initial_capacity() {
            let mut stack = LifoBox::new(0, 2);
            for i in 0..100 {
                stack.insert(i).unwrap();
            }
            assert_eq!(stack.len(), 100);
            assert!(stack.capacity() >= 100);
            assert_eq!(stack.remove(), Ok(99));
        }
    }

    // ==============================================
    // Construction From Data / Other Containers
    // ==============================================

    mod construction {
        use super::*;
        use crate::policy::fifo::FifoBox;

        #[test]
        fn from_items_top_is_last_element() {
            let mut stack = LifoBox::from_items(&[1, 2, 3], 0);
            assert_eq!(stack.peek(), Ok(&3));
            assert_eq!(stack.remove(), Ok(3));
        }

        #[test]
        fn from_items_widens_max_size() {
            let stack = LifoBox::from_items(&[1, 2, 3], 1);
            assert_eq!(stack.max_size(), 3);
            assert!(stack.is_full());

            let stack = LifoBox::from_items(&[1, 2, 3], 20);
            assert_eq!(stack.max_size(), 20);
        }

        #[test]
        fn from_fifo_box_pops_newest() {
            let mut queue = FifoBox::new(0, 4);
            for i in 1..=3 {
                queue.insert(i).unwrap();
            }
            assert_eq!(queue.remove(), Ok(1));

            let mut stack = LifoBox::from_box(&queue, Some(1));
            assert_eq!(stack.max_size(), 2);
            assert_eq!(stack.remove(), Ok(3));
            assert_eq!(stack.remove(), Ok(2));
            assert_eq!(queue.len(), 2);
        }

        #[test]
        fn from_box_inherits_unbounded() {
            let source = LifoBox::from_items(&[1], 0);
            let copy = LifoBox::from_box(&source, None);
            assert_eq!(copy.max_size(), 0);
        }
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut stack = LifoBox::from_items(&[1, 2], 0);
        let mut snap = stack.snapshot();
        snap.clear();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.remove(), Ok(2));
    }

    #[test]
    fn check_invariants_holds() {
        let mut stack = LifoBox::new(3, 1);
        for i in 0..5 {
            let _ = stack.insert(i);
        }
        assert!(stack.check_invariants().is_ok());
    }

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn counts_calls_and_misses() {
            let mut stack = LifoBox::new(1, 1);
            stack.insert(1).unwrap();
            let _ = stack.insert(2);
            stack.remove().unwrap();
            let _ = stack.remove();
            let _ = stack.peek();
            stack.clear();

            let snap = stack.metrics_snapshot();
            assert_eq!(snap.insert_calls, 2);
            assert_eq!(snap.insert_rejected, 1);
            assert_eq!(snap.remove_calls, 2);
            assert_eq!(snap.remove_empty, 1);
            assert_eq!(snap.peek_empty, 1);
            assert_eq!(snap.clear_calls, 1);
            assert_eq!(snap.grow_events, 0);
        }
    }
}
