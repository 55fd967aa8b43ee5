//! Serializing wrapper that makes any engine shareable across threads.
//!
//! ## Architecture
//!
//! ```text
//!   thread A ──┐
//!   thread B ──┼──► ConcurrentBox<T, B> ──► parking_lot::Mutex<B> ──► engine
//!   thread C ──┘         (&self API)            one call at a time
//! ```
//!
//! Every method takes `&self`, acquires the lock, delegates to the engine and
//! returns the engine's result unchanged. The guard is dropped on every exit
//! path. `peek` hands back a clone because a reference cannot outlive the
//! guard.
//!
//! Share a wrapper between threads with `Arc<ConcurrentBox<..>>`; the wrapper
//! itself is `Sync` whenever the engine is `Send`.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use boxkit::builder::{ContainerBuilder, Strategy};
//! use boxkit::concurrent::ConcurrentBox;
//!
//! let shared = Arc::new(ConcurrentBox::new(
//!     ContainerBuilder::new().strategy(Strategy::Fifo).build::<u32>(),
//! ));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let shared = Arc::clone(&shared);
//!         thread::spawn(move || {
//!             for i in 0..10 {
//!                 shared.insert(t * 10 + i).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(shared.len(), 40);
//! ```

use std::fmt;
use std::marker::PhantomData;

use parking_lot::Mutex;

use crate::builder::Container;
use crate::error::BoxError;
use crate::traits::{ConcurrentContainer, CoreBox, ReadOnlyBox};

#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BoxMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::MetricsSnapshotProvider;

/// Thread-safe wrapper serializing every call to the inner engine.
pub struct ConcurrentBox<T, B = Container<T>> {
    inner: Mutex<B>,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T, B> ConcurrentBox<T, B>
where
    B: CoreBox<T>,
{
    /// Wraps `engine`.
    pub fn new(engine: B) -> Self {
        Self {
            inner: Mutex::new(engine),
            _marker: PhantomData,
        }
    }

    /// Unwraps the engine.
    pub fn into_inner(self) -> B {
        self.inner.into_inner()
    }

    /// Inserts `item`; [`BoxError::Full`] when bounded and full.
    pub fn insert(&self, item: T) -> Result<(), BoxError> {
        self.inner.lock().insert(item)
    }

    /// Removes the next item according to the engine's strategy.
    pub fn remove(&self) -> Result<T, BoxError> {
        self.inner.lock().remove()
    }

    /// Returns a clone of the item the engine would hand out.
    pub fn peek(&self) -> Result<T, BoxError>
    where
        T: Clone,
    {
        self.inner.lock().peek().cloned()
    }

    /// Returns the number of live items.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if there are no live items.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the maximum size (0 = unlimited).
    pub fn max_size(&self) -> usize {
        self.inner.lock().max_size()
    }

    /// Returns `true` if bounded and at the maximum size.
    pub fn is_full(&self) -> bool {
        self.inner.lock().is_full()
    }

    /// Returns the engine's current backing capacity.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Removes all live items.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Copies the live items in the engine's logical order.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.lock().snapshot()
    }

    /// Removes every item in retrieval order under a single lock acquisition.
    pub fn drain_all(&self) -> Vec<T> {
        self.inner.lock().drain_all()
    }

    /// Runs `f` with exclusive access to the engine.
    ///
    /// Lets callers compose several operations atomically, e.g. a
    /// check-then-insert that must not interleave with other threads.
    ///
    /// # Example
    ///
    /// ```
    /// use boxkit::concurrent::ConcurrentBox;
    /// use boxkit::policy::lifo::LifoBox;
    ///
    /// let shared = ConcurrentBox::new(LifoBox::new(2, 2));
    /// let inserted = shared.with_engine(|stack| {
    ///     if stack.is_full() { false } else { stack.insert(7).is_ok() }
    /// });
    /// assert!(inserted);
    /// assert_eq!(shared.peek(), Ok(7));
    /// ```
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

#[cfg(feature = "metrics")]
impl<T, B> ConcurrentBox<T, B>
where
    B: MetricsSnapshotProvider<BoxMetricsSnapshot>,
{
    /// Snapshot of the inner engine's counters.
    pub fn metrics_snapshot(&self) -> BoxMetricsSnapshot {
        self.inner.lock().snapshot()
    }
}

impl<T, B> ReadOnlyBox<T> for ConcurrentBox<T, B>
where
    B: CoreBox<T>,
{
    fn len(&self) -> usize {
        self.inner.lock().len()
    }

    fn max_size(&self) -> usize {
        self.inner.lock().max_size()
    }

    fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }
}

// Exclusive access needs no locking.
impl<T, B> CoreBox<T> for ConcurrentBox<T, B>
where
    B: CoreBox<T>,
{
    fn insert(&mut self, item: T) -> Result<(), BoxError> {
        self.inner.get_mut().insert(item)
    }

    fn remove(&mut self) -> Result<T, BoxError> {
        self.inner.get_mut().remove()
    }

    fn peek(&mut self) -> Result<&T, BoxError> {
        self.inner.get_mut().peek()
    }

    fn clear(&mut self) {
        self.inner.get_mut().clear();
    }

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.lock().snapshot()
    }
}

impl<T, B> ConcurrentContainer for ConcurrentBox<T, B> where B: Send {}

impl<T, B> fmt::Debug for ConcurrentBox<T, B>
where
    B: CoreBox<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let engine = self.inner.lock();
        f.debug_struct("ConcurrentBox")
            .field("len", &engine.len())
            .field("max_size", &engine.max_size())
            .finish_non_exhaustive()
    }
}

impl<T, B> Default for ConcurrentBox<T, B>
where
    B: CoreBox<T> + Default,
{
    fn default() -> Self {
        Self::new(B::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::builder::{ContainerBuilder, Strategy};
    use crate::policy::fifo::FifoBox;
    use crate::policy::random::RandomBox;

    fn assert_send_sync<S: Send + Sync>() {}

    #[test]
    fn wrapper_is_send_and_sync() {
        assert_send_sync::<ConcurrentBox<u32, FifoBox<u32>>>();
        assert_send_sync::<ConcurrentBox<String>>();
    }

    #[test]
    fn delegates_results_unchanged() {
        let shared = ConcurrentBox::new(FifoBox::new(2, 2));
        assert_eq!(shared.remove(), Err(BoxError::Empty));
        assert_eq!(shared.peek(), Err(BoxError::Empty));

        shared.insert(1).unwrap();
        shared.insert(2).unwrap();
        assert_eq!(shared.insert(3), Err(BoxError::Full));
        assert!(shared.is_full());
        assert_eq!(shared.peek(), Ok(1));
        assert_eq!(shared.snapshot(), vec![1, 2]);
        assert_eq!(shared.remove(), Ok(1));

        shared.clear();
        assert!(shared.is_empty());
        assert_eq!(shared.max_size(), 2);
    }

    #[test]
    fn accessors_report_engine_state() {
        let shared = ConcurrentBox::new(FifoBox::new(0, 4));
        assert_eq!(shared.len(), 0);
        assert_eq!(shared.capacity(), 4);
        assert_eq!(shared.max_size(), 0);
        assert!(!shared.is_full());

        for i in 0..5 {
            shared.insert(i).unwrap();
        }
        assert_eq!(shared.len(), 5);
        assert_eq!(shared.capacity(), 8);
        assert!(!shared.is_full());
        assert_eq!(shared.snapshot(), vec![0, 1, 2, 3, 4]);

        shared.clear();
        assert_eq!(shared.len(), 0);
        assert!(shared.is_empty());
    }

    #[test]
    fn core_box_through_exclusive_access() {
        let mut shared = ConcurrentBox::new(
            ContainerBuilder::new()
                .strategy(Strategy::Lifo)
                .build::<u8>(),
        );
        CoreBox::insert(&mut shared, 1).unwrap();
        CoreBox::insert(&mut shared, 2).unwrap();
        assert_eq!(CoreBox::peek(&mut shared), Ok(&2));
        assert_eq!(CoreBox::drain_all(&mut shared), vec![2, 1]);
        assert!(ReadOnlyBox::is_empty(&shared));
    }

    #[test]
    fn into_inner_returns_engine() {
        let shared = ConcurrentBox::new(FifoBox::new(0, 0));
        shared.insert("x").unwrap();
        let mut engine = shared.into_inner();
        assert_eq!(engine.remove(), Ok("x"));
    }

    #[test]
    fn concurrent_random_removes_are_disjoint() {
        let shared = Arc::new(ConcurrentBox::new(RandomBox::new(0, 0, Some(3))));
        for i in 0..400u32 {
            shared.insert(i).unwrap();
        }

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    let mut got = Vec::new();
                    for _ in 0..100 {
                        got.push(shared.remove().unwrap());
                    }
                    got
                })
            })
            .collect();

        let mut all: Vec<u32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..400).collect::<Vec<_>>());
        assert!(shared.is_empty());
    }

    #[test]
    fn debug_does_not_require_item_debug() {
        struct Opaque;
        let shared = ConcurrentBox::new(FifoBox::<Opaque>::new(5, 1));
        let dbg = format!("{shared:?}");
        assert!(dbg.contains("ConcurrentBox"));
        assert!(dbg.contains("max_size: 5"));
    }
}
