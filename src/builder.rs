//! Unified container builder for all retrieval strategies.
//!
//! Resolves a declarative option set (strategy, maximum size, initial
//! capacity, seed) into one concrete engine wrapped in [`Container`], so
//! callers get a single type regardless of strategy.
//!
//! ## Example
//!
//! ```rust
//! use boxkit::builder::{ContainerBuilder, Strategy};
//!
//! let mut jobs = ContainerBuilder::new()
//!     .strategy(Strategy::Fifo)
//!     .max_size(100)
//!     .build::<String>();
//! jobs.insert("compile".to_string()).unwrap();
//! jobs.insert("link".to_string()).unwrap();
//! assert_eq!(jobs.remove().as_deref(), Ok("compile"));
//! ```

use std::fmt;

use crate::error::{BoxError, InvariantError};
use crate::policy::DEFAULT_INITIAL_CAPACITY;
use crate::policy::fifo::FifoBox;
use crate::policy::lifo::LifoBox;
use crate::policy::random::RandomBox;
use crate::traits::{CoreBox, ReadOnlyBox};

#[cfg(feature = "metrics")]
use crate::metrics::snapshot::BoxMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::MetricsSnapshotProvider;

/// Available retrieval strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// First in, first out (ring-buffer queue).
    Fifo,
    /// Last in, first out (stack).
    Lifo,
    /// Uniformly random removal (swap-remove pool).
    #[default]
    Random,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 3] = [Strategy::Fifo, Strategy::Lifo, Strategy::Random];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Fifo => f.write_str("fifo"),
            Strategy::Lifo => f.write_str("lifo"),
            Strategy::Random => f.write_str("random"),
        }
    }
}

/// Unified container wrapper that provides a consistent API regardless of strategy.
pub struct Container<T> {
    inner: ContainerInner<T>,
}

enum ContainerInner<T> {
    Fifo(FifoBox<T>),
    Lifo(LifoBox<T>),
    Random(RandomBox<T>),
}

impl<T> Container<T> {
    /// Returns the strategy fixed at construction.
    pub fn strategy(&self) -> Strategy {
        match &self.inner {
            ContainerInner::Fifo(_) => Strategy::Fifo,
            ContainerInner::Lifo(_) => Strategy::Lifo,
            ContainerInner::Random(_) => Strategy::Random,
        }
    }

    /// Insert an item. Fails with [`BoxError::Full`] when bounded and full.
    pub fn insert(&mut self, item: T) -> Result<(), BoxError> {
        match &mut self.inner {
            ContainerInner::Fifo(fifo) => fifo.insert(item),
            ContainerInner::Lifo(lifo) => lifo.insert(item),
            ContainerInner::Random(random) => random.insert(item),
        }
    }

    /// Remove the next item according to the strategy.
    pub fn remove(&mut self) -> Result<T, BoxError> {
        match &mut self.inner {
            ContainerInner::Fifo(fifo) => fifo.remove(),
            ContainerInner::Lifo(lifo) => lifo.remove(),
            ContainerInner::Random(random) => random.remove(),
        }
    }

    /// Peek at the item the strategy would hand out.
    pub fn peek(&mut self) -> Result<&T, BoxError> {
        match &mut self.inner {
            ContainerInner::Fifo(fifo) => fifo.peek(),
            ContainerInner::Lifo(lifo) => lifo.peek(),
            ContainerInner::Random(random) => random.peek(),
        }
    }

    /// Return the number of live items.
    pub fn len(&self) -> usize {
        match &self.inner {
            ContainerInner::Fifo(fifo) => fifo.len(),
            ContainerInner::Lifo(lifo) => lifo.len(),
            ContainerInner::Random(random) => random.len(),
        }
    }

    /// Check if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the maximum size (0 = unlimited).
    pub fn max_size(&self) -> usize {
        match &self.inner {
            ContainerInner::Fifo(fifo) => fifo.max_size(),
            ContainerInner::Lifo(lifo) => lifo.max_size(),
            ContainerInner::Random(random) => random.max_size(),
        }
    }

    /// Check if the container is bounded and at its maximum size.
    pub fn is_full(&self) -> bool {
        let max = self.max_size();
        max > 0 && self.len() >= max
    }

    /// Return the current backing capacity.
    pub fn capacity(&self) -> usize {
        match &self.inner {
            ContainerInner::Fifo(fifo) => fifo.capacity(),
            ContainerInner::Lifo(lifo) => lifo.capacity(),
            ContainerInner::Random(random) => random.capacity(),
        }
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        match &mut self.inner {
            ContainerInner::Fifo(fifo) => fifo.clear(),
            ContainerInner::Lifo(lifo) => lifo.clear(),
            ContainerInner::Random(random) => random.clear(),
        }
    }

    /// Copy the live items in the engine's logical order.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        match &self.inner {
            ContainerInner::Fifo(fifo) => fifo.snapshot(),
            ContainerInner::Lifo(lifo) => lifo.snapshot(),
            ContainerInner::Random(random) => random.snapshot(),
        }
    }

    /// Run the engine's structural checks.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        match &self.inner {
            ContainerInner::Fifo(fifo) => fifo.check_invariants(),
            ContainerInner::Lifo(lifo) => lifo.check_invariants(),
            ContainerInner::Random(random) => random.check_invariants(),
        }
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> BoxMetricsSnapshot {
        match &self.inner {
            ContainerInner::Fifo(fifo) => fifo.metrics_snapshot(),
            ContainerInner::Lifo(lifo) => lifo.metrics_snapshot(),
            ContainerInner::Random(random) => random.metrics_snapshot(),
        }
    }
}

impl<T> fmt::Debug for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            ContainerInner::Fifo(fifo) => f.debug_tuple("Container").field(fifo).finish(),
            ContainerInner::Lifo(lifo) => f.debug_tuple("Container").field(lifo).finish(),
            ContainerInner::Random(random) => f.debug_tuple("Container").field(random).finish(),
        }
    }
}

impl<T> ReadOnlyBox<T> for Container<T> {
    fn len(&self) -> usize {
        Container::len(self)
    }

    fn max_size(&self) -> usize {
        Container::max_size(self)
    }

    fn capacity(&self) -> usize {
        Container::capacity(self)
    }
}

impl<T> CoreBox<T> for Container<T> {
    fn insert(&mut self, item: T) -> Result<(), BoxError> {
        Container::insert(self, item)
    }

    fn remove(&mut self) -> Result<T, BoxError> {
        Container::remove(self)
    }

    fn peek(&mut self) -> Result<&T, BoxError> {
        Container::peek(self)
    }

    fn clear(&mut self) {
        Container::clear(self);
    }

    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        Container::snapshot(self)
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<BoxMetricsSnapshot> for Container<T> {
    fn snapshot(&self) -> BoxMetricsSnapshot {
        self.metrics_snapshot()
    }
}

/// Builder for creating container instances.
///
/// | Option             | Default                |
/// |--------------------|------------------------|
/// | `strategy`         | [`Strategy::Random`]   |
/// | `max_size`         | unset (unlimited, or inherited by `build_from_box`) |
/// | `initial_capacity` | [`DEFAULT_INITIAL_CAPACITY`] |
/// | `seed`             | unset (clock-seeded)   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerBuilder {
    strategy: Strategy,
    max_size: Option<usize>,
    initial_capacity: usize,
    seed: Option<u64>,
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_size: None,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            seed: None,
        }
    }
}

impl ContainerBuilder {
    /// Create a builder with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the retrieval strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the hard cap on live items; `0` means unlimited.
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Set the initial backing capacity; `0` falls back to the default.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Fix the random-pool seed. Ignored by the other strategies.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build an empty container.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxkit::builder::{ContainerBuilder, Strategy};
    ///
    /// let bag = ContainerBuilder::new().build::<u64>();
    /// assert_eq!(bag.strategy(), Strategy::Random);
    /// assert_eq!(bag.max_size(), 0);
    ///
    /// let stack = ContainerBuilder::new()
    ///     .strategy(Strategy::Lifo)
    ///     .initial_capacity(64)
    ///     .build::<u64>();
    /// assert!(stack.capacity() >= 64);
    /// ```
    pub fn build<T>(self) -> Container<T> {
        self.assemble(Vec::new(), self.max_size.unwrap_or(0))
    }

    /// Build a container pre-loaded with a copy of `items`, in slice order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxkit::builder::{ContainerBuilder, Strategy};
    ///
    /// let mut queue = ContainerBuilder::new()
    ///     .strategy(Strategy::Fifo)
    ///     .max_size(1)
    ///     .build_from(&[1, 2, 3]);
    /// assert_eq!(queue.max_size(), 3);
    /// assert_eq!(queue.remove(), Ok(1));
    /// ```
    pub fn build_from<T: Clone>(self, items: &[T]) -> Container<T> {
        self.assemble(items.to_vec(), self.max_size.unwrap_or(0))
    }

    /// Build a container holding a copy of `source`'s live items.
    ///
    /// Unless [`max_size`](Self::max_size) was set on this builder, the
    /// source's maximum size is inherited.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxkit::builder::{ContainerBuilder, Strategy};
    ///
    /// let mut queue = ContainerBuilder::new()
    ///     .strategy(Strategy::Fifo)
    ///     .max_size(10)
    ///     .build::<u32>();
    /// queue.insert(2).unwrap();
    /// queue.insert(3).unwrap();
    ///
    /// let mut stack = ContainerBuilder::new()
    ///     .strategy(Strategy::Lifo)
    ///     .build_from_box(&queue);
    /// assert_eq!(stack.max_size(), 10);
    /// assert_eq!(stack.remove(), Ok(3));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn build_from_box<T, B>(self, source: &B) -> Container<T>
    where
        T: Clone,
        B: CoreBox<T> + ?Sized,
    {
        let max_size = self.max_size.unwrap_or_else(|| source.max_size());
        self.assemble(source.snapshot(), max_size)
    }

    fn assemble<T>(self, items: Vec<T>, max_size: usize) -> Container<T> {
        let capacity = self.initial_capacity;
        let inner = match self.strategy {
            Strategy::Fifo => ContainerInner::Fifo(FifoBox::from_vec(items, max_size, capacity)),
            Strategy::Lifo => ContainerInner::Lifo(LifoBox::from_vec(items, max_size, capacity)),
            Strategy::Random => ContainerInner::Random(RandomBox::from_vec(
                items, max_size, capacity, self.seed,
            )),
        };

        Container { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_strategies_basic_ops() {
        for strategy in Strategy::ALL {
            let mut container = ContainerBuilder::new()
                .strategy(strategy)
                .max_size(2)
                .seed(1)
                .build::<String>();
            assert_eq!(container.strategy(), strategy);

            // Insert
            assert_eq!(container.insert("one".to_string()), Ok(()));
            assert_eq!(container.insert("two".to_string()), Ok(()));
            assert_eq!(container.insert("three".to_string()), Err(BoxError::Full));

            // Len
            assert_eq!(container.len(), 2);
            assert!(container.is_full());
            assert!(!container.is_empty());

            // Peek
            assert!(container.peek().is_ok());
            assert_eq!(container.len(), 2);

            // Remove
            assert!(container.remove().is_ok());
            assert_eq!(container.len(), 1);

            // Clear
            container.clear();
            assert!(container.is_empty());
            assert_eq!(container.remove(), Err(BoxError::Empty));
            assert_eq!(container.peek(), Err(BoxError::Empty));
            assert!(container.check_invariants().is_ok());
        }
    }

    #[test]
    fn test_defaults() {
        let builder = ContainerBuilder::default();
        assert_eq!(builder, ContainerBuilder::new());

        let container = builder.build::<u8>();
        assert_eq!(container.strategy(), Strategy::Random);
        assert_eq!(container.max_size(), 0);
        assert!(container.capacity() >= DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn test_zero_initial_capacity_is_coerced() {
        for strategy in Strategy::ALL {
            let container = ContainerBuilder::new()
                .strategy(strategy)
                .initial_capacity(0)
                .build::<u8>();
            assert!(container.capacity() >= DEFAULT_INITIAL_CAPACITY);
        }
    }

    #[test]
    fn test_retrieval_order_per_strategy() {
        let mut fifo = ContainerBuilder::new()
            .strategy(Strategy::Fifo)
            .build_from(&[1, 2, 3]);
        let mut lifo = ContainerBuilder::new()
            .strategy(Strategy::Lifo)
            .build_from(&[1, 2, 3]);

        assert_eq!(fifo.drain_all(), vec![1, 2, 3]);
        assert_eq!(lifo.drain_all(), vec![3, 2, 1]);
    }

    #[test]
    fn test_seed_only_affects_random() {
        let draw = |seed| {
            let mut c = ContainerBuilder::new().seed(seed).build_from(&[0u32, 1, 2, 3, 4, 5, 6, 7]);
            c.drain_all()
        };
        assert_eq!(draw(9), draw(9));

        let mut fifo = ContainerBuilder::new()
            .strategy(Strategy::Fifo)
            .seed(9)
            .build_from(&[5, 6]);
        assert_eq!(fifo.remove(), Ok(5));
    }

    #[test]
    fn test_build_from_widens_max_size() {
        for strategy in Strategy::ALL {
            let container = ContainerBuilder::new()
                .strategy(strategy)
                .max_size(1)
                .build_from(&[1, 2, 3]);
            assert_eq!(container.len(), 3);
            assert_eq!(container.max_size(), 3);

            let container = ContainerBuilder::new()
                .strategy(strategy)
                .max_size(20)
                .build_from(&[1, 2, 3]);
            assert_eq!(container.max_size(), 20);
        }
    }

    #[test]
    fn test_build_from_box_inherits_or_overrides() {
        let source = ContainerBuilder::new()
            .strategy(Strategy::Fifo)
            .max_size(7)
            .build_from(&[1, 2, 3]);

        let inherited = ContainerBuilder::new()
            .strategy(Strategy::Lifo)
            .build_from_box(&source);
        assert_eq!(inherited.max_size(), 7);

        let widened = ContainerBuilder::new()
            .strategy(Strategy::Lifo)
            .max_size(1)
            .build_from_box(&source);
        assert_eq!(widened.max_size(), 3);

        let unbounded = ContainerBuilder::new()
            .strategy(Strategy::Random)
            .max_size(0)
            .build_from_box(&source);
        assert_eq!(unbounded.max_size(), 0);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn test_cross_strategy_conversion() {
        let mut stack = ContainerBuilder::new()
            .strategy(Strategy::Lifo)
            .build::<i32>();
        stack.insert(1).unwrap();
        stack.insert(2).unwrap();

        let mut queue = ContainerBuilder::new()
            .strategy(Strategy::Fifo)
            .build_from_box(&stack);
        assert_eq!(queue.remove(), Ok(1));

        let mut queue = ContainerBuilder::new()
            .strategy(Strategy::Fifo)
            .build_from(&[1, 2, 3]);
        queue.remove().unwrap();
        let mut stack = ContainerBuilder::new()
            .strategy(Strategy::Lifo)
            .build_from_box(&queue);
        assert_eq!(stack.remove(), Ok(3));
    }

    #[test]
    fn test_build_from_concrete_engine() {
        let engine = FifoBox::from_items(&["a", "b"], 4);
        let mut container = ContainerBuilder::new()
            .strategy(Strategy::Fifo)
            .build_from_box(&engine);
        assert_eq!(container.max_size(), 4);
        assert_eq!(container.snapshot(), vec!["a", "b"]);
        assert_eq!(container.remove(), Ok("a"));
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Fifo.to_string(), "fifo");
        assert_eq!(Strategy::Lifo.to_string(), "lifo");
        assert_eq!(Strategy::Random.to_string(), "random");
        assert_eq!(Strategy::default(), Strategy::Random);
    }

    #[test]
    fn test_debug_names_engine() {
        let container = ContainerBuilder::new()
            .strategy(Strategy::Lifo)
            .build::<u8>();
        assert!(format!("{container:?}").contains("LifoBox"));
    }
}
