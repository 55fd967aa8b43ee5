//! Growable circular buffer backing the FIFO engine.
//!
//! Stores items in a fixed block of `Option<T>` slots addressed by a `head`
//! (next read) and `tail` (next write) index. The block only grows when every
//! slot is live; growth doubles the slot count and linearizes the live range so
//! that `head` returns to slot 0.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          RingBuffer<T>                                │
//!   │                                                                       │
//!   │   slots: Vec<Option<T>>   (capacity = slots.len(), always > 0)        │
//!   │                                                                       │
//!   │        head                 tail                                      │
//!   │         ▼                    ▼                                        │
//!   │   [ ] [ A ] [ B ] [ C ] [ D ] [ ] [ ] [ ]      len = 4                │
//!   │                                                                       │
//!   │   Wrapped (head >= tail):                                             │
//!   │          tail        head                                             │
//!   │           ▼           ▼                                               │
//!   │   [ G ] [ ] [ ] [ ] [ D ] [ E ] [ F ] ...      live = D E F G         │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Growth
//!
//! ```text
//!   full, wrapped (head = tail = 2, capacity 4):
//!     [ C ] [ D ] [ A ] [ B ]
//!
//!   grow(None) → capacity 8, copied head..end then 0..tail:
//!     [ A ] [ B ] [ C ] [ D ] [ ] [ ] [ ] [ ]
//!      ▲ head = 0            ▲ tail = len = 4
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation    | Time         | Notes                                |
//! |-------------|--------------|--------------------------------------|
//! | `push_back` | O(1) amort.  | O(n) when growth is triggered        |
//! | `pop_front` | O(1)         | Slot is emptied with `take()`        |
//! | `front`     | O(1)         |                                      |
//! | `clear`     | O(n)         | Drops live items, keeps slot count   |
//!
//! ## Notes
//! - Consumed slots hold `None`, so owned items are released on removal.
//! - Mutations only run O(1) index checks in debug builds. The full slot scan
//!   (`check_invariants`, `debug_validate_invariants`) is for tests and fuzzing.

use crate::error::InvariantError;

/// Slot count used when a buffer is requested with zero capacity.
pub const DEFAULT_RING_CAPACITY: usize = 8;

/// Multiplier applied to the slot count on each growth.
pub const GROWTH_FACTOR: usize = 2;

/// Circular buffer with lazy doubling growth.
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a buffer with `capacity` slots.
    ///
    /// A capacity of 0 is coerced to [`DEFAULT_RING_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_RING_CAPACITY
        } else {
            capacity
        };
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live items.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot holds a live item.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Index of the next slot to read.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Index of the next slot to write.
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Appends `value` at the tail, growing without limit if every slot is live.
    pub fn push_back(&mut self, value: T) {
        if self.is_full() {
            self.grow(None);
        }

        self.slots[self.tail] = Some(value);
        self.tail = (self.tail + 1) % self.slots.len();
        self.len += 1;

        self.debug_assert_bounds();
    }

    /// Removes and returns the item at the head.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;

        self.debug_assert_bounds();

        value
    }

    /// Returns the item at the head without removing it.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Returns the item at logical position `index` (0 = head).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[(self.head + index) % self.slots.len()].as_ref()
    }

    /// Iterates live items from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Drops all live items and rewinds `head`/`tail` to 0.
    ///
    /// The slot count is kept.
    pub fn clear(&mut self) {
        let capacity = self.slots.len();
        for i in 0..self.len {
            self.slots[(self.head + i) % capacity] = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;

        self.debug_assert_bounds();
    }

    /// Reallocates to `capacity * GROWTH_FACTOR` slots, clamped to `limit`.
    ///
    /// Live items are moved to the front of the new block in logical order,
    /// then `head = 0` and `tail = len`. The slot count never shrinks: a
    /// `limit` below the current capacity leaves the capacity unchanged.
    pub fn grow(&mut self, limit: Option<usize>) {
        let mut new_capacity = self.slots.len() * GROWTH_FACTOR;
        if let Some(limit) = limit
            && limit > 0
            && new_capacity > limit
        {
            new_capacity = limit;
        }
        let new_capacity = new_capacity.max(self.slots.len()).max(self.len).max(1);

        let mut slots: Vec<Option<T>> = Vec::with_capacity(new_capacity);
        if self.len > 0 {
            if self.head < self.tail {
                slots.extend(self.slots[self.head..self.tail].iter_mut().map(Option::take));
            } else {
                slots.extend(self.slots[self.head..].iter_mut().map(Option::take));
                slots.extend(self.slots[..self.tail].iter_mut().map(Option::take));
            }
        }
        debug_assert_eq!(slots.len(), self.len, "growth copied wrong number of slots");
        slots.resize_with(new_capacity, || None);

        self.slots = slots;
        self.head = 0;
        self.tail = self.len % new_capacity;

        self.debug_assert_bounds();
    }

    /// Validates slot occupancy and index bounds.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let capacity = self.slots.len();
        if capacity == 0 {
            return Err(InvariantError::new("ring buffer has zero slots"));
        }
        if self.head >= capacity || self.tail >= capacity {
            return Err(InvariantError::new(format!(
                "head {} / tail {} out of bounds for capacity {}",
                self.head, self.tail, capacity
            )));
        }
        if self.len > capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len, capacity
            )));
        }
        if (self.head + self.len) % capacity != self.tail {
            return Err(InvariantError::new(format!(
                "tail {} != (head {} + len {}) mod {}",
                self.tail, self.head, self.len, capacity
            )));
        }
        for offset in 0..capacity {
            let idx = (self.head + offset) % capacity;
            let live = offset < self.len;
            if live != self.slots[idx].is_some() {
                return Err(InvariantError::new(format!(
                    "slot {} occupancy is {}, expected {}",
                    idx,
                    self.slots[idx].is_some(),
                    live
                )));
            }
        }
        Ok(())
    }

    /// Constant-time index checks run after every mutation in debug builds.
    #[inline]
    fn debug_assert_bounds(&self) {
        debug_assert!(self.head < self.slots.len(), "head out of bounds");
        debug_assert!(self.tail < self.slots.len(), "tail out of bounds");
        debug_assert!(self.len <= self.slots.len(), "len exceeds capacity");
    }

    /// Full O(capacity) slot scan; panics on the first violation.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("ring buffer invariant violated: {}", err);
        }
    }
}

impl<T> std::fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.slots.len())
            .field("len", &self.len)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    proptest! {
        /// Property: push/pop sequences match a VecDeque model
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_vecdeque(
            capacity in 0usize..6,
            ops in prop::collection::vec(any::<Option<u16>>(), 0..200)
        ) {
            let mut ring = RingBuffer::with_capacity(capacity);
            let mut model = VecDeque::new();

            for op in ops {
                match op {
                    Some(value) => {
                        ring.push_back(value);
                        model.push_back(value);
                    }
                    None => {
                        prop_assert_eq!(ring.pop_front(), model.pop_front());
                    }
                }
                prop_assert_eq!(ring.len(), model.len());
                prop_assert_eq!(ring.front(), model.front());
                prop_assert!(ring.check_invariants().is_ok());
            }

            let live: Vec<u16> = ring.iter().copied().collect();
            let expected: Vec<u16> = model.iter().copied().collect();
            prop_assert_eq!(live, expected);
        }
    }
}
