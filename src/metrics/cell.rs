use std::cell::Cell;

/// A counter that can be bumped through `&self`.
///
/// Used for read paths such as FIFO/LIFO `peek`, which only borrow the
/// container immutably. The type is `Send` but not `Sync`; shared access
/// goes through [`ConcurrentBox`](crate::concurrent::ConcurrentBox), whose
/// mutex serializes every touch.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get().saturating_add(1));
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}
