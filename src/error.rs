//! Error types for the boxkit library.
//!
//! ## Key Components
//!
//! - [`BoxError`]: Returned by container operations that cannot proceed:
//!   inserting into a saturated bounded container, or removing/peeking from an
//!   empty one. Both are ordinary, recoverable outcomes.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` diagnostics).
//!
//! ## Example Usage
//!
//! ```
//! use boxkit::error::BoxError;
//! use boxkit::policy::lifo::LifoBox;
//!
//! let mut stack: LifoBox<i32> = LifoBox::new(1, 4);
//! assert_eq!(stack.insert(1), Ok(()));
//! assert_eq!(stack.insert(2), Err(BoxError::Full));
//!
//! assert_eq!(stack.remove(), Ok(1));
//! assert_eq!(stack.remove(), Err(BoxError::Empty));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// BoxError
// ---------------------------------------------------------------------------

/// Error returned when a container operation cannot be performed.
///
/// Every operation that returns `BoxError` leaves the container unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxError {
    /// Insert attempted while `len() == max_size()` on a bounded container.
    Full,
    /// Remove or peek attempted on a container with no live items.
    Empty,
}

impl BoxError {
    /// Returns `true` for [`BoxError::Full`].
    #[inline]
    pub fn is_full(&self) -> bool {
        matches!(self, BoxError::Full)
    }

    /// Returns `true` for [`BoxError::Empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, BoxError::Empty)
    }
}

impl fmt::Display for BoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxError::Full => f.write_str("container is full"),
            BoxError::Empty => f.write_str("container is empty"),
        }
    }
}

impl std::error::Error for BoxError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal container invariants are violated.
///
/// Produced by `check_invariants` methods on the engines
/// (e.g. [`FifoBox::check_invariants`](crate::policy::fifo::FifoBox::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
