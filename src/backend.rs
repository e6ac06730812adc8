//! Sealed backend trait and the built-in reference counters.
//!
//! A backend decides how the backing store's reference count is stored and
//! updated: either a plain [`Cell`] (cheap, single-threaded) or an
//! [`AtomicUsize`] (thread-safe).

use core::cell::Cell;
use core::sync::atomic::{fence, AtomicUsize, Ordering};


mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Trait for a basic reference counter.
pub trait Count: Sealed {
    /// Creates a new counter that starts at one.
    fn one() -> Self;

    /// Increments the counter and returns `true` iff the counter reaches `usize::MAX`.
    fn incr(&self) -> bool;

    /// Decrements the counter and returns `true` iff the counter reaches zero.
    fn decr(&self) -> bool;

    /// Returns the current value of the counter.
    fn get(&self) -> usize;

    /// Checks if the counter is exactly one.
    #[inline]
    fn is_unique(&self) -> bool {
        self.get() == 1
    }
}

/// Sealed marker trait for a reference-counting backend.
pub trait Backend: Count + 'static {}

/// Local (not thread-safe) reference counter.
pub struct Local(Cell<usize>);

/// Thread-safe reference counter.
pub struct ThreadSafe(AtomicUsize);

impl Sealed for Local {}

impl Count for Local {
    fn one() -> Self {
        Self(Cell::new(1))
    }

    fn incr(&self) -> bool {
        let new_value = self.0.get() + 1;
        self.0.set(new_value);
        new_value == usize::MAX
    }

    fn decr(&self) -> bool {
        let new_value = self.0.get().saturating_sub(1);
        self.0.set(new_value);
        new_value == 0
    }

    fn get(&self) -> usize {
        self.0.get()
    }
}

impl Backend for Local {}

impl Sealed for ThreadSafe {}

impl Count for ThreadSafe {
    fn one() -> Self {
        Self(AtomicUsize::new(1))
    }

    fn incr(&self) -> bool {
        let old = self.0.fetch_add(1, Ordering::Relaxed);
        old == usize::MAX - 1
    }

    fn decr(&self) -> bool {
        let old_value = self.0.fetch_sub(1, Ordering::Release);
        if old_value == 1 {
            fence(Ordering::Acquire);
            true
        } else {
            false
        }
    }

    fn get(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }

    fn is_unique(&self) -> bool {
        if self.0.load(Ordering::Relaxed) == 1 {
            fence(Ordering::Acquire);
            true
        } else {
            false
        }
    }
}

impl Backend for ThreadSafe {}
