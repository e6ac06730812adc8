//! Limited but generic reference-counted smart pointer.
//!
//! This module provides the only smart pointer used by the crate: a plain
//! counted box whose counter type is the [`Backend`] parameter. Unlike
//! `Rc`/`Arc`, it exposes the uniqueness check the copy-on-write machinery
//! is built on.

use core::mem::ManuallyDrop;
use core::ops::Deref;
use core::ptr::NonNull;

use crate::alloc::boxed::Box;
use crate::backend::{Backend, Count};


/// Smart pointer inner cell.
struct Inner<T, C>
where
    C: Backend,
{
    count: C,
    value: T,
}

/// Basic smart pointer, with generic counter.
pub(crate) struct Smart<T, C>(NonNull<Inner<T, C>>)
where
    C: Backend;

impl<T, C> Smart<T, C>
where
    C: Backend,
{
    /// Creates the smart pointer.
    #[inline]
    #[must_use]
    pub fn new(value: T) -> Self {
        let ptr = Box::into_raw(Box::new(Inner {
            count: C::one(),
            value,
        }));
        // SAFETY: `Box::into_raw` never returns a null pointer
        Self(unsafe { NonNull::new_unchecked(ptr) })
    }

    #[inline]
    #[must_use]
    fn inner(&self) -> &Inner<T, C> {
        // SAFETY: type invariant, the pointer is valid as long as self lives
        unsafe { self.0.as_ref() }
    }

    /// Gets a reference to the value.
    #[inline]
    #[must_use]
    pub fn as_ref(this: &Self) -> &T {
        &this.inner().value
    }

    /// Checks if this reference is unique.
    #[inline]
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.inner().count.is_unique()
    }

    /// Gets a mutable reference to the value.
    #[inline]
    #[must_use]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        if self.is_unique() {
            // SAFETY: uniqueness checked above
            Some(unsafe { self.as_mut_unchecked() })
        } else {
            None
        }
    }

    /// Gets a mutable reference to the value without checking the uniqueness.
    ///
    /// # Safety
    ///
    /// Any caller should check the uniqueness first with [`Self::is_unique`].
    #[inline]
    pub unsafe fn as_mut_unchecked(&mut self) -> &mut T {
        debug_assert!(self.is_unique());
        // SAFETY: uniqueness precondition
        unsafe { &mut self.0.as_mut().value }
    }

    /// Gets the reference count.
    #[inline]
    #[must_use]
    #[cfg(test)]
    pub fn ref_count(&self) -> usize {
        self.inner().count.get()
    }

    /// Tries to unwrap to its inner value.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` if this reference is not unique.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, Self> {
        if self.is_unique() {
            // do not drop `self`!
            let this = ManuallyDrop::new(self);
            // SAFETY: type invariant, pointer must be valid; uniqueness
            // checked above, so nobody else frees it
            let inner = unsafe { Box::from_raw(this.0.as_ptr()) };
            Ok(inner.value)
        } else {
            Err(self)
        }
    }
}

impl<T, C> Clone for Smart<T, C>
where
    C: Backend,
{
    fn clone(&self) -> Self {
        if self.inner().count.incr() {
            panic!("ref count overflow");
        }
        Self(self.0)
    }
}

impl<T, C> Drop for Smart<T, C>
where
    C: Backend,
{
    fn drop(&mut self) {
        if self.inner().count.decr() {
            // SAFETY: type invariant, count reached zero so this was the
            // last reference
            let _ = unsafe { Box::from_raw(self.0.as_ptr()) };
        }
    }
}

impl<T, C> Deref for Smart<T, C>
where
    C: Backend,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        Self::as_ref(self)
    }
}

// SAFETY: the counter must be `Sync` (i.e. atomic) for the pointee to be
// shared across threads, and `T` must be both `Send` and `Sync` since any
// clone may read or drop it from another thread.
unsafe impl<T, C> Send for Smart<T, C>
where
    T: Send + Sync,
    C: Sync + Backend,
{
}

// SAFETY: same requirements as `Send`
unsafe impl<T, C> Sync for Smart<T, C>
where
    T: Send + Sync,
    C: Sync + Backend,
{
}
