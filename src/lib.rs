//! Yet another **vector type** for Rust 🦀
//!
//! * O(1) clone with (atomic) **reference counting**
//! * **copy-on-write** mutation: sibling clones never observe your writes
//! * owned, **index-stable slices** sharing the backing store
//!
//! # Examples
//!
//! ```rust
//! use hipvec::HipVec;
//!
//! let v = HipVec::from([10, 20, 30, 40, 50]);
//! let w = v.clone(); // no copy
//! std::thread::spawn(move || assert_eq!(w.len(), 5));
//!
//! let s = v.slice(2..5); // no copy either
//! assert_eq!(s[2], 30); // indexed with the *parent's* indices
//! drop(v); // the slice is _owned_, it survives the parent
//! assert_eq!(s.to_vec(), [30, 40, 50]);
//! ```
//!
//! # Two Types
//!
//! - [`HipVec<T, B>`](crate::vec::HipVec) \
//!   a cheaply clonable replacement for `Vec<T>`
//! - [`HipSlice<T, B>`](crate::slice::HipSlice) \
//!   an owned sub-range view of a `HipVec`, indexed with the parent's indices
//!
//! where `B` is a backend, see below.
//!
//! # Copy-on-Write
//!
//! Cloning a `HipVec` (or slicing it) only bumps a reference count. The
//! first mutation through a value whose backing store is shared copies the
//! store first, so the mutation stays invisible to every other owner. A
//! value whose store is *not* shared mutates in place, like a plain `Vec`.
//!
//! # Two Backends
//!
//! The crate provides two backends:
//!
//! - `ThreadSafe` (atomic reference count),
//! - `Local` (plain cell, not thread-safe but cheaper).
//!
//! The crate root also provides some convenience type aliases:
//!
//! - `hipvec::HipVec` and `hipvec::HipSlice` that set `B` to `ThreadSafe`,
//! - `hipvec::LocalHipVec` and `hipvec::LocalHipSlice` that set `B` to `Local`.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(not(feature = "std"))]
pub(crate) extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std as alloc;

mod backend;
pub mod common;
pub mod slice;
mod smart;
pub mod vec;

pub use backend::{Backend, Local, ThreadSafe};

/// Thread-safe shared vector.
pub type HipVec<T> = vec::HipVec<T, ThreadSafe>;

/// Thread-safe shared sub-range view.
pub type HipSlice<T> = slice::HipSlice<T, ThreadSafe>;

/// Thread-local shared vector.
pub type LocalHipVec<T> = vec::HipVec<T, Local>;

/// Thread-local shared sub-range view.
pub type LocalHipSlice<T> = slice::HipSlice<T, Local>;
