//! `serde` support for `HipSlice`.
//!
//! A view serializes as a plain sequence of its elements; the absolute
//! index range is **not** part of the serialized form. Consequently a
//! deserialized view starts at index 0.

use serde::{Deserialize, Serialize};

use crate::alloc::vec::Vec;

use super::HipSlice;
use crate::smart::Smart;
use crate::Backend;

impl<T, B> Serialize for HipSlice<T, B>
where
    T: Serialize,
    B: Backend,
{
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T, B> Deserialize<'de> for HipSlice<T, B>
where
    T: Deserialize<'de>,
    B: Backend,
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = Vec::<T>::deserialize(deserializer)?;
        let len = vec.len();
        Ok(Self::from_owner(Smart::new(vec), 0, 0..len))
    }
}
