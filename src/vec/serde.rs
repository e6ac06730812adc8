//! `serde` support for `HipVec`.

use serde::{Deserialize, Serialize};

use crate::alloc::vec::Vec;

use super::HipVec;
use crate::Backend;

impl<T, B> Serialize for HipVec<T, B>
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

impl<'de, T, B> Deserialize<'de> for HipVec<T, B>
where
    T: Deserialize<'de>,
    B: Backend,
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
