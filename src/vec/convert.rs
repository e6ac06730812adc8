//! Conversion trait implementations for `HipVec`.

use crate::alloc::borrow::Cow;
use crate::alloc::boxed::Box;
use crate::alloc::vec::Vec;

use super::HipVec;
use crate::smart::Smart;
use crate::Backend;

impl<T, B> AsRef<[T]> for HipVec<T, B>
where
    B: Backend,
{
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

// Infallible conversions

impl<T, B> From<Vec<T>> for HipVec<T, B>
where
    B: Backend,
{
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self(Smart::new(value))
    }
}

impl<T, B> From<Box<[T]>> for HipVec<T, B>
where
    B: Backend,
{
    #[inline]
    fn from(value: Box<[T]>) -> Self {
        Self(Smart::new(value.into_vec()))
    }
}

impl<T, B> From<&[T]> for HipVec<T, B>
where
    T: Clone,
    B: Backend,
{
    #[inline]
    fn from(value: &[T]) -> Self {
        Self(Smart::new(value.to_vec()))
    }
}

impl<T, B, const N: usize> From<[T; N]> for HipVec<T, B>
where
    B: Backend,
{
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(Smart::new(Vec::from(value)))
    }
}

impl<T, B, const N: usize> From<&[T; N]> for HipVec<T, B>
where
    T: Clone,
    B: Backend,
{
    #[inline]
    fn from(value: &[T; N]) -> Self {
        Self(Smart::new(value.to_vec()))
    }
}

impl<T, B> From<Cow<'_, [T]>> for HipVec<T, B>
where
    T: Clone,
    B: Backend,
{
    #[inline]
    fn from(value: Cow<'_, [T]>) -> Self {
        Self(Smart::new(value.into_owned()))
    }
}

impl<T, B> From<HipVec<T, B>> for Vec<T>
where
    T: Clone,
    B: Backend,
{
    #[inline]
    fn from(value: HipVec<T, B>) -> Self {
        value
            .into_vec()
            .unwrap_or_else(|shared| shared.as_slice().to_vec())
    }
}
