//! Fixed-step iteration over borrowed contiguous storage.

use std::iter::{StepBy, Take};
use std::slice;

/// Iterator over every `stride`-th element of a slice, for a fixed count.
#[derive(Debug, Clone)]
pub struct StrideIter<'a, T> {
    inner: Take<StepBy<slice::Iter<'a, T>>>,
}

/// Mutable counterpart of [`StrideIter`].
#[derive(Debug)]
pub struct StrideIterMut<'a, T> {
    inner: Take<StepBy<slice::IterMut<'a, T>>>,
}

impl<'a, T> StrideIter<'a, T> {
    /// Iterates `len` elements of `data`, `stride` apart, starting at `data[0]`.
    ///
    /// # Panics
    /// Panics if `stride` is zero.
    #[inline]
    pub fn new(data: &'a [T], stride: usize, len: usize) -> Self {
        Self {
            inner: data.iter().step_by(stride).take(len),
        }
    }
}

impl<'a, T> StrideIterMut<'a, T> {
    /// Iterates `len` elements of `data`, `stride` apart, starting at `data[0]`.
    ///
    /// # Panics
    /// Panics if `stride` is zero.
    #[inline]
    pub fn new(data: &'a mut [T], stride: usize, len: usize) -> Self {
        Self {
            inner: data.iter_mut().step_by(stride).take(len),
        }
    }
}

impl<'a, T> Iterator for StrideIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.inner.nth(n)
    }
}

impl<'a, T> DoubleEndedIterator for StrideIter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for StrideIter<'_, T> {}

impl<'a, T> Iterator for StrideIterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for StrideIterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for StrideIterMut<'_, T> {}
