//! Owning fixed-size vectors.

use crate::align::{Alignment, Packed};
use crate::apply::unary_apply;
use crate::flatten::{FlatSink, Flatten};
use crate::stride_iter::StrideIter;
use crate::view::{VectorView, VectorViewMut};
use crate::{MathError, Result};
use fixed_linalg_traits::{MathTrait, MathTraitMut, Scalar, VectorShape};
use num_traits::AsPrimitive;
use std::fmt;
use std::ops::{Index, IndexMut};

/// An owning vector of exactly `N` contiguous elements.
///
/// # Type Parameters
/// - `T`: Element type
/// - `N`: Number of elements (at least 1, checked at compile time)
/// - `A`: Layout marker, [`Packed`] (default) or [`Align16`](crate::Align16)
///
/// Named components (`x`/`y`/`z`/`w`, `r`/`g`/`b`/`a`, `s`/`t`/`p`/`q`) come
/// from the [`AccessX`](crate::AccessX) family of traits and only exist when
/// `N` is large enough.
///
/// # Example
/// ```rust
/// use fixed_linalg::{vector, AccessX, AccessY, Vector};
///
/// let v: Vector<f32, 4> = vector![1.0f32, 2.0f32];
/// assert_eq!(v.as_array(), &[1.0, 2.0, 0.0, 0.0]);
/// assert_eq!(v.x(), 1.0);
/// assert_eq!(v.g(), 2.0);
/// ```
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize, A: Alignment = Packed> {
    _align: [A; 0],
    data: [T; N],
}

/// Builds a [`Vector`] from any mix of scalars and vector/matrix-like values.
///
/// Missing trailing elements are default-initialized and surplus values are
/// discarded. See [`Vector::from_args`].
#[macro_export]
macro_rules! vector {
    ($($arg:expr),+ $(,)?) => {
        $crate::Vector::from_args(($($arg,)+))
    };
}

impl<T, const N: usize, A: Alignment> Vector<T, N, A> {
    const NON_EMPTY: () = assert!(N >= 1, "a vector holds at least one element");

    /// Number of elements.
    pub const DATA_SIZE: usize = N;

    /// Creates a vector from an array of elements.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self { _align: [], data }
    }

    /// Creates a vector whose element `i` is `f(i)`.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_array(std::array::from_fn(f))
    }

    /// Number of elements.
    #[inline]
    pub const fn size() -> usize {
        N
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`; a vector holds at least one element.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns a reference to element `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Returns a reference to element `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        assume_in_bounds!(index, N);
        self.data.get_unchecked(index)
    }

    /// # Safety
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        assume_in_bounds!(index, N);
        self.data.get_unchecked_mut(index)
    }

    /// Unit-stride view over the whole vector.
    #[inline]
    pub fn as_view(&self) -> VectorView<'_, T, 1, N> {
        VectorView::from_trusted(&self.data)
    }

    /// Mutable unit-stride view over the whole vector.
    #[inline]
    pub fn as_view_mut(&mut self) -> VectorViewMut<'_, T, 1, N> {
        VectorViewMut::from_trusted(&mut self.data)
    }

    /// Strided view of `M` elements starting at element 0.
    ///
    /// Whether the view fits inside the vector is checked at compile time.
    ///
    /// ```rust
    /// use fixed_linalg::Vector;
    ///
    /// let v = Vector::<i32, 6>::from_array([0, 1, 2, 3, 4, 5]);
    /// let evens = v.view::<2, 3>();
    /// assert_eq!(evens.copy().into_array(), [0, 2, 4]);
    /// ```
    ///
    /// ```compile_fail
    /// use fixed_linalg::Vector;
    ///
    /// let v = Vector::<i32, 4>::from_array([0, 1, 2, 3]);
    /// let too_long = v.view::<2, 3>(); // would need 5 elements
    /// ```
    #[inline]
    pub fn view<const STRIDE: usize, const M: usize>(&self) -> VectorView<'_, T, STRIDE, M> {
        let () = SubViewFits::<STRIDE, M, N>::OK;
        VectorView::from_trusted(&self.data)
    }

    /// Mutable strided view of `M` elements starting at element 0.
    #[inline]
    pub fn view_mut<const STRIDE: usize, const M: usize>(
        &mut self,
    ) -> VectorViewMut<'_, T, STRIDE, M> {
        let () = SubViewFits::<STRIDE, M, N>::OK;
        VectorViewMut::from_trusted(&mut self.data)
    }

    /// Strided view of `M` elements starting at element `start`.
    ///
    /// # Errors
    /// Returns [`MathError::ViewOutOfBounds`] if the view does not fit.
    pub fn view_at<const STRIDE: usize, const M: usize>(
        &self,
        start: usize,
    ) -> Result<VectorView<'_, T, STRIDE, M>> {
        VectorView::new(self.data.get(start..).unwrap_or(&[]))
    }

    /// Iterates every `stride`-th element, starting at element 0.
    ///
    /// # Panics
    /// Panics if `stride` is zero.
    #[inline]
    pub fn iter_strided(&self, stride: usize) -> StrideIter<'_, T> {
        assert!(stride > 0, "iter_strided needs a positive stride");
        StrideIter::new(&self.data, stride, N.div_ceil(stride))
    }

    /// Same elements with a different layout marker.
    #[inline]
    pub fn realign<B: Alignment>(self) -> Vector<T, N, B> {
        Vector::from_array(self.data)
    }
}

impl<T: Scalar, const N: usize, A: Alignment> Vector<T, N, A> {
    /// Creates a vector with every element set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    /// Creates a vector from a flattened argument tuple.
    ///
    /// Scalars contribute one value and vector/matrix-like arguments all of
    /// their elements, in order, each converted with `as` semantics. If fewer
    /// than `N` values are supplied the rest stay at `T::default()`; values
    /// beyond `N` are discarded.
    ///
    /// ```rust
    /// use fixed_linalg::Vector;
    ///
    /// let xy = Vector::<f32, 2>::from_array([1.0, 2.0]);
    /// let v = Vector::<f32, 4>::from_args((xy, 3i32, 4.0f64, 5.0f32));
    /// assert_eq!(v.into_array(), [1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn from_args<Args: Flatten<T>>(args: Args) -> Self {
        let mut out = Self::default();
        let mut sink = FlatSink::new(&mut out.data);
        args.flatten_into(&mut sink);
        out
    }

    /// Creates a vector from a slice of exactly `N` elements.
    ///
    /// # Errors
    /// Returns [`MathError::LengthMismatch`] if `values.len() != N`.
    pub fn try_from_slice(values: &[T]) -> Result<Self> {
        let data: [T; N] = values.try_into().map_err(|_| MathError::LengthMismatch {
            expected: N,
            actual: values.len(),
        })?;
        Ok(Self::from_array(data))
    }

    /// Detached copy with the default layout.
    #[inline]
    pub fn copy(&self) -> Vector<T, N> {
        Vector::from_array(self.data)
    }

    /// Element-wise primitive cast (`as` semantics).
    #[inline]
    pub fn cast<U: Scalar>(&self) -> Vector<U, N, A>
    where
        T: AsPrimitive<U>,
    {
        unary_apply(self, |x| x.as_())
    }
}

struct SubViewFits<const STRIDE: usize, const M: usize, const N: usize>;

impl<const STRIDE: usize, const M: usize, const N: usize> SubViewFits<STRIDE, M, N> {
    const OK: () = assert!(
        STRIDE >= 1 && M >= 1 && (M - 1) * STRIDE < N,
        "strided view does not fit inside the vector"
    );
}

impl<T: Default, const N: usize, A: Alignment> Default for Vector<T, N, A> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize, A: Alignment> Index<usize> for Vector<T, N, A> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize, A: Alignment> IndexMut<usize> for Vector<T, N, A> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const N: usize, A: Alignment> From<[T; N]> for Vector<T, N, A> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const N: usize, A: Alignment> From<Vector<T, N, A>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N, A>) -> Self {
        v.data
    }
}

impl<T, const N: usize, A: Alignment> AsRef<[T]> for Vector<T, N, A> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize, A: Alignment> AsMut<[T]> for Vector<T, N, A> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize, A: Alignment> IntoIterator for Vector<T, N, A> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize, A: Alignment> IntoIterator for &'a Vector<T, N, A> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize, A: Alignment> IntoIterator for &'a mut Vector<T, N, A> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: fmt::Debug, const N: usize, A: Alignment> fmt::Debug for Vector<T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.data).finish()
    }
}

impl<T: fmt::Display, const N: usize, A: Alignment> fmt::Display for Vector<T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(v, f)?;
        }
        write!(f, ")")
    }
}

unsafe impl<T: Scalar, const N: usize, A: Alignment> MathTrait for Vector<T, N, A> {
    type Value = T;
    type Shape = VectorShape<N>;
    type Owned<U: Scalar> = Vector<U, N, A>;

    #[inline]
    fn at(&self, index: usize) -> T {
        self.data[index]
    }

    #[inline(always)]
    unsafe fn at_unchecked(&self, index: usize) -> T {
        *self.get_unchecked(index)
    }
}

unsafe impl<T: Scalar, const N: usize, A: Alignment> MathTraitMut for Vector<T, N, A> {
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    #[inline(always)]
    unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.get_unchecked_mut(index)
    }
}

impl<T, U: Flatten<T>, const N: usize, A: Alignment> Flatten<T> for Vector<U, N, A> {
    const LEN: usize = <U as Flatten<T>>::LEN * N;

    #[inline]
    fn flatten_into(&self, sink: &mut FlatSink<'_, T>) {
        for v in &self.data {
            v.flatten_into(sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Align16;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_construct_and_index() {
        let v1 = Vector::<f32, 1>::from_array([7.0]);
        assert_eq!(v1[0], 7.0);
        let v4 = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        for i in 0..4 {
            assert_eq!(v4[i], i as i32 + 1);
        }
    }

    #[test]
    fn test_default_is_zero() {
        let v = Vector::<f64, 3>::default();
        assert_eq!(v.into_array(), [0.0; 3]);
    }

    #[test]
    fn test_from_args_pads_with_default() {
        let v = Vector::<f32, 4>::from_args((1.0f32, 2.0f32));
        assert_eq!(v.into_array(), [1.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_args_truncates() {
        let big = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        let v = Vector::<i32, 3>::from_args((big, 99i32));
        assert_eq!(v.into_array(), [1, 2, 3]);
    }

    #[test]
    fn test_from_args_mixed() {
        let xy = Vector::<i32, 2>::from_array([1, 2]);
        let v = Vector::<f64, 3>::from_args((xy, 0.5f32));
        assert_eq!(v.into_array(), [1.0, 2.0, 0.5]);
    }

    #[test]
    fn test_vector_macro() {
        let v: Vector<u32, 3> = vector![1u32, 2u32, 3u32];
        assert_eq!(v.into_array(), [1, 2, 3]);
    }

    #[test]
    fn test_try_from_slice() {
        let v = Vector::<i32, 3>::try_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(v.into_array(), [1, 2, 3]);
        let err = Vector::<i32, 3>::try_from_slice(&[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            MathError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_aligned_layout() {
        assert_eq!(align_of::<Vector<f32, 3, Align16>>(), 16);
        assert_eq!(size_of::<Vector<f32, 3, Align16>>(), 16);
        assert_eq!(size_of::<Vector<f32, 3>>(), 12);
        assert_eq!(align_of::<Vector<f32, 3>>(), align_of::<f32>());
    }

    #[test]
    fn test_realign_keeps_values() {
        let v = Vector::<f32, 3>::from_array([1.0, 2.0, 3.0]);
        let a: Vector<f32, 3, Align16> = v.realign();
        assert_eq!(a.as_array(), v.as_array());
        assert_eq!(a.copy(), v);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut v = Vector::<i32, 2>::from_array([1, 2]);
        let c = v.copy();
        v[0] = 10;
        assert_eq!(c[0], 1);
    }

    #[test]
    fn test_sub_view() {
        let mut v = Vector::<i32, 5>::from_array([0, 1, 2, 3, 4]);
        {
            let mut odds = v.view_mut::<2, 3>();
            odds[1] = 20;
        }
        assert_eq!(v.into_array(), [0, 1, 20, 3, 4]);
    }

    #[test]
    fn test_view_at() {
        let v = Vector::<i32, 6>::from_array([0, 1, 2, 3, 4, 5]);
        let tail = v.view_at::<2, 2>(3).unwrap();
        assert_eq!(tail.copy().into_array(), [3, 5]);
        assert!(v.view_at::<2, 3>(3).is_err());
        assert!(v.view_at::<1, 1>(9).is_err());
    }

    #[test]
    fn test_iter_strided() {
        let v = Vector::<i32, 5>::from_array([0, 1, 2, 3, 4]);
        let got: Vec<i32> = v.iter_strided(2).copied().collect();
        assert_eq!(got, vec![0, 2, 4]);
    }

    #[test]
    #[should_panic(expected = "positive stride")]
    fn test_iter_strided_zero_stride() {
        let v = Vector::<i32, 3>::splat(1);
        let _ = v.iter_strided(0);
    }

    #[test]
    #[cfg(any(feature = "checked-views", debug_assertions))]
    #[should_panic(expected = "unchecked index 3 out of range for length 3")]
    fn test_get_unchecked_asserts_bounds() {
        let v = Vector::<i32, 3>::splat(1);
        // SAFETY: not upheld on purpose; the bounds assertion fires first.
        let _ = unsafe { *v.get_unchecked(3) };
    }

    #[test]
    fn test_cast() {
        let v = Vector::<f32, 3>::from_array([1.9, -1.9, 3.0]);
        let i: Vector<i32, 3> = v.cast();
        assert_eq!(i.into_array(), [1, -1, 3]);
    }

    #[test]
    fn test_display() {
        let v = Vector::<i32, 3>::from_array([1, 2, 3]);
        assert_eq!(v.to_string(), "(1, 2, 3)");
        assert_eq!(format!("{v:?}"), "Vector([1, 2, 3])");
    }
}
