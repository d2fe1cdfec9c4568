//! Zero-copy strided views over borrowed storage.
//!
//! A view never owns data. Logical element `i` of a vector view lives at
//! `data[i * STRIDE]`; element `(r, c)` of a matrix view lives at
//! `data[(r * C + c) * STRIDE]`. Construction checks once that the last
//! element is addressable, after which indexing is cheap.
//!
//! Read-only views are `Copy`; mutable views follow the usual exclusive
//! borrow rules, so two live mutable views can never alias.

use crate::matrix::Matrix;
use crate::stride_iter::{StrideIter, StrideIterMut};
use crate::vector::Vector;
use crate::{MathError, Result};
use fixed_linalg_traits::{MathTrait, MathTraitMut, MatrixShape, Scalar, VectorShape};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Minimum slice length needed to address `count` elements `stride` apart,
/// or `None` if that length does not fit in `usize`.
#[inline]
pub const fn checked_required_len(stride: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return Some(0);
    }
    match (count - 1).checked_mul(stride) {
        Some(span) => span.checked_add(1),
        None => None,
    }
}

/// Minimum slice length needed to address `count` elements `stride` apart.
///
/// # Panics
/// Panics if the length overflows `usize`. In a const context, such as a
/// view's `REQUIRED_LEN`, this is a compile error.
#[inline]
pub const fn required_len(stride: usize, count: usize) -> usize {
    match checked_required_len(stride, count) {
        Some(len) => len,
        None => panic!("strided view extent overflows usize"),
    }
}

struct Layout<const STRIDE: usize, const COUNT: usize>;

impl<const STRIDE: usize, const COUNT: usize> Layout<STRIDE, COUNT> {
    const REQUIRED_LEN: usize = required_len(STRIDE, COUNT);

    const VALID: () = {
        assert!(
            STRIDE >= 1 && COUNT >= 1,
            "views need a positive stride and at least one element"
        );
        assert!(Self::REQUIRED_LEN >= COUNT);
    };
}

struct MatrixLayout<const STRIDE: usize, const R: usize, const C: usize>;

impl<const STRIDE: usize, const R: usize, const C: usize> MatrixLayout<STRIDE, R, C> {
    const COUNT: usize = match R.checked_mul(C) {
        Some(count) => count,
        None => panic!("matrix view element count overflows usize"),
    };

    const REQUIRED_LEN: usize = required_len(STRIDE, Self::COUNT);

    const VALID: () = {
        assert!(
            STRIDE >= 1 && R >= 1 && C >= 1,
            "views need a positive stride and at least one element"
        );
        assert!(Self::REQUIRED_LEN >= Self::COUNT);
    };
}

fn check_len<T>(data: &[T], stride: usize, count: usize) -> Result<()> {
    let required = checked_required_len(stride, count).unwrap_or(usize::MAX);
    if data.len() < required {
        log::debug!(
            "rejecting view: {count} elements at stride {stride} need {required} slots, got {}",
            data.len()
        );
        return Err(MathError::ViewOutOfBounds {
            required,
            available: data.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Vector views
// ============================================================================

/// Read-only view of `N` elements spaced `STRIDE` apart.
///
/// # Example
/// ```rust
/// use fixed_linalg::VectorView;
///
/// let interleaved = [1.0f32, 9.0, 2.0, 9.0, 3.0];
/// let v = VectorView::<f32, 2, 3>::new(&interleaved).unwrap();
/// assert_eq!(v[1], 2.0);
/// assert_eq!(v.copy().into_array(), [1.0, 2.0, 3.0]);
/// ```
///
/// A stride whose extent does not fit in `usize` is rejected at compile time:
///
/// ```compile_fail
/// use fixed_linalg::VectorView;
///
/// let _ = VectorView::<u8, { 1usize << 63 }, 3>::new(&[7u8]);
/// ```
pub struct VectorView<'a, T, const STRIDE: usize, const N: usize> {
    data: &'a [T],
}

/// Mutable view of `N` elements spaced `STRIDE` apart; writes go to the
/// underlying storage.
pub struct VectorViewMut<'a, T, const STRIDE: usize, const N: usize> {
    data: &'a mut [T],
}

impl<T, const STRIDE: usize, const N: usize> Clone for VectorView<'_, T, STRIDE, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const STRIDE: usize, const N: usize> Copy for VectorView<'_, T, STRIDE, N> {}

impl<'a, T, const STRIDE: usize, const N: usize> VectorView<'a, T, STRIDE, N> {
    /// Slice length the view needs: `(N - 1) * STRIDE + 1`.
    pub const REQUIRED_LEN: usize = Layout::<STRIDE, N>::REQUIRED_LEN;

    /// Creates a view starting at `data[0]`.
    ///
    /// # Errors
    /// Returns [`MathError::ViewOutOfBounds`] if `data` is shorter than
    /// [`Self::REQUIRED_LEN`].
    pub fn new(data: &'a [T]) -> Result<Self> {
        let () = Layout::<STRIDE, N>::VALID;
        check_len(data, STRIDE, N)?;
        Ok(Self { data })
    }

    /// Creates a view without checking the slice length.
    ///
    /// # Safety
    /// `data.len()` must be at least [`Self::REQUIRED_LEN`].
    #[inline]
    pub unsafe fn new_unchecked(data: &'a [T]) -> Self {
        let () = Layout::<STRIDE, N>::VALID;
        Self { data }
    }

    /// Caller guarantees the length invariant.
    #[inline]
    pub(crate) fn from_trusted(data: &'a [T]) -> Self {
        let () = Layout::<STRIDE, N>::VALID;
        debug_assert!(data.len() >= Self::REQUIRED_LEN);
        Self { data }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub const fn stride(&self) -> usize {
        STRIDE
    }

    /// Underlying storage, starting at element 0.
    #[inline]
    pub fn as_raw_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns element `index`, or `None` if `index >= N`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index < N {
            self.data.get(index * STRIDE)
        } else {
            None
        }
    }

    /// # Safety
    /// `index` must be less than `N` and the view must uphold its length
    /// invariant.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a T {
        assume_in_bounds!(index, N);
        self.data.get_unchecked(index * STRIDE)
    }

    #[inline]
    pub fn iter(&self) -> StrideIter<'a, T> {
        StrideIter::new(self.data, STRIDE, N)
    }
}

impl<T: Copy, const STRIDE: usize, const N: usize> VectorView<'_, T, STRIDE, N> {
    /// Gathers the viewed elements into a detached vector.
    #[inline]
    pub fn copy(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self[i])
    }
}

impl<'a, T, const STRIDE: usize, const N: usize> VectorViewMut<'a, T, STRIDE, N> {
    pub const REQUIRED_LEN: usize = Layout::<STRIDE, N>::REQUIRED_LEN;

    /// Creates a mutable view starting at `data[0]`.
    ///
    /// # Errors
    /// Returns [`MathError::ViewOutOfBounds`] if `data` is too short.
    pub fn new(data: &'a mut [T]) -> Result<Self> {
        let () = Layout::<STRIDE, N>::VALID;
        check_len(data, STRIDE, N)?;
        Ok(Self { data })
    }

    /// # Safety
    /// `data.len()` must be at least [`Self::REQUIRED_LEN`].
    #[inline]
    pub unsafe fn new_unchecked(data: &'a mut [T]) -> Self {
        let () = Layout::<STRIDE, N>::VALID;
        Self { data }
    }

    #[inline]
    pub(crate) fn from_trusted(data: &'a mut [T]) -> Self {
        let () = Layout::<STRIDE, N>::VALID;
        debug_assert!(data.len() >= Self::REQUIRED_LEN);
        Self { data }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub const fn stride(&self) -> usize {
        STRIDE
    }

    /// Read-only view of the same elements.
    #[inline]
    pub fn as_view(&self) -> VectorView<'_, T, STRIDE, N> {
        VectorView::from_trusted(self.data)
    }

    /// Shorter-lived mutable view of the same elements.
    #[inline]
    pub fn reborrow(&mut self) -> VectorViewMut<'_, T, STRIDE, N> {
        VectorViewMut::from_trusted(self.data)
    }

    /// Converts into a read-only view for the full lifetime.
    #[inline]
    pub fn into_view(self) -> VectorView<'a, T, STRIDE, N> {
        VectorView::from_trusted(self.data)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < N {
            self.data.get(index * STRIDE)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < N {
            self.data.get_mut(index * STRIDE)
        } else {
            None
        }
    }

    /// # Safety
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        assume_in_bounds!(index, N);
        self.data.get_unchecked(index * STRIDE)
    }

    /// # Safety
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        assume_in_bounds!(index, N);
        self.data.get_unchecked_mut(index * STRIDE)
    }

    #[inline]
    pub fn iter(&self) -> StrideIter<'_, T> {
        StrideIter::new(self.data, STRIDE, N)
    }

    #[inline]
    pub fn iter_mut(&mut self) -> StrideIterMut<'_, T> {
        StrideIterMut::new(self.data, STRIDE, N)
    }
}

impl<T: Copy, const STRIDE: usize, const N: usize> VectorViewMut<'_, T, STRIDE, N> {
    #[inline]
    pub fn copy(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self[i])
    }

    /// Sets every viewed element to `value`.
    pub fn fill(&mut self, value: T) {
        for v in self.iter_mut() {
            *v = value;
        }
    }
}

impl<T: Scalar, const STRIDE: usize, const N: usize> VectorViewMut<'_, T, STRIDE, N> {
    /// Writes the elements of `source` through the view.
    pub fn assign<U>(&mut self, source: &U)
    where
        U: MathTrait<Value = T, Shape = VectorShape<N>>,
    {
        for i in 0..N {
            // SAFETY: `i < N` and the view upholds its length invariant.
            unsafe {
                *self.get_unchecked_mut(i) = source.at_unchecked(i);
            }
        }
    }
}

impl<T, const STRIDE: usize, const N: usize> Index<usize> for VectorView<'_, T, STRIDE, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(index < N, "index {index} out of range for view of {N} elements");
        &self.data[index * STRIDE]
    }
}

impl<T, const STRIDE: usize, const N: usize> Index<usize> for VectorViewMut<'_, T, STRIDE, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(index < N, "index {index} out of range for view of {N} elements");
        &self.data[index * STRIDE]
    }
}

impl<T, const STRIDE: usize, const N: usize> IndexMut<usize> for VectorViewMut<'_, T, STRIDE, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(index < N, "index {index} out of range for view of {N} elements");
        &mut self.data[index * STRIDE]
    }
}

impl<'a, T, const STRIDE: usize, const N: usize> IntoIterator for VectorView<'a, T, STRIDE, N> {
    type Item = &'a T;
    type IntoIter = StrideIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        StrideIter::new(self.data, STRIDE, N)
    }
}

impl<'a, T, const STRIDE: usize, const N: usize> IntoIterator for VectorViewMut<'a, T, STRIDE, N> {
    type Item = &'a mut T;
    type IntoIter = StrideIterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        StrideIterMut::new(self.data, STRIDE, N)
    }
}

impl<T: fmt::Debug, const STRIDE: usize, const N: usize> fmt::Debug
    for VectorView<'_, T, STRIDE, N>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Debug, const STRIDE: usize, const N: usize> fmt::Debug
    for VectorViewMut<'_, T, STRIDE, N>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

unsafe impl<T: Scalar, const STRIDE: usize, const N: usize> MathTrait
    for VectorView<'_, T, STRIDE, N>
{
    type Value = T;
    type Shape = VectorShape<N>;
    type Owned<U: Scalar> = Vector<U, N>;

    #[inline]
    fn at(&self, index: usize) -> T {
        self[index]
    }

    #[inline(always)]
    unsafe fn at_unchecked(&self, index: usize) -> T {
        *self.get_unchecked(index)
    }
}

unsafe impl<T: Scalar, const STRIDE: usize, const N: usize> MathTrait
    for VectorViewMut<'_, T, STRIDE, N>
{
    type Value = T;
    type Shape = VectorShape<N>;
    type Owned<U: Scalar> = Vector<U, N>;

    #[inline]
    fn at(&self, index: usize) -> T {
        self[index]
    }

    #[inline(always)]
    unsafe fn at_unchecked(&self, index: usize) -> T {
        *self.get_unchecked(index)
    }
}

unsafe impl<T: Scalar, const STRIDE: usize, const N: usize> MathTraitMut
    for VectorViewMut<'_, T, STRIDE, N>
{
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline(always)]
    unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.get_unchecked_mut(index)
    }
}

// ============================================================================
// Matrix views
// ============================================================================

/// Read-only view of an `R x C` row-major matrix whose consecutive elements
/// are `STRIDE` apart.
pub struct MatrixView<'a, T, const STRIDE: usize, const R: usize, const C: usize> {
    data: &'a [T],
}

/// Mutable counterpart of [`MatrixView`].
pub struct MatrixViewMut<'a, T, const STRIDE: usize, const R: usize, const C: usize> {
    data: &'a mut [T],
}

impl<T, const STRIDE: usize, const R: usize, const C: usize> Clone
    for MatrixView<'_, T, STRIDE, R, C>
{
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const STRIDE: usize, const R: usize, const C: usize> Copy
    for MatrixView<'_, T, STRIDE, R, C>
{
}

#[inline]
fn flat_index<const R: usize, const C: usize>(row: usize, col: usize) -> usize {
    assert!(
        row < R && col < C,
        "index ({row}, {col}) out of range for {R}x{C} matrix"
    );
    row * C + col
}

impl<'a, T, const STRIDE: usize, const R: usize, const C: usize> MatrixView<'a, T, STRIDE, R, C> {
    /// Slice length the view needs: `(R * C - 1) * STRIDE + 1`.
    pub const REQUIRED_LEN: usize = MatrixLayout::<STRIDE, R, C>::REQUIRED_LEN;
    pub const ROW_SIZE: usize = C;
    pub const COLUMN_SIZE: usize = R;

    /// # Errors
    /// Returns [`MathError::ViewOutOfBounds`] if `data` is too short.
    pub fn new(data: &'a [T]) -> Result<Self> {
        let () = MatrixLayout::<STRIDE, R, C>::VALID;
        check_len(data, STRIDE, MatrixLayout::<STRIDE, R, C>::COUNT)?;
        Ok(Self { data })
    }

    /// # Safety
    /// `data.len()` must be at least [`Self::REQUIRED_LEN`].
    #[inline]
    pub unsafe fn new_unchecked(data: &'a [T]) -> Self {
        let () = MatrixLayout::<STRIDE, R, C>::VALID;
        Self { data }
    }

    #[inline]
    pub(crate) fn from_trusted(data: &'a [T]) -> Self {
        let () = MatrixLayout::<STRIDE, R, C>::VALID;
        debug_assert!(data.len() >= Self::REQUIRED_LEN);
        Self { data }
    }

    /// View of row `row`.
    ///
    /// # Panics
    /// Panics if `row >= R`.
    #[inline]
    pub fn get_row_view(&self, row: usize) -> VectorView<'a, T, STRIDE, C> {
        assert!(row < R, "row {row} out of range for {R} rows");
        VectorView::from_trusted(&self.data[row * C * STRIDE..])
    }

    #[inline]
    pub fn iter(&self) -> StrideIter<'a, T> {
        StrideIter::new(self.data, STRIDE, R * C)
    }
}

impl<'a, T, const R: usize, const C: usize> MatrixView<'a, T, 1, R, C> {
    /// View of column `col`; only available for unit-stride matrix views.
    ///
    /// # Panics
    /// Panics if `col >= C`.
    #[inline]
    pub fn get_column_view(&self, col: usize) -> VectorView<'a, T, C, R> {
        assert!(col < C, "column {col} out of range for {C} columns");
        VectorView::from_trusted(&self.data[col..])
    }
}

impl<T: Copy, const STRIDE: usize, const R: usize, const C: usize>
    MatrixView<'_, T, STRIDE, R, C>
{
    /// Element at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[flat_index::<R, C>(row, col) * STRIDE]
    }

    pub fn get_row(&self, row: usize) -> Vector<T, C> {
        self.get_row_view(row).copy()
    }

    /// # Panics
    /// Panics if `col >= C`.
    pub fn get_column(&self, col: usize) -> Vector<T, R> {
        assert!(col < C, "column {col} out of range for {C} columns");
        Vector::from_fn(|r| self.data[(r * C + col) * STRIDE])
    }

    /// Gathers the viewed elements into a detached matrix.
    pub fn copy(&self) -> Matrix<T, R, C> {
        Matrix::from_fn(|r, c| self.data[(r * C + c) * STRIDE])
    }
}

impl<'a, T, const STRIDE: usize, const R: usize, const C: usize>
    MatrixViewMut<'a, T, STRIDE, R, C>
{
    pub const REQUIRED_LEN: usize = MatrixLayout::<STRIDE, R, C>::REQUIRED_LEN;
    pub const ROW_SIZE: usize = C;
    pub const COLUMN_SIZE: usize = R;

    /// # Errors
    /// Returns [`MathError::ViewOutOfBounds`] if `data` is too short.
    pub fn new(data: &'a mut [T]) -> Result<Self> {
        let () = MatrixLayout::<STRIDE, R, C>::VALID;
        check_len(data, STRIDE, MatrixLayout::<STRIDE, R, C>::COUNT)?;
        Ok(Self { data })
    }

    /// # Safety
    /// `data.len()` must be at least [`Self::REQUIRED_LEN`].
    #[inline]
    pub unsafe fn new_unchecked(data: &'a mut [T]) -> Self {
        let () = MatrixLayout::<STRIDE, R, C>::VALID;
        Self { data }
    }

    #[inline]
    pub(crate) fn from_trusted(data: &'a mut [T]) -> Self {
        let () = MatrixLayout::<STRIDE, R, C>::VALID;
        debug_assert!(data.len() >= Self::REQUIRED_LEN);
        Self { data }
    }

    #[inline]
    pub fn as_view(&self) -> MatrixView<'_, T, STRIDE, R, C> {
        MatrixView::from_trusted(self.data)
    }

    #[inline]
    pub fn reborrow(&mut self) -> MatrixViewMut<'_, T, STRIDE, R, C> {
        MatrixViewMut::from_trusted(self.data)
    }

    /// Mutable reference to element (`row`, `col`).
    ///
    /// # Panics
    /// Panics if out of range.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[flat_index::<R, C>(row, col) * STRIDE]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        *self.get_mut(row, col) = value;
    }

    #[inline]
    pub fn get_row_view(&self, row: usize) -> VectorView<'_, T, STRIDE, C> {
        assert!(row < R, "row {row} out of range for {R} rows");
        VectorView::from_trusted(&self.data[row * C * STRIDE..])
    }

    #[inline]
    pub fn get_row_view_mut(&mut self, row: usize) -> VectorViewMut<'_, T, STRIDE, C> {
        assert!(row < R, "row {row} out of range for {R} rows");
        VectorViewMut::from_trusted(&mut self.data[row * C * STRIDE..])
    }

    #[inline]
    pub fn iter(&self) -> StrideIter<'_, T> {
        StrideIter::new(self.data, STRIDE, R * C)
    }

    #[inline]
    pub fn iter_mut(&mut self) -> StrideIterMut<'_, T> {
        StrideIterMut::new(self.data, STRIDE, R * C)
    }
}

impl<T, const R: usize, const C: usize> MatrixViewMut<'_, T, 1, R, C> {
    #[inline]
    pub fn get_column_view(&self, col: usize) -> VectorView<'_, T, C, R> {
        assert!(col < C, "column {col} out of range for {C} columns");
        VectorView::from_trusted(&self.data[col..])
    }

    #[inline]
    pub fn get_column_view_mut(&mut self, col: usize) -> VectorViewMut<'_, T, C, R> {
        assert!(col < C, "column {col} out of range for {C} columns");
        VectorViewMut::from_trusted(&mut self.data[col..])
    }
}

impl<T: Copy, const STRIDE: usize, const R: usize, const C: usize>
    MatrixViewMut<'_, T, STRIDE, R, C>
{
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[flat_index::<R, C>(row, col) * STRIDE]
    }

    pub fn get_row(&self, row: usize) -> Vector<T, C> {
        self.get_row_view(row).copy()
    }

    pub fn get_column(&self, col: usize) -> Vector<T, R> {
        self.as_view().get_column(col)
    }

    pub fn copy(&self) -> Matrix<T, R, C> {
        self.as_view().copy()
    }

    pub fn fill(&mut self, value: T) {
        for v in self.iter_mut() {
            *v = value;
        }
    }
}

impl<T: Scalar, const STRIDE: usize, const R: usize, const C: usize>
    MatrixViewMut<'_, T, STRIDE, R, C>
{
    /// Writes the elements of `source` through the view.
    pub fn assign<U>(&mut self, source: &U)
    where
        U: MathTrait<Value = T, Shape = MatrixShape<R, C>>,
    {
        for i in 0..R * C {
            // SAFETY: `i < R * C` for both operands.
            unsafe {
                *self.at_unchecked_mut(i) = source.at_unchecked(i);
            }
        }
    }
}

impl<T, const STRIDE: usize, const R: usize, const C: usize> Index<(usize, usize)>
    for MatrixView<'_, T, STRIDE, R, C>
{
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[flat_index::<R, C>(row, col) * STRIDE]
    }
}

impl<T, const STRIDE: usize, const R: usize, const C: usize> Index<(usize, usize)>
    for MatrixViewMut<'_, T, STRIDE, R, C>
{
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[flat_index::<R, C>(row, col) * STRIDE]
    }
}

impl<T, const STRIDE: usize, const R: usize, const C: usize> IndexMut<(usize, usize)>
    for MatrixViewMut<'_, T, STRIDE, R, C>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[flat_index::<R, C>(row, col) * STRIDE]
    }
}

impl<T: fmt::Debug, const STRIDE: usize, const R: usize, const C: usize> fmt::Debug
    for MatrixView<'_, T, STRIDE, R, C>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..R).map(|r| self.get_row_view(r)))
            .finish()
    }
}

impl<T: fmt::Debug, const STRIDE: usize, const R: usize, const C: usize> fmt::Debug
    for MatrixViewMut<'_, T, STRIDE, R, C>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_view(), f)
    }
}

unsafe impl<T: Scalar, const STRIDE: usize, const R: usize, const C: usize> MathTrait
    for MatrixView<'_, T, STRIDE, R, C>
{
    type Value = T;
    type Shape = MatrixShape<R, C>;
    type Owned<U: Scalar> = Matrix<U, R, C>;

    #[inline]
    fn at(&self, index: usize) -> T {
        assert!(index < R * C, "flat index {index} out of range for {R}x{C} matrix");
        self.data[index * STRIDE]
    }

    #[inline(always)]
    unsafe fn at_unchecked(&self, index: usize) -> T {
        assume_in_bounds!(index, R * C);
        *self.data.get_unchecked(index * STRIDE)
    }
}

unsafe impl<T: Scalar, const STRIDE: usize, const R: usize, const C: usize> MathTrait
    for MatrixViewMut<'_, T, STRIDE, R, C>
{
    type Value = T;
    type Shape = MatrixShape<R, C>;
    type Owned<U: Scalar> = Matrix<U, R, C>;

    #[inline]
    fn at(&self, index: usize) -> T {
        assert!(index < R * C, "flat index {index} out of range for {R}x{C} matrix");
        self.data[index * STRIDE]
    }

    #[inline(always)]
    unsafe fn at_unchecked(&self, index: usize) -> T {
        assume_in_bounds!(index, R * C);
        *self.data.get_unchecked(index * STRIDE)
    }
}

unsafe impl<T: Scalar, const STRIDE: usize, const R: usize, const C: usize> MathTraitMut
    for MatrixViewMut<'_, T, STRIDE, R, C>
{
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        assert!(index < R * C, "flat index {index} out of range for {R}x{C} matrix");
        &mut self.data[index * STRIDE]
    }

    #[inline(always)]
    unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut T {
        assume_in_bounds!(index, R * C);
        self.data.get_unchecked_mut(index * STRIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_len() {
        assert_eq!(required_len(1, 4), 4);
        assert_eq!(required_len(3, 4), 10);
        assert_eq!(VectorView::<f32, 4, 2>::REQUIRED_LEN, 5);
        assert_eq!(MatrixView::<f32, 2, 2, 3>::REQUIRED_LEN, 11);
    }

    #[test]
    fn test_checked_required_len_overflow() {
        assert_eq!(checked_required_len(3, 4), Some(10));
        assert_eq!(checked_required_len(1usize << 63, 2), Some((1usize << 63) + 1));
        assert_eq!(checked_required_len(1usize << 63, 3), None);
        assert_eq!(checked_required_len(usize::MAX, 2), None);
        assert_eq!(checked_required_len(usize::MAX, 1), Some(1));
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_required_len_panics_on_overflow() {
        let stride = std::hint::black_box(1usize << 63);
        let _ = required_len(stride, 3);
    }

    #[test]
    fn test_check_len_rejects_overflowing_extent() {
        let data = [7u8];
        let err = check_len(&data, 1usize << 63, 3).unwrap_err();
        assert!(matches!(
            err,
            MathError::ViewOutOfBounds {
                required: usize::MAX,
                available: 1
            }
        ));
    }

    #[test]
    fn test_vector_view_exact_fit() {
        let data = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let v = VectorView::<i32, 3, 4>::new(&data).unwrap();
        assert_eq!(v.copy().into_array(), [0, 3, 6, 9]);
    }

    #[test]
    fn test_vector_view_too_short() {
        let data = [0; 9];
        let err = VectorView::<i32, 3, 4>::new(&data).unwrap_err();
        assert!(matches!(
            err,
            MathError::ViewOutOfBounds {
                required: 10,
                available: 9
            }
        ));
    }

    #[test]
    fn test_vector_view_get() {
        let data = [1, 2, 3, 4];
        let v = VectorView::<i32, 2, 2>::new(&data).unwrap();
        assert_eq!(v.get(1), Some(&3));
        assert_eq!(v.get(2), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_vector_view_index_panics() {
        let data = [1, 2, 3, 4];
        let v = VectorView::<i32, 2, 2>::new(&data).unwrap();
        let _ = v[2];
    }

    #[test]
    fn test_vector_view_mut_writes_through() {
        let mut data = [0.0f64; 6];
        {
            let mut v = VectorViewMut::<f64, 2, 3>::new(&mut data).unwrap();
            v[0] = 1.0;
            v[2] = 3.0;
            *v.get_mut(1).unwrap() = 2.0;
        }
        assert_eq!(data, [1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_vector_view_mut_assign_and_fill() {
        let mut data = [0i32; 5];
        let src = Vector::<i32, 3>::from_array([7, 8, 9]);
        let mut v = VectorViewMut::<i32, 2, 3>::new(&mut data).unwrap();
        v.assign(&src);
        assert_eq!(v.copy(), src);
        v.fill(1);
        assert_eq!(data, [1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_view_reflects_storage() {
        let mut data = [1, 2, 3];
        VectorViewMut::<i32, 1, 3>::new(&mut data).unwrap()[1] = 20;
        let v = VectorView::<i32, 1, 3>::new(&data).unwrap();
        assert_eq!(v[1], 20);
    }

    #[test]
    fn test_vector_view_iter() {
        let data = [0, 1, 2, 3, 4, 5, 6];
        let v = VectorView::<i32, 3, 3>::new(&data).unwrap();
        let got: Vec<i32> = v.iter().copied().collect();
        assert_eq!(got, vec![0, 3, 6]);
        assert_eq!(format!("{v:?}"), "[0, 3, 6]");
    }

    #[test]
    fn test_matrix_view_strided() {
        // 2x2 matrix interleaved with padding
        let data = [1, 0, 2, 0, 3, 0, 4];
        let m = MatrixView::<i32, 2, 2, 2>::new(&data).unwrap();
        assert_eq!(m.get(0, 1), 2);
        assert_eq!(m.get(1, 0), 3);
        assert_eq!(m[(1, 1)], 4);
        assert_eq!(m.get_row(1).into_array(), [3, 4]);
        assert_eq!(m.get_column(0).into_array(), [1, 3]);
        assert_eq!(m.copy().into_array(), [[1, 2], [3, 4]]);
    }

    #[test]
    fn test_matrix_view_too_short() {
        let data = [0; 5];
        let err = MatrixView::<i32, 1, 2, 3>::new(&data).unwrap_err();
        assert!(matches!(
            err,
            MathError::ViewOutOfBounds {
                required: 6,
                available: 5
            }
        ));
    }

    #[test]
    fn test_matrix_view_column_view() {
        let data = [1, 2, 3, 4, 5, 6];
        let m = MatrixView::<i32, 1, 2, 3>::new(&data).unwrap();
        let col = m.get_column_view(2);
        assert_eq!(col.copy().into_array(), [3, 6]);
    }

    #[test]
    fn test_matrix_view_mut_row_and_column() {
        let mut data = [0; 6];
        {
            let mut m = MatrixViewMut::<i32, 1, 2, 3>::new(&mut data).unwrap();
            m.get_row_view_mut(1).fill(5);
            m.get_column_view_mut(0).fill(9);
            m.set(0, 1, 7);
        }
        assert_eq!(data, [9, 7, 0, 9, 5, 5]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_matrix_view_get_panics() {
        let data = [0; 4];
        let m = MatrixView::<i32, 1, 2, 2>::new(&data).unwrap();
        let _ = m.get(2, 0);
    }

    #[test]
    fn test_view_is_math_trait() {
        let data = [1, 2, 3, 4];
        let m = MatrixView::<i32, 1, 2, 2>::new(&data).unwrap();
        assert_eq!(<MatrixView<'_, i32, 1, 2, 2> as MathTrait>::DATA_SIZE, 4);
        assert_eq!(m.at(3), 4);
        let owned = m.to_owned_math();
        assert_eq!(owned.into_array(), [[1, 2], [3, 4]]);
    }
}
