//! Owning fixed-size row-major matrices.

use crate::align::{Alignment, Packed};
use crate::flatten::{FlatSink, Flatten};
use crate::vector::Vector;
use crate::view::{MatrixView, MatrixViewMut, VectorView, VectorViewMut};
use crate::{MathError, Result};
use fixed_linalg_traits::{Arithmetic, MathTrait, MathTraitMut, MatrixShape, Scalar, VectorShape};
use std::fmt;
use std::ops::{Index, IndexMut};

/// An owning `R x C` matrix stored row-major as `R` rows of `C` elements.
///
/// Rows are contiguous; column `c` of the flat storage is a stride-`C` view.
///
/// # Example
/// ```rust
/// use fixed_linalg::{matrix, Matrix};
///
/// let m: Matrix<i32, 2, 3> = matrix![1, 2, 3, 4, 5, 6];
/// assert_eq!(m.get(1, 0), 4);
/// assert_eq!(m.get_column(2).into_array(), [3, 6]);
/// assert_eq!(m.transpose().get(2, 1), 6);
/// ```
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize, A: Alignment = Packed> {
    _align: [A; 0],
    data: [[T; C]; R],
}

/// Builds a [`Matrix`] from a row-major sequence of scalars and
/// vector/matrix-like values. See [`Matrix::from_args`].
#[macro_export]
macro_rules! matrix {
    ($($arg:expr),+ $(,)?) => {
        $crate::Matrix::from_args(($($arg,)+))
    };
}

impl<T, const R: usize, const C: usize, A: Alignment> Matrix<T, R, C, A> {
    const NON_EMPTY: () = assert!(R >= 1 && C >= 1, "a matrix has at least one row and column");

    /// Number of elements per row.
    pub const ROW_SIZE: usize = C;
    /// Number of elements per column.
    pub const COLUMN_SIZE: usize = R;
    /// Total number of elements.
    pub const DATA_SIZE: usize = R * C;

    #[inline]
    pub const fn from_array(data: [[T; C]; R]) -> Self {
        let () = Self::NON_EMPTY;
        Self { _align: [], data }
    }

    /// Creates a matrix whose element (`r`, `c`) is `f(r, c)`.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_array(std::array::from_fn(|r| std::array::from_fn(|c| f(r, c))))
    }

    /// Creates a matrix from row vectors of any alignment.
    #[inline]
    pub fn from_rows<B: Alignment>(rows: [Vector<T, C, B>; R]) -> Self {
        Self::from_array(rows.map(Vector::into_array))
    }

    #[inline]
    pub const fn as_array(&self) -> &[[T; C]; R] {
        &self.data
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [[T; C]; R] {
        &mut self.data
    }

    #[inline]
    pub fn into_array(self) -> [[T; C]; R] {
        self.data
    }

    /// Row-major flat storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Iterates all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Mutable reference to element (`row`, `col`).
    ///
    /// # Panics
    /// Panics if `row >= R` or `col >= C`.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row][col] = value;
    }

    /// Flat element `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `R * C`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        assume_in_bounds!(index, R * C);
        self.as_slice().get_unchecked(index)
    }

    /// # Safety
    /// `index` must be less than `R * C`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        assume_in_bounds!(index, R * C);
        self.as_mut_slice().get_unchecked_mut(index)
    }

    /// Contiguous view of row `row`.
    ///
    /// # Panics
    /// Panics if `row >= R`.
    #[inline]
    pub fn get_row_view(&self, row: usize) -> VectorView<'_, T, 1, C> {
        VectorView::from_trusted(&self.data[row])
    }

    #[inline]
    pub fn get_row_view_mut(&mut self, row: usize) -> VectorViewMut<'_, T, 1, C> {
        VectorViewMut::from_trusted(&mut self.data[row])
    }

    /// Stride-`C` view of column `col`.
    ///
    /// # Panics
    /// Panics if `col >= C`.
    #[inline]
    pub fn get_column_view(&self, col: usize) -> VectorView<'_, T, C, R> {
        assert!(col < C, "column {col} out of range for {C} columns");
        VectorView::from_trusted(&self.as_slice()[col..])
    }

    #[inline]
    pub fn get_column_view_mut(&mut self, col: usize) -> VectorViewMut<'_, T, C, R> {
        assert!(col < C, "column {col} out of range for {C} columns");
        VectorViewMut::from_trusted(&mut self.as_mut_slice()[col..])
    }

    /// Unit-stride view of the whole matrix.
    #[inline]
    pub fn as_view(&self) -> MatrixView<'_, T, 1, R, C> {
        MatrixView::from_trusted(self.as_slice())
    }

    #[inline]
    pub fn as_view_mut(&mut self) -> MatrixViewMut<'_, T, 1, R, C> {
        MatrixViewMut::from_trusted(self.as_mut_slice())
    }

    /// Same elements with a different layout marker.
    #[inline]
    pub fn realign<B: Alignment>(self) -> Matrix<T, R, C, B> {
        Matrix::from_array(self.data)
    }
}

impl<T: Scalar, const R: usize, const C: usize, A: Alignment> Matrix<T, R, C, A> {
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_array([[value; C]; R])
    }

    /// Creates a matrix from a flattened argument tuple, filled row by row.
    ///
    /// Missing trailing elements stay at `T::default()`; surplus values are
    /// discarded.
    pub fn from_args<Args: Flatten<T>>(args: Args) -> Self {
        let mut out = Self::default();
        let mut sink = FlatSink::new(out.as_mut_slice());
        args.flatten_into(&mut sink);
        out
    }

    /// Creates a matrix from exactly `R * C` row-major values.
    ///
    /// # Errors
    /// Returns [`MathError::LengthMismatch`] on any other length.
    pub fn try_from_slice(values: &[T]) -> Result<Self> {
        if values.len() != R * C {
            return Err(MathError::LengthMismatch {
                expected: R * C,
                actual: values.len(),
            });
        }
        let mut out = Self::default();
        out.as_mut_slice().copy_from_slice(values);
        Ok(out)
    }

    /// Element at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if `row >= R` or `col >= C`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row][col]
    }

    /// Copy of row `row`.
    #[inline]
    pub fn get_row(&self, row: usize) -> Vector<T, C> {
        Vector::from_array(self.data[row])
    }

    /// Copy of column `col`.
    ///
    /// # Panics
    /// Panics if `col >= C`.
    #[inline]
    pub fn get_column(&self, col: usize) -> Vector<T, R> {
        assert!(col < C, "column {col} out of range for {C} columns");
        Vector::from_fn(|r| self.data[r][col])
    }

    /// Detached copy with the default layout.
    #[inline]
    pub fn copy(&self) -> Matrix<T, R, C> {
        Matrix::from_array(self.data)
    }

    pub fn transpose(&self) -> Matrix<T, C, R, A> {
        Matrix::from_fn(|r, c| self.data[c][r])
    }
}

impl<T: Arithmetic, const R: usize, const C: usize, A: Alignment> Matrix<T, R, C, A> {
    /// Matrix product `self * rhs`.
    pub fn matmul<const K: usize, B: Alignment>(
        &self,
        rhs: &Matrix<T, C, K, B>,
    ) -> Matrix<T, R, K, A> {
        Matrix::from_fn(|r, k| {
            let mut acc = T::zero();
            for c in 0..C {
                acc = acc + self.data[r][c] * rhs.data[c][k];
            }
            acc
        })
    }

    /// Matrix-vector product with any `C`-element vector-like operand.
    pub fn mul_vector<U>(&self, v: &U) -> Vector<T, R, A>
    where
        U: MathTrait<Value = T, Shape = VectorShape<C>>,
    {
        Vector::from_fn(|r| {
            let mut acc = T::zero();
            for c in 0..C {
                acc = acc + self.data[r][c] * v.at(c);
            }
            acc
        })
    }
}

impl<T: Arithmetic, const N: usize, A: Alignment> Matrix<T, N, N, A> {
    pub fn identity() -> Self {
        Self::from_fn(|r, c| if r == c { T::one() } else { T::zero() })
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self.data[i][i])
    }
}

impl<T: Default, const R: usize, const C: usize, A: Alignment> Default for Matrix<T, R, C, A> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize, A: Alignment> Index<(usize, usize)> for Matrix<T, R, C, A> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize, A: Alignment> IndexMut<(usize, usize)>
    for Matrix<T, R, C, A>
{
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize, A: Alignment> From<[[T; C]; R]> for Matrix<T, R, C, A> {
    #[inline]
    fn from(data: [[T; C]; R]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const R: usize, const C: usize, A: Alignment> From<Matrix<T, R, C, A>> for [[T; C]; R] {
    #[inline]
    fn from(m: Matrix<T, R, C, A>) -> Self {
        m.data
    }
}

impl<T, const R: usize, const C: usize, A: Alignment> AsRef<[T]> for Matrix<T, R, C, A> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const R: usize, const C: usize, A: Alignment> AsMut<[T]> for Matrix<T, R, C, A> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize, A: Alignment> fmt::Debug
    for Matrix<T, R, C, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Matrix").field(&self.data).finish()
    }
}

/// One row per line: `[1, 2]\n[3, 4]`.
impl<T: fmt::Display, const R: usize, const C: usize, A: Alignment> fmt::Display
    for Matrix<T, R, C, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.data.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                fmt::Display::fmt(v, f)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

unsafe impl<T: Scalar, const R: usize, const C: usize, A: Alignment> MathTrait
    for Matrix<T, R, C, A>
{
    type Value = T;
    type Shape = MatrixShape<R, C>;
    type Owned<U: Scalar> = Matrix<U, R, C, A>;

    #[inline]
    fn at(&self, index: usize) -> T {
        self.as_slice()[index]
    }

    #[inline(always)]
    unsafe fn at_unchecked(&self, index: usize) -> T {
        *self.get_unchecked(index)
    }
}

unsafe impl<T: Scalar, const R: usize, const C: usize, A: Alignment> MathTraitMut
    for Matrix<T, R, C, A>
{
    #[inline]
    fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }

    #[inline(always)]
    unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.get_unchecked_mut(index)
    }
}

impl<T, U: Flatten<T>, const R: usize, const C: usize, A: Alignment> Flatten<T>
    for Matrix<U, R, C, A>
{
    const LEN: usize = <U as Flatten<T>>::LEN * R * C;

    #[inline]
    fn flatten_into(&self, sink: &mut FlatSink<'_, T>) {
        for v in self.iter() {
            v.flatten_into(sink);
        }
    }
}

impl<T, U: Flatten<T>, const STRIDE: usize, const N: usize> Flatten<T>
    for VectorView<'_, U, STRIDE, N>
{
    const LEN: usize = <U as Flatten<T>>::LEN * N;

    #[inline]
    fn flatten_into(&self, sink: &mut FlatSink<'_, T>) {
        for v in self.iter() {
            v.flatten_into(sink);
        }
    }
}

impl<T, U: Flatten<T>, const STRIDE: usize, const R: usize, const C: usize> Flatten<T>
    for MatrixView<'_, U, STRIDE, R, C>
{
    const LEN: usize = <U as Flatten<T>>::LEN * R * C;

    #[inline]
    fn flatten_into(&self, sink: &mut FlatSink<'_, T>) {
        for v in self.iter() {
            v.flatten_into(sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Align16;
    use std::mem::align_of;

    #[test]
    fn test_shape_constants() {
        assert_eq!(Matrix::<f32, 2, 3>::ROW_SIZE, 3);
        assert_eq!(Matrix::<f32, 2, 3>::COLUMN_SIZE, 2);
        assert_eq!(Matrix::<f32, 2, 3>::DATA_SIZE, 6);
    }

    #[test]
    fn test_from_args_row_major() {
        let row = Vector::<i32, 2>::from_array([1, 2]);
        let m = Matrix::<i32, 2, 2>::from_args((row, 3i32, 4i32));
        assert_eq!(m.into_array(), [[1, 2], [3, 4]]);
    }

    #[test]
    fn test_from_args_default_tail() {
        let m = Matrix::<f64, 2, 2>::from_args((1.0f64,));
        assert_eq!(m.into_array(), [[1.0, 0.0], [0.0, 0.0]]);
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::<i32, 2, 2>::from_rows([
            Vector::from_array([1, 2]),
            Vector::<i32, 2>::from_array([3, 4]),
        ]);
        assert_eq!(m.get(1, 1), 4);
    }

    #[test]
    fn test_rows_and_columns() {
        let m = Matrix::<i32, 3, 2>::from_array([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(m.get_row(1).into_array(), [3, 4]);
        assert_eq!(m.get_column(1).into_array(), [2, 4, 6]);
        assert_eq!(m.get_column_view(0).copy().into_array(), [1, 3, 5]);
        assert_eq!(m.get_row_view(2).copy().into_array(), [5, 6]);
    }

    #[test]
    fn test_column_view_mut_writes_through() {
        let mut m = Matrix::<i32, 2, 3>::default();
        m.get_column_view_mut(1).fill(7);
        assert_eq!(m.into_array(), [[0, 7, 0], [0, 7, 0]]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_column_view_out_of_range() {
        let m = Matrix::<i32, 2, 2>::default();
        let _ = m.get_column_view(2);
    }

    #[test]
    fn test_try_from_slice() {
        let m = Matrix::<i32, 2, 2>::try_from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(m[(1, 0)], 3);
        assert!(Matrix::<i32, 2, 2>::try_from_slice(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_transpose_identity_trace() {
        let m = Matrix::<i32, 2, 3>::from_array([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.transpose().into_array(), [[1, 4], [2, 5], [3, 6]]);
        let id = Matrix::<f32, 3, 3>::identity();
        assert_eq!(id.trace(), 3.0);
    }

    #[test]
    fn test_matmul() {
        let a = Matrix::<i32, 2, 3>::from_array([[1, 2, 3], [4, 5, 6]]);
        let b = Matrix::<i32, 3, 2>::from_array([[7, 8], [9, 10], [11, 12]]);
        assert_eq!(a.matmul(&b).into_array(), [[58, 64], [139, 154]]);
        assert_eq!(a.matmul(&Matrix::<i32, 3, 3>::identity()), a);
    }

    #[test]
    fn test_mul_vector_with_view() {
        let m = Matrix::<i32, 2, 2>::from_array([[1, 2], [3, 4]]);
        let raw = [1, 0, 1];
        let v = VectorView::<i32, 2, 2>::new(&raw).unwrap();
        assert_eq!(m.mul_vector(&v).into_array(), [3, 7]);
    }

    #[test]
    fn test_aligned_matrix() {
        let m = Matrix::<f32, 4, 4, Align16>::identity();
        assert_eq!(align_of::<Matrix<f32, 4, 4, Align16>>(), 16);
        assert_eq!(m.as_slice().as_ptr() as usize % 16, 0);
    }

    #[test]
    fn test_display() {
        let m = Matrix::<i32, 2, 2>::from_array([[1, 2], [3, 4]]);
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");
    }
}
