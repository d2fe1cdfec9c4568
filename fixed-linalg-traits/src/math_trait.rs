//! The "fixed-length indexable numeric container" capability.

use crate::scalar::Scalar;
use crate::shape::Shape;

/// Read access to a fixed-size vector/matrix-like value.
///
/// Owning containers and strided views both implement this trait, which is
/// what lets a single generic algorithm serve every representation.
///
/// # Safety
///
/// Implementors must guarantee that `at_unchecked(i)` is valid for every
/// `i < <Self::Shape as Shape>::DATA_SIZE`, and must not override
/// [`MathTrait::DATA_SIZE`].
pub unsafe trait MathTrait {
    /// Element type.
    type Value: Scalar;

    /// Type-level shape; operands with equal `Shape` types are compatible.
    type Shape: Shape;

    /// Owning container of the same shape holding `U` elements.
    ///
    /// This is what element-wise algorithms return: a view of `f32` mapped
    /// through `|x| x > 0.0` produces an owning container of `bool`.
    type Owned<U: Scalar>: MathTraitMut<Value = U, Shape = Self::Shape> + Default;

    /// Total number of logical elements.
    const DATA_SIZE: usize = <Self::Shape as Shape>::DATA_SIZE;

    /// Returns the element at flat (row-major) `index`.
    ///
    /// # Panics
    /// Panics if `index >= DATA_SIZE`.
    fn at(&self, index: usize) -> Self::Value;

    /// Returns the element at flat `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `DATA_SIZE`.
    unsafe fn at_unchecked(&self, index: usize) -> Self::Value;

    /// Materializes a detached owning copy.
    fn to_owned_math(&self) -> Self::Owned<Self::Value> {
        let mut out = <Self::Owned<Self::Value> as Default>::default();
        for i in 0..Self::DATA_SIZE {
            // SAFETY: `out` has the same shape, so both indices are in range.
            unsafe {
                *out.at_unchecked_mut(i) = self.at_unchecked(i);
            }
        }
        out
    }
}

/// Write access to a fixed-size vector/matrix-like value.
///
/// # Safety
///
/// Same contract as [`MathTrait`] for `at_unchecked_mut`.
pub unsafe trait MathTraitMut: MathTrait {
    /// Returns a mutable reference to the element at flat `index`.
    ///
    /// # Panics
    /// Panics if `index >= DATA_SIZE`.
    fn at_mut(&mut self, index: usize) -> &mut Self::Value;

    /// Mutable access without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `DATA_SIZE`.
    unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut Self::Value;
}
