//! Scalar type bounds for fixed-size containers.

use std::ops::{Add, Mul, Sub};

/// Bound for every element type stored in a fixed-size container.
///
/// `Default` is the value-initialization policy: a default-constructed
/// container holds `T::default()` in every slot, which is zero for the
/// primitive numeric types and `false` for `bool`.
pub trait Scalar: Copy + Default + 'static {}

impl<T> Scalar for T where T: Copy + Default + 'static {}

/// Ring arithmetic needed by the linear-algebra products (`dot`, `matmul`,
/// `mul_vector`, `trace`).
///
/// Like [`Scalar`], this carries no conj/transpose requirement, so custom
/// semiring element types only have to supply the four operations below.
pub trait Arithmetic:
    Scalar
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + num_traits::Zero
    + num_traits::One
    + PartialEq
{
}

impl<T> Arithmetic for T where
    T: Scalar
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + num_traits::Zero
        + num_traits::One
        + PartialEq
{
}
