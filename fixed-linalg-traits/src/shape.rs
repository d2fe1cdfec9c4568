//! Type-level shapes.
//!
//! A shape carries the element count of a container in its type. Two operands
//! are shape-compatible exactly when their `Shape` associated types are the
//! same type, so a length mismatch between a 3-vector and a 4-vector, or a
//! 2x3 and a 3x2 matrix, is a type error rather than a runtime check.

use std::fmt::Debug;

/// Compile-time shape of a fixed-size container.
pub trait Shape: Copy + Default + Debug + 'static {
    /// Total number of logical elements.
    const DATA_SIZE: usize;

    /// One value per logical element, laid out like the container itself.
    ///
    /// Used by the engine for "one argument per slot" operations; the slot
    /// count is fixed by the array type.
    type Slots<A>: SlotList<A>;
}

/// Shape of an `N`-element vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VectorShape<const N: usize>;

/// Shape of an `R`-row, `C`-column matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MatrixShape<const R: usize, const C: usize>;

impl<const N: usize> Shape for VectorShape<N> {
    const DATA_SIZE: usize = N;
    type Slots<A> = [A; N];
}

impl<const R: usize, const C: usize> Shape for MatrixShape<R, C> {
    const DATA_SIZE: usize = R * C;
    type Slots<A> = [[A; C]; R];
}

impl<const R: usize, const C: usize> MatrixShape<R, C> {
    /// Number of elements in a row (the column count).
    pub const ROW_SIZE: usize = C;
    /// Number of elements in a column (the row count).
    pub const COLUMN_SIZE: usize = R;
}

/// A fixed array of per-slot values, consumed in row-major order.
pub trait SlotList<A> {
    type Iter: Iterator<Item = A>;

    fn into_slots(self) -> Self::Iter;
}

impl<A, const N: usize> SlotList<A> for [A; N] {
    type Iter = std::array::IntoIter<A, N>;

    #[inline]
    fn into_slots(self) -> Self::Iter {
        self.into_iter()
    }
}

impl<A, const R: usize, const C: usize> SlotList<A> for [[A; C]; R] {
    type Iter = std::iter::Flatten<std::array::IntoIter<[A; C], R>>;

    #[inline]
    fn into_slots(self) -> Self::Iter {
        self.into_iter().flatten()
    }
}

/// Shapes with a component at index 0 (`x`, `r`, `s`).
///
/// Every component marker carries a `PRESENT` check that is evaluated when an
/// accessor is instantiated. Vector shapes implement all four markers and let
/// the check reject components past the end, so `z` of a 2-vector is still a
/// compile error while vectors of any length get `x` through `w`.
pub trait HasX: Shape {
    #[doc(hidden)]
    const PRESENT: () = ();
}
/// Shapes with a component at index 1 (`y`, `g`, `t`).
pub trait HasY: HasX {
    #[doc(hidden)]
    const PRESENT: () = ();
}
/// Shapes with a component at index 2 (`z`, `b`, `p`).
pub trait HasZ: HasY {
    #[doc(hidden)]
    const PRESENT: () = ();
}
/// Shapes with a component at index 3 (`w`, `a`, `q`).
pub trait HasW: HasZ {
    #[doc(hidden)]
    const PRESENT: () = ();
}

macro_rules! impl_component_marker {
    ($marker:ident, $index:literal, $msg:literal) => {
        impl<const N: usize> $marker for VectorShape<N> {
            const PRESENT: () = assert!(N > $index, $msg);
        }
    };
}

impl_component_marker!(HasX, 0, "vector is too short for component x/r/s");
impl_component_marker!(HasY, 1, "vector is too short for component y/g/t");
impl_component_marker!(HasZ, 2, "vector is too short for component z/b/p");
impl_component_marker!(HasW, 3, "vector is too short for component w/a/q");
