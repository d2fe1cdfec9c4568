//! Compile-time sized vectors and matrices with zero-copy strided views.
//!
//! Every container and view implements the [`MathTrait`] capability ("fixed
//! element count, fixed element type, indexable"), and all arithmetic is
//! written once against that capability in the [`apply`] engine. Element
//! counts, shapes and strides are const generics, so shape mismatches and
//! out-of-range component names are compile errors.
//!
//! # Core Types
//!
//! - [`Vector`]: owning `N`-element vector, packed or 16-byte aligned ([`Align16`])
//! - [`Matrix`]: owning `R x C` row-major matrix
//! - [`VectorView`] / [`VectorViewMut`]: `N` elements `STRIDE` apart in borrowed storage
//! - [`MatrixView`] / [`MatrixViewMut`]: row-major `R x C` over strided borrowed storage
//! - [`MathTrait`] / [`MathTraitMut`]: the shared capability, implementable by external types
//!
//! # Primary API
//!
//! ## Element-wise engine
//!
//! - [`apply::unary_apply`], [`apply::ternary_apply_seq`], [`apply::binary_apply_seq`], ...:
//!   one code path for containers, views and third-party types
//! - [`apply::Reduction`] strategies [`apply::NoReturn`], [`apply::All`], [`apply::Any`]
//!
//! ## Operators and functions
//!
//! - `+ - * / % & | ^ << >>` and their `=` forms between any compatible pair
//! - [`functions`]: `sqrt`, `clamp`, `dot`, `cross`, `normalize`, comparisons, ...
//!
//! ## Construction
//!
//! - [`vector!`] / [`matrix!`]: mix scalars and containers; missing trailing
//!   values are default-initialized, surplus values are discarded
//! - [`pod`]: reinterpret flat buffers as slices of vectors or matrices
//!
//! # Example
//!
//! ```rust
//! use fixed_linalg::prelude::*;
//! use fixed_linalg::functions::{dot, length};
//!
//! let a: Vector<f32, 3> = vector![1.0f32, 2.0f32, 2.0f32];
//! let b = Vector::<f32, 3>::splat(1.0);
//! assert_eq!(dot(&a, &b), 5.0);
//! assert_eq!(length(&a), 3.0);
//! assert_eq!((a + b).z(), 3.0);
//!
//! // Every other element of an interleaved buffer, as a 3-vector.
//! let mut buffer = [1.0f32, 0.0, 2.0, 0.0, 3.0];
//! let mut view = VectorViewMut::<f32, 2, 3>::new(&mut buffer).unwrap();
//! view += a;
//! assert_eq!(buffer, [2.0, 0.0, 4.0, 0.0, 5.0]);
//! ```
//!
//! Named components only exist when the vector is long enough:
//!
//! ```compile_fail
//! use fixed_linalg::prelude::*;
//!
//! let v = Vector::<f32, 2>::from_array([1.0, 2.0]);
//! let _ = v.z();
//! ```
//!
//! ```compile_fail
//! use fixed_linalg::prelude::*;
//!
//! let v = Vector::<f32, 2>::from_array([1.0, 2.0]);
//! let _ = v.w();
//! ```
//!
//! and operands must have the same shape:
//!
//! ```compile_fail
//! use fixed_linalg::Vector;
//!
//! let a = Vector::<f32, 2>::splat(1.0);
//! let b = Vector::<f32, 3>::splat(1.0);
//! let _ = a + b;
//! ```
//!
//! # Feature Flags
//!
//! - `checked-views`: the bounds assertions in the `unsafe` unchecked accessors
//!   also run in release builds

// Bounds check for the unchecked accessors: an assertion with
// `checked-views`, a debug assertion otherwise.
macro_rules! assume_in_bounds {
    ($index:expr, $len:expr) => {
        #[cfg(feature = "checked-views")]
        assert!(
            $index < $len,
            "unchecked index {} out of range for length {}",
            $index,
            $len
        );
        #[cfg(not(feature = "checked-views"))]
        debug_assert!(
            $index < $len,
            "unchecked index {} out of range for length {}",
            $index,
            $len
        );
    };
}

mod accessors;
mod align;
pub mod aliases;
pub mod apply;
mod approx_eq;
pub mod flatten;
pub mod functions;
pub mod matrix;
mod ops;
pub mod pod;
mod stride_iter;
pub mod vector;
pub mod view;

// ============================================================================
// Containers and views
// ============================================================================
pub use align::{Align16, Alignment, Packed};
pub use matrix::Matrix;
pub use vector::Vector;
pub use view::{MatrixView, MatrixViewMut, VectorView, VectorViewMut};

// ============================================================================
// Capability traits
// ============================================================================
pub use accessors::{
    AccessW, AccessWMut, AccessX, AccessXMut, AccessY, AccessYMut, AccessZ, AccessZMut,
};
pub use fixed_linalg_traits::{
    Arithmetic, Conjugate, HasW, HasX, HasY, HasZ, MathTrait, MathTraitMut, MatrixShape, Scalar,
    Shape, VectorShape,
};

// ============================================================================
// Construction and iteration
// ============================================================================
pub use flatten::{FlatSink, Flatten};
pub use stride_iter::{StrideIter, StrideIterMut};

// ============================================================================
// Aliases
// ============================================================================
pub use aliases::*;

/// Everything needed for day-to-day use: the containers, the views, the
/// component accessors and the constructor macros.
pub mod prelude {
    pub use crate::accessors::{
        AccessW, AccessWMut, AccessX, AccessXMut, AccessY, AccessYMut, AccessZ, AccessZMut,
    };
    pub use crate::aliases::*;
    pub use crate::{
        matrix, vector, Align16, MathTrait, MathTraitMut, Matrix, MatrixView, MatrixViewMut,
        Packed, Vector, VectorView, VectorViewMut,
    };
}

// ============================================================================
// Constants
// ============================================================================

/// Alignment in bytes of the [`Align16`] layout (one 128-bit SIMD register).
pub const MATH_TYPE_ALIGNMENT: usize = 16;

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the fallible constructors.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// The borrowed slice cannot hold every element of the requested view.
    #[error("view needs {required} elements, slice has {available}")]
    ViewOutOfBounds { required: usize, available: usize },

    /// A slice had the wrong number of elements for the container.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A POD reinterpretation was rejected (size or alignment).
    #[error("pod cast failed: {0:?}")]
    PodCast(bytemuck::PodCastError),
}

/// Result type for fallible container and view construction.
pub type Result<T> = std::result::Result<T, MathError>;
