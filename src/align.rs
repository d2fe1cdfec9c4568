//! Layout parameter for owning containers.
//!
//! Instead of a parallel "aligned" subtype for every container, alignment is a
//! type parameter. The marker is stored as a zero-length array, which costs no
//! space but raises the alignment of the enclosing `#[repr(C)]` struct.

use std::fmt::Debug;
use std::hash::Hash;

/// Alignment marker for [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix).
pub trait Alignment:
    Copy + Default + Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Minimum alignment in bytes imposed on the container.
    const ALIGN: usize;
}

/// Natural alignment of the element type (the default).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Packed;

/// 16-byte alignment, matching a 128-bit SIMD register.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Align16;

impl Alignment for Packed {
    const ALIGN: usize = 1;
}

impl Alignment for Align16 {
    const ALIGN: usize = crate::MATH_TYPE_ALIGNMENT;
}

// SAFETY: zero-sized, no padding, no invalid bit patterns.
unsafe impl bytemuck::Zeroable for Packed {}
unsafe impl bytemuck::Pod for Packed {}
