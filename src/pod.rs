//! Plain-old-data interop.
//!
//! Packed containers are laid out exactly like `[T; N]` / `[[T; C]; R]`,
//! so flat buffers (vertex data, file contents, GPU uploads) can be
//! reinterpreted as slices of vectors or matrices without copying.
//! All casts go through `bytemuck` and fail with [`MathError::PodCast`]
//! instead of panicking.

use crate::align::{Alignment, Packed};
use crate::matrix::Matrix;
use crate::vector::Vector;
use crate::{MathError, Result};
use bytemuck::{Pod, PodCastError, Zeroable};

// SAFETY: the alignment marker is a zero-length array, so an all-zero bit
// pattern is valid whenever it is valid for `T`.
unsafe impl<T: Zeroable, const N: usize, A: Alignment> Zeroable for Vector<T, N, A> {}
unsafe impl<T: Zeroable, const R: usize, const C: usize, A: Alignment> Zeroable
    for Matrix<T, R, C, A>
{
}

// SAFETY: `repr(C)` with a zero-sized align-1 marker followed by `[T; N]`,
// so there is no padding and every bit pattern valid for `T` is valid.
unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N, Packed> {}
unsafe impl<T: Pod, const R: usize, const C: usize> Pod for Matrix<T, R, C, Packed> {}

fn pod_error(what: &str, err: PodCastError) -> MathError {
    log::debug!("{what} rejected: {err:?}");
    MathError::PodCast(err)
}

/// Reinterprets a flat slice as `N`-element vectors.
///
/// # Errors
/// Fails if `flat.len()` is not a multiple of `N`.
///
/// # Example
/// ```rust
/// use fixed_linalg::{pod::cast_vectors, AccessX, AccessY};
///
/// let xy = [1.0f32, 2.0, 3.0, 4.0];
/// let points = cast_vectors::<f32, 2>(&xy).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!((points[1].x(), points[1].y()), (3.0, 4.0));
/// ```
pub fn cast_vectors<T: Pod, const N: usize>(flat: &[T]) -> Result<&[Vector<T, N>]> {
    log::trace!("casting {} elements into {N}-vectors", flat.len());
    bytemuck::try_cast_slice(flat).map_err(|e| pod_error("cast_vectors", e))
}

/// Mutable variant of [`cast_vectors`]; writes land in `flat`.
pub fn cast_vectors_mut<T: Pod, const N: usize>(flat: &mut [T]) -> Result<&mut [Vector<T, N>]> {
    log::trace!("casting {} elements into mutable {N}-vectors", flat.len());
    bytemuck::try_cast_slice_mut(flat).map_err(|e| pod_error("cast_vectors_mut", e))
}

/// Views a slice of vectors as its flat elements.
pub fn flatten_vectors<T: Pod, const N: usize>(vectors: &[Vector<T, N>]) -> &[T] {
    bytemuck::cast_slice(vectors)
}

pub fn flatten_vectors_mut<T: Pod, const N: usize>(vectors: &mut [Vector<T, N>]) -> &mut [T] {
    bytemuck::cast_slice_mut(vectors)
}

/// Reinterprets a flat row-major slice as `R x C` matrices.
///
/// # Errors
/// Fails if `flat.len()` is not a multiple of `R * C`.
pub fn cast_matrices<T: Pod, const R: usize, const C: usize>(
    flat: &[T],
) -> Result<&[Matrix<T, R, C>]> {
    log::trace!("casting {} elements into {R}x{C} matrices", flat.len());
    bytemuck::try_cast_slice(flat).map_err(|e| pod_error("cast_matrices", e))
}

pub fn flatten_matrices<T: Pod, const R: usize, const C: usize>(
    matrices: &[Matrix<T, R, C>],
) -> &[T] {
    bytemuck::cast_slice(matrices)
}

/// Reinterprets raw bytes as vectors.
///
/// # Errors
/// Fails if the length is not a multiple of the vector size or if `bytes`
/// is not aligned for `T`.
pub fn vectors_from_bytes<T: Pod, const N: usize>(bytes: &[u8]) -> Result<&[Vector<T, N>]> {
    bytemuck::try_cast_slice(bytes).map_err(|e| pod_error("vectors_from_bytes", e))
}

/// Raw bytes of any Pod container slice, e.g. for uploading to a GPU buffer.
pub fn as_bytes<P: Pod>(items: &[P]) -> &[u8] {
    bytemuck::cast_slice(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Align16;

    #[test]
    fn test_cast_vectors_round_trip() {
        let mut flat = [1i32, 2, 3, 4, 5, 6];
        {
            let vs = cast_vectors_mut::<i32, 3>(&mut flat).unwrap();
            assert_eq!(vs.len(), 2);
            vs[1][0] = 40;
        }
        assert_eq!(flat, [1, 2, 3, 40, 5, 6]);
        let vs = cast_vectors::<i32, 3>(&flat).unwrap();
        assert_eq!(flatten_vectors(vs), &flat);
    }

    #[test]
    fn test_cast_vectors_slop() {
        let flat = [1.0f32; 5];
        let err = cast_vectors::<f32, 2>(&flat).unwrap_err();
        assert!(matches!(
            err,
            MathError::PodCast(PodCastError::OutputSliceWouldHaveSlop)
        ));
    }

    #[test]
    fn test_cast_matrices() {
        let flat = [1u16, 2, 3, 4, 5, 6, 7, 8];
        let ms = cast_matrices::<u16, 2, 2>(&flat).unwrap();
        assert_eq!(ms[1].get(1, 0), 7);
        assert_eq!(flatten_matrices(ms).len(), 8);
    }

    #[test]
    fn test_bytes() {
        let vs = [Vector::<u8, 2>::from_array([1, 2]), Vector::from_array([3, 4])];
        let bytes = as_bytes(&vs);
        assert_eq!(bytes, &[1, 2, 3, 4]);
        let back = vectors_from_bytes::<u8, 2>(bytes).unwrap();
        assert_eq!(back, &vs);
    }

    #[test]
    fn test_zeroed() {
        let v: Vector<f32, 3, Align16> = Zeroable::zeroed();
        assert_eq!(v.into_array(), [0.0; 3]);
        let m: Matrix<f64, 2, 2> = bytemuck::Zeroable::zeroed();
        assert_eq!(m, Matrix::default());
    }
}
