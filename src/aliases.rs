//! Short names for the common shapes.
//!
//! The `A` suffix selects the 16-byte aligned layout.

use crate::align::Align16;
use crate::matrix::Matrix;
use crate::vector::Vector;

pub type Vector1<T> = Vector<T, 1>;
pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
pub type Vector4<T> = Vector<T, 4>;

pub type Vector2A<T> = Vector<T, 2, Align16>;
pub type Vector3A<T> = Vector<T, 3, Align16>;
pub type Vector4A<T> = Vector<T, 4, Align16>;

pub type Matrix2x2<T> = Matrix<T, 2, 2>;
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
pub type Matrix3x3<T> = Matrix<T, 3, 3>;
pub type Matrix3x4<T> = Matrix<T, 3, 4>;
pub type Matrix4x3<T> = Matrix<T, 4, 3>;
pub type Matrix4x4<T> = Matrix<T, 4, 4>;

pub type Matrix3x3A<T> = Matrix<T, 3, 3, Align16>;
pub type Matrix3x4A<T> = Matrix<T, 3, 4, Align16>;
pub type Matrix4x3A<T> = Matrix<T, 4, 3, Align16>;
pub type Matrix4x4A<T> = Matrix<T, 4, 4, Align16>;

pub type Float2 = Vector2<f32>;
pub type Float3 = Vector3<f32>;
pub type Float4 = Vector4<f32>;
pub type Float2A = Vector2A<f32>;
pub type Float3A = Vector3A<f32>;
pub type Float4A = Vector4A<f32>;

pub type Int2 = Vector2<i32>;
pub type Int3 = Vector3<i32>;
pub type Int4 = Vector4<i32>;
pub type Int2A = Vector2A<i32>;
pub type Int3A = Vector3A<i32>;
pub type Int4A = Vector4A<i32>;

pub type UInt2 = Vector2<u32>;
pub type UInt3 = Vector3<u32>;
pub type UInt4 = Vector4<u32>;
pub type UInt2A = Vector2A<u32>;
pub type UInt3A = Vector3A<u32>;
pub type UInt4A = Vector4A<u32>;

pub type Float3x3 = Matrix3x3<f32>;
pub type Float3x4 = Matrix3x4<f32>;
pub type Float4x3 = Matrix4x3<f32>;
pub type Float4x4 = Matrix4x4<f32>;
pub type Float3x3A = Matrix3x3A<f32>;
pub type Float3x4A = Matrix3x4A<f32>;
pub type Float4x3A = Matrix4x3A<f32>;
pub type Float4x4A = Matrix4x4A<f32>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_alias_layouts() {
        assert_eq!(size_of::<Float3>(), 12);
        assert_eq!(size_of::<Float3A>(), 16);
        assert_eq!(align_of::<Int2A>(), 16);
        assert_eq!(size_of::<Float4x4>(), 64);
        assert_eq!(size_of::<Float3x3A>(), 48);
        assert_eq!(align_of::<Float4x3A>(), 16);
    }
}
