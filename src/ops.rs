//! Operator overloading for containers and views.
//!
//! Every binary operator is element-wise and routed through the
//! [`apply`](crate::apply) engine. Supported operand pairs:
//!
//! | Left | Right | Result |
//! |------|-------|--------|
//! | `Vector<T, N, A>` | `Vector<T, N, B>`, `VectorView<T, S, N>`, `T` | `Vector<T, N, A>` |
//! | `VectorView<T, S, N>` | `Vector<T, N, A>`, `VectorView<T, S2, N>`, `T` | `Vector<T, N>` |
//! | `Matrix<T, R, C, A>` | `Matrix<T, R, C, B>`, `MatrixView<T, S, R, C>`, `T` | `Matrix<T, R, C, A>` |
//! | `MatrixView<T, S, R, C>` | `Matrix<T, R, C, A>`, `MatrixView<T, S2, R, C>`, `T` | `Matrix<T, R, C>` |
//! | primitive `T` | `Vector`, `VectorView`, `Matrix`, `MatrixView` | owning container |
//!
//! Compound assignment (`+=` and friends) is implemented for `Vector`,
//! `VectorViewMut`, `Matrix` and `MatrixViewMut`; writes through a mutable
//! view land in the viewed storage.
//!
//! Operands of different shapes do not type-check.

use crate::align::Alignment;
use crate::apply::{
    binary_apply_dup, binary_apply_seq, reduce_apply_seq, ternary_apply_dup, ternary_apply_seq,
    unary_apply, All, NoReturn,
};
use crate::matrix::Matrix;
use crate::vector::Vector;
use crate::view::{MatrixView, MatrixViewMut, VectorView, VectorViewMut};
use fixed_linalg_traits::Scalar;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        // ---- vectors -------------------------------------------------------

        impl<T, const N: usize, A: Alignment, B: Alignment> $Op<Vector<T, N, B>> for Vector<T, N, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Vector<T, N, A>;

            #[inline]
            fn $op(self, rhs: Vector<T, N, B>) -> Self::Output {
                ternary_apply_seq(&self, &rhs, <T as $Op>::$op)
            }
        }

        impl<'b, T, const S: usize, const N: usize, A: Alignment> $Op<VectorView<'b, T, S, N>>
            for Vector<T, N, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Vector<T, N, A>;

            #[inline]
            fn $op(self, rhs: VectorView<'b, T, S, N>) -> Self::Output {
                ternary_apply_seq(&self, &rhs, <T as $Op>::$op)
            }
        }

        impl<T, const N: usize, A: Alignment> $Op<T> for Vector<T, N, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Vector<T, N, A>;

            #[inline]
            fn $op(self, rhs: T) -> Self::Output {
                ternary_apply_dup(&self, rhs, <T as $Op>::$op)
            }
        }

        impl<'a, T, const S: usize, const N: usize, A: Alignment> $Op<Vector<T, N, A>>
            for VectorView<'a, T, S, N>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, rhs: Vector<T, N, A>) -> Self::Output {
                ternary_apply_seq(&self, &rhs, <T as $Op>::$op)
            }
        }

        impl<'a, 'b, T, const S1: usize, const S2: usize, const N: usize>
            $Op<VectorView<'b, T, S2, N>> for VectorView<'a, T, S1, N>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, rhs: VectorView<'b, T, S2, N>) -> Self::Output {
                ternary_apply_seq(&self, &rhs, <T as $Op>::$op)
            }
        }

        impl<'a, T, const S: usize, const N: usize> $Op<T> for VectorView<'a, T, S, N>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self, rhs: T) -> Self::Output {
                ternary_apply_dup(&self, rhs, <T as $Op>::$op)
            }
        }

        impl<T, const N: usize, A: Alignment, B: Alignment> $OpAssign<Vector<T, N, B>>
            for Vector<T, N, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Vector<T, N, B>) {
                binary_apply_seq::<NoReturn, _, _, _>(self, &rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }

        impl<'b, T, const S: usize, const N: usize, A: Alignment> $OpAssign<VectorView<'b, T, S, N>>
            for Vector<T, N, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: VectorView<'b, T, S, N>) {
                binary_apply_seq::<NoReturn, _, _, _>(self, &rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }

        impl<T, const N: usize, A: Alignment> $OpAssign<T> for Vector<T, N, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                binary_apply_dup::<NoReturn, _, _, _>(self, rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }

        impl<'a, T, const S: usize, const N: usize, A: Alignment> $OpAssign<Vector<T, N, A>>
            for VectorViewMut<'a, T, S, N>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Vector<T, N, A>) {
                binary_apply_seq::<NoReturn, _, _, _>(self, &rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }

        impl<'a, 'b, T, const S1: usize, const S2: usize, const N: usize>
            $OpAssign<VectorView<'b, T, S2, N>> for VectorViewMut<'a, T, S1, N>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: VectorView<'b, T, S2, N>) {
                binary_apply_seq::<NoReturn, _, _, _>(self, &rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }

        impl<'a, T, const S: usize, const N: usize> $OpAssign<T> for VectorViewMut<'a, T, S, N>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                binary_apply_dup::<NoReturn, _, _, _>(self, rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }

        // ---- matrices ------------------------------------------------------

        impl<T, const R: usize, const C: usize, A: Alignment, B: Alignment>
            $Op<Matrix<T, R, C, B>> for Matrix<T, R, C, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Matrix<T, R, C, A>;

            #[inline]
            fn $op(self, rhs: Matrix<T, R, C, B>) -> Self::Output {
                ternary_apply_seq(&self, &rhs, <T as $Op>::$op)
            }
        }

        impl<'b, T, const S: usize, const R: usize, const C: usize, A: Alignment>
            $Op<MatrixView<'b, T, S, R, C>> for Matrix<T, R, C, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Matrix<T, R, C, A>;

            #[inline]
            fn $op(self, rhs: MatrixView<'b, T, S, R, C>) -> Self::Output {
                ternary_apply_seq(&self, &rhs, <T as $Op>::$op)
            }
        }

        impl<T, const R: usize, const C: usize, A: Alignment> $Op<T> for Matrix<T, R, C, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Matrix<T, R, C, A>;

            #[inline]
            fn $op(self, rhs: T) -> Self::Output {
                ternary_apply_dup(&self, rhs, <T as $Op>::$op)
            }
        }

        impl<'a, T, const S: usize, const R: usize, const C: usize, A: Alignment>
            $Op<Matrix<T, R, C, A>> for MatrixView<'a, T, S, R, C>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Matrix<T, R, C>;

            #[inline]
            fn $op(self, rhs: Matrix<T, R, C, A>) -> Self::Output {
                ternary_apply_seq(&self, &rhs, <T as $Op>::$op)
            }
        }

        impl<'a, 'b, T, const S1: usize, const S2: usize, const R: usize, const C: usize>
            $Op<MatrixView<'b, T, S2, R, C>> for MatrixView<'a, T, S1, R, C>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Matrix<T, R, C>;

            #[inline]
            fn $op(self, rhs: MatrixView<'b, T, S2, R, C>) -> Self::Output {
                ternary_apply_seq(&self, &rhs, <T as $Op>::$op)
            }
        }

        impl<'a, T, const S: usize, const R: usize, const C: usize> $Op<T>
            for MatrixView<'a, T, S, R, C>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Matrix<T, R, C>;

            #[inline]
            fn $op(self, rhs: T) -> Self::Output {
                ternary_apply_dup(&self, rhs, <T as $Op>::$op)
            }
        }

        impl<T, const R: usize, const C: usize, A: Alignment, B: Alignment>
            $OpAssign<Matrix<T, R, C, B>> for Matrix<T, R, C, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Matrix<T, R, C, B>) {
                binary_apply_seq::<NoReturn, _, _, _>(self, &rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }

        impl<'b, T, const S: usize, const R: usize, const C: usize, A: Alignment>
            $OpAssign<MatrixView<'b, T, S, R, C>> for Matrix<T, R, C, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: MatrixView<'b, T, S, R, C>) {
                binary_apply_seq::<NoReturn, _, _, _>(self, &rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }

        impl<T, const R: usize, const C: usize, A: Alignment> $OpAssign<T> for Matrix<T, R, C, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                binary_apply_dup::<NoReturn, _, _, _>(self, rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }

        impl<'a, T, const S: usize, const R: usize, const C: usize, A: Alignment>
            $OpAssign<Matrix<T, R, C, A>> for MatrixViewMut<'a, T, S, R, C>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Matrix<T, R, C, A>) {
                binary_apply_seq::<NoReturn, _, _, _>(self, &rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }

        impl<'a, 'b, T, const S1: usize, const S2: usize, const R: usize, const C: usize>
            $OpAssign<MatrixView<'b, T, S2, R, C>> for MatrixViewMut<'a, T, S1, R, C>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: MatrixView<'b, T, S2, R, C>) {
                binary_apply_seq::<NoReturn, _, _, _>(self, &rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }

        impl<'a, T, const S: usize, const R: usize, const C: usize> $OpAssign<T>
            for MatrixViewMut<'a, T, S, R, C>
        where
            T: Scalar + $Op<Output = T>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: T) {
                binary_apply_dup::<NoReturn, _, _, _>(self, rhs, |a, b| *a = <T as $Op>::$op(*a, b));
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
impl_binary_op!(Div, div, DivAssign, div_assign);
impl_binary_op!(Rem, rem, RemAssign, rem_assign);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);
impl_binary_op!(Shl, shl, ShlAssign, shl_assign);
impl_binary_op!(Shr, shr, ShrAssign, shr_assign);

// Scalar on the left. The orphan rule rules out a generic `impl<T> Add<Vector<T>> for T`,
// so these are stamped out per primitive.
macro_rules! impl_scalar_lhs {
    ($Op:ident, $op:ident; $($t:ty),*) => {
        $(
            impl<const N: usize, A: Alignment> $Op<Vector<$t, N, A>> for $t {
                type Output = Vector<$t, N, A>;

                #[inline]
                fn $op(self, rhs: Vector<$t, N, A>) -> Self::Output {
                    ternary_apply_dup(&rhs, self, |v, s| <$t as $Op>::$op(s, v))
                }
            }

            impl<'b, const S: usize, const N: usize> $Op<VectorView<'b, $t, S, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn $op(self, rhs: VectorView<'b, $t, S, N>) -> Self::Output {
                    ternary_apply_dup(&rhs, self, |v, s| <$t as $Op>::$op(s, v))
                }
            }

            impl<const R: usize, const C: usize, A: Alignment> $Op<Matrix<$t, R, C, A>> for $t {
                type Output = Matrix<$t, R, C, A>;

                #[inline]
                fn $op(self, rhs: Matrix<$t, R, C, A>) -> Self::Output {
                    ternary_apply_dup(&rhs, self, |v, s| <$t as $Op>::$op(s, v))
                }
            }

            impl<'b, const S: usize, const R: usize, const C: usize> $Op<MatrixView<'b, $t, S, R, C>>
                for $t
            {
                type Output = Matrix<$t, R, C>;

                #[inline]
                fn $op(self, rhs: MatrixView<'b, $t, S, R, C>) -> Self::Output {
                    ternary_apply_dup(&rhs, self, |v, s| <$t as $Op>::$op(s, v))
                }
            }
        )*
    };
}

macro_rules! impl_scalar_lhs_ops {
    ([$($Op:ident, $op:ident);+] for $types:tt) => {
        $(impl_scalar_lhs_ops!(@one $Op, $op, $types);)+
    };
    (@one $Op:ident, $op:ident, [$($t:ty),*]) => {
        impl_scalar_lhs!($Op, $op; $($t),*);
    };
}

impl_scalar_lhs_ops!(
    [Add, add; Sub, sub; Mul, mul; Div, div; Rem, rem]
    for [f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
);
impl_scalar_lhs_ops!(
    [BitAnd, bitand; BitOr, bitor; BitXor, bitxor; Shl, shl; Shr, shr]
    for [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]
);
impl_scalar_lhs_ops!([BitAnd, bitand; BitOr, bitor; BitXor, bitxor] for [bool]);

macro_rules! impl_unary_op {
    ($Op:ident, $op:ident) => {
        impl<T, const N: usize, A: Alignment> $Op for Vector<T, N, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Vector<T, N, A>;

            #[inline]
            fn $op(self) -> Self::Output {
                unary_apply(&self, <T as $Op>::$op)
            }
        }

        impl<'a, T, const S: usize, const N: usize> $Op for VectorView<'a, T, S, N>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Vector<T, N>;

            #[inline]
            fn $op(self) -> Self::Output {
                unary_apply(&self, <T as $Op>::$op)
            }
        }

        impl<T, const R: usize, const C: usize, A: Alignment> $Op for Matrix<T, R, C, A>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Matrix<T, R, C, A>;

            #[inline]
            fn $op(self) -> Self::Output {
                unary_apply(&self, <T as $Op>::$op)
            }
        }

        impl<'a, T, const S: usize, const R: usize, const C: usize> $Op
            for MatrixView<'a, T, S, R, C>
        where
            T: Scalar + $Op<Output = T>,
        {
            type Output = Matrix<T, R, C>;

            #[inline]
            fn $op(self) -> Self::Output {
                unary_apply(&self, <T as $Op>::$op)
            }
        }
    };
}

impl_unary_op!(Neg, neg);
impl_unary_op!(Not, not);

// Cross-representation equality: a view equals a container with the same
// logical elements, regardless of stride.
macro_rules! impl_view_eq {
    ($(impl[$($gen:tt)*] $Lhs:ty, $Rhs:ty;)+) => {
        $(
            impl<$($gen)*> PartialEq<$Rhs> for $Lhs
            where
                T: Scalar + PartialEq,
            {
                #[inline]
                fn eq(&self, other: &$Rhs) -> bool {
                    reduce_apply_seq::<All, _, _, _>(self, other, |a, b| a == b)
                }
            }
        )+
    };
}

impl_view_eq! {
    impl['a, T, const S: usize, const N: usize, A: Alignment]
        VectorView<'a, T, S, N>, Vector<T, N, A>;
    impl['a, T, const S: usize, const N: usize, A: Alignment]
        Vector<T, N, A>, VectorView<'a, T, S, N>;
    impl['a, 'b, T, const S1: usize, const S2: usize, const N: usize]
        VectorView<'a, T, S1, N>, VectorView<'b, T, S2, N>;
    impl['a, T, const S: usize, const N: usize, A: Alignment]
        VectorViewMut<'a, T, S, N>, Vector<T, N, A>;
    impl['a, T, const S: usize, const R: usize, const C: usize, A: Alignment]
        MatrixView<'a, T, S, R, C>, Matrix<T, R, C, A>;
    impl['a, T, const S: usize, const R: usize, const C: usize, A: Alignment]
        Matrix<T, R, C, A>, MatrixView<'a, T, S, R, C>;
    impl['a, 'b, T, const S1: usize, const S2: usize, const R: usize, const C: usize]
        MatrixView<'a, T, S1, R, C>, MatrixView<'b, T, S2, R, C>;
    impl['a, T, const S: usize, const R: usize, const C: usize, A: Alignment]
        MatrixViewMut<'a, T, S, R, C>, Matrix<T, R, C, A>;
}

#[cfg(test)]
mod tests {
    use crate::{Align16, Matrix, MatrixView, MatrixViewMut, Vector, VectorView, VectorViewMut};

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector::<i32, 3>::from_array([1, 2, 3]);
        let b = Vector::<i32, 3>::from_array([4, 5, 6]);
        assert_eq!((a + b).into_array(), [5, 7, 9]);
        assert_eq!((b - a).into_array(), [3, 3, 3]);
        assert_eq!((a * b).into_array(), [4, 10, 18]);
        assert_eq!((b / a).into_array(), [4, 2, 2]);
        assert_eq!((b % a).into_array(), [0, 1, 0]);
    }

    #[test]
    fn test_mixed_alignment_keeps_left() {
        let a = Vector::<f32, 4, Align16>::splat(1.0);
        let b = Vector::<f32, 4>::splat(2.0);
        let c: Vector<f32, 4, Align16> = a + b;
        assert_eq!(c.into_array(), [3.0; 4]);
    }

    #[test]
    fn test_scalar_both_sides() {
        let v = Vector::<f64, 2>::from_array([2.0, 4.0]);
        assert_eq!((v * 0.5).into_array(), [1.0, 2.0]);
        assert_eq!((8.0f64 / v).into_array(), [4.0, 2.0]);
        assert_eq!((1.0f64 - v).into_array(), [-1.0, -3.0]);
    }

    #[test]
    fn test_view_operands() {
        let raw = [1, 100, 2, 100, 3];
        let view = VectorView::<i32, 2, 3>::new(&raw).unwrap();
        let v = Vector::<i32, 3>::from_array([10, 20, 30]);
        assert_eq!((v + view).into_array(), [11, 22, 33]);
        assert_eq!((view + v).into_array(), [11, 22, 33]);
        assert_eq!((view * view).into_array(), [1, 4, 9]);
        assert_eq!((view - 1).into_array(), [0, 1, 2]);
        assert_eq!((10i32 - view).into_array(), [9, 8, 7]);
    }

    #[test]
    fn test_compound_assign_through_view() {
        let mut raw = [1.0f32, 0.0, 2.0, 0.0, 3.0];
        {
            let mut view = VectorViewMut::<f32, 2, 3>::new(&mut raw).unwrap();
            view += Vector::<f32, 3>::splat(1.0);
            view *= 2.0;
        }
        assert_eq!(raw, [4.0, 0.0, 6.0, 0.0, 8.0]);
    }

    #[test]
    fn test_compound_assign_vector() {
        let mut v = Vector::<u32, 2>::from_array([1, 2]);
        v <<= 3;
        assert_eq!(v.into_array(), [8, 16]);
        v |= Vector::<u32, 2>::from_array([1, 1]);
        assert_eq!(v.into_array(), [9, 17]);
        let other = [2u32, 2];
        v -= VectorView::<u32, 1, 2>::new(&other).unwrap();
        assert_eq!(v.into_array(), [7, 15]);
    }

    #[test]
    fn test_bitwise() {
        let a = Vector::<u8, 2>::from_array([0b1100, 0b1010]);
        let b = Vector::<u8, 2>::from_array([0b1010, 0b0110]);
        assert_eq!((a & b).into_array(), [0b1000, 0b0010]);
        assert_eq!((a | b).into_array(), [0b1110, 0b1110]);
        assert_eq!((a ^ b).into_array(), [0b0110, 0b1100]);
        assert_eq!((a >> 1u8).into_array(), [0b0110, 0b0101]);
        let shifts = Vector::<u8, 2>::from_array([1, 3]);
        assert_eq!((1u8 << shifts.as_view()).into_array(), [2, 8]);
    }

    #[test]
    fn test_unary() {
        let v = Vector::<i32, 2>::from_array([1, -2]);
        assert_eq!((-v).into_array(), [-1, 2]);
        let b = Vector::<bool, 2>::from_array([true, false]);
        assert_eq!((!b).into_array(), [false, true]);
        assert_eq!((!v.as_view()).into_array(), [!1, !-2]);
    }

    #[test]
    fn test_matrix_ops() {
        let a = Matrix::<i32, 2, 2>::from_array([[1, 2], [3, 4]]);
        let b = Matrix::<i32, 2, 2>::splat(1);
        assert_eq!((a + b).into_array(), [[2, 3], [4, 5]]);
        assert_eq!((a * 2).into_array(), [[2, 4], [6, 8]]);
        assert_eq!((2i32 * a).into_array(), [[2, 4], [6, 8]]);
        assert_eq!((a.as_view() - b).into_array(), [[0, 1], [2, 3]]);
        assert_eq!((-a).into_array(), [[-1, -2], [-3, -4]]);
    }

    #[test]
    fn test_matrix_view_assign() {
        let mut raw = [1, 2, 3, 4];
        {
            let mut view = MatrixViewMut::<i32, 1, 2, 2>::new(&mut raw).unwrap();
            view += Matrix::<i32, 2, 2>::splat(10);
            view -= 1;
        }
        assert_eq!(raw, [10, 11, 12, 13]);
    }

    #[test]
    fn test_cross_representation_equality() {
        let raw = [1, 0, 2];
        let view = VectorView::<i32, 2, 2>::new(&raw).unwrap();
        let v = Vector::<i32, 2>::from_array([1, 2]);
        assert_eq!(view, v);
        assert_eq!(v, view);
        assert_ne!(view, Vector::<i32, 2>::from_array([1, 3]));

        let m = Matrix::<i32, 1, 2>::from_array([[1, 2]]);
        let mv = MatrixView::<i32, 2, 1, 2>::new(&raw).unwrap();
        assert_eq!(mv, m);
        assert_eq!(m, mv);
    }
}
