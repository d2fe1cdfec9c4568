//! `approx` comparisons for owning containers, element by element.

use crate::align::Alignment;
use crate::apply::{reduce_apply_seq, All};
use crate::matrix::Matrix;
use crate::vector::Vector;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use fixed_linalg_traits::Scalar;

macro_rules! impl_approx {
    ([$($gen:tt)*] $Ty:ty) => {
        impl<T, $($gen)*> AbsDiffEq for $Ty
        where
            T: Scalar + AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> T::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
                reduce_apply_seq::<All, _, _, _>(self, other, |a, b| a.abs_diff_eq(&b, epsilon))
            }
        }

        impl<T, $($gen)*> RelativeEq for $Ty
        where
            T: Scalar + RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> T::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
                reduce_apply_seq::<All, _, _, _>(self, other, |a, b| {
                    a.relative_eq(&b, epsilon, max_relative)
                })
            }
        }

        impl<T, $($gen)*> UlpsEq for $Ty
        where
            T: Scalar + UlpsEq,
            T::Epsilon: Copy,
        {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
                reduce_apply_seq::<All, _, _, _>(self, other, |a, b| a.ulps_eq(&b, epsilon, max_ulps))
            }
        }
    };
}

impl_approx!([const N: usize, A: Alignment] Vector<T, N, A>);
impl_approx!([const R: usize, const C: usize, A: Alignment] Matrix<T, R, C, A>);

#[cfg(test)]
mod tests {
    use crate::{Matrix, Vector};
    use approx::{assert_abs_diff_eq, assert_relative_ne, assert_ulps_eq};

    #[test]
    fn test_vector_approx() {
        let a = Vector::<f32, 3>::from_array([0.1 + 0.2, 1.0, 2.0]);
        let b = Vector::<f32, 3>::from_array([0.3, 1.0, 2.0]);
        assert_ulps_eq!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        assert_relative_ne!(a, Vector::<f32, 3>::from_array([0.3, 1.0, 2.1]));
    }

    #[test]
    fn test_matrix_approx() {
        let a = Matrix::<f64, 2, 2>::from_array([[1.0, 2.0], [3.0, 4.0]]);
        let b = a * (1.0 + 1e-12);
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }
}
