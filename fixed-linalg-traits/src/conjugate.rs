//! Complex conjugation as an element operation.

use num_complex::Complex;
use num_traits::Num;

/// Element types that support complex conjugation.
///
/// The default implementation returns `self`, so real-valued and custom
/// types can opt in with an empty impl:
/// ```ignore
/// impl Conjugate for MyType {}
/// ```
pub trait Conjugate: Copy {
    #[inline(always)]
    fn conj(self) -> Self {
        self
    }
}

macro_rules! impl_conjugate_real {
    ($($t:ty),*) => {
        $(impl Conjugate for $t {})*
    };
}

impl_conjugate_real!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Num + Copy + std::ops::Neg<Output = T>> Conjugate for Complex<T> {
    #[inline(always)]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_real_conj_is_identity() {
        assert_eq!(Conjugate::conj(2.5f64), 2.5);
        assert_eq!(Conjugate::conj(-7i32), -7);
    }

    #[test]
    fn test_complex_conj() {
        let z = Complex64::new(1.0, 2.0);
        assert_eq!(Conjugate::conj(z), Complex64::new(1.0, -2.0));
        assert_eq!(Conjugate::conj(Conjugate::conj(z)), z);
    }
}
