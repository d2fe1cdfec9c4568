//! Named component accessors.
//!
//! Components 0..=3 of any vector-like value can be read as
//! `x`/`y`/`z`/`w`, `r`/`g`/`b`/`a` or `s`/`t`/`p`/`q`. Each accessor only
//! compiles when the shape has that many components, so asking for `z` of a
//! 2-vector fails to build instead of reading past the end. Vectors of any
//! length from 4 up expose all four.
//!
//! The traits are blanket-implemented for every [`MathTrait`] type whose
//! shape carries the matching marker; import them (or the
//! [`prelude`](crate::prelude)) to use the methods.

use fixed_linalg_traits::{HasW, HasX, HasY, HasZ, MathTrait, MathTraitMut};

macro_rules! component_access {
    (
        $(#[$meta:meta])*
        $Access:ident, $AccessMut:ident, $Marker:ident, $index:literal,
        get: [$($get:ident),+],
        get_mut: [$($get_mut:ident),+],
        set: $set:ident
    ) => {
        $(#[$meta])*
        pub trait $Access: MathTrait {
            #[doc(hidden)]
            const IN_RANGE: ();

            $(
                #[inline]
                fn $get(&self) -> Self::Value {
                    let () = <Self as $Access>::IN_RANGE;
                    self.at($index)
                }
            )+
        }

        impl<U: MathTrait + ?Sized> $Access for U
        where
            U::Shape: $Marker,
        {
            const IN_RANGE: () = <U::Shape as $Marker>::PRESENT;
        }

        #[doc = concat!("Mutable counterpart of [`", stringify!($Access), "`].")]
        pub trait $AccessMut: MathTraitMut {
            #[doc(hidden)]
            const IN_RANGE: ();

            $(
                #[inline]
                fn $get_mut(&mut self) -> &mut Self::Value {
                    let () = <Self as $AccessMut>::IN_RANGE;
                    self.at_mut($index)
                }
            )+

            #[inline]
            fn $set(&mut self, value: Self::Value) {
                let () = <Self as $AccessMut>::IN_RANGE;
                *self.at_mut($index) = value;
            }
        }

        impl<U: MathTraitMut + ?Sized> $AccessMut for U
        where
            U::Shape: $Marker,
        {
            const IN_RANGE: () = <U::Shape as $Marker>::PRESENT;
        }
    };
}

component_access! {
    /// Component 0: `x`, `r`, `s`.
    AccessX, AccessXMut, HasX, 0,
    get: [x, r, s],
    get_mut: [x_mut, r_mut, s_mut],
    set: set_x
}

component_access! {
    /// Component 1: `y`, `g`, `t`.
    AccessY, AccessYMut, HasY, 1,
    get: [y, g, t],
    get_mut: [y_mut, g_mut, t_mut],
    set: set_y
}

component_access! {
    /// Component 2: `z`, `b`, `p`.
    AccessZ, AccessZMut, HasZ, 2,
    get: [z, b, p],
    get_mut: [z_mut, b_mut, p_mut],
    set: set_z
}

component_access! {
    /// Component 3: `w`, `a`, `q`.
    AccessW, AccessWMut, HasW, 3,
    get: [w, a, q],
    get_mut: [w_mut, a_mut, q_mut],
    set: set_w
}
