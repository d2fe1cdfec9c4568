//! Flattening of heterogeneous constructor arguments.
//!
//! A tuple such as `(1.0f32, v2, 7i32)` is turned into one ordered value
//! sequence: scalars contribute one value, containers contribute all of their
//! elements in row-major order. Every value is converted to the target element
//! type with primitive `as` semantics ([`num_traits::AsPrimitive`]).
//!
//! The sequence is written into a [`FlatSink`] that silently drops values past
//! its capacity, which gives constructors their truncate-or-default behavior.

use num_complex::Complex;
use num_traits::AsPrimitive;

/// A value that can be flattened into a sequence of `T`.
pub trait Flatten<T> {
    /// Number of values this argument contributes.
    const LEN: usize;

    /// Pushes every value, in order, into `sink`.
    fn flatten_into(&self, sink: &mut FlatSink<'_, T>);
}

/// Bounded writer used by [`Flatten`].
#[derive(Debug)]
pub struct FlatSink<'a, T> {
    out: &'a mut [T],
    supplied: usize,
}

impl<'a, T> FlatSink<'a, T> {
    pub fn new(out: &'a mut [T]) -> Self {
        Self { out, supplied: 0 }
    }

    /// Writes `value` at the next position; values past capacity are discarded.
    #[inline]
    pub fn push(&mut self, value: T) {
        if let Some(slot) = self.out.get_mut(self.supplied) {
            *slot = value;
        }
        self.supplied += 1;
    }

    /// Total number of values pushed, including discarded ones.
    #[inline]
    pub fn supplied(&self) -> usize {
        self.supplied
    }

    /// Number of positions that received a value.
    #[inline]
    pub fn filled(&self) -> usize {
        self.supplied.min(self.out.len())
    }
}

/// Flattens `args` into `out`, returning how many values were supplied.
///
/// Positions of `out` past the supplied count are left untouched.
pub fn flatten_into_slice<T, Args: Flatten<T>>(args: &Args, out: &mut [T]) -> usize {
    let mut sink = FlatSink::new(out);
    args.flatten_into(&mut sink);
    sink.supplied()
}

macro_rules! impl_flatten_primitive {
    ($($s:ty),*) => {
        $(
            impl<T: Copy + 'static> Flatten<T> for $s
            where
                $s: AsPrimitive<T>,
            {
                const LEN: usize = 1;

                #[inline]
                fn flatten_into(&self, sink: &mut FlatSink<'_, T>) {
                    sink.push(self.as_());
                }
            }
        )*
    };
}

impl_flatten_primitive!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Flatten<bool> for bool {
    const LEN: usize = 1;

    #[inline]
    fn flatten_into(&self, sink: &mut FlatSink<'_, bool>) {
        sink.push(*self);
    }
}

impl<U: Copy> Flatten<Complex<U>> for Complex<U> {
    const LEN: usize = 1;

    #[inline]
    fn flatten_into(&self, sink: &mut FlatSink<'_, Complex<U>>) {
        sink.push(*self);
    }
}

impl<T, S: Flatten<T>> Flatten<T> for &S {
    const LEN: usize = <S as Flatten<T>>::LEN;

    #[inline]
    fn flatten_into(&self, sink: &mut FlatSink<'_, T>) {
        (**self).flatten_into(sink);
    }
}

impl<T, S: Flatten<T>, const K: usize> Flatten<T> for [S; K] {
    const LEN: usize = <S as Flatten<T>>::LEN * K;

    #[inline]
    fn flatten_into(&self, sink: &mut FlatSink<'_, T>) {
        for item in self {
            item.flatten_into(sink);
        }
    }
}

impl<T> Flatten<T> for () {
    const LEN: usize = 0;

    #[inline]
    fn flatten_into(&self, _sink: &mut FlatSink<'_, T>) {}
}

macro_rules! impl_flatten_tuple {
    ($($name:ident),+) => {
        impl<T, $($name: Flatten<T>),+> Flatten<T> for ($($name,)+) {
            const LEN: usize = 0 $(+ <$name as Flatten<T>>::LEN)+;

            #[inline]
            #[allow(non_snake_case)]
            fn flatten_into(&self, sink: &mut FlatSink<'_, T>) {
                let ($($name,)+) = self;
                $($name.flatten_into(sink);)+
            }
        }
    };
}

impl_flatten_tuple!(A);
impl_flatten_tuple!(A, B);
impl_flatten_tuple!(A, B, C);
impl_flatten_tuple!(A, B, C, D);
impl_flatten_tuple!(A, B, C, D, E);
impl_flatten_tuple!(A, B, C, D, E, F);
impl_flatten_tuple!(A, B, C, D, E, F, G);
impl_flatten_tuple!(A, B, C, D, E, F, G, H);
impl_flatten_tuple!(A, B, C, D, E, F, G, H, I);
impl_flatten_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_flatten_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_flatten_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_flatten_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_flatten_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_flatten_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
impl_flatten_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);
