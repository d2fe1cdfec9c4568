//! Element-wise math and reductions over any [`MathTrait`] operand.
//!
//! Functions taking two operands accept any mix of containers and views of
//! the same shape and return the owning container of the first operand's
//! shape. Element types are bounded by the `num-traits` capability they need
//! ([`Float`], [`Signed`], ...), so e.g. [`sqrt`] is unavailable for integer
//! vectors at compile time.

use crate::apply::{
    reduce_apply, reduce_apply_seq, ternary_apply_seq, unary_apply, All, Any, NoReturn,
};
use fixed_linalg_traits::{Arithmetic, Conjugate, MathTrait, MathTraitMut, Scalar, VectorShape};
use num_traits::{AsPrimitive, Float, One, Signed, Zero};

/// Per-element result type for the first operand's shape.
pub type Owned<U, V> = <U as MathTrait>::Owned<V>;

// ============================================================================
// Unary
// ============================================================================

macro_rules! float_unary {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<U>(v: &U) -> Owned<U, U::Value>
            where
                U: MathTrait,
                U::Value: Float,
            {
                unary_apply(v, Float::$name)
            }
        )+
    };
}

float_unary! {
    sqrt;
    sin;
    cos;
    tan;
    exp;
    /// Natural logarithm.
    ln;
    floor;
    ceil;
    /// Rounds half-way cases away from zero.
    round;
    /// `1 / x`.
    recip;
}

#[inline]
pub fn abs<U>(v: &U) -> Owned<U, U::Value>
where
    U: MathTrait,
    U::Value: Signed,
{
    unary_apply(v, |x| Signed::abs(&x))
}

/// `-1`, `0` or `1` for integers; `-1.0` or `1.0` (or NaN) for floats.
#[inline]
pub fn signum<U>(v: &U) -> Owned<U, U::Value>
where
    U: MathTrait,
    U::Value: Signed,
{
    unary_apply(v, |x| Signed::signum(&x))
}

#[inline]
pub fn powf<U>(v: &U, exponent: U::Value) -> Owned<U, U::Value>
where
    U: MathTrait,
    U::Value: Float,
{
    unary_apply(v, |x| x.powf(exponent))
}

/// Clamps every element to `[lo, hi]`.
#[inline]
pub fn clamp<U>(v: &U, lo: U::Value, hi: U::Value) -> Owned<U, U::Value>
where
    U: MathTrait,
    U::Value: PartialOrd,
{
    unary_apply(v, |x| {
        if x < lo {
            lo
        } else if x > hi {
            hi
        } else {
            x
        }
    })
}

/// Complex conjugate; identity for real element types.
#[inline]
pub fn conj<U>(v: &U) -> Owned<U, U::Value>
where
    U: MathTrait,
    U::Value: Conjugate,
{
    unary_apply(v, Conjugate::conj)
}

/// Element-wise primitive cast (`as` semantics).
///
/// ```rust
/// use fixed_linalg::{functions::cast, Vector};
///
/// let v = Vector::<f32, 2>::from_array([1.7, -0.2]);
/// let i: Vector<i32, 2> = cast(&v);
/// assert_eq!(i.into_array(), [1, 0]);
/// ```
#[inline]
pub fn cast<V, U>(v: &U) -> Owned<U, V>
where
    U: MathTrait,
    U::Value: AsPrimitive<V>,
    V: Scalar,
{
    unary_apply(v, |x| x.as_())
}

// ============================================================================
// Binary
// ============================================================================

#[inline]
pub fn min<U1, U2>(a: &U1, b: &U2) -> Owned<U1, U1::Value>
where
    U1: MathTrait,
    U2: MathTrait<Value = U1::Value, Shape = U1::Shape>,
    U1::Value: PartialOrd,
{
    ternary_apply_seq(a, b, |x, y| if y < x { y } else { x })
}

#[inline]
pub fn max<U1, U2>(a: &U1, b: &U2) -> Owned<U1, U1::Value>
where
    U1: MathTrait,
    U2: MathTrait<Value = U1::Value, Shape = U1::Shape>,
    U1::Value: PartialOrd,
{
    ternary_apply_seq(a, b, |x, y| if y > x { y } else { x })
}

/// `a + (b - a) * t`, element-wise.
#[inline]
pub fn lerp<U1, U2>(a: &U1, b: &U2, t: U1::Value) -> Owned<U1, U1::Value>
where
    U1: MathTrait,
    U2: MathTrait<Value = U1::Value, Shape = U1::Shape>,
    U1::Value: Arithmetic,
{
    ternary_apply_seq(a, b, |x, y| x + (y - x) * t)
}

macro_rules! comparison {
    ($($(#[$meta:meta])* $name:ident, $Bound:ident, |$x:ident, $y:ident| $body:expr;)+) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<U1, U2>(a: &U1, b: &U2) -> Owned<U1, bool>
            where
                U1: MathTrait,
                U2: MathTrait<Value = U1::Value, Shape = U1::Shape>,
                U1::Value: $Bound,
            {
                ternary_apply_seq(a, b, |$x, $y| $body)
            }
        )+
    };
}

comparison! {
    /// Element-wise `==`.
    equal, PartialEq, |x, y| x == y;
    not_equal, PartialEq, |x, y| x != y;
    less, PartialOrd, |x, y| x < y;
    less_equal, PartialOrd, |x, y| x <= y;
    greater, PartialOrd, |x, y| x > y;
    greater_equal, PartialOrd, |x, y| x >= y;
}

// ============================================================================
// Reductions
// ============================================================================

/// `true` iff every element is `true`.
#[inline]
pub fn all<U>(v: &U) -> bool
where
    U: MathTrait<Value = bool>,
{
    reduce_apply::<All, _, _>(v, |b| b)
}

/// `true` iff some element is `true`.
#[inline]
pub fn any<U>(v: &U) -> bool
where
    U: MathTrait<Value = bool>,
{
    reduce_apply::<Any, _, _>(v, |b| b)
}

#[inline]
pub fn sum<U>(v: &U) -> U::Value
where
    U: MathTrait,
    U::Value: Arithmetic,
{
    let mut acc = U::Value::zero();
    reduce_apply::<NoReturn, _, _>(v, |x| acc = acc + x);
    acc
}

#[inline]
pub fn product<U>(v: &U) -> U::Value
where
    U: MathTrait,
    U::Value: Arithmetic,
{
    let mut acc = U::Value::one();
    reduce_apply::<NoReturn, _, _>(v, |x| acc = acc * x);
    acc
}

/// Sum of element-wise products. For matrices this is the Frobenius inner
/// product.
#[inline]
pub fn dot<U1, U2>(a: &U1, b: &U2) -> U1::Value
where
    U1: MathTrait,
    U2: MathTrait<Value = U1::Value, Shape = U1::Shape>,
    U1::Value: Arithmetic,
{
    let mut acc = U1::Value::zero();
    reduce_apply_seq::<NoReturn, _, _, _>(a, b, |x, y| acc = acc + x * y);
    acc
}

#[inline]
pub fn length_squared<U>(v: &U) -> U::Value
where
    U: MathTrait,
    U::Value: Arithmetic,
{
    dot(v, v)
}

#[inline]
pub fn length<U>(v: &U) -> U::Value
where
    U: MathTrait,
    U::Value: Float + Arithmetic,
{
    length_squared(v).sqrt()
}

#[inline]
pub fn distance<U1, U2>(a: &U1, b: &U2) -> U1::Value
where
    U1: MathTrait,
    U2: MathTrait<Value = U1::Value, Shape = U1::Shape>,
    U1::Value: Float + Arithmetic,
{
    let mut acc = U1::Value::zero();
    reduce_apply_seq::<NoReturn, _, _, _>(a, b, |x, y| {
        let d = x - y;
        acc = acc + d * d;
    });
    acc.sqrt()
}

/// Scales `v` to unit length. A zero vector yields NaN components.
#[inline]
pub fn normalize<U>(v: &U) -> Owned<U, U::Value>
where
    U: MathTrait,
    U::Value: Float + Arithmetic,
{
    let inv = length(v).recip();
    unary_apply(v, |x| x * inv)
}

/// Cross product of two 3-vectors.
///
/// ```rust
/// use fixed_linalg::{functions::cross, Vector};
///
/// let x = Vector::<f32, 3>::from_array([1.0, 0.0, 0.0]);
/// let y = Vector::<f32, 3>::from_array([0.0, 1.0, 0.0]);
/// assert_eq!(cross(&x, &y).into_array(), [0.0, 0.0, 1.0]);
/// ```
#[inline]
pub fn cross<U1, U2>(a: &U1, b: &U2) -> Owned<U1, U1::Value>
where
    U1: MathTrait<Shape = VectorShape<3>>,
    U2: MathTrait<Value = U1::Value, Shape = VectorShape<3>>,
    U1::Value: Arithmetic,
{
    let (a0, a1, a2) = (a.at(0), a.at(1), a.at(2));
    let (b0, b1, b2) = (b.at(0), b.at(1), b.at(2));
    let components = [a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0];
    let mut out = <Owned<U1, U1::Value> as Default>::default();
    for (i, c) in components.into_iter().enumerate() {
        *out.at_mut(i) = c;
    }
    out
}
