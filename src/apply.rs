//! Element-wise invocation engine.
//!
//! Every operator and math function in this crate is written against these
//! functions, which in turn only rely on [`MathTrait`] / [`MathTraitMut`].
//! Owning containers, views and third-party types are therefore handled by a
//! single code path.
//!
//! Loops run over `0..DATA_SIZE` with unchecked element access; shape
//! compatibility of multi-operand calls is a trait bound
//! (`U2: MathTrait<Shape = U1::Shape>`), so a mismatch does not compile.
//!
//! | Function | Operands | Result |
//! |----------|----------|--------|
//! | [`unary_apply`] | one source | new container |
//! | [`ternary_apply`] / [`ternary_apply_seq`] / [`ternary_apply_dup`] | source + per-slot / second operand / duplicated value | new container |
//! | [`binary_apply`] / [`binary_apply_seq`] / [`binary_apply_dup`] | mutable target + per-slot / second operand / duplicated value | in place, reduced via [`Reduction`] |
//! | [`reduce_apply`] / [`reduce_apply_seq`] | one or two sources | reduced via [`Reduction`] |

use fixed_linalg_traits::{MathTrait, MathTraitMut, Scalar, Shape, SlotList};

/// Per-element argument list for [`ternary_apply`] / [`binary_apply`]:
/// `[A; N]` for vectors, `[[A; C]; R]` for matrices.
pub type Slots<U, A> = <<U as MathTrait>::Shape as Shape>::Slots<A>;

/// How per-element results of a mutating or reducing call are combined.
pub trait Reduction {
    /// Per-element result produced by the predicate.
    type Item;
    /// Combined result returned to the caller.
    type Output;

    fn init() -> Self::Output;

    /// Folds `item` into `acc`. Returns `false` once the result is decided,
    /// which stops the traversal.
    fn fold(acc: &mut Self::Output, item: Self::Item) -> bool;
}

/// Discard per-element results; the predicate returns `()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoReturn;

/// `true` iff every per-element result is `true`; stops at the first `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct All;

/// `true` iff some per-element result is `true`; stops at the first `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Any;

impl Reduction for NoReturn {
    type Item = ();
    type Output = ();

    #[inline(always)]
    fn init() {}

    #[inline(always)]
    fn fold(_acc: &mut (), _item: ()) -> bool {
        true
    }
}

impl Reduction for All {
    type Item = bool;
    type Output = bool;

    #[inline(always)]
    fn init() -> bool {
        true
    }

    #[inline(always)]
    fn fold(acc: &mut bool, item: bool) -> bool {
        *acc = item;
        item
    }
}

impl Reduction for Any {
    type Item = bool;
    type Output = bool;

    #[inline(always)]
    fn init() -> bool {
        false
    }

    #[inline(always)]
    fn fold(acc: &mut bool, item: bool) -> bool {
        *acc = item;
        !item
    }
}

// ============================================================================
// Value-producing
// ============================================================================

/// Maps every element of `source` through `pred` into a new container.
///
/// # Example
/// ```rust
/// use fixed_linalg::{apply::unary_apply, Vector};
///
/// let v = Vector::<f32, 3>::from_array([1.0, -2.0, 3.0]);
/// let positive: Vector<bool, 3> = unary_apply(&v, |x| x > 0.0);
/// assert_eq!(positive.into_array(), [true, false, true]);
/// ```
#[inline]
pub fn unary_apply<R, U, F>(source: &U, mut pred: F) -> U::Owned<R>
where
    R: Scalar,
    U: MathTrait,
    F: FnMut(U::Value) -> R,
{
    let mut out = <U::Owned<R> as Default>::default();
    for i in 0..U::DATA_SIZE {
        // SAFETY: `out` has the shape of `source`, so `i` is in range for both.
        unsafe {
            *out.at_unchecked_mut(i) = pred(source.at_unchecked(i));
        }
    }
    out
}

/// Like [`unary_apply`], with one extra argument per element taken from
/// `args` in row-major order.
///
/// ```rust
/// use fixed_linalg::{apply::ternary_apply, Vector};
///
/// let v = Vector::<i32, 3>::from_array([1, 2, 3]);
/// let scaled: Vector<i32, 3> = ternary_apply(&v, |x, k| x * k, [10, 20, 30]);
/// assert_eq!(scaled.into_array(), [10, 40, 90]);
/// ```
#[inline]
pub fn ternary_apply<R, U, A, F>(source: &U, mut pred: F, args: Slots<U, A>) -> U::Owned<R>
where
    R: Scalar,
    U: MathTrait,
    F: FnMut(U::Value, A) -> R,
{
    let mut out = <U::Owned<R> as Default>::default();
    for (i, arg) in (0..U::DATA_SIZE).zip(args.into_slots()) {
        // SAFETY: `i < DATA_SIZE` and `out` has the shape of `source`.
        unsafe {
            *out.at_unchecked_mut(i) = pred(source.at_unchecked(i), arg);
        }
    }
    out
}

/// Combines two same-shape operands element by element.
#[inline]
pub fn ternary_apply_seq<R, U1, U2, F>(lhs: &U1, rhs: &U2, mut pred: F) -> U1::Owned<R>
where
    R: Scalar,
    U1: MathTrait,
    U2: MathTrait<Shape = U1::Shape>,
    F: FnMut(U1::Value, U2::Value) -> R,
{
    let mut out = <U1::Owned<R> as Default>::default();
    for i in 0..U1::DATA_SIZE {
        // SAFETY: all three share `U1::Shape`, so `i` is in range for each.
        unsafe {
            *out.at_unchecked_mut(i) = pred(lhs.at_unchecked(i), rhs.at_unchecked(i));
        }
    }
    out
}

/// Combines every element of `source` with the same value `dup`.
#[inline]
pub fn ternary_apply_dup<R, U, D, F>(source: &U, dup: D, mut pred: F) -> U::Owned<R>
where
    R: Scalar,
    U: MathTrait,
    D: Copy,
    F: FnMut(U::Value, D) -> R,
{
    let mut out = <U::Owned<R> as Default>::default();
    for i in 0..U::DATA_SIZE {
        // SAFETY: `i < DATA_SIZE` and `out` has the shape of `source`.
        unsafe {
            *out.at_unchecked_mut(i) = pred(source.at_unchecked(i), dup);
        }
    }
    out
}

// ============================================================================
// In place
// ============================================================================

/// Calls `pred` with a mutable reference to every element of `target` and
/// the matching entry of `args`, folding the results with `Red`.
///
/// With [`All`] or [`Any`] the traversal stops as soon as the answer is
/// known, so later elements are left untouched.
#[inline]
pub fn binary_apply<Red, U, A, F>(target: &mut U, mut pred: F, args: Slots<U, A>) -> Red::Output
where
    Red: Reduction,
    U: MathTraitMut,
    F: FnMut(&mut U::Value, A) -> Red::Item,
{
    let mut acc = Red::init();
    for (i, arg) in (0..U::DATA_SIZE).zip(args.into_slots()) {
        // SAFETY: `i < DATA_SIZE`.
        let item = pred(unsafe { target.at_unchecked_mut(i) }, arg);
        if !Red::fold(&mut acc, item) {
            break;
        }
    }
    acc
}

/// In-place combination of `target` with a same-shape `source`.
///
/// ```rust
/// use fixed_linalg::apply::{binary_apply_seq, NoReturn};
/// use fixed_linalg::Vector;
///
/// let mut acc = Vector::<i32, 3>::from_array([1, 2, 3]);
/// let delta = Vector::<i32, 3>::from_array([10, 10, 10]);
/// binary_apply_seq::<NoReturn, _, _, _>(&mut acc, &delta, |a, d| *a += d);
/// assert_eq!(acc.into_array(), [11, 12, 13]);
/// ```
#[inline]
pub fn binary_apply_seq<Red, U1, U2, F>(target: &mut U1, source: &U2, mut pred: F) -> Red::Output
where
    Red: Reduction,
    U1: MathTraitMut,
    U2: MathTrait<Shape = U1::Shape>,
    F: FnMut(&mut U1::Value, U2::Value) -> Red::Item,
{
    let mut acc = Red::init();
    for i in 0..U1::DATA_SIZE {
        // SAFETY: both operands share `U1::Shape`.
        let item = unsafe { pred(target.at_unchecked_mut(i), source.at_unchecked(i)) };
        if !Red::fold(&mut acc, item) {
            break;
        }
    }
    acc
}

/// In-place combination of every element of `target` with `dup`.
#[inline]
pub fn binary_apply_dup<Red, U, D, F>(target: &mut U, dup: D, mut pred: F) -> Red::Output
where
    Red: Reduction,
    U: MathTraitMut,
    D: Copy,
    F: FnMut(&mut U::Value, D) -> Red::Item,
{
    let mut acc = Red::init();
    for i in 0..U::DATA_SIZE {
        // SAFETY: `i < DATA_SIZE`.
        let item = pred(unsafe { target.at_unchecked_mut(i) }, dup);
        if !Red::fold(&mut acc, item) {
            break;
        }
    }
    acc
}

// ============================================================================
// Reducing
// ============================================================================

/// Folds `pred(element)` over `source` with `Red`, without producing a
/// container.
///
/// ```rust
/// use fixed_linalg::apply::{reduce_apply, Any};
/// use fixed_linalg::Vector;
///
/// let v = Vector::<f32, 4>::from_array([1.0, 2.0, f32::NAN, 4.0]);
/// assert!(reduce_apply::<Any, _, _>(&v, |x| x.is_nan()));
/// ```
#[inline]
pub fn reduce_apply<Red, U, F>(source: &U, mut pred: F) -> Red::Output
where
    Red: Reduction,
    U: MathTrait,
    F: FnMut(U::Value) -> Red::Item,
{
    let mut acc = Red::init();
    for i in 0..U::DATA_SIZE {
        // SAFETY: `i < DATA_SIZE`.
        let item = pred(unsafe { source.at_unchecked(i) });
        if !Red::fold(&mut acc, item) {
            break;
        }
    }
    acc
}

/// Folds `pred(lhs[i], rhs[i])` over two same-shape operands with `Red`.
#[inline]
pub fn reduce_apply_seq<Red, U1, U2, F>(lhs: &U1, rhs: &U2, mut pred: F) -> Red::Output
where
    Red: Reduction,
    U1: MathTrait,
    U2: MathTrait<Shape = U1::Shape>,
    F: FnMut(U1::Value, U2::Value) -> Red::Item,
{
    let mut acc = Red::init();
    for i in 0..U1::DATA_SIZE {
        // SAFETY: both operands share `U1::Shape`.
        let item = unsafe { pred(lhs.at_unchecked(i), rhs.at_unchecked(i)) };
        if !Red::fold(&mut acc, item) {
            break;
        }
    }
    acc
}
