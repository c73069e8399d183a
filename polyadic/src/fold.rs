//! Reducing a heterogeneous sequence to a single value with a binary [`Operator`].
//!
//! There are four associativity modes, and the grouping of each is exact:
//!
//! | Function | Grouping | Defined for |
//! | :------- | :------- | :---------- |
//! | [`fold_right`] | `op(v0, op(v1, op(.., vn-1)))` | n ≥ 1, or n = 0 with an [`Identity`] |
//! | [`fold_left`] | `op(op(op(v0, v1), v2), ..)` | n ≥ 1, or n = 0 with an [`Identity`] |
//! | [`fold_right_from`] | `op(v0, op(v1, .. op(vn-1, seed)))` | n ≥ 0 |
//! | [`fold_left_from`] | `op(.. op(op(seed, v0), v1) .., vn-1)` | n ≥ 0 |
//!
//! An unseeded fold of a single element returns that element without calling the operator.
//!
//! Because each step may change the type of the accumulated value, the result type is computed
//! from the element types and the operator, and every step is a direct call.
//!
//! # Examples
//!
//! ```
//! use polyadic::fold::*;
//!
//! let group = |a: String, b: String| format!("({}+{})", a, b);
//! let abc = || ("a".to_string(), "b".to_string(), "c".to_string());
//!
//! assert_eq!(fold_right(abc(), group), "(a+(b+c))");
//! assert_eq!(fold_left(abc(), group), "((a+b)+c)");
//! assert_eq!(fold_right_from(abc(), "s".to_string(), group), "(a+(b+(c+s)))");
//! assert_eq!(fold_left_from(abc(), "s".to_string(), group), "(((s+a)+b)+c)");
//! ```

use crate::tuple::Tuple;

/// A binary operator taking a left operand `A` and a right operand `B`.
///
/// Every `FnMut(A, B) -> R` is an operator; [`And`], [`Or`] and [`Then`] are operators which also
/// have an [`Identity`].
pub trait Operator<A, B> {
    /// The result of applying the operator.
    type Output;

    /// Apply the operator to `lhs` and `rhs`.
    fn apply(&mut self, lhs: A, rhs: B) -> Self::Output;
}

impl<F, A, B, R> Operator<A, B> for F
where
    F: FnMut(A, B) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&mut self, lhs: A, rhs: B) -> R {
        self(lhs, rhs)
    }
}

/// An operator with a known identity element, which is the result of reducing an empty sequence
/// without a seed.
pub trait Identity {
    /// The type of the identity element.
    type Element;

    /// The identity element.
    fn identity() -> Self::Element;
}

/// Logical conjunction, whose identity is `true`.
///
/// # Examples
///
/// ```
/// use polyadic::fold::{fold_right, And};
///
/// assert!(fold_right((true, true, true), And));
/// assert!(!fold_right((true, false, true), And));
/// assert!(fold_right((), And));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct And;

impl Operator<bool, bool> for And {
    type Output = bool;

    #[inline]
    fn apply(&mut self, lhs: bool, rhs: bool) -> bool {
        lhs && rhs
    }
}

impl Identity for And {
    type Element = bool;

    fn identity() -> bool {
        true
    }
}

/// Logical disjunction, whose identity is `false`.
///
/// # Examples
///
/// ```
/// use polyadic::fold::{fold_left, Or};
///
/// assert!(fold_left((false, true), Or));
/// assert!(!fold_left((), Or));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Or;

impl Operator<bool, bool> for Or {
    type Output = bool;

    #[inline]
    fn apply(&mut self, lhs: bool, rhs: bool) -> bool {
        lhs || rhs
    }
}

impl Identity for Or {
    type Element = bool;

    fn identity() -> bool {
        false
    }
}

/// Sequencing: discard the left operand and keep the right one, so that a fold yields the last
/// element. Its identity is the no-op `()`.
///
/// # Examples
///
/// ```
/// use polyadic::fold::{fold_left, Then};
///
/// assert_eq!(fold_left((1, "two", 3.0), Then), 3.0);
/// assert_eq!(fold_left((), Then), ());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Then;

impl<A, B> Operator<A, B> for Then {
    type Output = B;

    #[inline]
    fn apply(&mut self, lhs: A, rhs: B) -> B {
        drop(lhs);
        rhs
    }
}

impl Identity for Then {
    type Element = ();

    fn identity() {}
}

/// Reduce a list with `Op`, grouping to the right, without a seed.
///
/// Implemented for non-empty lists, and for the empty list only when `Op` has an [`Identity`].
#[diagnostic::on_unimplemented(
    message = "cannot reduce `{Self}` with `{Op}` without a seed",
    note = "an unseeded fold needs at least one element, unless its operator has an `Identity`"
)]
pub trait FoldRight<Op> {
    /// The result of the reduction.
    type Output;

    /// Reduce the list.
    fn fold_right(self, op: &mut Op) -> Self::Output;
}

impl<Op: Identity> FoldRight<Op> for () {
    type Output = Op::Element;

    #[inline]
    fn fold_right(self, _op: &mut Op) -> Self::Output {
        Op::identity()
    }
}

impl<Op, T> FoldRight<Op> for (T, ()) {
    type Output = T;

    #[inline]
    fn fold_right(self, _op: &mut Op) -> T {
        self.0
    }
}

impl<Op, T, U, Us> FoldRight<Op> for (T, (U, Us))
where
    (U, Us): FoldRight<Op>,
    Op: Operator<T, <(U, Us) as FoldRight<Op>>::Output>,
{
    type Output = <Op as Operator<T, <(U, Us) as FoldRight<Op>>::Output>>::Output;

    #[inline]
    fn fold_right(self, op: &mut Op) -> Self::Output {
        let (head, tail) = self;
        let rest = tail.fold_right(op);
        op.apply(head, rest)
    }
}

/// Reduce a list with `Op`, grouping to the left, without a seed.
///
/// Implemented for non-empty lists, and for the empty list only when `Op` has an [`Identity`].
#[diagnostic::on_unimplemented(
    message = "cannot reduce `{Self}` with `{Op}` without a seed",
    note = "an unseeded fold needs at least one element, unless its operator has an `Identity`"
)]
pub trait FoldLeft<Op> {
    /// The result of the reduction.
    type Output;

    /// Reduce the list.
    fn fold_left(self, op: &mut Op) -> Self::Output;
}

impl<Op: Identity> FoldLeft<Op> for () {
    type Output = Op::Element;

    #[inline]
    fn fold_left(self, _op: &mut Op) -> Self::Output {
        Op::identity()
    }
}

impl<Op, T, Ts> FoldLeft<Op> for (T, Ts)
where
    Ts: FoldLeftFrom<Op, T>,
{
    type Output = Ts::Output;

    #[inline]
    fn fold_left(self, op: &mut Op) -> Self::Output {
        let (head, tail) = self;
        tail.fold_left_from(head, op)
    }
}

/// Reduce a list with `Op`, grouping to the right, starting from a seed of type `Seed` placed
/// after the last element.
#[diagnostic::on_unimplemented(
    message = "cannot reduce `{Self}` from a `{Seed}` with `{Op}`",
    note = "the operator must accept each element on its left and the accumulated value on its right"
)]
pub trait FoldRightFrom<Op, Seed> {
    /// The result of the reduction.
    type Output;

    /// Reduce the list.
    fn fold_right_from(self, seed: Seed, op: &mut Op) -> Self::Output;
}

impl<Op, Seed> FoldRightFrom<Op, Seed> for () {
    type Output = Seed;

    #[inline]
    fn fold_right_from(self, seed: Seed, _op: &mut Op) -> Seed {
        seed
    }
}

impl<Op, Seed, T, Ts> FoldRightFrom<Op, Seed> for (T, Ts)
where
    Ts: FoldRightFrom<Op, Seed>,
    Op: Operator<T, Ts::Output>,
{
    type Output = <Op as Operator<T, Ts::Output>>::Output;

    #[inline]
    fn fold_right_from(self, seed: Seed, op: &mut Op) -> Self::Output {
        let (head, tail) = self;
        let rest = tail.fold_right_from(seed, op);
        op.apply(head, rest)
    }
}

/// Reduce a list with `Op`, grouping to the left, starting from a seed of type `Seed` placed
/// before the first element.
#[diagnostic::on_unimplemented(
    message = "cannot reduce `{Self}` from a `{Seed}` with `{Op}`",
    note = "the operator must accept the accumulated value on its left and each element on its right"
)]
pub trait FoldLeftFrom<Op, Seed> {
    /// The result of the reduction.
    type Output;

    /// Reduce the list.
    fn fold_left_from(self, seed: Seed, op: &mut Op) -> Self::Output;
}

impl<Op, Seed> FoldLeftFrom<Op, Seed> for () {
    type Output = Seed;

    #[inline]
    fn fold_left_from(self, seed: Seed, _op: &mut Op) -> Seed {
        seed
    }
}

impl<Op, Seed, T, Ts> FoldLeftFrom<Op, Seed> for (T, Ts)
where
    Op: Operator<Seed, T>,
    Ts: FoldLeftFrom<Op, <Op as Operator<Seed, T>>::Output>,
{
    type Output = <Ts as FoldLeftFrom<Op, <Op as Operator<Seed, T>>::Output>>::Output;

    #[inline]
    fn fold_left_from(self, seed: Seed, op: &mut Op) -> Self::Output {
        let (head, tail) = self;
        let acc = op.apply(seed, head);
        tail.fold_left_from(acc, op)
    }
}

/// Reduce the tuple `values` with `op`, grouping to the right: `op(v0, op(v1, op(.., vn-1)))`.
///
/// Reducing an empty tuple does not compile unless `op` has an [`Identity`]:
///
/// ```compile_fail
/// use polyadic::fold::fold_right;
///
/// let _ = fold_right((), |a: i32, b: i32| a + b);
/// ```
pub fn fold_right<T, Op>(values: T, mut op: Op) -> <T::AsList as FoldRight<Op>>::Output
where
    T: Tuple,
    T::AsList: FoldRight<Op>,
{
    values.into_list().fold_right(&mut op)
}

/// Reduce the tuple `values` with `op`, grouping to the left: `op(op(op(v0, v1), v2), ..)`.
///
/// Reducing an empty tuple does not compile unless `op` has an [`Identity`]:
///
/// ```compile_fail
/// use polyadic::fold::fold_left;
///
/// let _ = fold_left((), |a: i32, b: i32| a + b);
/// ```
pub fn fold_left<T, Op>(values: T, mut op: Op) -> <T::AsList as FoldLeft<Op>>::Output
where
    T: Tuple,
    T::AsList: FoldLeft<Op>,
{
    values.into_list().fold_left(&mut op)
}

/// Reduce the tuple `values` with `op`, starting from `seed` on the right:
/// `op(v0, op(v1, .. op(vn-1, seed)))`. An empty tuple reduces to `seed`.
pub fn fold_right_from<T, Seed, Op>(
    values: T,
    seed: Seed,
    mut op: Op,
) -> <T::AsList as FoldRightFrom<Op, Seed>>::Output
where
    T: Tuple,
    T::AsList: FoldRightFrom<Op, Seed>,
{
    values.into_list().fold_right_from(seed, &mut op)
}

/// Reduce the tuple `values` with `op`, starting from `seed` on the left:
/// `op(.. op(op(seed, v0), v1) .., vn-1)`. An empty tuple reduces to `seed`.
pub fn fold_left_from<T, Seed, Op>(
    values: T,
    seed: Seed,
    mut op: Op,
) -> <T::AsList as FoldLeftFrom<Op, Seed>>::Output
where
    T: Tuple,
    T::AsList: FoldLeftFrom<Op, Seed>,
{
    values.into_list().fold_left_from(seed, &mut op)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_skips_the_operator() {
        let mut calls = 0;
        let result = fold_right((41,), |a: i32, b: i32| {
            calls += 1;
            a - b
        });
        assert_eq!(result, 41);
        assert_eq!(calls, 0);
    }

    #[test]
    fn operand_types_may_change_between_steps() {
        struct Describe;

        impl<T: std::fmt::Debug> Operator<String, T> for Describe {
            type Output = String;

            fn apply(&mut self, acc: String, x: T) -> String {
                format!("{}{:?}", acc, x)
            }
        }

        assert_eq!(
            fold_left_from((1_u8, 'b', "c"), String::new(), Describe),
            r#"1'b'"c""#
        );
    }
}
