//! Conversions back and forth between flat tuples and their corresponding inductive list
//! structures, and the type-level operations every sequence supports.
//!
//! Internally, this library uses inductive type-level lists, `(A, (B, (C, ())))`, but presents an
//! external interface in terms of tuples, `(A, B, C)`, for readability. The traits here convert
//! between the two equivalent representations, at both the type and the value level.
//!
//! At present, tuples up to size 64 are supported.

use crate::{product::Teardown, union::Alternatives, unary::*};

/// Convert a tuple into its corresponding inductive list structure.
///
/// # Examples
///
/// ```
/// use polyadic::tuple::Tuple;
///
/// let list = (1, "two", 3.0).into_list();
/// assert_eq!(list, (1, ("two", (3.0, ()))));
/// ```
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Convert this tuple into its inductive list, moving every element exactly once.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding tuple.
///
/// Every list knows its length, can be torn down in reverse order, and has a corresponding sum
/// type of alternatives; these are supertraits so that generic code over any `List` can rely on
/// them without restating them.
pub trait List: Sized + HasLength + Alternatives + Teardown {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Convert this list back into its flat tuple.
    fn into_tuple(self) -> Self::AsTuple;
}

/// Take the length of a type-level list as a unary type-level number.
///
/// # Examples
///
/// ```
/// use polyadic::tuple::{HasLength, Tuple};
///
/// assert_eq!(<<(u8, u16, u32) as Tuple>::AsList as HasLength>::LEN, 3);
/// assert_eq!(<() as HasLength>::LEN, 0);
/// ```
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;

    /// The length of a type-level list, as a `usize`.
    const LEN: usize = <Self::Length as Unary>::VALUE;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// Index into a type-level list by a unary position `N`.
///
/// This is only implemented when `N` is strictly less than the length of the list, so an
/// out-of-range position is rejected when the program is built, not when it runs.
///
/// # Examples
///
/// ```
/// use polyadic::{tuple::Select, unary::UnaryOf};
///
/// let list = (1_u8, ("two", (3.0_f64, ())));
/// let two: &&str = Select::<UnaryOf<1>>::select(&list);
/// assert_eq!(*two, "two");
/// ```
///
/// Selecting past the end does not compile:
///
/// ```compile_fail
/// use polyadic::{tuple::Select, unary::UnaryOf};
///
/// let list = (1_u8, ("two", (3.0_f64, ())));
/// let _ = Select::<UnaryOf<3>>::select(&list);
/// ```
#[diagnostic::on_unimplemented(
    message = "position `{N}` is out of range for the sequence `{Self}`",
    label = "no element at this position",
    note = "a position must be strictly less than the length of the sequence"
)]
pub trait Select<N: Unary> {
    /// The type of the element at position `N`.
    type Selected;

    /// Borrow the element at position `N`.
    fn select(&self) -> &Self::Selected;

    /// Mutably borrow the element at position `N`.
    fn select_mut(&mut self) -> &mut Self::Selected;

    /// Take the element at position `N`, dropping the others.
    fn into_selected(self) -> Self::Selected;
}

impl<T, Ts> Select<Z> for (T, Ts) {
    type Selected = T;

    fn select(&self) -> &T {
        &self.0
    }

    fn select_mut(&mut self) -> &mut T {
        &mut self.0
    }

    fn into_selected(self) -> T {
        self.0
    }
}

impl<T, Ts, N: Unary> Select<S<N>> for (T, Ts)
where
    Ts: Select<N>,
{
    type Selected = Ts::Selected;

    fn select(&self) -> &Self::Selected {
        self.1.select()
    }

    fn select_mut(&mut self) -> &mut Self::Selected {
        self.1.select_mut()
    }

    fn into_selected(self) -> Self::Selected {
        self.1.into_selected()
    }
}

/// The type at position `N` of the flat tuple `T`.
///
/// # Examples
///
/// ```
/// use polyadic::tuple::Nth;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Nth<(u8, String, f64), 1>, String);
/// ```
pub type Nth<T, const N: usize> = <<T as Tuple>::AsList as Select<UnaryOf<N>>>::Selected;

polyadic_macro::impl_tuples!(64);
