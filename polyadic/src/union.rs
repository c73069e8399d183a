//! The tagged union [`Union`].

use std::{
    any::type_name,
    convert::Infallible,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    mem, process, ptr,
};

use crate::{
    error::Error,
    tuple::{HasLength, Select, Tuple},
    unary::{Number, ToUnary, Unary, UnaryOf, S, Z},
    visit::Visitor,
};

/// One step of the sum type corresponding to a list: either the first alternative is active
/// (`Here`), or one of the rest is (`There`).
///
/// The sum for the list `(A, (B, (C, ())))` is `Alt<A, Alt<B, Alt<C, Infallible>>>`; since
/// [`Infallible`] has no values, exactly one of `A`, `B` or `C` is ever held.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alt<H, T> {
    /// The first alternative is active.
    Here(H),
    /// One of the remaining alternatives is active.
    There(T),
}

impl<H: Debug, T: Debug> Debug for Alt<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Alt::Here(h) => h.fmt(f),
            Alt::There(t) => t.fmt(f),
        }
    }
}

/// The sum type corresponding to a list, with one alternative per element type.
pub trait Alternatives {
    /// The sum type: nested [`Alt`]s ending in [`Infallible`].
    type Sum: Discriminant;
}

impl Alternatives for () {
    type Sum = Infallible;
}

impl<T, Ts: Alternatives> Alternatives for (T, Ts) {
    type Sum = Alt<T, Ts::Sum>;
}

/// The position of the active alternative of a sum.
pub trait Discriminant {
    /// The position of the active alternative, counting from zero.
    fn discriminant(&self) -> usize;
}

impl Discriminant for Infallible {
    fn discriminant(&self) -> usize {
        match *self {}
    }
}

impl<H, T: Discriminant> Discriminant for Alt<H, T> {
    #[inline]
    fn discriminant(&self) -> usize {
        match self {
            Alt::Here(_) => 0,
            Alt::There(t) => 1 + t.discriminant(),
        }
    }
}

/// Construct and deconstruct the alternative of type `X` at position `N` of a sum.
///
/// When `N` is left to inference, it is found from `X`; if `X` occurs at more than one position,
/// inference is ambiguous and the position must be given explicitly.
#[diagnostic::on_unimplemented(
    message = "`{X}` is not an alternative of `{Self}` at position `{N}`",
    note = "if the type occurs more than once among the alternatives, name its position explicitly"
)]
pub trait Inject<X, N: Unary>: Sized {
    /// Make `value` the active alternative.
    fn inject(value: X) -> Self;

    /// Borrow the alternative, if it is the active one.
    fn peek(&self) -> Option<&X>;

    /// Mutably borrow the alternative, if it is the active one.
    fn peek_mut(&mut self) -> Option<&mut X>;

    /// Take the alternative, if it is the active one, or give back the whole sum.
    fn extract(self) -> Result<X, Self>;
}

impl<X, T> Inject<X, Z> for Alt<X, T> {
    fn inject(value: X) -> Self {
        Alt::Here(value)
    }

    fn peek(&self) -> Option<&X> {
        match self {
            Alt::Here(x) => Some(x),
            Alt::There(_) => None,
        }
    }

    fn peek_mut(&mut self) -> Option<&mut X> {
        match self {
            Alt::Here(x) => Some(x),
            Alt::There(_) => None,
        }
    }

    fn extract(self) -> Result<X, Self> {
        match self {
            Alt::Here(x) => Ok(x),
            there => Err(there),
        }
    }
}

impl<X, H, T, N: Unary> Inject<X, S<N>> for Alt<H, T>
where
    T: Inject<X, N>,
{
    fn inject(value: X) -> Self {
        Alt::There(Inject::<X, N>::inject(value))
    }

    fn peek(&self) -> Option<&X> {
        match self {
            Alt::Here(_) => None,
            Alt::There(t) => Inject::<X, N>::peek(t),
        }
    }

    fn peek_mut(&mut self) -> Option<&mut X> {
        match self {
            Alt::Here(_) => None,
            Alt::There(t) => Inject::<X, N>::peek_mut(t),
        }
    }

    fn extract(self) -> Result<X, Self> {
        match self {
            Alt::Here(h) => Err(Alt::Here(h)),
            Alt::There(t) => Inject::<X, N>::extract(t).map_err(Alt::There),
        }
    }
}

/// Hand the active alternative of a sum to a visitor, producing an `R`.
///
/// Implemented for a sum by value, by `&` reference and by `&mut` reference, so the visitor
/// receives the active value as `X`, `&X` or `&mut X` respectively. Each alternative has its own
/// `match` arm, so the call reached is fixed by the discriminant alone.
pub trait Dispatch<V, R> {
    /// Visit the active alternative.
    fn dispatch(self, visitor: &mut V) -> R;
}

impl<V, R> Dispatch<V, R> for Infallible {
    fn dispatch(self, _visitor: &mut V) -> R {
        match self {}
    }
}

impl<'a, V, R> Dispatch<V, R> for &'a Infallible {
    fn dispatch(self, _visitor: &mut V) -> R {
        match *self {}
    }
}

impl<'a, V, R> Dispatch<V, R> for &'a mut Infallible {
    fn dispatch(self, _visitor: &mut V) -> R {
        match *self {}
    }
}

impl<V, R, H, T> Dispatch<V, R> for Alt<H, T>
where
    V: Visitor<H, Output = R>,
    T: Dispatch<V, R>,
{
    #[inline]
    fn dispatch(self, visitor: &mut V) -> R {
        match self {
            Alt::Here(h) => visitor.visit(h),
            Alt::There(t) => t.dispatch(visitor),
        }
    }
}

impl<'a, V, R, H, T> Dispatch<V, R> for &'a Alt<H, T>
where
    V: Visitor<&'a H, Output = R>,
    &'a T: Dispatch<V, R>,
{
    #[inline]
    fn dispatch(self, visitor: &mut V) -> R {
        match self {
            Alt::Here(h) => visitor.visit(h),
            Alt::There(t) => t.dispatch(visitor),
        }
    }
}

impl<'a, V, R, H, T> Dispatch<V, R> for &'a mut Alt<H, T>
where
    V: Visitor<&'a mut H, Output = R>,
    &'a mut T: Dispatch<V, R>,
{
    #[inline]
    fn dispatch(self, visitor: &mut V) -> R {
        match self {
            Alt::Here(h) => visitor.visit(h),
            Alt::There(t) => t.dispatch(visitor),
        }
    }
}

type SumOf<T> = <<T as Tuple>::AsList as Alternatives>::Sum;

/// A value holding exactly one of the types in the tuple type `T`, together with a discriminant
/// saying which.
///
/// The active alternative is a run-time fact, so reading the union as an inactive alternative is
/// reported as [`Error::TypeMismatch`]. Naming a type which is not an alternative at all is
/// rejected when the program is built.
///
/// # Examples
///
/// ```
/// use polyadic::{Error, Union};
///
/// let mut u: Union<(i32, String)> = Union::new(42_i32);
/// assert_eq!(u.index(), 0);
/// assert_eq!(u.get::<i32, _>(), Ok(&42));
/// assert!(matches!(u.get::<String, _>(), Err(Error::TypeMismatch { active: 0, .. })));
///
/// u.set(String::from("hello"));
/// assert_eq!(u.index(), 1);
/// assert_eq!(u.get::<String, _>().map(String::as_str), Ok("hello"));
/// ```
///
/// A type which is not one of the alternatives does not compile:
///
/// ```compile_fail
/// use polyadic::Union;
///
/// let u: Union<(i32, String)> = Union::new(1.5_f64);
/// ```
///
/// When two alternatives share a type, the position must be given with [`at`](Union::at):
///
/// ```
/// use polyadic::Union;
///
/// let u: Union<(u8, u8)> = Union::at::<1>(7);
/// assert_eq!(u.index(), 1);
/// ```
pub struct Union<T: Tuple> {
    value: SumOf<T>,
}

impl<T: Tuple> Union<T> {
    /// The number of alternatives.
    pub const LEN: usize = <T::AsList as HasLength>::LEN;

    /// Make `value` the active alternative, the position being inferred from its type.
    pub fn new<X, N: Unary>(value: X) -> Self
    where
        SumOf<T>: Inject<X, N>,
    {
        Union {
            value: Inject::<X, N>::inject(value),
        }
    }

    /// Make `value` the active alternative at position `N`.
    pub fn at<const N: usize>(value: <T::AsList as Select<UnaryOf<N>>>::Selected) -> Self
    where
        Number<N>: ToUnary,
        T::AsList: Select<UnaryOf<N>>,
        SumOf<T>: Inject<<T::AsList as Select<UnaryOf<N>>>::Selected, UnaryOf<N>>,
    {
        Union {
            value: Inject::<_, UnaryOf<N>>::inject(value),
        }
    }

    /// The position of the active alternative, in `0 .. LEN`.
    pub fn index(&self) -> usize {
        self.value.discriminant()
    }

    /// The number of alternatives.
    pub fn len(&self) -> usize {
        Self::LEN
    }

    /// Whether there are no alternatives. Always `false` for a union which exists.
    pub fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// Whether the alternative of type `X` is the active one.
    pub fn is<X, N: Unary>(&self) -> bool
    where
        SumOf<T>: Inject<X, N>,
    {
        Inject::<X, N>::peek(&self.value).is_some()
    }

    /// Borrow the active value as an `X`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the active alternative is not the `X` one.
    pub fn get<X, N: Unary>(&self) -> Result<&X, Error>
    where
        SumOf<T>: Inject<X, N>,
    {
        match Inject::<X, N>::peek(&self.value) {
            Some(x) => Ok(x),
            None => Err(mismatch::<X, N>(self.index())),
        }
    }

    /// Mutably borrow the active value as an `X`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the active alternative is not the `X` one.
    pub fn get_mut<X, N: Unary>(&mut self) -> Result<&mut X, Error>
    where
        SumOf<T>: Inject<X, N>,
    {
        let active = self.index();
        match Inject::<X, N>::peek_mut(&mut self.value) {
            Some(x) => Ok(x),
            None => Err(mismatch::<X, N>(active)),
        }
    }

    /// Take the active value as an `X`, or give the union back if another alternative is active.
    pub fn take<X, N: Unary>(self) -> Result<X, Self>
    where
        SumOf<T>: Inject<X, N>,
    {
        Inject::<X, N>::extract(self.value).map_err(|value| Union { value })
    }

    /// Replace the active value with `value`, the position being inferred from its type.
    ///
    /// Since `value` is an argument, it already exists when the old value is dropped. To destroy
    /// the old value before the new one is built, use [`Union::set_with`].
    pub fn set<X, N: Unary>(&mut self, value: X)
    where
        SumOf<T>: Inject<X, N>,
    {
        tracing::trace!(from = self.index(), to = N::VALUE, "reassigning union");
        self.value = Inject::<X, N>::inject(value);
    }

    /// Replace the active value with `value` at position `N`.
    pub fn set_at<const N: usize>(&mut self, value: <T::AsList as Select<UnaryOf<N>>>::Selected)
    where
        Number<N>: ToUnary,
        T::AsList: Select<UnaryOf<N>>,
        SumOf<T>: Inject<<T::AsList as Select<UnaryOf<N>>>::Selected, UnaryOf<N>>,
    {
        tracing::trace!(from = self.index(), to = N, "reassigning union");
        self.value = Inject::<_, UnaryOf<N>>::inject(value);
    }

    /// Drop the active value, then build its replacement by calling `make`, the position being
    /// inferred from its type.
    ///
    /// The two lifetimes never overlap: the old value is gone before `make` runs. If `make` (or the
    /// old value's destructor) panics, the union has no value to hold, so the process aborts.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use polyadic::Union;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let mut u: Union<(i32, String)> = Union::new(1_i32);
    /// u.set_with(|| {
    ///     log.borrow_mut().push("building");
    ///     String::from("two")
    /// });
    /// assert_eq!(u.get::<String, _>().unwrap(), "two");
    /// assert_eq!(*log.borrow(), ["building"]);
    /// ```
    pub fn set_with<X, N: Unary, F>(&mut self, make: F)
    where
        F: FnOnce() -> X,
        SumOf<T>: Inject<X, N>,
    {
        tracing::trace!(from = self.index(), to = N::VALUE, "rebuilding union in place");
        let slot: *mut SumOf<T> = &mut self.value;
        // SAFETY: `slot` comes from a live `&mut`, so it is valid and aligned. Between the drop and
        // the write it holds no value; the guard aborts if the old value's destructor or `make`
        // unwinds, so nothing can observe or drop the vacated slot.
        unsafe {
            let guard = AbortOnUnwind;
            ptr::drop_in_place(slot);
            let value = make();
            mem::forget(guard);
            ptr::write(slot, Inject::<X, N>::inject(value));
        }
    }

    /// Drop the active value, then build its replacement at position `N` by calling `make`.
    ///
    /// As with [`Union::set_with`], a panic in `make` aborts the process.
    pub fn set_at_with<const N: usize, F>(&mut self, make: F)
    where
        F: FnOnce() -> <T::AsList as Select<UnaryOf<N>>>::Selected,
        Number<N>: ToUnary,
        T::AsList: Select<UnaryOf<N>>,
        SumOf<T>: Inject<<T::AsList as Select<UnaryOf<N>>>::Selected, UnaryOf<N>>,
    {
        self.set_with::<_, UnaryOf<N>, _>(make)
    }

    /// Hand a shared reference to the active value to `visitor`, which must accept a reference to
    /// every alternative.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyadic::{visit::Visitor, Union};
    ///
    /// struct Size;
    ///
    /// impl<'a> Visitor<&'a i32> for Size {
    ///     type Output = usize;
    ///     fn visit(&mut self, _: &'a i32) -> usize { 4 }
    /// }
    ///
    /// impl<'a> Visitor<&'a String> for Size {
    ///     type Output = usize;
    ///     fn visit(&mut self, s: &'a String) -> usize { s.len() }
    /// }
    ///
    /// let u: Union<(i32, String)> = Union::new(String::from("hello"));
    /// assert_eq!(u.visit(&mut Size), 5);
    /// ```
    pub fn visit<'a, V, R>(&'a self, visitor: &mut V) -> R
    where
        &'a SumOf<T>: Dispatch<V, R>,
    {
        (&self.value).dispatch(visitor)
    }

    /// Hand a unique reference to the active value to `visitor`, which must accept a unique
    /// reference to every alternative.
    pub fn visit_mut<'a, V, R>(&'a mut self, visitor: &mut V) -> R
    where
        &'a mut SumOf<T>: Dispatch<V, R>,
    {
        (&mut self.value).dispatch(visitor)
    }

    /// Hand the active value itself to `visitor`, which must accept every alternative.
    pub fn into_visit<V, R>(self, visitor: &mut V) -> R
    where
        SumOf<T>: Dispatch<V, R>,
    {
        self.value.dispatch(visitor)
    }
}

/// Aborts the process if dropped, which only happens while unwinding past it.
struct AbortOnUnwind;

impl Drop for AbortOnUnwind {
    fn drop(&mut self) {
        process::abort()
    }
}

fn mismatch<X, N: Unary>(active: usize) -> Error {
    let error = Error::TypeMismatch {
        requested: type_name::<X>(),
        requested_index: N::VALUE,
        active,
    };
    tracing::debug!(%error, "union accessed as an inactive alternative");
    error
}

impl<T: Tuple> Clone for Union<T>
where
    SumOf<T>: Clone,
{
    fn clone(&self) -> Self {
        Union {
            value: self.value.clone(),
        }
    }
}

impl<T: Tuple> Copy for Union<T> where SumOf<T>: Copy {}

impl<T: Tuple> PartialEq for Union<T>
where
    SumOf<T>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Tuple> Eq for Union<T> where SumOf<T>: Eq {}

impl<T: Tuple> Hash for Union<T>
where
    SumOf<T>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<T: Tuple> Debug for Union<T>
where
    SumOf<T>: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Union")
            .field(&self.index())
            .field(&self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(
        SumOf<(u8, String)>,
        Alt<u8, Alt<String, Infallible>>
    );

    #[test]
    fn discriminant_counts_from_zero() {
        let a: Union<(u8, u16, u32)> = Union::new(1_u8);
        let b: Union<(u8, u16, u32)> = Union::new(1_u16);
        let c: Union<(u8, u16, u32)> = Union::new(1_u32);
        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));
        assert_eq!(Union::<(u8, u16, u32)>::LEN, 3);
    }

    #[test]
    fn take_returns_the_union_on_mismatch() {
        let u: Union<(u8, char)> = Union::new('x');
        let u = u.take::<u8, _>().unwrap_err();
        assert_eq!(u.take::<char, _>(), Ok('x'));
    }

    #[test]
    fn debug_shows_index_and_active_value() {
        let u: Union<(u8, &str)> = Union::new("hi");
        assert_eq!(format!("{:?}", u), r#"Union(1, "hi")"#);
    }

    #[test]
    fn set_at_picks_among_duplicates() {
        let mut u: Union<(u8, u8)> = Union::at::<0>(1);
        u.set_at::<1>(2);
        assert_eq!(u.index(), 1);
        assert_eq!(u.get::<u8, S<Z>>(), Ok(&2));
        assert!(u.get::<u8, Z>().is_err());
    }
}
