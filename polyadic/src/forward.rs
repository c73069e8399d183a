//! Forwarding a list by a chosen calling convention.
//!
//! A list can be handed on by [`Val`]ue (moving every element), by shared [`Ref`]erence (yielding a
//! list of `&T`), or by unique [`Mut`]able reference (yielding a list of `&mut T`). Whatever a
//! caller passed in, the elements reach the next operation in the same category: a moved element
//! stays moved and a borrowed element stays borrowed.
//!
//! # Examples
//!
//! ```
//! use polyadic::forward::{forward, Ref, Mut};
//!
//! let mut list = (1, (String::from("two"), ()));
//!
//! let (one, (two, ())) = forward::<Ref, _>(&list);
//! assert_eq!((*one, two.as_str()), (1, "two"));
//!
//! let (one, (two, ())) = forward::<Mut, _>(&mut list);
//! *one += 1;
//! two.push('!');
//! assert_eq!(list, (2, (String::from("two!"), ())));
//! ```

pub use call_by::{Convention, Mut, Ref, Val};

/// A list which can be forwarded by the calling convention `C`.
///
/// For [`Val`] this is implemented on the list itself; for [`Ref`] on `&'a` the list; for [`Mut`]
/// on `&'a mut` the list.
pub trait Forward<'a, C: Convention> {
    /// The list of forwarded elements.
    type Forwarded;

    /// Forward every element of the list, in order.
    fn forward(self) -> Self::Forwarded;
}

impl<'a> Forward<'a, Val> for () {
    type Forwarded = ();

    fn forward(self) -> Self::Forwarded {}
}

impl<'a, T, Ts> Forward<'a, Val> for (T, Ts)
where
    Ts: Forward<'a, Val>,
{
    type Forwarded = (T, Ts::Forwarded);

    fn forward(self) -> Self::Forwarded {
        let (head, tail) = self;
        (head, tail.forward())
    }
}

impl<'a> Forward<'a, Ref> for &'a () {
    type Forwarded = ();

    fn forward(self) -> Self::Forwarded {}
}

impl<'a, T: 'a, Ts: 'a> Forward<'a, Ref> for &'a (T, Ts)
where
    &'a Ts: Forward<'a, Ref>,
{
    type Forwarded = (&'a T, <&'a Ts as Forward<'a, Ref>>::Forwarded);

    fn forward(self) -> Self::Forwarded {
        let (head, tail) = self;
        (head, tail.forward())
    }
}

impl<'a> Forward<'a, Mut> for &'a mut () {
    type Forwarded = ();

    fn forward(self) -> Self::Forwarded {}
}

impl<'a, T: 'a, Ts: 'a> Forward<'a, Mut> for &'a mut (T, Ts)
where
    &'a mut Ts: Forward<'a, Mut>,
{
    type Forwarded = (&'a mut T, <&'a mut Ts as Forward<'a, Mut>>::Forwarded);

    fn forward(self) -> Self::Forwarded {
        let (head, tail) = self;
        (head, tail.forward())
    }
}

/// Forward `list` by the calling convention `C`.
pub fn forward<'a, C, L>(list: L) -> L::Forwarded
where
    C: Convention,
    L: Forward<'a, C>,
{
    list.forward()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_value_moves_each_element_once() {
        let owned = String::from("moved");
        let (s, (n, ())) = forward::<Val, _>((owned, (7, ())));
        assert_eq!(s, "moved");
        assert_eq!(n, 7);
    }

    #[test]
    fn by_reference_borrows_in_place() {
        let list = (String::from("a"), (String::from("b"), ()));
        let (a, (b, ())) = forward::<Ref, _>(&list);
        assert!(std::ptr::eq(a, &list.0));
        assert!(std::ptr::eq(b, &(list.1).0));
    }

    #[test]
    fn empty_list_forwards_to_empty() {
        forward::<Val, _>(());
        forward::<Ref, _>(&());
        forward::<Mut, _>(&mut ());
    }
}
