//! Ordered sequences of types, fixed when the program is built.
//!
//! A sequence of types is written as a tuple type, and its length is available without any value
//! of that type: [`Types::<T>::LEN`](Types::LEN).

use std::{any::TypeId, marker::PhantomData};

use crate::tuple::{HasLength, Tuple};

/// The sequence of element types of the tuple type `T`, without any values.
///
/// # Examples
///
/// ```
/// use polyadic::sequence::Types;
///
/// assert_eq!(Types::<(u8, String, u8)>::LEN, 3);
/// assert_eq!(Types::<()>::LEN, 0);
/// assert!(Types::<(u8, u8)>::new().is_homogeneous());
/// assert_eq!(Types::<(u8, bool)>::new().type_names(), ["u8", "bool"]);
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = "")
)]
pub struct Types<T: Tuple>(PhantomData<fn() -> T>);

impl<T: Tuple> Types<T> {
    /// The number of types in the sequence.
    pub const LEN: usize = <T::AsList as HasLength>::LEN;

    /// Name the sequence of types in `T`.
    pub fn new() -> Self {
        Types(PhantomData)
    }

    /// The number of types in the sequence.
    pub fn len(&self) -> usize {
        Self::LEN
    }

    /// Whether the sequence has no types in it.
    pub fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// Whether every type in the sequence is the same type. The empty sequence is homogeneous.
    pub fn is_homogeneous(&self) -> bool
    where
        T::AsList: EachTypeId,
    {
        is_homogeneous::<T>()
    }

    /// The names of the types in the sequence, in order, as reported by
    /// [`type_name`](std::any::type_name).
    pub fn type_names(&self) -> Vec<&'static str>
    where
        T::AsList: EachTypeId,
    {
        let mut names = Vec::with_capacity(Self::LEN);
        <T::AsList as EachTypeId>::type_names(&mut names);
        names
    }
}

/// Collect the [`TypeId`] and name of every type in a list.
pub trait EachTypeId {
    /// Push the [`TypeId`] of each type in the list, in order.
    fn type_ids(ids: &mut Vec<TypeId>);

    /// Push the name of each type in the list, in order.
    fn type_names(names: &mut Vec<&'static str>);
}

impl EachTypeId for () {
    fn type_ids(_: &mut Vec<TypeId>) {}

    fn type_names(_: &mut Vec<&'static str>) {}
}

impl<T: 'static, Ts: EachTypeId> EachTypeId for (T, Ts) {
    fn type_ids(ids: &mut Vec<TypeId>) {
        ids.push(TypeId::of::<T>());
        Ts::type_ids(ids);
    }

    fn type_names(names: &mut Vec<&'static str>) {
        names.push(std::any::type_name::<T>());
        Ts::type_names(names);
    }
}

/// Whether every element type of the tuple type `T` is the same type.
///
/// # Examples
///
/// ```
/// use polyadic::sequence::is_homogeneous;
///
/// assert!(is_homogeneous::<(&str, &str, &str, &str)>());
/// assert!(!is_homogeneous::<(i32, i32, &str)>());
/// assert!(is_homogeneous::<()>());
/// ```
pub fn is_homogeneous<T: Tuple>() -> bool
where
    T::AsList: EachTypeId,
{
    let mut ids = Vec::with_capacity(<T::AsList as HasLength>::LEN);
    <T::AsList as EachTypeId>::type_ids(&mut ids);
    ids.windows(2).all(|pair| pair[0] == pair[1])
}

/// Whether every element of `values` has the same type, judged from the static types alone.
///
/// # Examples
///
/// ```
/// use polyadic::sequence::is_homogeneous_value;
///
/// assert!(is_homogeneous_value(&("a", "b", "c", "d")));
/// assert!(!is_homogeneous_value(&(43, -1, "hello")));
/// ```
pub fn is_homogeneous_value<T: Tuple>(_values: &T) -> bool
where
    T::AsList: EachTypeId,
{
    is_homogeneous::<T>()
}

/// A list all of whose elements have one type, which can therefore be collected into a [`Vec`].
///
/// Implemented only for non-empty lists: an empty list has no element type to speak of.
///
/// # Examples
///
/// ```
/// use polyadic::{list, sequence::Homogeneous};
///
/// assert_eq!(list!["a", "b", "c"].into_vec(), ["a", "b", "c"]);
/// ```
///
/// ```compile_fail
/// use polyadic::{list, sequence::Homogeneous};
///
/// let _ = list![43, "hello"].into_vec();
/// ```
pub trait Homogeneous: Sized {
    /// The one type shared by every element.
    type Element;

    /// Collect the elements, in order.
    fn into_vec(self) -> Vec<Self::Element> {
        let mut elements = Vec::new();
        self.push_into(&mut elements);
        elements
    }

    /// Push the elements, in order, onto the end of `elements`.
    fn push_into(self, elements: &mut Vec<Self::Element>);
}

impl<T> Homogeneous for (T, ()) {
    type Element = T;

    fn push_into(self, elements: &mut Vec<T>) {
        elements.push(self.0);
    }
}

impl<T, Ts> Homogeneous for (T, (T, Ts))
where
    (T, Ts): Homogeneous<Element = T>,
{
    type Element = T;

    fn push_into(self, elements: &mut Vec<T>) {
        let (head, tail) = self;
        elements.push(head);
        tail.push_into(elements);
    }
}
