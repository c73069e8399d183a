//! The heterogeneous tuple [`Product`].

use std::{
    any::Any,
    fmt::{self, Debug, DebugTuple},
    hash::{Hash, Hasher},
    mem::ManuallyDrop,
};

use crate::{
    error::Error,
    fold::{FoldLeft, FoldLeftFrom, FoldRight, FoldRightFrom},
    forward::{Forward, Mut, Ref},
    project::{Cloned, Project},
    tuple::{HasLength, List, Select, Tuple},
    unary::{Number, ToUnary, UnaryOf},
    visit::{ForEach, Map},
};

/// A fixed-arity sequence holding exactly one value of each type in the tuple type `T`.
///
/// Slot `i` always holds a live value of the `i`th type of `T`. A `Product` is built from a value
/// of the flat tuple `T` itself, so giving it the wrong number of initializers is a type error.
/// When a `Product` is dropped, its slots are dropped in *reverse* declaration order: the last
/// slot first, the first slot last.
///
/// Equality, ordering and hashing are slot-wise, in declaration order, and stop at the first slot
/// which differs.
///
/// # Examples
///
/// ```
/// use polyadic::Product;
///
/// let mut p = Product::new((7.5, "hello", String::from("world")));
/// assert_eq!(p.len(), 3);
/// assert_eq!(*p.get::<1>(), "hello");
///
/// p.get_mut::<2>().push('!');
/// assert_eq!(p.into_inner(), (7.5, "hello", String::from("world!")));
/// ```
///
/// Asking for a slot that does not exist does not compile:
///
/// ```compile_fail
/// use polyadic::Product;
///
/// let p = Product::new((1, 2));
/// let _ = p.get::<2>();
/// ```
///
/// Nor does supplying more initializers than there are slots:
///
/// ```compile_fail
/// use polyadic::Product;
///
/// let _: Product<(i32, i32)> = Product::new((1, 2, 3));
/// ```
///
/// Or fewer:
///
/// ```compile_fail
/// use polyadic::Product;
///
/// let _: Product<(i32, i32)> = Product::new((1,));
/// ```
///
/// The same holds for the [`product!`] macro:
///
/// ```compile_fail
/// use polyadic::{product, Product};
///
/// let _: Product<(char, char)> = product!['a', 'b', 'c'];
/// ```
pub struct Product<T: Tuple> {
    slots: ManuallyDrop<T::AsList>,
}

/// Build a [`Product`] from a comma-separated list of expressions.
///
/// # Examples
///
/// ```
/// use polyadic::product;
///
/// let p = product![1, 'b', "c"];
/// assert_eq!(*p.get::<1>(), 'b');
/// ```
#[macro_export]
macro_rules! product {
    ($($value:expr),* $(,)?) => {
        $crate::Product::new(($($value,)*))
    };
}

impl<T: Tuple> Product<T> {
    /// The number of slots, known without looking at any value.
    pub const LEN: usize = <T::AsList as HasLength>::LEN;

    /// Build a product whose slot `i` holds element `i` of `values`.
    pub fn new(values: T) -> Self {
        Product::from_list(values.into_list())
    }

    /// Build a product from its inductive list representation.
    pub fn from_list(list: T::AsList) -> Self {
        Product {
            slots: ManuallyDrop::new(list),
        }
    }

    /// The number of slots.
    pub fn len(&self) -> usize {
        Self::LEN
    }

    /// Whether this product has no slots at all.
    pub fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// Borrow slot `N`. The bound `N < len` is checked when the program is built.
    pub fn get<const N: usize>(&self) -> &<T::AsList as Select<UnaryOf<N>>>::Selected
    where
        Number<N>: ToUnary,
        T::AsList: Select<UnaryOf<N>>,
    {
        self.slots.select()
    }

    /// Mutably borrow slot `N`. The bound `N < len` is checked when the program is built.
    pub fn get_mut<const N: usize>(&mut self) -> &mut <T::AsList as Select<UnaryOf<N>>>::Selected
    where
        Number<N>: ToUnary,
        T::AsList: Select<UnaryOf<N>>,
    {
        self.slots.select_mut()
    }

    /// Borrow the slot at a position only known at run time, as a `&dyn Any`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not less than [`len`](Product::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use polyadic::{Error, Product};
    ///
    /// let p = Product::new((1_u8, "two"));
    /// assert_eq!(p.get_any(1)?.downcast_ref::<&str>(), Some(&"two"));
    /// assert_eq!(p.get_any(2).unwrap_err(), Error::IndexOutOfRange { index: 2, len: 2 });
    /// # Ok::<(), Error>(())
    /// ```
    pub fn get_any(&self, index: usize) -> Result<&dyn Any, Error>
    where
        T::AsList: EachAny,
    {
        self.slots.nth_any(index).ok_or_else(|| {
            tracing::debug!(index, len = Self::LEN, "run-time slot index out of range");
            Error::IndexOutOfRange {
                index,
                len: Self::LEN,
            }
        })
    }

    /// Borrow the inductive list holding the slots.
    pub fn as_list(&self) -> &T::AsList {
        &self.slots
    }

    /// A list of shared references to every slot, in order.
    pub fn as_refs<'a>(&'a self) -> <&'a T::AsList as Forward<'a, Ref>>::Forwarded
    where
        &'a T::AsList: Forward<'a, Ref>,
    {
        Forward::<'a, Ref>::forward(&*self.slots)
    }

    /// A list of unique references to every slot, in order.
    pub fn as_muts<'a>(&'a mut self) -> <&'a mut T::AsList as Forward<'a, Mut>>::Forwarded
    where
        &'a mut T::AsList: Forward<'a, Mut>,
    {
        Forward::<'a, Mut>::forward(&mut *self.slots)
    }

    /// Take the slots out as an inductive list.
    pub fn into_list(self) -> T::AsList {
        let mut this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped or used again, so the slots are moved out exactly once.
        unsafe { ManuallyDrop::take(&mut this.slots) }
    }

    /// Take the slots out as a flat tuple.
    pub fn into_inner(self) -> T {
        self.into_list().into_tuple()
    }

    /// Visit every slot by value, from first to last.
    pub fn for_each<V>(self, visitor: &mut V)
    where
        T::AsList: ForEach<V>,
    {
        self.into_list().for_each(visitor)
    }

    /// Visit every slot by shared reference, from first to last.
    pub fn for_each_ref<'a, V>(&'a self, visitor: &mut V)
    where
        &'a T::AsList: Forward<'a, Ref>,
        <&'a T::AsList as Forward<'a, Ref>>::Forwarded: ForEach<V>,
    {
        self.as_refs().for_each(visitor)
    }

    /// Visit every slot by unique reference, from first to last.
    pub fn for_each_mut<'a, V>(&'a mut self, visitor: &mut V)
    where
        &'a mut T::AsList: Forward<'a, Mut>,
        <&'a mut T::AsList as Forward<'a, Mut>>::Forwarded: ForEach<V>,
    {
        self.as_muts().for_each(visitor)
    }

    /// Visit every slot by value, collecting the outputs into a new product.
    pub fn map<V>(self, visitor: &mut V) -> Product<<<T::AsList as Map<V>>::Mapped as List>::AsTuple>
    where
        T::AsList: Map<V>,
        <T::AsList as Map<V>>::Mapped: List,
    {
        Product::from_list(self.into_list().map(visitor))
    }

    /// Reduce the slots with `op`, grouping to the right: `op(v0, op(v1, op(.., vn-1)))`.
    ///
    /// See [`fold_right`](crate::fold::fold_right).
    pub fn fold_right<Op>(self, mut op: Op) -> <T::AsList as FoldRight<Op>>::Output
    where
        T::AsList: FoldRight<Op>,
    {
        self.into_list().fold_right(&mut op)
    }

    /// Reduce the slots with `op`, grouping to the left: `op(op(op(v0, v1), v2), ..)`.
    ///
    /// See [`fold_left`](crate::fold::fold_left).
    pub fn fold_left<Op>(self, mut op: Op) -> <T::AsList as FoldLeft<Op>>::Output
    where
        T::AsList: FoldLeft<Op>,
    {
        self.into_list().fold_left(&mut op)
    }

    /// Reduce the slots with `op` starting from `seed` on the right:
    /// `op(v0, op(v1, .. op(vn-1, seed)))`.
    pub fn fold_right_from<Seed, Op>(
        self,
        seed: Seed,
        mut op: Op,
    ) -> <T::AsList as FoldRightFrom<Op, Seed>>::Output
    where
        T::AsList: FoldRightFrom<Op, Seed>,
    {
        self.into_list().fold_right_from(seed, &mut op)
    }

    /// Reduce the slots with `op` starting from `seed` on the left:
    /// `op(.. op(op(seed, v0), v1) .., vn-1)`.
    pub fn fold_left_from<Seed, Op>(
        self,
        seed: Seed,
        mut op: Op,
    ) -> <T::AsList as FoldLeftFrom<Op, Seed>>::Output
    where
        T::AsList: FoldLeftFrom<Op, Seed>,
    {
        self.into_list().fold_left_from(seed, &mut op)
    }

    /// Borrow the slots at the positions listed in `I`, a flat tuple of unary positions, in the
    /// order they are listed. Positions may repeat; the result may be shorter or longer than this
    /// product. A position past the end does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyadic::{unary::UnaryOf, Product};
    ///
    /// let words = Product::new(("good", "times", "say", "bye"));
    /// let picked = words.project::<(UnaryOf<2>, UnaryOf<0>, UnaryOf<3>)>();
    /// assert_eq!(picked, (&"say", &"good", &"bye"));
    /// ```
    pub fn project<'a, I>(&'a self) -> <<T::AsList as Project<'a, I::AsList>>::Projected as List>::AsTuple
    where
        I: Tuple,
        T::AsList: Project<'a, I::AsList>,
        <T::AsList as Project<'a, I::AsList>>::Projected: List,
    {
        Project::<'a, I::AsList>::project(&*self.slots).into_tuple()
    }

    /// Like [`project`](Product::project), but clone the selected slots into a new product.
    pub fn project_cloned<'a, I>(
        &'a self,
    ) -> Product<<<<T::AsList as Project<'a, I::AsList>>::Projected as Map<Cloned>>::Mapped as List>::AsTuple>
    where
        I: Tuple,
        T::AsList: Project<'a, I::AsList>,
        <T::AsList as Project<'a, I::AsList>>::Projected: Map<Cloned>,
        <<T::AsList as Project<'a, I::AsList>>::Projected as Map<Cloned>>::Mapped: List,
    {
        Product::from_list(Project::<'a, I::AsList>::project(&*self.slots).map(&mut Cloned))
    }
}

impl<T: Tuple> Drop for Product<T> {
    fn drop(&mut self) {
        // SAFETY: this is the last use of `self.slots`, so they are moved out exactly once.
        let slots = unsafe { ManuallyDrop::take(&mut self.slots) };
        slots.teardown();
    }
}

impl<T: Tuple> From<T> for Product<T> {
    fn from(values: T) -> Self {
        Product::new(values)
    }
}

impl<T: Tuple> Default for Product<T>
where
    T::AsList: Default,
{
    fn default() -> Self {
        Product::from_list(Default::default())
    }
}

impl<T: Tuple> Clone for Product<T>
where
    T::AsList: Clone,
{
    fn clone(&self) -> Self {
        Product::from_list((*self.slots).clone())
    }
}

impl<T: Tuple> PartialEq for Product<T>
where
    T::AsList: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        *self.slots == *other.slots
    }
}

impl<T: Tuple> Eq for Product<T> where T::AsList: Eq {}

impl<T: Tuple> PartialOrd for Product<T>
where
    T::AsList: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        (*self.slots).partial_cmp(&*other.slots)
    }
}

impl<T: Tuple> Ord for Product<T>
where
    T::AsList: Ord,
{
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self.slots).cmp(&*other.slots)
    }
}

impl<T: Tuple> Hash for Product<T>
where
    T::AsList: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.slots).hash(state)
    }
}

impl<T: Tuple> Debug for Product<T>
where
    T::AsList: EachDebug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tuple = f.debug_tuple("Product");
        self.slots.debug_each(&mut tuple);
        tuple.finish()
    }
}

/// Drop the elements of a list one at a time, last element first.
///
/// Every list implements this; [`Product`] uses it to tear its slots down in reverse declaration
/// order.
pub trait Teardown: Sized {
    /// Drop every element, from last to first.
    fn teardown(self);
}

impl Teardown for () {
    fn teardown(self) {}
}

impl<T, Ts: Teardown> Teardown for (T, Ts) {
    fn teardown(self) {
        let (head, tail) = self;
        tail.teardown();
        drop(head);
    }
}

/// Add every element of a list to a [`DebugTuple`], in order.
pub trait EachDebug {
    /// Add every element as a field of `tuple`.
    fn debug_each(&self, tuple: &mut DebugTuple<'_, '_>);
}

impl EachDebug for () {
    fn debug_each(&self, _tuple: &mut DebugTuple<'_, '_>) {}
}

impl<T: Debug, Ts: EachDebug> EachDebug for (T, Ts) {
    fn debug_each(&self, tuple: &mut DebugTuple<'_, '_>) {
        let _ = tuple.field(&self.0);
        self.1.debug_each(tuple);
    }
}

/// Borrow an element of a list, chosen at run time, as a `&dyn Any`.
pub trait EachAny {
    /// Borrow element `index`, or `None` if the list is not that long.
    fn nth_any(&self, index: usize) -> Option<&dyn Any>;
}

impl EachAny for () {
    fn nth_any(&self, _index: usize) -> Option<&dyn Any> {
        None
    }
}

impl<T: Any, Ts: EachAny> EachAny for (T, Ts) {
    fn nth_any(&self, index: usize) -> Option<&dyn Any> {
        match index {
            0 => Some(&self.0),
            _ => self.1.nth_any(index - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    struct Noisy(&'static str, Rc<RefCell<Vec<&'static str>>>);

    impl Drop for Noisy {
        fn drop(&mut self) {
            self.1.borrow_mut().push(self.0);
        }
    }

    #[test]
    fn slots_drop_in_reverse_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let p = Product::new((
            Noisy("first", log.clone()),
            Noisy("second", log.clone()),
            Noisy("third", log.clone()),
        ));
        drop(p);
        assert_eq!(*log.borrow(), ["third", "second", "first"]);
    }

    #[test]
    fn into_inner_does_not_drop_slots() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let p = Product::new((Noisy("only", log.clone()),));
        let (noisy,) = p.into_inner();
        assert!(log.borrow().is_empty());
        drop(noisy);
        assert_eq!(*log.borrow(), ["only"]);
    }

    #[test]
    fn debug_lists_every_slot() {
        let p = Product::new((1, "two", 'c'));
        assert_eq!(format!("{:?}", p), r#"Product(1, "two", 'c')"#);
        assert_eq!(format!("{:?}", Product::new(())), "Product");
    }

    #[test]
    fn default_fills_every_slot() {
        let p: Product<(u8, String, Option<i32>)> = Default::default();
        assert_eq!(p.into_inner(), (0, String::new(), None));
    }
}
