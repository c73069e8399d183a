//! Recursive visitation of a heterogeneous sequence, one element at a time.
//!
//! A [`Visitor`] is implemented once per element type it accepts (usually through a generic
//! implementation covering a whole family, such as every `T: Display`). [`ForEach`] then walks a
//! list from left to right, handing each element to the visitor exactly once.
//!
//! The walk terminates through the implementation of [`ForEach`] for the empty list `()`, which
//! never calls the visitor. No visitor is ever asked to accept "no argument", and no code for such
//! a call is ever generated, so a visitor need not have a meaningful base case of its own.
//!
//! # Examples
//!
//! ```
//! use std::fmt::Display;
//! use polyadic::{visit, visit::Visitor};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl<T: Display> Visitor<T> for Log {
//!     type Output = ();
//!
//!     fn visit(&mut self, value: T) {
//!         self.0.push(value.to_string());
//!     }
//! }
//!
//! let mut log = Log::default();
//! visit!(log; 7.5, "hello", "world");
//! assert_eq!(log.0, ["7.5", "hello", "world"]);
//! ```

/// An operation which can be applied to a value of type `T`.
pub trait Visitor<T> {
    /// The result of visiting a `T`. [`ForEach`] discards it; [`Map`] collects it.
    type Output;

    /// Visit one value.
    fn visit(&mut self, value: T) -> Self::Output;
}

impl<T, V: Visitor<T> + ?Sized> Visitor<T> for &mut V {
    type Output = V::Output;

    #[inline]
    fn visit(&mut self, value: T) -> Self::Output {
        (**self).visit(value)
    }
}

/// Apply a visitor to every element of a list, from left to right.
///
/// To visit the elements of a list by reference rather than by value, first
/// [`forward`](crate::forward::forward) it by [`Ref`](crate::forward::Ref) or
/// [`Mut`](crate::forward::Mut).
#[diagnostic::on_unimplemented(
    message = "`{V}` cannot visit every element of `{Self}`",
    note = "the visitor must implement `Visitor<T>` for the exact type `T` of each element"
)]
pub trait ForEach<V> {
    /// Visit every element, in order.
    fn for_each(self, visitor: &mut V);
}

impl<V> ForEach<V> for () {
    #[inline]
    fn for_each(self, _visitor: &mut V) {}
}

impl<V, T, Ts> ForEach<V> for (T, Ts)
where
    V: Visitor<T>,
    Ts: ForEach<V>,
{
    #[inline]
    fn for_each(self, visitor: &mut V) {
        let (head, tail) = self;
        let _ = visitor.visit(head);
        tail.for_each(visitor);
    }
}

/// Apply a visitor to every element of a list, from left to right, collecting the outputs into a
/// new list of the same length.
///
/// # Examples
///
/// ```
/// use polyadic::visit::{Map, Visitor};
///
/// struct Describe;
///
/// impl<T: std::fmt::Debug> Visitor<T> for Describe {
///     type Output = String;
///
///     fn visit(&mut self, value: T) -> String {
///         format!("{:?}", value)
///     }
/// }
///
/// let described = (1, ('x', ("y", ()))).map(&mut Describe);
/// assert_eq!(described, ("1".to_string(), ("'x'".to_string(), ("\"y\"".to_string(), ()))));
/// ```
pub trait Map<V> {
    /// The list of outputs.
    type Mapped;

    /// Visit every element in order, collecting the outputs.
    fn map(self, visitor: &mut V) -> Self::Mapped;
}

impl<V> Map<V> for () {
    type Mapped = ();

    #[inline]
    fn map(self, _visitor: &mut V) -> Self::Mapped {}
}

impl<V, T, Ts> Map<V> for (T, Ts)
where
    V: Visitor<T>,
    Ts: Map<V>,
{
    type Mapped = (V::Output, Ts::Mapped);

    #[inline]
    fn map(self, visitor: &mut V) -> Self::Mapped {
        let (head, tail) = self;
        let head = visitor.visit(head);
        (head, tail.map(visitor))
    }
}

/// Build an inductive list value from a comma-separated list of expressions.
///
/// # Examples
///
/// ```
/// use polyadic::list;
///
/// assert_eq!(list![1, "two", 3.0], (1, ("two", (3.0, ()))));
/// assert_eq!(list![], ());
/// ```
#[macro_export]
macro_rules! list {
    () => { () };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        ($head, $crate::list![$($tail),*])
    };
}

/// Build an inductive list type from a comma-separated list of types.
///
/// # Examples
///
/// ```
/// use polyadic::List;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(List![u8, String], (u8, (String, ())));
/// assert_type_eq_all!(List![], ());
/// ```
#[macro_export]
macro_rules! List {
    () => { () };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        ($head, $crate::List![$($tail),*])
    };
}

/// Visit a raw argument list with a visitor, from left to right.
///
/// Each argument is evaluated and forwarded exactly once, in the category it was written in: an
/// owned expression is moved into the visitor and a borrow stays a borrow.
///
/// The visitor is named by a place, such as a local variable or `*visitor`, and borrowed mutably
/// for the walk. An expression like `&mut visitor` works just as well, since every `&mut V` is
/// itself a visitor wherever `V` is.
///
/// # Examples
///
/// ```
/// use polyadic::{visit, visit::Visitor};
///
/// #[derive(Default)]
/// struct Categories(Vec<&'static str>);
///
/// impl Visitor<String> for Categories {
///     type Output = ();
///     fn visit(&mut self, _: String) { self.0.push("owned") }
/// }
///
/// impl<'a> Visitor<&'a String> for Categories {
///     type Output = ();
///     fn visit(&mut self, _: &'a String) { self.0.push("borrowed") }
/// }
///
/// let named = String::from("named");
/// let mut categories = Categories::default();
/// visit!(categories; String::from("temporary"), &named);
/// assert_eq!(categories.0, ["owned", "borrowed"]);
/// ```
#[macro_export]
macro_rules! visit {
    ($visitor:expr; $($value:expr),* $(,)?) => {
        $crate::visit::ForEach::for_each($crate::list![$($value),*], &mut $visitor)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Count(usize);

    impl<T> Visitor<T> for Count {
        type Output = ();

        fn visit(&mut self, _: T) {
            self.0 += 1;
        }
    }

    #[test]
    fn visits_exactly_once_per_element() {
        let mut count = Count(0);
        ().for_each(&mut count);
        assert_eq!(count.0, 0);

        list![1].for_each(&mut count);
        assert_eq!(count.0, 1);

        list![1, 'a', "b", 2.0, (), [0_u8; 3]].for_each(&mut count);
        assert_eq!(count.0, 7);
    }

    #[test]
    fn visitor_can_be_passed_by_mutable_reference() {
        fn visit_three(count: &mut Count) {
            visit!(*count; 1, "two", 3.0);
        }

        let mut count = Count(0);
        visit_three(&mut count);
        visit!(&mut count; 'a');
        assert_eq!(count.0, 4);
    }

    #[test]
    fn map_preserves_order_of_evaluation() {
        struct Order(Vec<usize>);

        impl Visitor<usize> for Order {
            type Output = usize;

            fn visit(&mut self, value: usize) -> usize {
                self.0.push(value);
                self.0.len()
            }
        }

        let mut order = Order(Vec::new());
        let ranks = list![30_usize, 10, 20].map(&mut order);
        assert_eq!(order.0, [30, 10, 20]);
        assert_eq!(ranks, list![1, 2, 3]);
    }
}
