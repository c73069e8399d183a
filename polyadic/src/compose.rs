//! Merging several independently written callables into one value exposing all of their call
//! signatures as a single overload set.
//!
//! Each source callable is a [`Behavior`], usually a closure wrapped in a [`Rule`]. [`compose`]
//! gathers a tuple of behaviors into a [`Composed`] value whose [`call`](Composed::call) picks
//! the one behavior accepting the given arguments. If more than one behavior accepts them, the
//! choice is ambiguous and the call does not compile; no behavior is ever preferred over another.
//!
//! # Examples
//!
//! One value serving as both the hashing rule and the equality rule of a hash table:
//!
//! ```
//! use polyadic::compose::{compose, Rule};
//!
//! struct Person { name: &'static str, age: u32 }
//!
//! let rules = compose((
//!     Rule(|p: &Person| p.name.len() as u64),
//!     Rule(|a: &Person, b: &Person| a.name == b.name),
//! ));
//!
//! let ada = Person { name: "Ada", age: 36 };
//! let older_ada = Person { name: "Ada", age: 37 };
//! let bob = Person { name: "Bob", age: 36 };
//!
//! assert!(rules.call((&ada, &older_ada)));
//! assert!(!rules.call((&ada, &bob)));
//! assert_eq!(rules.call((&ada,)), rules.call((&bob,)));
//! ```
//!
//! Two behaviors which both accept the same arguments cannot be called with them:
//!
//! ```compile_fail
//! use polyadic::compose::{compose, Rule};
//!
//! let rules = compose((Rule(|x: u8| x), Rule(|x: u8| x as u64)));
//! let _ = rules.call((1_u8,));
//! ```

use std::fmt::{self, Debug};

use crate::{
    tuple::{List, Tuple},
    unary::{Unary, S, Z},
};

/// A callable accepting the argument tuple `Args`.
pub trait Behavior<Args> {
    /// What the call returns.
    type Output;

    /// Call with the given arguments.
    fn call(&self, args: Args) -> Self::Output;
}

/// A [`Behavior`] made from a function or closure, which accepts its arguments as a tuple of the
/// same arity.
#[derive(Clone, Copy, Default)]
pub struct Rule<F>(pub F);

impl<F> Debug for Rule<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Rule")
            .field(&std::any::type_name::<F>())
            .finish()
    }
}

impl<F, R> Behavior<()> for Rule<F>
where
    F: Fn() -> R,
{
    type Output = R;

    fn call(&self, (): ()) -> R {
        (self.0)()
    }
}

impl<F, A, R> Behavior<(A,)> for Rule<F>
where
    F: Fn(A) -> R,
{
    type Output = R;

    fn call(&self, (a,): (A,)) -> R {
        (self.0)(a)
    }
}

impl<F, A, B, R> Behavior<(A, B)> for Rule<F>
where
    F: Fn(A, B) -> R,
{
    type Output = R;

    fn call(&self, (a, b): (A, B)) -> R {
        (self.0)(a, b)
    }
}

impl<F, A, B, C, R> Behavior<(A, B, C)> for Rule<F>
where
    F: Fn(A, B, C) -> R,
{
    type Output = R;

    fn call(&self, (a, b, c): (A, B, C)) -> R {
        (self.0)(a, b, c)
    }
}

/// A list of behaviors, the one at position `N` of which accepts `Args`.
///
/// When `N` is inferred, exactly one behavior in the list may accept `Args`: if none does, this
/// trait is not implemented, and if several do, `N` cannot be inferred.
#[diagnostic::on_unimplemented(
    message = "no behavior in `{Self}` accepts the arguments `{Args}`",
    note = "exactly one of the composed behaviors must accept each argument list it is called with"
)]
pub trait Overloads<Args, N: Unary> {
    /// What the selected behavior returns.
    type Output;

    /// Call the behavior at position `N`.
    fn call_overload(&self, args: Args) -> Self::Output;
}

impl<Args, B, Bs> Overloads<Args, Z> for (B, Bs)
where
    B: Behavior<Args>,
{
    type Output = B::Output;

    #[inline]
    fn call_overload(&self, args: Args) -> Self::Output {
        self.0.call(args)
    }
}

impl<Args, B, Bs, N: Unary> Overloads<Args, S<N>> for (B, Bs)
where
    Bs: Overloads<Args, N>,
{
    type Output = Bs::Output;

    #[inline]
    fn call_overload(&self, args: Args) -> Self::Output {
        self.1.call_overload(args)
    }
}

/// Several behaviors merged into one overload set. Owns nothing but the behaviors themselves.
#[derive(Derivative)]
#[derivative(
    Debug(bound = "T::AsList: Debug"),
    Clone(bound = "T::AsList: Clone"),
    Copy(bound = "T::AsList: Copy")
)]
pub struct Composed<T: Tuple> {
    behaviors: T::AsList,
}

/// Merge a tuple of behaviors into one [`Composed`] value.
pub fn compose<T: Tuple>(behaviors: T) -> Composed<T> {
    Composed {
        behaviors: behaviors.into_list(),
    }
}

impl<T: Tuple> Composed<T> {
    /// Call whichever behavior accepts `args`.
    pub fn call<Args, N: Unary>(&self, args: Args) -> <T::AsList as Overloads<Args, N>>::Output
    where
        T::AsList: Overloads<Args, N>,
    {
        Overloads::<Args, N>::call_overload(&self.behaviors, args)
    }

    /// Split back into the separate behaviors.
    pub fn into_inner(self) -> T {
        self.behaviors.into_tuple()
    }
}
