/*!
![license: MIT](https://img.shields.io/github/license/boltlabs-inc/polyadic)

> **polyadic (adjective):** Taking any number of arguments.
>
> **polyadic (crate):** Arbitrary-arity heterogeneous tuples, unions, folds and projections,
> resolved at compile time.

Rust tuples can hold values of any types, but there is no way to write a function generic over
*every* tuple. This crate closes the gap: each tuple type `(T0, .., Tn-1)` up to arity 64 is
related, through the [`Tuple`](tuple::Tuple) trait, to an *inductive list* `(T0, (.., (Tn-1,
())))`. Every operation in this crate is written once, as a base case for the empty list `()` and
an inductive case for a non-empty list `(T, Ts)`, and so works for any arity.

| What | Where | Checked when built | Checked when run |
| :--- | :---- | :----------------- | :--------------- |
| The length of a sequence of types | [`sequence::Types`] | Always | |
| A tuple of slots, dropped last-to-first | [`Product`] | Arity, slot positions | |
| Exactly one of several types | [`Union`] | Alternative types | Which alternative is active ([`Error::TypeMismatch`]) |
| Visit each element in order | [`visit`](mod@visit) | The visitor accepts every element | |
| Reduce left or right, seeded or not | [`fold`] | Empty sequences need a seed or an [`Identity`](fold::Identity) | |
| Select elements by position | [`project`] | Static positions | Run-time positions ([`Error::IndexOutOfRange`]) |
| Merge callables into one overload set | [`compose`](mod@compose) | Every call resolves to one behavior | |

# Examples

```
use polyadic::prelude::*;

let p = product![1, 2, 3, 4, 5];
assert_eq!(p.fold_left_from(0, |a: i32, b: i32| a + b), 15);

let u: Union<(i32, String)> = Union::new(42_i32);
assert!(matches!(u.get::<String, _>(), Err(Error::TypeMismatch { .. })));
```

Misuse which can be detected while building is rejected while building, with a message naming
what is wrong. The few things which can only be known while running are reported as an
[`Error`], and are also emitted as [`tracing`] events at the `debug` level.

Positions are counted with type-level [`unary`] numbers up to 128. Naming a position near that
ceiling, as in `UnaryOf<128>` or `Union::at::<100>`, takes more nested trait resolution than the
compiler allows by default; a crate doing so needs `#![recursion_limit = "256"]` at its root.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod compose;
pub mod fold;
pub mod forward;
pub mod product;
pub mod project;
pub mod sequence;
pub mod tuple;
pub mod unary;
pub mod union;
pub mod visit;

mod error;

pub use compose::{compose, Composed};
pub use error::Error;
pub use product::Product;
pub use union::Union;

/// The prelude module for quickly getting started with polyadic.
///
/// This module is designed to be imported as `use polyadic::prelude::*;`, which brings into scope
/// the containers, the traits whose methods they rely on, and the macros which build them.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::compose::{compose, Behavior, Composed, Rule};
    #[doc(no_inline)]
    pub use crate::fold::{fold_left, fold_left_from, fold_right, fold_right_from, Operator};
    #[doc(no_inline)]
    pub use crate::sequence::{Homogeneous, Types};
    #[doc(no_inline)]
    pub use crate::tuple::{List, Tuple};
    #[doc(no_inline)]
    pub use crate::visit::{ForEach, Map, Visitor};
    #[doc(no_inline)]
    pub use crate::{list, product, visit, Error, List, Product, Union};
    #[doc(no_inline)]
    pub use call_by::{Mut, Ref, Val};
}
