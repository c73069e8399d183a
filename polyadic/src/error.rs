use thiserror::Error;

/// The errors which can only be detected while a program runs.
///
/// Every other misuse of this crate (wrong arity, reducing an empty sequence without a seed,
/// ambiguous overloads, out-of-range static positions) is rejected when the program is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A [`Union`](crate::Union) was accessed as an alternative other than its active one.
    #[error(
        "union holds alternative {active}, not alternative {requested_index} (`{requested}`)"
    )]
    TypeMismatch {
        /// The name of the type that was requested.
        requested: &'static str,
        /// The position of the requested alternative.
        requested_index: usize,
        /// The position of the alternative which is actually active.
        active: usize,
    },
    /// A run-time index was not less than the length of the collection it indexed.
    #[error("index {index} is out of range for a collection of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the indexed collection.
        len: usize,
    },
}
