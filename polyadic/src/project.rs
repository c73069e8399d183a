//! Selecting a subsequence of a sequence by a list of positions.
//!
//! Positions may be fixed when the program is built, as a type-level list of unary numbers
//! ([`Project`]), or supplied while it runs, as `usize`s ([`project_at`], [`project_all`]). In
//! either form the result lists the selected elements in the order the positions were given;
//! positions may repeat, and there may be more or fewer of them than there are elements.
//!
//! A static position past the end is rejected when the program is built. A run-time position
//! past the end is reported as [`Error::IndexOutOfRange`] and nothing is returned.

use crate::{error::Error, tuple::Select, unary::Unary, visit::Visitor};

/// Borrow the elements of a list at the positions in the type-level list `Indices`.
///
/// # Examples
///
/// ```
/// use polyadic::{list, List, project::Project, unary::UnaryOf};
///
/// let words = list!["good", "times", "say", "bye"];
/// let picked = Project::<'_, List![UnaryOf<2>, UnaryOf<0>, UnaryOf<3>, UnaryOf<0>]>::project(&words);
/// assert_eq!(picked, list![&"say", &"good", &"bye", &"good"]);
/// ```
///
/// ```compile_fail
/// use polyadic::{list, List, project::Project, unary::UnaryOf};
///
/// let words = list!["good", "times"];
/// let _ = Project::<'_, List![UnaryOf<2>]>::project(&words);
/// ```
pub trait Project<'a, Indices> {
    /// The list of borrowed elements.
    type Projected;

    /// Borrow the selected elements, in the order of `Indices`.
    fn project(&'a self) -> Self::Projected;
}

impl<'a, L: 'a> Project<'a, ()> for L {
    type Projected = ();

    #[inline]
    fn project(&'a self) -> Self::Projected {}
}

impl<'a, L: 'a, N, Ns> Project<'a, (N, Ns)> for L
where
    N: Unary,
    L: Select<N> + Project<'a, Ns>,
    L::Selected: 'a,
{
    type Projected = (&'a L::Selected, <L as Project<'a, Ns>>::Projected);

    #[inline]
    fn project(&'a self) -> Self::Projected {
        (self.select(), Project::<'a, Ns>::project(self))
    }
}

/// A visitor which clones what it is given by reference, used to turn a projection of borrowed
/// elements into owned ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cloned;

impl<'a, T: Clone> Visitor<&'a T> for Cloned {
    type Output = T;

    #[inline]
    fn visit(&mut self, value: &'a T) -> T {
        value.clone()
    }
}

/// Borrow the elements of `items` at a fixed number of run-time positions, in the order given.
///
/// # Errors
///
/// If any position is out of range, returns [`Error::IndexOutOfRange`] for the first such
/// position and selects nothing.
///
/// # Examples
///
/// ```
/// use polyadic::{project::project_at, Error};
///
/// let words = ["good", "times", "say", "bye"];
/// assert_eq!(project_at(&words, [2, 0, 3])?, [&"say", &"good", &"bye"]);
/// assert_eq!(
///     project_at(&words, [0, 4]),
///     Err(Error::IndexOutOfRange { index: 4, len: 4 }),
/// );
/// # Ok::<(), Error>(())
/// ```
pub fn project_at<T, const K: usize>(items: &[T], indices: [usize; K]) -> Result<[&T; K], Error> {
    check_in_range(items.len(), &indices)?;
    Ok(indices.map(|index| &items[index]))
}

/// Borrow the elements of `items` at any number of run-time positions, in the order given.
///
/// # Errors
///
/// If any position is out of range, returns [`Error::IndexOutOfRange`] for the first such
/// position and selects nothing.
pub fn project_all<'a, T>(items: &'a [T], indices: &[usize]) -> Result<Vec<&'a T>, Error> {
    check_in_range(items.len(), indices)?;
    Ok(indices.iter().map(|&index| &items[index]).collect())
}

fn check_in_range(len: usize, indices: &[usize]) -> Result<(), Error> {
    match indices.iter().find(|&&index| index >= len) {
        Some(&index) => {
            tracing::debug!(index, len, "run-time projection index out of range");
            Err(Error::IndexOutOfRange { index, len })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_indices_select_nothing() {
        let items = [1, 2, 3];
        assert_eq!(project_at(&items, []), Ok([]));
        assert_eq!(project_all(&items, &[]), Ok(vec![]));
        let empty: [i32; 0] = [];
        assert_eq!(project_all(&empty, &[]), Ok(vec![]));
    }

    #[test]
    fn more_indices_than_elements() {
        let items = ['x', 'y'];
        let picked = project_all(&items, &[1, 1, 0, 1, 0]).unwrap();
        assert_eq!(picked, [&'y', &'y', &'x', &'y', &'x']);
    }

    #[test]
    fn first_bad_index_is_reported() {
        let items = [0_u8; 3];
        assert_eq!(
            project_all(&items, &[0, 7, 9]),
            Err(Error::IndexOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(
            project_at(&[] as &[u8], [0]),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }
}
