use super::core::Sequence;

/// Returned by [`Sequence::index_of`] and [`Sequence::last_index_of`] when
/// no element matches.
pub const NOT_FOUND: isize = -1;

// Vecs of zero-sized elements can be longer than isize::MAX; positions
// past that saturate to isize::MAX so they never look like NOT_FOUND.
fn to_index(position: Option<usize>) -> isize {
    position.map_or(NOT_FOUND, |i| isize::try_from(i).unwrap_or(isize::MAX))
}

impl<T> Sequence<T> {
    /// Whether any element equals `x`.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.items().contains(x)
    }

    /// How many elements equal `x`.
    pub fn count(&self, x: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|item| *item == x).count()
    }

    /// The index of the first element equal to `x`.
    pub fn position(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == x)
    }

    /// The index of the last element equal to `x`.
    pub fn last_position(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|item| item == x)
    }

    /// The index of the first element equal to `x`, or [`NOT_FOUND`].
    ///
    /// An index that does not fit in an `isize` (only possible for
    /// zero-sized elements) is reported as `isize::MAX`.
    pub fn index_of(&self, x: &T) -> isize
    where
        T: PartialEq,
    {
        to_index(self.position(x))
    }

    /// The index of the last element equal to `x`, or [`NOT_FOUND`].
    ///
    /// Saturates at `isize::MAX` like [`Sequence::index_of`].
    pub fn last_index_of(&self, x: &T) -> isize
    where
        T: PartialEq,
    {
        to_index(self.last_position(x))
    }
}
