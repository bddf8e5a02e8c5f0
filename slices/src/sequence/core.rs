// creation.rs contains the constructors and cloning
// compare.rs, numeric.rs, search.rs, transform.rs and concat.rs each add
// one family of operations to Sequence

/// A sequence of elements that is either absent or present.
///
/// An absent sequence has no storage at all. A present sequence owns a
/// `Vec`, which may be empty. The two are never equal to each other: a
/// present empty sequence is not the same thing as an absent one, and the
/// operations on `Sequence` keep that distinction in their results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sequence<T> {
    /// No storage.
    Absent,
    /// Backed by storage, possibly zero-length.
    Present(Vec<T>),
}

// the absent state lives in the niche of the vector, so wrapping a Vec
// costs nothing
static_assertions::assert_eq_size!(Sequence<u8>, Vec<u8>);
static_assertions::assert_eq_size!(Sequence<String>, Vec<String>);
static_assertions::assert_impl_all!(Sequence<i64>: Send, Sync);

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Sequence<T> {
    /// Construct an absent sequence
    pub fn absent() -> Self {
        Self::Absent
    }

    /// Construct a present, empty sequence
    pub fn empty() -> Self {
        Self::Present(Vec::new())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// The number of elements. Absent sequences have none.
    pub fn len(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Present(items) => items.len(),
        }
    }

    /// True for absent sequences as well as present empty ones.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of elements the storage can hold without reallocating.
    pub fn capacity(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Present(items) => items.capacity(),
        }
    }

    /// Borrow the elements, or `None` if the sequence is absent.
    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            Self::Absent => None,
            Self::Present(items) => Some(items),
        }
    }

    /// The elements as a slice; absent sequences give an empty slice.
    pub(crate) fn items(&self) -> &[T] {
        self.as_slice().unwrap_or(&[])
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items().get(index)
    }

    /// Iterate over the elements. Absent sequences yield nothing.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items().iter()
    }

    /// Take the storage out, turning absent into an empty vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Absent => Vec::new(),
            Self::Present(items) => items,
        }
    }

    pub fn into_option(self) -> Option<Vec<T>> {
        self.into()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Present(items)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self::Present(items.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::Present(items.into())
    }
}

impl<T> From<Option<Vec<T>>> for Sequence<T> {
    fn from(items: Option<Vec<T>>) -> Self {
        match items {
            None => Self::Absent,
            Some(items) => Self::Present(items),
        }
    }
}

impl<T> From<Sequence<T>> for Option<Vec<T>> {
    fn from(sequence: Sequence<T>) -> Self {
        match sequence {
            Sequence::Absent => None,
            Sequence::Present(items) => Some(items),
        }
    }
}

// collecting always produces a present sequence, even from an empty
// iterator
impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Present(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
