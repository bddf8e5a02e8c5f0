use crate::error::{self, allocate, non_negative, Error};

use super::core::Sequence;

impl<T> Sequence<T> {
    /// A new sequence with the elements in reverse order.
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        let mut reversed = self.clone_sequence();
        if let Self::Present(items) = &mut reversed {
            items.reverse();
        }
        reversed
    }

    /// The final element.
    ///
    /// There's no value to fall back on for an arbitrary `T`, so absent and
    /// empty sequences are an error.
    pub fn last(&self) -> error::Result<T>
    where
        T: Clone,
    {
        self.items()
            .last()
            .cloned()
            .ok_or(Error::EmptyInput("last"))
    }

    /// Apply `f` to every element, keeping order and length.
    pub fn map_with<U, F>(&self, f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        match self {
            Self::Absent => Sequence::Absent,
            Self::Present(items) => Sequence::Present(items.iter().map(f).collect()),
        }
    }

    /// Apply a fallible `f` to every element. The first error stops the
    /// mapping and is returned; nothing mapped so far is kept.
    pub fn try_map_with<U, E, F>(&self, f: F) -> Result<Sequence<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        match self {
            Self::Absent => Ok(Sequence::Absent),
            Self::Present(items) => Ok(Sequence::Present(
                items.iter().map(f).collect::<Result<Vec<_>, E>>()?,
            )),
        }
    }

    /// `count` copies of the sequence, one after the other.
    ///
    /// A count of zero always gives a present empty sequence, also when
    /// the input is absent. Any other count leaves an absent input absent.
    pub fn repeat(&self, count: isize) -> error::Result<Self>
    where
        T: Clone,
    {
        let count = non_negative("repeat", count)?;
        if count == 0 {
            return Ok(Self::empty());
        }
        match self {
            Self::Absent => Ok(Self::Absent),
            Self::Present(items) if items.is_empty() => Ok(Self::empty()),
            Self::Present(items) => {
                let len = items
                    .len()
                    .checked_mul(count)
                    .ok_or(Error::Overflow("repeat"))?;
                let mut repeated = allocate("repeat", len)?;
                repeated.extend_from_slice(items);
                // double what we have until only a partial copy is left
                while repeated.len() < len {
                    let chunk = repeated.len().min(len - repeated.len());
                    repeated.extend_from_within(..chunk);
                }
                Ok(Self::Present(repeated))
            }
        }
    }

    /// A copy with the first `n` elements equal to `old` changed into
    /// `new`, scanning from the front. A negative `n` replaces all of them.
    pub fn replace(&self, old: &T, new: &T, n: isize) -> Self
    where
        T: PartialEq + Clone,
    {
        match self {
            Self::Absent => Self::Absent,
            Self::Present(items) => {
                // negative means no limit
                let mut remaining = usize::try_from(n).unwrap_or(usize::MAX);
                let replaced = items
                    .iter()
                    .map(|item| {
                        if remaining > 0 && item == old {
                            remaining -= 1;
                            new.clone()
                        } else {
                            item.clone()
                        }
                    })
                    .collect();
                Self::Present(replaced)
            }
        }
    }

    /// A copy with every element equal to `old` changed into `new`.
    pub fn replace_all(&self, old: &T, new: &T) -> Self
    where
        T: PartialEq + Clone,
    {
        self.replace(old, new, -1)
    }
}
