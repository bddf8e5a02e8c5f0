use crate::error::{self, allocate, non_negative};

use super::core::Sequence;

impl<T> Sequence<T> {
    /// Make a present sequence of `length` default values.
    pub fn with_length(length: isize) -> error::Result<Self>
    where
        T: Default + Clone,
    {
        let length = non_negative("with_length", length)?;
        let mut items = allocate("with_length", length)?;
        items.resize(length, T::default());
        Ok(Self::Present(items))
    }

    /// Make a present, empty sequence that can hold `capacity` elements
    /// without reallocating.
    pub fn with_capacity(capacity: isize) -> error::Result<Self> {
        let capacity = non_negative("with_capacity", capacity)?;
        Ok(Self::Present(allocate("with_capacity", capacity)?))
    }

    /// Copy the sequence into fresh storage.
    ///
    /// Absent stays absent and empty stays empty. Elements are copied with
    /// `Clone`, so for shared element types such as `Rc` the copy is
    /// shallow: the new sequence refers to the same inner values.
    pub fn clone_sequence(&self) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Absent => Self::Absent,
            Self::Present(items) => Self::Present(items.as_slice().to_vec()),
        }
    }
}
