use super::core::Sequence;

impl<T> Sequence<T> {
    /// Concatenate two sequences into fresh storage.
    ///
    /// The result is absent only if both inputs are. If just one input is
    /// absent the result is a copy of the other one.
    pub fn join(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        match (self, other) {
            (Self::Absent, Self::Absent) => Self::Absent,
            (Self::Present(_), Self::Absent) => self.clone_sequence(),
            (Self::Absent, Self::Present(_)) => other.clone_sequence(),
            (Self::Present(lhs), Self::Present(rhs)) => {
                let mut joined = Vec::with_capacity(lhs.len() + rhs.len());
                joined.extend_from_slice(lhs);
                joined.extend_from_slice(rhs);
                Self::Present(joined)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        let joined = Sequence::from(vec![1, 2, 3]).join(&Sequence::from(vec![4, 5, 6]));
        assert_eq!(joined, Sequence::from(vec![1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_join_one_empty() {
        let rhs = Sequence::from(vec![4, 5, 6]);
        assert_eq!(Sequence::empty().join(&rhs), rhs);
        assert_eq!(rhs.join(&Sequence::empty()), rhs);
    }

    #[test]
    fn test_join_one_absent() {
        let rhs = Sequence::from(vec![4, 5, 6]);
        assert_eq!(Sequence::Absent.join(&rhs), rhs);
        assert_eq!(rhs.join(&Sequence::Absent), rhs);
        assert_eq!(
            Sequence::<i32>::empty().join(&Sequence::Absent),
            Sequence::empty()
        );
    }

    #[test]
    fn test_join_both_empty() {
        assert_eq!(
            Sequence::<i32>::empty().join(&Sequence::empty()),
            Sequence::empty()
        );
    }

    #[test]
    fn test_join_both_absent() {
        assert_eq!(
            Sequence::<i32>::Absent.join(&Sequence::Absent),
            Sequence::Absent
        );
    }

    #[test]
    fn test_join_does_not_alias() {
        let lhs = Sequence::from(vec![1, 2]);
        let joined = lhs.join(&Sequence::Absent);
        assert_ne!(
            lhs.as_slice().unwrap().as_ptr(),
            joined.as_slice().unwrap().as_ptr()
        );
    }
}
