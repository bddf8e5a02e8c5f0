use super::core::Sequence;

impl<T> Sequence<T> {
    /// Compare two sequences element by element.
    ///
    /// Two absent sequences are equal. An absent sequence never equals a
    /// present one, even an empty one. The element types may differ as long
    /// as they can be compared.
    pub fn equal<U>(&self, other: &Sequence<U>) -> bool
    where
        T: PartialEq<U>,
    {
        match (self, other) {
            (Sequence::Absent, Sequence::Absent) => true,
            (Sequence::Present(a), Sequence::Present(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| a == b)
            }
            _ => false,
        }
    }
}
