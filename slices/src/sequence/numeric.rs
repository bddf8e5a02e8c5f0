use std::ops::{Add, Mul};

use num_traits::{CheckedAdd, CheckedMul, One, Zero};

use crate::error::{self, Error};

use super::core::Sequence;

impl<T> Sequence<T> {
    /// Add up all elements. Absent and empty sequences sum to zero.
    pub fn sum(&self) -> T
    where
        T: Zero + Add<Output = T> + Clone,
    {
        self.iter().fold(T::zero(), |sum, item| sum + item.clone())
    }

    /// Multiply all elements. Absent and empty sequences give one, the
    /// multiplicative identity.
    pub fn product(&self) -> T
    where
        T: One + Mul<Output = T> + Clone,
    {
        self.iter().fold(T::one(), |product, item| product * item.clone())
    }

    /// Like [`Sequence::sum`], but fails instead of wrapping or panicking
    /// when the sum cannot be represented.
    pub fn checked_sum(&self) -> error::Result<T>
    where
        T: Zero + CheckedAdd,
    {
        self.iter().try_fold(T::zero(), |sum, item| {
            sum.checked_add(item).ok_or(Error::Overflow("checked_sum"))
        })
    }

    /// Like [`Sequence::product`], but fails when the product cannot be
    /// represented.
    pub fn checked_product(&self) -> error::Result<T>
    where
        T: One + CheckedMul,
    {
        self.iter().try_fold(T::one(), |product, item| {
            product
                .checked_mul(item)
                .ok_or(Error::Overflow("checked_product"))
        })
    }
}
