use thiserror::Error;

/// Errors raised by sequence operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// A length, capacity or count was negative.
    #[error("Invalid argument to {operation}: {value}")]
    InvalidArgument {
        /// The operation that rejected the argument
        operation: &'static str,
        /// The rejected value
        value: isize,
    },
    /// The operation needs at least one element.
    #[error("Empty input to {0}")]
    EmptyInput(&'static str),
    /// A derived size or an accumulated value is not representable.
    #[error("Overflow in {0}")]
    Overflow(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Turn a signed size argument into a `usize`, rejecting negative values.
pub(crate) fn non_negative(operation: &'static str, value: isize) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::InvalidArgument { operation, value })
}

/// Allocate room for exactly `len` elements of `T`.
///
/// Requests the allocator cannot satisfy, or that exceed `isize::MAX`
/// bytes, are reported as overflow.
pub(crate) fn allocate<T>(operation: &'static str, len: usize) -> Result<Vec<T>> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(len)
        .map_err(|_| Error::Overflow(operation))?;
    Ok(items)
}
