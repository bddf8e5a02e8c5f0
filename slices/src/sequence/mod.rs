//! A sequence is an ordered list of elements of one type that may also be
//! absent altogether.
//!
//! Operations are spread over several files, each adding methods to
//! `Sequence`.

mod compare;
mod concat;
mod core;
mod creation;
mod numeric;
mod search;
mod transform;

pub use self::core::Sequence;
pub use search::NOT_FOUND;
