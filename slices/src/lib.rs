//! Generic helpers over sequences that distinguish "absent" from "empty".
//!
//! [`Sequence`] wraps a `Vec` and adds an absent state. The operations
//! never modify their input: each returns a freshly allocated sequence or
//! a plain value.
//!
//! ```
//! use slices::Sequence;
//!
//! let s = Sequence::from(vec![1, 2, 2, 3]);
//! assert_eq!(s.replace(&2, &0, 1), Sequence::from(vec![1, 0, 2, 3]));
//! assert_eq!(s.index_of(&2), 1);
//! assert_eq!(Sequence::<i32>::Absent.repeat(0), Ok(Sequence::empty()));
//! ```
mod error;
mod sequence;

pub use error::{Error, Result};
pub use sequence::{Sequence, NOT_FOUND};
