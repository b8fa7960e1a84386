//! Error types for arena container operations.
//!
//! A missing key is never an error: lookups return `Option`. The
//! variants here are the faults that abort the operation that raised
//! them.

use std::error::Error;
use std::fmt;

use crate::addr::Key;
use crate::tag::Tag;

/// Faults raised by checked container operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A checked array access fell outside `[0, capacity)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Capacity of the array at the time of the access.
        capacity: usize,
    },
    /// A typed store lookup found a value stored under a different tag.
    TypeMismatch {
        /// The key that was looked up.
        key: Key,
        /// The tag the caller asked for.
        expected: Tag,
        /// The tag recorded with the stored value.
        found: Tag,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, capacity } => {
                write!(f, "index {index} out of bounds for capacity {capacity}")
            }
            Self::TypeMismatch {
                key,
                expected,
                found,
            } => {
                write!(
                    f,
                    "type mismatch for key {key}: expected {expected}, found {found}"
                )
            }
        }
    }
}

impl Error for ArenaError {}
