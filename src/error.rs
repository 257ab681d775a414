//! Error types for buffer construction.

use std::fmt;

/// Error returned when constructing a [`crate::BitBuffer`] fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Requested initial capacity was zero; a buffer needs at least one byte
    ZeroCapacity,
    /// Source byte slice was empty, so there is nothing to read
    EmptySource,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "initial capacity must be at least one byte"),
            Self::EmptySource => write!(f, "source byte slice is empty"),
        }
    }
}

impl std::error::Error for BufferError {}
