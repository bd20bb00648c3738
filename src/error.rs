//! Error types for optional values and sequences.

use thiserror::Error;

/// Errors raised by [`FOption`](crate::FOption) accessors and
/// [`FStream`](crate::FStream) operations.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The value of an absent [`FOption`](crate::FOption) was requested.
    #[error("No element exists")]
    ElementMissing,

    /// An element could not be converted to the requested array component type.
    #[error("Cannot store element of type {found} in an array of {expected}")]
    TypeMismatch {
        /// Component type the array was requested with
        expected: &'static str,
        /// Type of the element that failed to convert
        found: &'static str,
    },

    /// `close()` was called on a source that had nothing left to discard.
    #[error("Stream has already been closed")]
    AlreadyClosed,
}

impl Error {
    /// Check if this error is [`Error::ElementMissing`].
    pub fn is_element_missing(&self) -> bool {
        matches!(self, Error::ElementMissing)
    }

    /// Check if this error is [`Error::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Check if this error is [`Error::AlreadyClosed`].
    pub fn is_already_closed(&self) -> bool {
        matches!(self, Error::AlreadyClosed)
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
