//! Building streams from native data
//!
//! This module provides the source adapters that wrap arrays, iterables,
//! iterators and producer closures into [`FStream`](crate::FStream)s, plus the
//! empty stream.

mod empty;
mod source;

// Re-export building blocks
pub use empty::{Empty, empty};
pub use source::{Source, from_fn, from_iterable, from_iterator, of};
