//! Stream adapters for native collections and iterators.
//!
//! This module provides [`IntoFStream`], implemented for everything that is
//! [`IntoIterator`], so native data can enter a pipeline with method syntax.
//!
//! # Examples
//!
//! ```rust
//! use fstream::prelude::*;
//!
//! let names = vec!["ada", "grace", "barbara"];
//! let long: Vec<_> = names.into_fstream().filter(|n| n.len() > 3).to_list();
//! assert_eq!(long, vec!["grace", "barbara"]);
//! ```

use crate::build::{Source, from_iterable};

/// Conversion of native iterables into a source-backed [`FStream`](crate::FStream).
///
/// The iterable is wrapped as-is; nothing is copied or pulled until the stream is.
pub trait IntoFStream: IntoIterator + Sized {
    /// Wrap `self` in a source-backed stream.
    fn into_fstream(self) -> Source<Self::IntoIter> {
        from_iterable(self)
    }
}

impl<I: IntoIterator> IntoFStream for I {}
