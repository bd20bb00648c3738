//! Commonly used imports
//!
//! Use `use fstream::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Error, FOption, FStream, Flatten};

// Source constructors
pub use crate::build::{empty, from_fn, from_iterable, from_iterator, of};
pub use crate::fstream;

// Native conversions
pub use crate::iter::IntoFStream;
