//! # FStream: Lazy Pull-Based Sequences
//!
//! Build declarative processing pipelines over arbitrary data sources without
//! materializing intermediate collections, and express "value or nothing"
//! without null references.
//!
//! ## Core Types
//!
//! - **[`FOption<T>`]**: A value-or-absent container, returned by every pull
//! - **[`FStream`]**: A lazy producer whose single primitive is `next()`
//!
//! ## Key Features
//!
//! - **Lazy**: Operators pull from their parent only when pulled themselves
//! - **Composable**: Chain `.filter()`, `.map()`, `.flat_map()`, `.take()`, `.skip()`
//! - **Terminal conversions**: `.to_list()`, `.to_set()`, `.to_array()`, `.sort()`
//!
//! ## Example
//!
//! ```
//! use fstream::prelude::*;
//!
//! let top = fstream![5, 3, 1, 4, 2]
//!     .filter(|v| *v > 1)
//!     .sorted()
//!     .take(2)
//!     .to_list();
//! assert_eq!(top, vec![2, 3]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Streams:**
//! - [`of(array)`](of) / [`fstream!`] - Stream over a fixed list of values
//! - [`from_iterable(values)`](from_iterable) - Stream over any `IntoIterator`
//! - [`from_iterator(iter)`](from_iterator) - Stream pulling from an iterator
//! - [`from_fn(producer)`](from_fn) - Stream pulling from a closure
//! - [`empty()`](empty) - Stream with no elements
//!
//! **Closing:**
//! - [`FStream::close`] - Force-exhaust a source; fails with
//!   [`Error::AlreadyClosed`] when the source had nothing left

pub mod build;
pub mod compose;
mod error;
pub mod iter;
mod option;
pub mod prelude;
mod stream;

pub use build::*;
pub use error::*;
pub use option::*;
pub use stream::*;
