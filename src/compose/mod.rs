//! Combining streams with operators
//!
//! Every operator here wraps a parent stream and pulls from it on demand.

mod filter;
mod map;
mod slice;

// Re-export composition operations
pub use filter::{Filter, filter};
pub use map::{FlatMap, Map, flat_map, map};
pub use slice::{Skip, Take, skip, take};
