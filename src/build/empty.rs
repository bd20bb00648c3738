use std::marker::PhantomData;

use crate::{error::Result, option::FOption, stream::FStream};

/// Stream with no elements.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create a stream that is exhausted from the start.
///
/// Unlike a source over an empty collection, closing it always succeeds.
///
/// ```rust
/// use fstream::prelude::*;
///
/// let mut stream = empty::<i32>();
/// assert!(stream.next().is_absent());
/// assert!(stream.close().is_ok());
/// ```
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> FStream for Empty<T> {
    type Item = T;

    fn next(&mut self) -> FOption<T> {
        FOption::Absent
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
