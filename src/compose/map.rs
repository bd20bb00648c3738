//! Transforming stream elements.
//!
//! This module provides [`Map`], a plain one-to-one transformation, and
//! [`FlatMap`], which first peels [`FOption`] wrappers off each element.

use crate::{
    option::{FOption, Flatten},
    stream::FStream,
};

/// Transforms every element of the wrapped stream.
pub struct Map<S, F> {
    f: F,
    stream: S,
}

/// Create a stream that applies `f` to each element of `stream`.
///
/// # Examples
///
/// ```
/// use fstream::prelude::*;
/// use fstream::compose::map;
///
/// let squares = map(|v: i32| v * v, fstream![1, 2, 3]).to_list();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn map<S, F>(f: F, stream: S) -> Map<S, F> {
    Map { f, stream }
}

impl<U, S, F> FStream for Map<S, F>
where
    S: FStream,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> FOption<U> {
        self.stream.next().map(&mut self.f)
    }
}

/// Unwraps nested [`FOption`]s in each element, then transforms it.
///
/// Despite the name this does not flatten nested streams: it flattens optional
/// wrapping. An element whose wrapping unwraps to `Absent` ends the stream:
/// that pull and every later one return `Absent`, and the parent is not pulled
/// again.
pub struct FlatMap<S, F> {
    f: F,
    done: bool,
    stream: S,
}

/// Create a stream that flattens each element of `stream` with [`Flatten`] and
/// applies `f` to the innermost value.
///
/// # Examples
///
/// ```
/// use fstream::prelude::*;
/// use fstream::compose::flat_map;
///
/// let nested = fstream![FOption::of(FOption::of(1)), FOption::of(FOption::of(2))];
/// assert_eq!(flat_map(|v: i32| v + 1, nested).to_list(), vec![2, 3]);
/// ```
pub fn flat_map<S, F>(f: F, stream: S) -> FlatMap<S, F> {
    FlatMap {
        f,
        done: false,
        stream,
    }
}

impl<U, S, F> FStream for FlatMap<S, F>
where
    S: FStream,
    S::Item: Flatten,
    F: FnMut(<S::Item as Flatten>::Leaf) -> U,
{
    type Item = U;

    fn next(&mut self) -> FOption<U> {
        if self.done {
            return FOption::Absent;
        }
        let flat = match self.stream.next() {
            FOption::Present(v) => v.flatten(),
            FOption::Absent => FOption::Absent,
        };
        match flat {
            FOption::Present(leaf) => FOption::Present((self.f)(leaf)),
            FOption::Absent => {
                self.done = true;
                FOption::Absent
            }
        }
    }
}
