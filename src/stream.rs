//! Core trait for lazy, pull-based sequences.
//!
//! This module defines the [`FStream`] trait. An [`FStream`] produces one element
//! per call to [`next`](FStream::next) and signals exhaustion with
//! [`FOption::Absent`]. Every operator wraps its parent in a new stream and only
//! pulls from it when pulled itself, so no work happens until a consumer asks for
//! an element.
//!
//! # Examples
//!
//! ```rust
//! use fstream::prelude::*;
//!
//! let evens = fstream![1, 2, 3, 4, 5, 6]
//!     .filter(|v| v % 2 == 0)
//!     .map(|v| v * 10)
//!     .to_list();
//! assert_eq!(evens, vec![20, 40, 60]);
//! ```

use std::{cmp::Ordering, collections::HashSet, hash::Hash};

use tracing::trace;

use crate::{
    build::{Source, from_iterable},
    compose::{Filter, FlatMap, Map, Skip, Take, filter, flat_map, map, skip, take},
    error::{Error, Result},
    option::{FOption, Flatten},
};

/// A source-backed stream over materialized, sorted contents.
pub type Sorted<T> = Source<std::vec::IntoIter<T>>;

/// Lazy producer of elements, pulled one at a time.
///
/// Only [`next`](FStream::next) is required. Streams built by operators own their
/// parent, so composing moves the parent into the child and the child becomes the
/// only consumer.
///
/// ```rust
/// use fstream::prelude::*;
///
/// let mut stream = fstream!["a", "b"];
/// assert_eq!(stream.next(), FOption::of("a"));
/// assert_eq!(stream.next(), FOption::of("b"));
/// assert_eq!(stream.next(), FOption::empty());
/// ```
pub trait FStream {
    /// Type of the produced elements
    type Item;

    /// Pull the next element, or `Absent` once the stream is exhausted.
    fn next(&mut self) -> FOption<Self::Item>;

    /// Release the stream.
    ///
    /// Derived streams accept this as a no-op and leave their parent alone.
    /// Source-backed streams discard their remaining elements, and fail with
    /// [`Error::AlreadyClosed`] when nothing remained to discard.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Yield at most `count` elements, then drain the parent.
    ///
    /// Once `count` elements have been yielded, the next pull consumes the parent
    /// to exhaustion before reporting `Absent`.
    ///
    /// ```rust
    /// use fstream::prelude::*;
    ///
    /// let mut source = fstream![1, 2, 3, 4, 5];
    /// assert_eq!((&mut source).take(2).to_list(), vec![1, 2]);
    /// assert!(source.next().is_absent());
    /// ```
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        take(count, self)
    }

    /// Discard the first `count` elements, then forward the rest.
    ///
    /// The discarding happens on the first pull, not here.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        skip(count, self)
    }

    /// Yield only the elements for which `pred` holds.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        filter(pred, self)
    }

    /// Transform every element with `mapper`.
    fn map<U, F>(self, mapper: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        map(mapper, self)
    }

    /// Unwrap nested [`FOption`] layers of each element, then transform it.
    ///
    /// This flattens optional wrapping, not nested streams. An element that
    /// unwraps to `Absent` ends the pull with `Absent`.
    ///
    /// ```rust
    /// use fstream::prelude::*;
    ///
    /// let lengths = fstream![FOption::of("ab"), FOption::of("abc")]
    ///     .flat_map(str::len)
    ///     .to_list();
    /// assert_eq!(lengths, vec![2, 3]);
    /// ```
    fn flat_map<U, F>(self, mapper: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        Self::Item: Flatten,
        F: FnMut(<Self::Item as Flatten>::Leaf) -> U,
    {
        flat_map(mapper, self)
    }

    /// Run `effect` on every remaining element.
    fn for_each<F>(&mut self, mut effect: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        while let FOption::Present(v) = self.next() {
            effect(v);
        }
    }

    /// Collect every remaining element, in order.
    fn to_list(&mut self) -> Vec<Self::Item> {
        let mut list = Vec::new();
        while let FOption::Present(v) = self.next() {
            list.push(v);
        }
        list
    }

    /// Collect every remaining element, dropping duplicates.
    fn to_set(&mut self) -> HashSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        let mut set = HashSet::new();
        while let FOption::Present(v) = self.next() {
            set.insert(v);
        }
        set
    }

    /// Collect every remaining element into an array of `S`.
    ///
    /// Fails with [`Error::TypeMismatch`] on the first element that does not
    /// convert to `S`; elements after it are left in the stream.
    ///
    /// ```rust
    /// use fstream::prelude::*;
    ///
    /// let bytes = fstream![1i64, 2, 3].to_array::<u8>().unwrap();
    /// assert_eq!(&*bytes, &[1u8, 2, 3]);
    ///
    /// let err = fstream![1i64, 300].to_array::<u8>().unwrap_err();
    /// assert!(err.is_type_mismatch());
    /// ```
    fn to_array<S>(&mut self) -> Result<Box<[S]>>
    where
        Self: Sized,
        S: TryFrom<Self::Item>,
    {
        let mut list = Vec::new();
        while let FOption::Present(v) = self.next() {
            let converted = S::try_from(v).map_err(|_| Error::TypeMismatch {
                expected: std::any::type_name::<S>(),
                found: std::any::type_name::<Self::Item>(),
            })?;
            list.push(converted);
        }
        Ok(list.into_boxed_slice())
    }

    /// Materialize the stream and iterate over the result.
    ///
    /// This is eager: the whole stream is consumed before the first element is
    /// returned.
    fn iterator(&mut self) -> std::vec::IntoIter<Self::Item> {
        self.to_list().into_iter()
    }

    /// Materialize the stream, sort it with `cmp` and stream the sorted contents.
    ///
    /// The sort is stable. The returned stream is source-backed, so it follows
    /// the source [`close`](FStream::close) contract.
    ///
    /// ```rust
    /// use fstream::prelude::*;
    ///
    /// let desc = fstream![2, 9, 4].sort(|a, b| b.cmp(a)).to_list();
    /// assert_eq!(desc, vec![9, 4, 2]);
    /// ```
    fn sort<F>(&mut self, cmp: F) -> Sorted<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut list = self.to_list();
        list.sort_by(cmp);
        trace!(len = list.len(), "materialized stream for sorting");
        from_iterable(list)
    }

    /// [`sort`](FStream::sort) by the natural order of the elements.
    fn sorted(&mut self) -> Sorted<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.sort(Ord::cmp)
    }

    /// Erase the concrete stream type.
    fn boxed(self) -> Box<dyn FStream<Item = Self::Item>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<S> FStream for &mut S
where
    S: FStream + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> FOption<Self::Item> {
        (**self).next()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<S> FStream for Box<S>
where
    S: FStream + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> FOption<Self::Item> {
        (**self).next()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<L, R> FStream for either::Either<L, R>
where
    L: FStream,
    R: FStream<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> FOption<Self::Item> {
        match self {
            either::Either::Left(l) => l.next(),
            either::Either::Right(r) => r.next(),
        }
    }

    fn close(&mut self) -> Result<()> {
        match self {
            either::Either::Left(l) => l.close(),
            either::Either::Right(r) => r.close(),
        }
    }
}
