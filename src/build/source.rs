use std::iter::Peekable;

use tracing::trace;

use crate::{
    error::{Error, Result},
    option::FOption,
    stream::FStream,
};

/// Stream backed by a native iterator.
///
/// All source adapters share this type. It pulls straight from the wrapped
/// iterator and stays exhausted once the iterator has run dry, even if the
/// iterator itself is not fused.
///
/// [`close`](FStream::close) discards whatever is left and succeeds, but only
/// while something is left: closing a source with no remaining elements fails
/// with [`Error::AlreadyClosed`].
pub struct Source<I: Iterator> {
    iter: Option<Peekable<I>>,
}

impl<I: Iterator> Source<I> {
    /// Wrap an iterator.
    pub fn new(iter: I) -> Self {
        Self {
            iter: Some(iter.peekable()),
        }
    }

    /// Check if the source has been closed or run dry.
    pub fn is_exhausted(&self) -> bool {
        self.iter.is_none()
    }
}

impl<I: Iterator> FStream for Source<I> {
    type Item = I::Item;

    fn next(&mut self) -> FOption<Self::Item> {
        let Some(iter) = self.iter.as_mut() else {
            return FOption::Absent;
        };
        match iter.next() {
            Some(v) => FOption::Present(v),
            None => {
                self.iter = None;
                FOption::Absent
            }
        }
    }

    fn close(&mut self) -> Result<()> {
        let remaining = self
            .iter
            .as_mut()
            .is_some_and(|iter| iter.peek().is_some());
        self.iter = None;
        if !remaining {
            return Err(Error::AlreadyClosed);
        }
        trace!("closed source with unconsumed elements");
        Ok(())
    }
}

/// Create a stream over a fixed array of values.
///
/// ```rust
/// use fstream::prelude::*;
///
/// let mut stream = of([1, 2]);
/// assert_eq!(stream.next(), FOption::of(1));
/// ```
///
/// The [`fstream!`](crate::fstream) macro does the same for a variadic list.
pub fn of<T, const N: usize>(values: [T; N]) -> Source<std::array::IntoIter<T, N>> {
    Source::new(values.into_iter())
}

/// Create a stream over anything iterable, such as a `Vec` or a map.
pub fn from_iterable<I>(values: I) -> Source<I::IntoIter>
where
    I: IntoIterator,
{
    Source::new(values.into_iter())
}

/// Create a stream pulling from an existing iterator.
///
/// Forward-only and double-ended iterators are both consumed front to back.
pub fn from_iterator<I>(iter: I) -> Source<I>
where
    I: Iterator,
{
    Source::new(iter)
}

/// Create a stream from a producer closure.
///
/// The producer is called once per pull; `None` ends the stream.
///
/// ```rust
/// use fstream::prelude::*;
///
/// let mut n = 0;
/// let counted = from_fn(move || {
///     n += 1;
///     (n <= 3).then_some(n)
/// })
/// .to_list();
/// assert_eq!(counted, vec![1, 2, 3]);
/// ```
pub fn from_fn<T, F>(producer: F) -> Source<std::iter::FromFn<F>>
where
    F: FnMut() -> Option<T>,
{
    Source::new(std::iter::from_fn(producer))
}

/// Create a stream over a list of values.
///
/// ```rust
/// use fstream::prelude::*;
///
/// assert_eq!(fstream![3, 1, 2].sorted().to_list(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! fstream {
    ($($value:expr),* $(,)?) => {
        $crate::build::of([$($value),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_of_yields_in_order_then_stays_absent() {
        let mut stream = of(['a', 'b']);
        assert_eq!(stream.next(), FOption::of('a'));
        assert_eq!(stream.next(), FOption::of('b'));
        assert!(stream.next().is_absent());
        assert!(stream.next().is_absent());
        assert!(stream.is_exhausted());
    }

    #[test]
    fn test_macro_matches_of() {
        assert_eq!(fstream![1, 2, 3,].to_list(), of([1, 2, 3]).to_list());
        let mut none: Source<std::array::IntoIter<u8, 0>> = fstream![];
        assert!(none.next().is_absent());
    }

    #[test]
    fn test_from_iterable_and_iterator() {
        let map = BTreeMap::from([(2, "b"), (1, "a")]);
        assert_eq!(from_iterable(&map).to_list(), vec![(&1, &"a"), (&2, &"b")]);
        assert_eq!(from_iterator((1..4).rev()).to_list(), vec![3, 2, 1]);
    }

    #[test]
    fn test_exhaustion_survives_unfused_iterator() {
        let mut calls = 0;
        // Yields None on odd calls and a value on even ones.
        let mut stream = from_fn(move || {
            calls += 1;
            (calls % 2 == 0).then_some(calls)
        });
        assert!(stream.next().is_absent());
        assert!(stream.next().is_absent());
    }

    #[test]
    fn test_close_discards_remaining_elements() {
        let mut stream = of([1, 2, 3]);
        assert_eq!(stream.next(), FOption::of(1));
        assert_eq!(stream.close(), Ok(()));
        assert!(stream.next().is_absent());
    }

    #[test]
    fn test_close_after_consumption_fails() {
        let mut stream = of([1]);
        assert_eq!(stream.next(), FOption::of(1));
        assert_eq!(stream.close(), Err(Error::AlreadyClosed));
    }

    #[test]
    fn test_close_twice_fails_second_time() {
        let mut stream = from_iterable(vec!["x"]);
        assert_eq!(stream.close(), Ok(()));
        assert_eq!(stream.close(), Err(Error::AlreadyClosed));
    }

    #[test]
    fn test_close_peeks_at_most_one_element() {
        let mut calls = 0;
        let mut stream = from_fn(|| {
            calls += 1;
            Some(calls)
        });
        assert_eq!(stream.next(), FOption::of(1));
        assert_eq!(stream.close(), Ok(()));
        assert!(stream.is_exhausted());
        assert!(stream.next().is_absent());
        drop(stream);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_close_empty_source_fails() {
        let mut stream = from_iterator(std::iter::empty::<i32>());
        assert!(stream.close().unwrap_err().is_already_closed());
    }
}
