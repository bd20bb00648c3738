//! Slicing streams by position.
//!
//! [`Take`] limits how many elements reach the consumer and [`Skip`] discards a
//! prefix. `Take` is also a consumption barrier: by the time it reports
//! exhaustion, its parent has been drained.

use tracing::trace;

use crate::{option::FOption, stream::FStream};

/// Yields the first `count` elements of the wrapped stream, then drains it.
pub struct Take<S> {
    remaining: usize,
    drained: bool,
    stream: S,
}

/// Create a stream that yields at most `count` elements of `stream`.
///
/// After `count` elements, the next pull consumes `stream` to exhaustion and
/// every pull from then on returns `Absent`. A `count` of zero drains on the
/// first pull.
///
/// # Examples
///
/// ```
/// use fstream::prelude::*;
/// use fstream::compose::take;
///
/// let mut source = fstream![1, 2, 3];
/// let mut first = take(1, &mut source);
/// assert_eq!(first.next(), FOption::of(1));
/// assert!(first.next().is_absent());
/// assert!(source.next().is_absent());
/// ```
pub fn take<S>(count: usize, stream: S) -> Take<S> {
    Take {
        remaining: count,
        drained: false,
        stream,
    }
}

impl<S> FStream for Take<S>
where
    S: FStream,
{
    type Item = S::Item;

    fn next(&mut self) -> FOption<Self::Item> {
        if self.remaining > 0 {
            self.remaining -= 1;
            return self.stream.next();
        }
        if !self.drained {
            let mut discarded = 0usize;
            while self.stream.next().is_present() {
                discarded += 1;
            }
            self.drained = true;
            trace!(discarded, "take drained its parent");
        }
        FOption::Absent
    }
}

/// Skips the first `count` elements of the wrapped stream.
pub struct Skip<S> {
    pending: usize,
    stream: S,
}

/// Create a stream that discards the first `count` elements of `stream`.
///
/// Nothing is discarded until the first pull.
///
/// # Examples
///
/// ```
/// use fstream::prelude::*;
/// use fstream::compose::skip;
///
/// assert_eq!(skip(2, fstream![1, 2, 3, 4, 5]).to_list(), vec![3, 4, 5]);
/// ```
pub fn skip<S>(count: usize, stream: S) -> Skip<S> {
    Skip {
        pending: count,
        stream,
    }
}

impl<S> FStream for Skip<S>
where
    S: FStream,
{
    type Item = S::Item;

    fn next(&mut self) -> FOption<Self::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            let _ = self.stream.next();
        }
        self.stream.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{from_fn, from_iterator, of};

    #[test]
    fn test_take_yields_prefix() {
        assert_eq!(take(2, of([1, 2, 3, 4, 5])).to_list(), vec![1, 2]);
    }

    #[test]
    fn test_take_drains_parent() {
        let mut source = of([1, 2, 3, 4, 5]);
        assert_eq!(take(2, &mut source).to_list(), vec![1, 2]);
        assert!(source.next().is_absent());
    }

    #[test]
    fn test_take_more_than_available() {
        let mut stream = take(10, of(['x', 'y']));
        assert_eq!(stream.to_list(), vec!['x', 'y']);
        assert!(stream.next().is_absent());
    }

    #[test]
    fn test_take_zero_drains_on_first_pull() {
        let mut pulled = 0;
        let mut stream = take(0, from_iterator((0..4).inspect(|_| pulled += 1)));
        assert!(stream.next().is_absent());
        drop(stream);
        assert_eq!(pulled, 4);
    }

    #[test]
    fn test_take_drains_only_once() {
        let mut calls = 0;
        let mut stream = take(
            1,
            from_fn(|| {
                calls += 1;
                (calls <= 3).then_some(calls)
            }),
        );
        assert_eq!(stream.next(), FOption::of(1));
        assert!(stream.next().is_absent());
        assert!(stream.next().is_absent());
        drop(stream);
        // one yielded, two drained, one None
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_take_is_lazy_until_pulled() {
        let mut source = of([1, 2, 3]);
        let limited = take(1, &mut source);
        drop(limited);
        assert_eq!(source.next(), FOption::of(1));
    }

    #[test]
    fn test_skip_discards_prefix() {
        assert_eq!(skip(2, of([1, 2, 3, 4, 5])).to_list(), vec![3, 4, 5]);
    }

    #[test]
    fn test_skip_past_end() {
        let mut stream = skip(9, of([1, 2]));
        assert!(stream.next().is_absent());
        assert!(stream.next().is_absent());
    }

    #[test]
    fn test_skip_zero_is_passthrough() {
        assert_eq!(skip(0, of([1, 2])).to_list(), vec![1, 2]);
    }

    #[test]
    fn test_skip_is_lazy_until_pulled() {
        let mut source = of([1, 2, 3]);
        drop(skip(2, &mut source));
        assert_eq!(source.next(), FOption::of(1));
    }
}
