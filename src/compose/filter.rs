use crate::{option::FOption, stream::FStream};

/// Yields only the elements of the wrapped stream that satisfy a predicate.
pub struct Filter<S, P> {
    pred: P,
    stream: S,
}

/// Create a stream that keeps the elements of `stream` for which `pred` holds.
///
/// Each pull keeps pulling from `stream` until a match is found or `stream`
/// runs dry.
///
/// # Examples
///
/// ```
/// use fstream::prelude::*;
/// use fstream::compose::filter;
///
/// let odd = filter(|v: &i32| v % 2 == 1, fstream![1, 2, 3, 4, 5]).to_list();
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn filter<S, P>(pred: P, stream: S) -> Filter<S, P> {
    Filter { pred, stream }
}

impl<S, P> FStream for Filter<S, P>
where
    S: FStream,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> FOption<Self::Item> {
        loop {
            match self.stream.next() {
                FOption::Present(v) if (self.pred)(&v) => return FOption::Present(v),
                FOption::Present(_) => continue,
                FOption::Absent => return FOption::Absent,
            }
        }
    }
}
