//! Property-based tests for stream operators.
//!
//! Each property compares a stream pipeline against the same computation done
//! eagerly on a `Vec`.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::collections::HashSet;

use fstream::prelude::*;
use proptest::prelude::*;

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..64)
}

proptest! {
    #[test]
    fn of_then_get_returns_value(v in any::<i64>()) {
        let opt = FOption::of(v);
        prop_assert!(opt.is_present());
        prop_assert_eq!(opt.get().unwrap(), v);
    }

    #[test]
    fn round_trip_preserves_list(list in values()) {
        prop_assert_eq!(from_iterable(list.clone()).to_list(), list);
    }

    #[test]
    fn filter_matches_vec_filter(list in values(), modulus in 1i32..7) {
        let expected: Vec<i32> = list.iter().copied().filter(|v| v % modulus == 0).collect();
        let actual = from_iterable(list).filter(|v| v % modulus == 0).to_list();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn take_yields_prefix_and_drains_parent(list in values(), n in 0usize..80) {
        let mut source = from_iterable(list.clone());
        let taken = (&mut source).take(n).to_list();
        prop_assert_eq!(taken.len(), n.min(list.len()));
        prop_assert_eq!(&taken[..], &list[..taken.len()]);
        prop_assert!(source.next().is_absent());
    }

    #[test]
    fn skip_yields_suffix(list in values(), n in 0usize..80) {
        let skipped = from_iterable(list.clone()).skip(n).to_list();
        prop_assert_eq!(skipped.len(), list.len().saturating_sub(n));
        prop_assert_eq!(&skipped[..], &list[list.len() - skipped.len()..]);
    }

    #[test]
    fn map_is_elementwise(list in values()) {
        let expected: Vec<i64> = list.iter().map(|v| i64::from(*v) * 3).collect();
        let actual = from_iterable(list).map(|v| i64::from(v) * 3).to_list();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn sort_matches_vec_sort_and_is_idempotent(list in values()) {
        let mut expected = list.clone();
        expected.sort();
        let once = from_iterable(list).sorted().to_list();
        prop_assert_eq!(&once, &expected);
        let twice = from_iterable(once.clone()).sorted().to_list();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn to_set_matches_hash_set(list in values()) {
        let expected: HashSet<i32> = list.iter().copied().collect();
        prop_assert_eq!(from_iterable(list).to_set(), expected);
    }

    #[test]
    fn exhausted_stream_stays_exhausted(list in values(), extra in 1usize..5) {
        let mut stream = from_iterable(list).map(|v| v / 2).filter(|v| *v != 0);
        let _ = stream.to_list();
        for _ in 0..extra {
            prop_assert!(stream.next().is_absent());
        }
    }

    #[test]
    fn flat_map_stays_exhausted_after_hole(
        items in prop::collection::vec(prop::option::of(any::<i32>()), 0..64),
        extra in 1usize..5,
    ) {
        let expected: Vec<i32> = items.iter().map_while(|v| *v).collect();
        let mut stream = from_iterable(items.into_iter().map(FOption::of_nullable))
            .flat_map(|v: i32| v);
        prop_assert_eq!(stream.to_list(), expected);
        for _ in 0..extra {
            prop_assert!(stream.next().is_absent());
        }
    }

    #[test]
    fn take_over_flat_map_drains_parent(list in values(), n in 0usize..80) {
        let mut source = from_iterable(list.clone()).map(FOption::of);
        let taken = (&mut source).flat_map(|v: i32| v).take(n).to_list();
        let expected: Vec<i32> = list.iter().copied().take(n).collect();
        prop_assert_eq!(taken, expected);
        prop_assert!(source.next().is_absent());
    }
}
