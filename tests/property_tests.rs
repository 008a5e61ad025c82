//! Property-based tests for the collection laws.
//!
//! Inputs are small integer and string lists, which cover both the sequential and the
//! associative shape once keyed.

use fluent_collection::{Collection, Key, Value};
use proptest::prelude::*;

fn list(values: &[i64]) -> Collection {
    values.iter().map(|&v| Value::from(v)).collect()
}

proptest! {
    #[test]
    fn prop_avg_is_sum_over_count(values in prop::collection::vec(-1_000i64..1_000, 1..30)) {
        let expected = values.iter().sum::<i64>() as f64 / values.len() as f64;
        let avg = list(&values).avg().unwrap();
        prop_assert!((avg - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_chunks_reconcatenate(values in prop::collection::vec(any::<i64>(), 0..40), size in 1usize..8) {
        let collection = list(&values);
        let chunks = collection.chunk(size).unwrap();

        let count = chunks.count();
        for (index, chunk) in chunks.values().enumerate() {
            let len = chunk.as_map().map_or(0, |map| map.len());
            if index + 1 < count {
                prop_assert_eq!(len, size);
            } else {
                prop_assert!(len >= 1 && len <= size);
            }
        }

        prop_assert_eq!(chunks.collapse(), collection);
    }

    #[test]
    fn prop_collect_is_independent(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let original = list(&values);
        let copy = original.collect();
        prop_assert_eq!(original.all(), copy.all());

        let grown = copy.concat(vec![0]);
        prop_assert_eq!(original.count(), values.len());
        prop_assert_eq!(grown.count(), values.len() + 1);
    }

    #[test]
    fn prop_count_by_sums_to_count(values in prop::collection::vec(0i64..5, 0..40)) {
        let collection = list(&values);
        let counts = collection.count_by().unwrap();
        let total: i64 = counts.values().filter_map(Value::as_i64).sum();
        prop_assert_eq!(total as usize, collection.count());
    }

    #[test]
    fn prop_doesnt_contain_negates_contains(
        values in prop::collection::vec("[a-c]{0,2}", 0..10),
        needle in "[a-c]{0,2}",
    ) {
        let collection = Collection::from(values);
        prop_assert_eq!(
            collection.doesnt_contain(needle.as_str()),
            !collection.contains(needle.as_str())
        );
    }

    #[test]
    fn prop_diff_keys_is_subset(
        left in prop::collection::btree_map("[a-e]", any::<i64>(), 0..6),
        right in prop::collection::btree_map("[a-e]", any::<i64>(), 0..6),
    ) {
        let left: Collection = left.into_iter().collect();
        let right: Collection = right.into_iter().collect();
        let diff = left.diff_keys(&right);

        for key in diff.keys() {
            prop_assert!(left.get(key).is_some());
            prop_assert!(right.get(key).is_none());
        }
        let expected = left.keys().filter(|key| right.get(*key).is_none()).count();
        prop_assert_eq!(diff.count(), expected);
    }

    #[test]
    fn prop_string_keys_normalize(n in any::<i64>()) {
        prop_assert_eq!(Key::from(n.to_string()), Key::Int(n));
    }
}
