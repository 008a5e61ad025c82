//! Set difference operations.
//!
//! `diff` compares values with the collection's configured [`Equality`](crate::Equality),
//! loose unless changed through [`CollectionOptions`](crate::CollectionOptions).
//! `diff_assoc` and `diff_assoc_using` compare values by their string form
//! ([`compare::string_eq`]), so `"1.0"` and `"1"` differ while `2.0` and `"2"` match. Key
//! comparisons are exact, except in [`Collection::diff_assoc_using`].
//!
//! | Operation | Keeps an entry of `self` when |
//! |-----------|-------------------------------|
//! | `diff` | its value equals no value of `other` (result re-indexed) |
//! | `diff_assoc` | its key is missing from `other`, or maps to a value with another string form |
//! | `diff_assoc_using` | no key of `other` matches under the comparator with the same string form |
//! | `diff_keys` | its key is missing from `other` |

use crate::{compare, Collection, Key};
use std::cmp::Ordering;

impl Collection {
    /// Returns the values that appear nowhere in `other`, re-indexed from `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::Collection;
    ///
    /// let diff = Collection::from(vec![1, 2, 3, 4, 5]).diff(vec![2, 4, 6, 8]);
    /// assert_eq!(diff, Collection::from(vec![1, 3, 5]));
    /// ```
    #[must_use]
    pub fn diff(&self, other: impl Into<Collection>) -> Collection {
        let other: Collection = other.into();
        let equality = self.options.equality;
        let remaining = self
            .values()
            .filter(|value| {
                !other
                    .values()
                    .any(|candidate| equality.values_eq(value, candidate))
            })
            .cloned()
            .collect();
        self.derive(remaining)
    }

    /// Returns the entries whose key is missing from `other` or holds a value with a
    /// different string form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collect;
    ///
    /// let fruit = collect!({"color": "orange", "type": "fruit", "remain": 6});
    /// let diff = fruit.diff_assoc(collect!({
    ///     "color": "yellow",
    ///     "type": "fruit",
    ///     "remain": 3,
    ///     "used": 6
    /// }));
    /// assert_eq!(diff, collect!({"color": "orange", "remain": 6}));
    /// ```
    #[must_use]
    pub fn diff_assoc(&self, other: impl Into<Collection>) -> Collection {
        let other: Collection = other.into();
        let remaining = self
            .iter()
            .filter(|&(key, value)| {
                other
                    .items
                    .get(key)
                    .map_or(true, |candidate| !compare::string_eq(value, candidate))
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        self.derive(remaining)
    }

    /// Like [`diff_assoc`](Self::diff_assoc), but keys of `other` match when
    /// `comparator(own_key, other_key)` returns [`Ordering::Equal`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{collect, compare};
    ///
    /// let fruit = collect!({"color": "orange", "type": "fruit", "remain": 6});
    /// let diff = fruit.diff_assoc_using(
    ///     collect!({"Color": "yellow", "Type": "fruit", "Remain": 3}),
    ///     compare::key_natural_case_cmp,
    /// );
    /// assert_eq!(diff, collect!({"color": "orange", "remain": 6}));
    /// ```
    #[must_use]
    pub fn diff_assoc_using<F>(&self, other: impl Into<Collection>, mut comparator: F) -> Collection
    where
        F: FnMut(&Key, &Key) -> Ordering,
    {
        let other: Collection = other.into();
        let mut remaining = crate::OrderedMap::new();
        for (key, value) in self.iter() {
            let matched = other.iter().any(|(other_key, candidate)| {
                comparator(key, other_key) == Ordering::Equal
                    && compare::string_eq(value, candidate)
            });
            if !matched {
                remaining.insert(key.clone(), value.clone());
            }
        }
        self.derive(remaining)
    }

    /// Returns the entries whose key does not appear in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collect;
    ///
    /// let numbers = collect!({"one": 10, "two": 20, "three": 30, "four": 40, "five": 50});
    /// let diff = numbers.diff_keys(collect!({"two": 2, "four": 4, "six": 6, "eight": 8}));
    /// assert_eq!(diff, collect!({"one": 10, "three": 30, "five": 50}));
    /// ```
    #[must_use]
    pub fn diff_keys(&self, other: impl Into<Collection>) -> Collection {
        let other: Collection = other.into();
        let remaining = self
            .iter()
            .filter(|&(key, _)| !other.items.contains_key(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        self.derive(remaining)
    }
}

#[cfg(test)]
mod tests {
    use crate::{collect, compare, Collection, CollectionOptions, Key, Value};

    #[test]
    fn test_diff() {
        let col = Collection::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(col.diff(vec![2, 4, 6, 8]), Collection::from(vec![1, 3, 5]));
    }

    #[test]
    fn test_diff_loose_by_default() {
        let col = collect!([1, "2", 3.0]);
        assert_eq!(col.diff(collect!(["1", 2, 3])).count(), 0);
    }

    #[test]
    fn test_diff_strict_option() {
        let col = collect!([1, "2", 3]).with_options(CollectionOptions::strict());
        assert_eq!(col.diff(collect!(["1", 2, 3])), collect!([1, "2"]));
    }

    #[test]
    fn test_diff_reindexes() {
        let col = collect!({"a": "x", "b": "y", "c": "z"});
        assert_eq!(col.diff(vec!["x"]), Collection::from(vec!["y", "z"]));
    }

    #[test]
    fn test_diff_assoc() {
        let col = collect!({"color": "orange", "type": "fruit", "remain": 6});
        let diff = col.diff_assoc(collect!({
            "color": "yellow",
            "type": "fruit",
            "remain": 3,
            "used": 6
        }));
        assert_eq!(diff, collect!({"color": "orange", "remain": 6}));
    }

    #[test]
    fn test_diff_assoc_list_positions() {
        let col = Collection::from(vec!["a", "b", "c"]);
        let diff = col.diff_assoc(vec!["a", "c", "b"]);
        assert_eq!(diff.keys().cloned().collect::<Vec<_>>(), vec![Key::Int(1), Key::Int(2)]);
    }

    #[test]
    fn test_diff_assoc_compares_string_forms() {
        let col = collect!({"a": "1.0", "b": null, "c": "abc", "d": 2.0});
        let diff = col.diff_assoc(collect!({"a": "1", "b": 0, "c": "abc", "d": "2"}));
        assert_eq!(diff, collect!({"a": "1.0", "b": null}));
    }

    #[test]
    fn test_diff_assoc_ignores_strict_option() {
        let col = collect!({"a": 1}).with_options(CollectionOptions::strict());
        assert!(col.diff_assoc(collect!({"a": "1"})).is_empty());
    }

    #[test]
    fn test_diff_assoc_using_compares_string_forms() {
        let col = collect!({"A": "1.0", "B": "x"});
        let diff = col.diff_assoc_using(
            collect!({"a": "1", "b": "x"}),
            compare::key_natural_case_cmp,
        );
        assert_eq!(diff, collect!({"A": "1.0"}));
    }

    #[test]
    fn test_diff_assoc_using_case_insensitive() {
        let col = collect!({"color": "orange", "type": "fruit", "remain": 6});
        let diff = col.diff_assoc_using(
            collect!({"Color": "yellow", "Type": "fruit", "Remain": 3}),
            compare::key_natural_case_cmp,
        );
        assert_eq!(diff, collect!({"color": "orange", "remain": 6}));
    }

    #[test]
    fn test_diff_assoc_using_custom_comparator() {
        let col = collect!({"a": 1, "b": 2});
        let everything_matches = col.diff_assoc_using(collect!({"z": 2}), |_, _| {
            std::cmp::Ordering::Equal
        });
        assert_eq!(everything_matches, collect!({"a": 1}));
    }

    #[test]
    fn test_diff_keys() {
        let col = collect!({"one": 10, "two": 20, "three": 30, "four": 40, "five": 50});
        let diff = col.diff_keys(collect!({"two": 2, "four": 4, "six": 6, "eight": 8}));
        assert_eq!(diff, collect!({"one": 10, "three": 30, "five": 50}));
    }

    #[test]
    fn test_diff_keys_ignores_values() {
        let col = collect!({"1": "a", "x": "b"});
        let diff = col.diff_keys(collect!({"1": "zzz"}));
        assert_eq!(diff.get("x"), Some(&Value::from("b")));
        assert_eq!(diff.count(), 1);
    }
}
