//! Aggregation operations: averages, group counts and duplicate detection.
//!
//! ```rust
//! use fluent_collection::{collect, Collection};
//!
//! let scores = collect!([{"foo": 10}, {"foo": 10}, {"foo": 20}, {"foo": 40}]);
//! assert_eq!(scores.avg_by("foo").unwrap(), 20.0);
//!
//! let counts = Collection::from(vec![1, 2, 2, 2, 3]).count_by().unwrap();
//! assert_eq!(counts, collect!({"1": 1, "2": 3, "3": 1}));
//! ```

use crate::{Collection, Equality, Error, Key, OrderedMap, Result, Value};
use indexmap::IndexMap;

impl Collection {
    /// Returns the arithmetic mean of the values.
    ///
    /// Values are coerced with [`Value::as_numeric`]: booleans count as `0`/`1`, `null` as
    /// `0`, and numeric strings are parsed. Nested maps contribute `0` to the sum but are
    /// still counted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] for an empty collection and [`Error::NotNumeric`]
    /// when a scalar value cannot be coerced to a number.
    pub fn avg(&self) -> Result<f64> {
        self.mean(None)
    }

    /// Alias for [`avg`](Self::avg).
    pub fn average(&self) -> Result<f64> {
        self.avg()
    }

    /// Returns the mean of the values found at `path` inside each nested map.
    ///
    /// Entries whose nested value is rejected by the configured
    /// [`PathFallback`](crate::PathFallback) (by default: missing or falsy) contribute
    /// the whole entry instead.
    ///
    /// # Errors
    ///
    /// Same as [`avg`](Self::avg).
    pub fn avg_by<K: Into<Key>>(&self, path: K) -> Result<f64> {
        self.mean(Some(&path.into()))
    }

    /// Alias for [`avg_by`](Self::avg_by).
    pub fn average_by<K: Into<Key>>(&self, path: K) -> Result<f64> {
        self.avg_by(path)
    }

    fn mean(&self, path: Option<&Key>) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::divide_by_zero("cannot average an empty collection").traced("avg"));
        }

        let mut sum = 0.0;
        for value in self.values() {
            let operand = match path.and_then(|key| value.get(key)) {
                Some(nested) if self.options.path_fallback.accepts(nested) => nested,
                _ => value,
            };
            // Nested maps add nothing to the sum but still count toward the divisor.
            if operand.is_map() {
                continue;
            }
            let number = operand.as_numeric().ok_or_else(|| {
                Error::not_numeric(format!("cannot average a {} value", operand.type_name()))
                    .traced("avg")
            })?;
            sum += number.as_f64();
        }
        Ok(sum / self.count() as f64)
    }

    /// Counts occurrences of each distinct value.
    ///
    /// The result is keyed by value (converted with [`Key::try_from_value`]) in first-seen
    /// order, with integer counts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] when a value is a nested map.
    pub fn count_by(&self) -> Result<Collection> {
        self.count_by_with(Value::clone)
    }

    /// Counts occurrences of each group key produced by `group(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{collect, Collection, Value};
    ///
    /// let emails = Collection::from(vec!["alice@gmail.com", "bob@yahoo.com", "carlos@gmail.com"]);
    /// let domains = emails
    ///     .count_by_with(|email| {
    ///         let domain = email.as_str().and_then(|s| s.split('@').nth(1)).unwrap_or("");
    ///         Value::from(domain)
    ///     })
    ///     .unwrap();
    /// assert_eq!(domains, collect!({"gmail.com": 2, "yahoo.com": 1}));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] when `group` returns a nested map.
    pub fn count_by_with<F>(&self, mut group: F) -> Result<Collection>
    where
        F: FnMut(&Value) -> Value,
    {
        let mut counts: IndexMap<Key, i64> = IndexMap::new();
        for value in self.values() {
            let key = Key::try_from_value(&group(value)).map_err(|err| err.traced("count_by"))?;
            *counts.entry(key).or_insert(0) += 1;
        }
        Ok(self.derive(
            counts
                .into_iter()
                .map(|(key, count)| (key, Value::from(count)))
                .collect(),
        ))
    }

    /// Returns the entries whose value equals the value of an earlier entry.
    ///
    /// Values are compared with the collection's configured
    /// [`Equality`] (loose by default). Original keys are kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{Collection, Value};
    ///
    /// let letters = Collection::from(vec!["a", "b", "a", "c", "b"]);
    /// let duplicates = letters.duplicates();
    /// assert_eq!(duplicates.get(2), Some(&Value::from("a")));
    /// assert_eq!(duplicates.get(4), Some(&Value::from("b")));
    /// assert_eq!(duplicates.count(), 2);
    /// ```
    #[must_use]
    pub fn duplicates(&self) -> Collection {
        self.find_duplicates(self.options.equality, |value| value.clone())
    }

    /// Like [`duplicates`](Self::duplicates), always using strict equality.
    #[must_use]
    pub fn duplicates_strict(&self) -> Collection {
        self.find_duplicates(Equality::Strict, |value| value.clone())
    }

    /// Returns the sub-values at `key` that repeat an earlier entry's sub-value.
    ///
    /// Entries that are not nested maps, or lack `key`, compare as `null`. The result
    /// holds the compared sub-values under the original keys.
    #[must_use]
    pub fn duplicates_by<K: Into<Key>>(&self, key: K) -> Collection {
        let key = key.into();
        self.find_duplicates(self.options.equality, |value| {
            value.get(&key).cloned().unwrap_or_default()
        })
    }

    /// Like [`duplicates_by`](Self::duplicates_by), always using strict equality.
    #[must_use]
    pub fn duplicates_strict_by<K: Into<Key>>(&self, key: K) -> Collection {
        let key = key.into();
        self.find_duplicates(Equality::Strict, |value| {
            value.get(&key).cloned().unwrap_or_default()
        })
    }

    fn find_duplicates<F>(&self, equality: Equality, project: F) -> Collection
    where
        F: Fn(&Value) -> Value,
    {
        let mut seen: Vec<Value> = Vec::with_capacity(self.count());
        let mut repeated = OrderedMap::new();
        for (key, value) in self.iter() {
            let candidate = project(value);
            if seen.iter().any(|earlier| equality.values_eq(earlier, &candidate)) {
                repeated.insert(key.clone(), candidate);
            } else {
                seen.push(candidate);
            }
        }
        self.derive(repeated)
    }
}

#[cfg(test)]
mod tests {
    use crate::{collect, Collection, CollectionOptions, Error, PathFallback, Value};

    #[test]
    fn test_avg() {
        assert_eq!(Collection::from(vec![1, 1, 2, 4]).average().unwrap(), 2.0);
        assert_eq!(Collection::from(vec![1, 2]).avg().unwrap(), 1.5);
        assert_eq!(collect!([1, "2", true, null]).avg().unwrap(), 1.0);
    }

    #[test]
    fn test_avg_by_path() {
        let scores = collect!([{"foo": 10}, {"foo": 10}, {"foo": 20}, {"foo": 40}]);
        assert_eq!(scores.avg_by("foo").unwrap(), 20.0);
        assert_eq!(scores.average_by("foo").unwrap(), 20.0);
    }

    #[test]
    fn test_avg_by_falls_back_to_whole_value() {
        let mixed = collect!([{"foo": 10}, 20]);
        assert_eq!(mixed.avg_by("foo").unwrap(), 15.0);
    }

    #[test]
    fn test_avg_by_falsy_nested_value() {
        let items = collect!([{"foo": 0}, {"foo": 4}]);
        // Truthy policy: `{"foo": 0}` falls back to the map itself, which adds nothing.
        assert_eq!(items.avg_by("foo").unwrap(), 2.0);

        let present = items.with_options(
            CollectionOptions::new().with_path_fallback(PathFallback::Present),
        );
        assert_eq!(present.avg_by("foo").unwrap(), 2.0);
    }

    #[test]
    fn test_avg_empty_is_divide_by_zero() {
        assert!(matches!(
            Collection::default().avg(),
            Err(Error::DivideByZero(_))
        ));
    }

    #[test]
    fn test_avg_counts_maps_without_summing_them() {
        let mixed = collect!([{"bar": 9}, 6, {"foo": 0}]);
        assert_eq!(mixed.avg_by("foo").unwrap(), 2.0);
        assert_eq!(collect!([[1, 2], 4]).avg().unwrap(), 2.0);
    }

    #[test]
    fn test_avg_non_numeric() {
        assert!(matches!(
            Collection::from(vec!["a", "b"]).avg(),
            Err(Error::NotNumeric(_))
        ));
    }

    #[test]
    fn test_count_by_first_seen_order() {
        let counts = Collection::from(vec![3, 1, 3, 2]).count_by().unwrap();
        let keys: Vec<String> = counts.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["3", "1", "2"]);
        assert_eq!(counts.get(3), Some(&Value::from(2)));
    }

    #[test]
    fn test_count_by_merges_numeric_strings() {
        let counts = collect!([1, "1", 1.7]).count_by().unwrap();
        assert_eq!(counts, collect!({"1": 3}));
    }

    #[test]
    fn test_count_by_rejects_maps() {
        let result = collect!([[1], [2]]).count_by();
        assert!(matches!(result, Err(Error::InvalidKey(_))));
    }

    #[test]
    fn test_duplicates_loose_and_strict() {
        let values = collect!([1, "1", 2, 1]);
        assert_eq!(values.duplicates().count(), 2);
        let strict = values.duplicates_strict();
        assert_eq!(strict.count(), 1);
        assert_eq!(strict.get(3), Some(&Value::from(1)));
    }

    #[test]
    fn test_duplicates_by() {
        let employees = collect!([
            {"email": "a@g.com", "position": "Developer"},
            {"email": "j@g.com", "position": "Designer"},
            {"email": "v@g.com", "position": "Developer"}
        ]);
        assert_eq!(
            employees.duplicates_by("position"),
            collect!({"2": "Developer"})
        );
        assert_eq!(employees.duplicates_strict_by("email").count(), 0);
    }
}
