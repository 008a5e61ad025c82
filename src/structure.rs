//! Structural transforms: chunking, windowed chunking, flattening.

use crate::{Collection, Error, Key, OrderedMap, Result, Value};

impl Collection {
    /// Splits the values into consecutive lists of at most `size` items.
    ///
    /// Each chunk is re-indexed from `0`, and so is the outer collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{collect, Collection};
    ///
    /// let chunks = Collection::from(vec![1, 2, 3, 4, 5, 6, 7]).chunk(4).unwrap();
    /// assert_eq!(chunks, collect!([[1, 2, 3, 4], [5, 6, 7]]));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `size` is zero.
    pub fn chunk(&self, size: usize) -> Result<Collection> {
        if size == 0 {
            return Err(
                Error::invalid_argument("chunk size must be greater than zero").traced("chunk"),
            );
        }

        let values: Vec<&Value> = self.values().collect();
        let chunks = values
            .chunks(size)
            .map(|chunk| Value::Map(chunk.iter().map(|&value| value.clone()).collect()))
            .collect();
        Ok(self.derive(chunks))
    }

    /// Groups consecutive values while `predicate(value, key, chunk)` holds.
    ///
    /// The first entry opens the first chunk. Each following entry joins the current
    /// chunk when the predicate returns `true`; otherwise the chunk is closed and the entry
    /// opens a new one. The predicate sees a read-only snapshot of the chunk being built.
    /// An empty collection yields an empty result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{collect, Collection};
    ///
    /// let letters = Collection::from(vec!["A", "A", "B", "B", "C", "C", "C", "D"]);
    /// let runs = letters.chunk_while(|value, _, chunk| chunk.last() == Some(value));
    /// assert_eq!(runs, collect!([["A", "A"], ["B", "B"], ["C", "C", "C"], ["D"]]));
    /// ```
    pub fn chunk_while<F>(&self, mut predicate: F) -> Collection
    where
        F: FnMut(&Value, &Key, &Collection) -> bool,
    {
        let mut chunks = OrderedMap::new();
        let mut entries = self.iter();
        let Some((_, first)) = entries.next() else {
            return self.derive(chunks);
        };

        let mut current = self.derive(std::iter::once(first.clone()).collect());
        for (key, value) in entries {
            if predicate(value, key, &current) {
                current.items.push(value.clone());
            } else {
                let next = self.derive(std::iter::once(value.clone()).collect());
                let closed = std::mem::replace(&mut current, next);
                chunks.push(Value::Map(closed.items));
            }
        }
        chunks.push(Value::Map(current.items));
        self.derive(chunks)
    }

    /// Flattens one level: nested maps are merged into the result, scalars are appended.
    ///
    /// Integer keys are renumbered; colliding string keys merge recursively (see
    /// [`OrderedMap::merge_recursive`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{collect, Collection};
    ///
    /// let nested = collect!([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// assert_eq!(nested.collapse(), Collection::from(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]));
    /// ```
    #[must_use]
    pub fn collapse(&self) -> Collection {
        let mut merged = OrderedMap::new();
        for value in self.values() {
            match value {
                Value::Map(nested) => merged.merge_recursive(nested),
                scalar => {
                    merged.push(scalar.clone());
                }
            }
        }
        self.derive(merged)
    }

    /// Flattens nested maps into a single level keyed by joined paths.
    ///
    /// Path segments are joined with the configured separator (`.` by default); integer
    /// keys become segments too. Empty nested maps produce no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{collect, Value};
    ///
    /// let flat = collect!({"products": {"desk": {"price": [1, 2]}}}).dot();
    /// assert_eq!(flat.get("products.desk.price.0"), Some(&Value::from(1)));
    /// assert_eq!(flat.get("products.desk.price.1"), Some(&Value::from(2)));
    /// ```
    #[must_use]
    pub fn dot(&self) -> Collection {
        let separator = &self.options.dot_separator;
        let mut current = self.items.clone();

        loop {
            let mut nested_found = false;
            let mut flattened = OrderedMap::with_capacity(current.len());
            for (key, value) in current {
                match value {
                    Value::Map(nested) => {
                        nested_found = true;
                        for (segment, inner) in nested {
                            let path = format!("{}{}{}", key, separator, segment);
                            flattened.insert(Key::from(path), inner);
                        }
                    }
                    scalar => {
                        flattened.insert(key, scalar);
                    }
                }
            }
            current = flattened;
            if !nested_found {
                break;
            }
        }

        self.derive(current)
    }
}
