//! Ordered hybrid map backing every collection.
//!
//! This module provides [`OrderedMap`], a wrapper around [`IndexMap`] keyed by [`Key`]
//! that keeps insertion order and tracks the next free integer index, so it behaves both
//! as a list (`push`) and as an associative map (`insert`).
//!
//! ## Why IndexMap?
//!
//! - **Iteration order**: entries come back in insertion order
//! - **Stable positions**: replacing the value of an existing key keeps its position
//! - **O(1) lookup**: key membership checks stay cheap in the diff operations
//!
//! ## Examples
//!
//! ```rust
//! use fluent_collection::{Key, OrderedMap, Value};
//!
//! let mut map = OrderedMap::new();
//! map.push(Value::from("a"));
//! map.insert(Key::from("name"), Value::from("Desk"));
//! map.push(Value::from("b"));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec![Key::Int(0), Key::from("name"), Key::Int(1)]);
//! ```

use crate::{Key, Value};
use indexmap::IndexMap;

/// An insertion-ordered map of [`Key`]s to [`Value`]s.
///
/// Equality is order-sensitive: two maps are equal when they hold the same entries in the
/// same order.
#[derive(Debug, Clone, Default)]
pub struct OrderedMap {
    entries: IndexMap<Key, Value>,
    next_index: i64,
}

impl OrderedMap {
    /// Creates an empty `OrderedMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        OrderedMap {
            entries: IndexMap::new(),
            next_index: 0,
        }
    }

    /// Creates an empty `OrderedMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap {
            entries: IndexMap::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the value is replaced in place and the old
    /// value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{Key, OrderedMap, Value};
    ///
    /// let mut map = OrderedMap::new();
    /// assert!(map.insert(Key::from("key"), Value::from(42)).is_none());
    /// assert!(map.insert(Key::from("key"), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        if let Key::Int(i) = key {
            if i >= self.next_index {
                self.next_index = i.saturating_add(1);
            }
        }
        self.entries.insert(key, value)
    }

    /// Appends a value under the next free integer key and returns that key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{Key, OrderedMap, Value};
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(Key::Int(5), Value::from("five"));
    /// assert_eq!(map.push(Value::from("six")), Key::Int(6));
    /// ```
    pub fn push(&mut self, value: Value) -> Key {
        let key = Key::Int(self.next_index);
        self.insert(key.clone(), value);
        key
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if the map holds `key`.
    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when the keys are exactly `0, 1, .., len - 1` in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{Key, OrderedMap, Value};
    ///
    /// let list: OrderedMap = vec![Value::from(1), Value::from(2)].into_iter().collect();
    /// assert!(list.is_list());
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(Key::Int(1), Value::Null);
    /// assert!(!map.is_list());
    /// ```
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| *key == Key::Int(i as i64))
    }

    /// Returns the first entry in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<(&Key, &Value)> {
        self.entries.first()
    }

    /// Returns the last entry in insertion order.
    #[must_use]
    pub fn last(&self) -> Option<(&Key, &Value)> {
        self.entries.last()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Merges `other` into `self`, recursing into maps that collide on string keys.
    ///
    /// - Integer keys of `other` are appended with [`push`](Self::push).
    /// - A string key missing from `self` is inserted.
    /// - A string key present in both turns the existing entry into a map (a scalar
    ///   becomes a one-element list); `other`'s value is then merged into it when it is a
    ///   map, or appended when it is a scalar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{value, Key, Value};
    ///
    /// let mut left = value!({"tags": "a", "id": 1}).into_map().unwrap();
    /// let right = value!({"tags": "b"}).into_map().unwrap();
    /// left.merge_recursive(&right);
    ///
    /// assert_eq!(left.get(&Key::from("tags")), Some(&value!(["a", "b"])));
    /// ```
    pub fn merge_recursive(&mut self, other: &OrderedMap) {
        for (key, value) in other.iter() {
            match key {
                Key::Int(_) => {
                    self.push(value.clone());
                }
                Key::Str(_) => match self.entries.get_mut(key) {
                    None => {
                        self.insert(key.clone(), value.clone());
                    }
                    Some(existing) => {
                        let mut target = match std::mem::take(existing) {
                            Value::Map(map) => map,
                            scalar => std::iter::once(scalar).collect(),
                        };
                        match value {
                            Value::Map(nested) => target.merge_recursive(nested),
                            scalar => {
                                target.push(scalar.clone());
                            }
                        }
                        *existing = Value::Map(target);
                    }
                },
            }
        }
    }
}

impl PartialEq for OrderedMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl IntoIterator for OrderedMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(Key, Value)> for OrderedMap {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut map = OrderedMap::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl FromIterator<Value> for OrderedMap {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut map = OrderedMap::with_capacity(iter.size_hint().0);
        for value in iter {
            map.push(value);
        }
        map
    }
}
