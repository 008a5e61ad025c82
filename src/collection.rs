//! The [`Collection`] type: construction, accessors and combination.
//!
//! The remaining operations live next to their concern:
//!
//! - aggregation (`avg`, `count_by`, `duplicates`) in [`aggregate`](crate::aggregate)
//! - structural transforms (`chunk`, `chunk_while`, `collapse`, `dot`) in [`structure`](crate::structure)
//! - set difference (`diff`, `diff_assoc`, `diff_keys`) in [`diff`](crate::diff)
//! - membership (`contains` and friends) in [`search`](crate::search)

use crate::{CollectionOptions, Error, Key, OrderedMap, Result, Value};
use serde::{Serialize, Serializer};
use std::fmt;

/// An immutable, ordered, key-addressable collection with a fluent operation set.
///
/// Every operation reads the current entries and returns a new collection (or a scalar);
/// the receiver is never modified. Derived collections inherit the receiver's
/// [`CollectionOptions`].
///
/// Two collections are equal when their entries are equal in order; options are not
/// compared.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::{collect, Collection, Value};
///
/// let numbers = Collection::from(vec![1, 2, 3, 4]);
/// assert_eq!(numbers.count(), 4);
/// assert_eq!(numbers.last(), Some(&Value::from(4)));
///
/// let product = collect!({"name": "Desk", "price": 100});
/// assert!(product.contains("Desk"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Collection {
    pub(crate) items: OrderedMap,
    pub(crate) options: CollectionOptions,
}

impl Collection {
    /// Wraps an ordered map with default options.
    #[must_use]
    pub fn new(items: OrderedMap) -> Self {
        Collection {
            items,
            options: CollectionOptions::default(),
        }
    }

    /// Converts any serializable Rust value into a collection.
    ///
    /// Sequences become list-keyed collections, structs and maps become associative ones,
    /// and scalars become a one-item list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::Collection;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Product { name: String, price: u32 }
    ///
    /// let desk = Product { name: "Desk".to_string(), price: 100 };
    /// let collection = Collection::from_serialize(&desk).unwrap();
    /// assert!(collection.contains_strict(100));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented (e.g. enum tuple variants, or
    /// map keys that are themselves maps).
    pub fn from_serialize<T>(value: &T) -> Result<Self>
    where
        T: ?Sized + Serialize,
    {
        crate::to_value(value).map(Collection::from)
    }

    /// Returns this collection with different options.
    #[must_use]
    pub fn with_options(mut self, options: CollectionOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds a collection from `items` that shares this collection's options.
    pub(crate) fn derive(&self, items: OrderedMap) -> Collection {
        Collection {
            items,
            options: self.options.clone(),
        }
    }

    /// Returns the options this collection was created with.
    #[must_use]
    pub fn options(&self) -> &CollectionOptions {
        &self.options
    }

    /// Returns the full ordered entry sequence, read-only.
    #[must_use]
    pub fn all(&self) -> &OrderedMap {
        &self.items
    }

    /// Consumes the collection and returns its entries.
    #[must_use]
    pub fn into_inner(self) -> OrderedMap {
        self.items
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the collection has exactly one entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::Collection;
    ///
    /// assert!(!Collection::default().contains_one_item());
    /// assert!(Collection::from(vec!["1"]).contains_one_item());
    /// assert!(!Collection::from(vec!["1", "2"]).contains_one_item());
    /// ```
    #[must_use]
    pub fn contains_one_item(&self) -> bool {
        self.count() == 1
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&Value> {
        self.items.get(&key.into())
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.items.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.items.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.items.iter()
    }

    /// Returns the value of the first entry, or `None` when empty.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.items.first().map(|(_, value)| value)
    }

    /// Returns the value of the last entry, or `None` when empty.
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.items.last().map(|(_, value)| value)
    }

    /// Returns the value of the last entry satisfying `predicate(value, key)`.
    ///
    /// Entries are scanned in reverse insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{Collection, Value};
    ///
    /// let numbers = Collection::from(vec![1, 2, 3, 4]);
    /// let last_small = numbers.last_where(|value, _| value.as_i64() < Some(3));
    /// assert_eq!(last_small, Some(&Value::from(2)));
    /// assert_eq!(numbers.last_where(|value, _| value.as_i64() > Some(9)), None);
    /// ```
    pub fn last_where<F>(&self, mut predicate: F) -> Option<&Value>
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.items
            .iter()
            .rev()
            .find(|&(key, value)| predicate(value, key))
            .map(|(_, value)| value)
    }

    /// Returns the value of the last entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] when there are no entries.
    pub fn last_or_fail(&self) -> Result<&Value> {
        self.last().ok_or_else(|| {
            Error::empty_collection("last_or_fail requires at least one item").traced("last_or_fail")
        })
    }

    /// Returns an independent copy with the same entries.
    #[must_use]
    pub fn collect(&self) -> Collection {
        self.clone()
    }

    /// Pairs this collection's values (as keys) with `other`'s values, in order.
    ///
    /// Values are turned into keys with [`Key::try_from_value`]; when two values map to the
    /// same key the later pairing overwrites the earlier one in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{collect, Collection, Value};
    ///
    /// let combined = Collection::from(vec!["name", "age"])
    ///     .combine(collect!(["George", 29]))
    ///     .unwrap();
    /// assert_eq!(combined.get("name"), Some(&Value::from("George")));
    /// assert_eq!(combined.get("age"), Some(&Value::from(29)));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] when the collections differ in size, and
    /// [`Error::InvalidKey`] when a value of this collection is a nested map.
    pub fn combine(&self, other: impl Into<Collection>) -> Result<Collection> {
        let other: Collection = other.into();
        if self.count() != other.count() {
            return Err(Error::length_mismatch(self.count(), other.count()).traced("combine"));
        }

        let mut combined = OrderedMap::with_capacity(self.count());
        for (key_source, value) in self.values().zip(other.values()) {
            let key = Key::try_from_value(key_source).map_err(|err| err.traced("combine"))?;
            combined.insert(key, value.clone());
        }
        Ok(self.derive(combined))
    }

    /// Appends the values of `other` after this collection's entries.
    ///
    /// Appended values get fresh sequential integer keys; the keys of `other` are
    /// discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{collect, Collection};
    ///
    /// let names = Collection::from(vec!["John Doe"])
    ///     .concat(vec!["Jane Doe"])
    ///     .concat(collect!({"name": "Johnny Doe"}));
    /// assert_eq!(names, Collection::from(vec!["John Doe", "Jane Doe", "Johnny Doe"]));
    /// ```
    #[must_use]
    pub fn concat(&self, other: impl Into<Collection>) -> Collection {
        let other: Collection = other.into();
        let mut items = self.items.clone();
        for (_, value) in other.items {
            items.push(value);
        }
        self.derive(items)
    }

    /// Emits the collection as a `DEBUG` tracing event and returns it unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::Collection;
    ///
    /// let total = Collection::from(vec![1, 2, 3]).dump().count();
    /// assert_eq!(total, 3);
    /// ```
    pub fn dump(&self) -> &Self {
        tracing::debug!(count = self.count(), items = %self.items, "collection dump");
        self
    }
}

impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.items)
    }
}

impl Serialize for Collection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}

impl From<OrderedMap> for Collection {
    fn from(items: OrderedMap) -> Self {
        Collection::new(items)
    }
}

/// A nested map becomes the collection's entries, `null` becomes an empty collection and
/// any other scalar becomes a one-item list.
impl From<Value> for Collection {
    fn from(value: Value) -> Self {
        match value {
            Value::Map(items) => Collection::new(items),
            Value::Null => Collection::default(),
            scalar => Collection::new(std::iter::once(scalar).collect()),
        }
    }
}

impl From<&Collection> for Collection {
    fn from(collection: &Collection) -> Self {
        collection.clone()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Collection {
    fn from(values: Vec<T>) -> Self {
        Collection::new(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Collection {
    fn from(values: [T; N]) -> Self {
        Collection::new(values.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Collection {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Collection::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Collection::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
