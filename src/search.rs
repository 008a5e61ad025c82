//! Membership tests.
//!
//! Plain needles are compared against each value; pair needles look inside nested maps.
//! The `contains` family is loose, the `contains_strict` family is strict.
//!
//! ```rust
//! use fluent_collection::{collect, Needle, Value};
//!
//! let products = collect!([
//!     {"product": "Desk", "price": 200},
//!     {"product": "Chair", "price": 100}
//! ]);
//! assert!(products.contains_pair("product", "Desk"));
//! assert!(products.doesnt_contain_pair("product", "Bookcase"));
//!
//! let needle = Needle::from_args(vec![Value::from("price"), Value::from("100")]).unwrap();
//! assert!(products.contains_needle(&needle, Default::default()));
//! ```

use crate::{Collection, Equality, Error, Key, Result, Value};

/// What a membership test looks for.
#[derive(Clone, Debug, PartialEq)]
pub enum Needle {
    /// A value compared against every entry value.
    Value(Value),
    /// A key and value looked up inside every nested map.
    Pair(Key, Value),
}

impl Needle {
    /// Builds a needle from a positional argument list.
    ///
    /// One argument is a plain value, two are a key and a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for any other number of arguments, and
    /// [`Error::InvalidKey`] when the key argument is a nested map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{Error, Key, Needle, Value};
    ///
    /// let pair = Needle::from_args(vec![Value::from("id"), Value::from(3)]).unwrap();
    /// assert_eq!(pair, Needle::Pair(Key::from("id"), Value::from(3)));
    ///
    /// let err = Needle::from_args(vec![]).unwrap_err();
    /// assert!(matches!(err, Error::InvalidArgument(_)));
    /// ```
    pub fn from_args(args: Vec<Value>) -> Result<Needle> {
        let arity = args.len();
        let mut args = args.into_iter();
        match (args.next(), args.next(), arity) {
            (Some(value), None, 1) => Ok(Needle::Value(value)),
            (Some(key), Some(value), 2) => {
                let key = Key::try_from_value(&key).map_err(|err| err.traced("contains"))?;
                Ok(Needle::Pair(key, value))
            }
            _ => Err(Error::invalid_argument(format!(
                "contains expects 1 or 2 arguments, got {}",
                arity
            ))
            .traced("contains")),
        }
    }
}

impl From<Value> for Needle {
    fn from(value: Value) -> Self {
        Needle::Value(value)
    }
}

impl Collection {
    /// Returns `true` if any value loosely equals `needle`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collect;
    ///
    /// let product = collect!({"name": "Desk", "price": 100});
    /// assert!(product.contains("Desk"));
    /// assert!(product.contains("100"));
    /// assert!(!product.contains("New York"));
    /// ```
    #[must_use]
    pub fn contains(&self, needle: impl Into<Value>) -> bool {
        self.contains_needle(&Needle::Value(needle.into()), Equality::Loose)
    }

    /// Returns `true` if any entry satisfies `predicate(value, key)`.
    #[must_use]
    pub fn contains_where<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        self.iter().any(|(key, value)| predicate(value, key))
    }

    /// Returns `true` if some nested map holds a non-null value at `key` loosely equal to
    /// `value`.
    #[must_use]
    pub fn contains_pair(&self, key: impl Into<Key>, value: impl Into<Value>) -> bool {
        self.contains_needle(&Needle::Pair(key.into(), value.into()), Equality::Loose)
    }

    /// Returns `true` if any value strictly equals `needle`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collect;
    ///
    /// let product = collect!({"name": "Desk", "price": 100});
    /// assert!(product.contains_strict(100));
    /// assert!(!product.contains_strict("100"));
    /// ```
    #[must_use]
    pub fn contains_strict(&self, needle: impl Into<Value>) -> bool {
        self.contains_needle(&Needle::Value(needle.into()), Equality::Strict)
    }

    /// Strict variant of [`contains_pair`](Self::contains_pair).
    #[must_use]
    pub fn contains_strict_pair(&self, key: impl Into<Key>, value: impl Into<Value>) -> bool {
        self.contains_needle(&Needle::Pair(key.into(), value.into()), Equality::Strict)
    }

    /// Negation of [`contains`](Self::contains).
    #[must_use]
    pub fn doesnt_contain(&self, needle: impl Into<Value>) -> bool {
        !self.contains(needle)
    }

    /// Negation of [`contains_where`](Self::contains_where).
    #[must_use]
    pub fn doesnt_contain_where<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Value, &Key) -> bool,
    {
        !self.contains_where(predicate)
    }

    /// Negation of [`contains_pair`](Self::contains_pair).
    #[must_use]
    pub fn doesnt_contain_pair(&self, key: impl Into<Key>, value: impl Into<Value>) -> bool {
        !self.contains_pair(key, value)
    }

    /// Evaluates a [`Needle`] with the given equality.
    #[must_use]
    pub fn contains_needle(&self, needle: &Needle, equality: Equality) -> bool {
        match needle {
            Needle::Value(expected) => self
                .values()
                .any(|value| equality.values_eq(value, expected)),
            Needle::Pair(key, expected) => self.values().any(|value| {
                value
                    .get(key)
                    .filter(|nested| !nested.is_null())
                    .map_or(false, |nested| equality.values_eq(nested, expected))
            }),
        }
    }
}
