//! Configuration options for collections.
//!
//! This module provides types that tune how a [`Collection`](crate::Collection) compares
//! and flattens values:
//!
//! - [`CollectionOptions`]: main configuration struct
//! - [`Equality`]: loose or strict value comparison for `diff` and `duplicates`
//! - [`PathFallback`]: when `avg_by` uses a nested value instead of the whole entry
//!
//! Options travel with a collection: every collection derived from another inherits its
//! options.
//!
//! ## Examples
//!
//! ```rust
//! use fluent_collection::{Collection, CollectionOptions, Equality};
//!
//! let options = CollectionOptions::new()
//!     .with_equality(Equality::Strict)
//!     .with_dot_separator("/");
//!
//! let numbers = Collection::from(vec![1, 2, 3]).with_options(options);
//! let diff = numbers.diff(vec!["1", "2"]);
//! assert_eq!(diff.count(), 3);
//! ```

use crate::compare;
use crate::Value;

/// Which equality relation value comparisons use.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::{Equality, Value};
///
/// assert!(Equality::Loose.values_eq(&Value::from(1), &Value::from("1")));
/// assert!(!Equality::Strict.values_eq(&Value::from(1), &Value::from("1")));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Equality {
    #[default]
    Loose,
    Strict,
}

impl Equality {
    /// Compares two values with this relation.
    #[must_use]
    pub fn values_eq(&self, a: &Value, b: &Value) -> bool {
        match self {
            Equality::Loose => compare::loose_eq(a, b),
            Equality::Strict => compare::strict_eq(a, b),
        }
    }
}

/// When `avg_by` aggregates the nested value at the path key instead of the whole entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PathFallback {
    /// Use the nested value only when it is truthy; `0`, `""`, `false`, `null` and empty
    /// maps fall back to the whole entry.
    #[default]
    Truthy,
    /// Use the nested value whenever the key is present with a non-null value.
    Present,
}

impl PathFallback {
    /// Returns `true` when `nested` should be aggregated in place of its parent.
    #[must_use]
    pub fn accepts(&self, nested: &Value) -> bool {
        match self {
            PathFallback::Truthy => nested.is_truthy(),
            PathFallback::Present => !nested.is_null(),
        }
    }
}

/// Configuration options for a collection.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::{CollectionOptions, Equality, PathFallback};
///
/// let options = CollectionOptions::new();
/// assert_eq!(options.equality, Equality::Loose);
/// assert_eq!(options.dot_separator, ".");
/// assert_eq!(options.path_fallback, PathFallback::Truthy);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionOptions {
    pub equality: Equality,
    pub dot_separator: String,
    pub path_fallback: PathFallback,
}

impl Default for CollectionOptions {
    fn default() -> Self {
        CollectionOptions {
            equality: Equality::default(),
            dot_separator: ".".to_string(),
            path_fallback: PathFallback::default(),
        }
    }
}

impl CollectionOptions {
    /// Creates default options (loose equality, `.` separator, truthy path fallback).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that compare values strictly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{CollectionOptions, Equality};
    ///
    /// assert_eq!(CollectionOptions::strict().equality, Equality::Strict);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        CollectionOptions {
            equality: Equality::Strict,
            ..Default::default()
        }
    }

    /// Sets the equality relation used by `diff` and `duplicates`.
    #[must_use]
    pub fn with_equality(mut self, equality: Equality) -> Self {
        self.equality = equality;
        self
    }

    /// Sets the separator `dot` joins path segments with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::CollectionOptions;
    ///
    /// let options = CollectionOptions::new().with_dot_separator("->");
    /// assert_eq!(options.dot_separator, "->");
    /// ```
    #[must_use]
    pub fn with_dot_separator(mut self, separator: impl Into<String>) -> Self {
        self.dot_separator = separator.into();
        self
    }

    /// Sets the policy `avg_by` uses to pick nested values.
    #[must_use]
    pub fn with_path_fallback(mut self, fallback: PathFallback) -> Self {
        self.path_fallback = fallback;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_fallback() {
        assert!(PathFallback::Truthy.accepts(&Value::from(3)));
        assert!(!PathFallback::Truthy.accepts(&Value::from(0)));
        assert!(PathFallback::Present.accepts(&Value::from(0)));
        assert!(!PathFallback::Present.accepts(&Value::Null));
    }

    #[test]
    fn test_builder() {
        let options = CollectionOptions::new()
            .with_equality(Equality::Strict)
            .with_dot_separator("/")
            .with_path_fallback(PathFallback::Present);
        assert_eq!(options.equality, Equality::Strict);
        assert_eq!(options.dot_separator, "/");
        assert_eq!(options.path_fallback, PathFallback::Present);
    }
}
