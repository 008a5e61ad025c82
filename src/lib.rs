//! # fluent_collection
//!
//! An immutable, fluent collection over a hybrid ordered map: one container that is both
//! a sequential list (integer keys `0..n`) and an associative map (string keys), with
//! insertion order preserved.
//!
//! ## Key Features
//!
//! - **Immutable**: every operation returns a new [`Collection`] (or a scalar) and leaves
//!   the receiver untouched
//! - **Hybrid keys**: `"1"` and `1` address the same entry, and `push` continues after the
//!   largest integer key
//! - **Loose and strict equality**: cross-type comparison (`1 == "1"`) or exact type match,
//!   selectable per collection through [`CollectionOptions`]
//! - **Serde integration**: any `T: Serialize` converts into a [`Value`] or a collection
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! fluent_collection = "0.1"
//! ```
//!
//! ### Building collections
//!
//! ```rust
//! use fluent_collection::{collect, Collection, Value};
//!
//! let numbers = Collection::from(vec![1, 2, 3, 4, 5]);
//! let product = collect!({"name": "Desk", "price": 100});
//!
//! assert_eq!(numbers.count(), 5);
//! assert_eq!(product.get("price"), Some(&Value::from(100)));
//! ```
//!
//! ### Chaining operations
//!
//! ```rust
//! use fluent_collection::{collect, Collection};
//!
//! let chunks = Collection::from(vec![1, 2, 3, 4, 5, 6, 7])
//!     .diff(vec![2, 4])
//!     .chunk(2)
//!     .unwrap();
//! assert_eq!(chunks, collect!([[1, 3], [5, 6], [7]]));
//!
//! let flat = collect!({"products": {"desk": {"price": 100}}}).dot();
//! assert_eq!(flat, collect!({"products.desk.price": 100}));
//! ```
//!
//! ### Loose and strict membership
//!
//! ```rust
//! use fluent_collection::collect;
//!
//! let product = collect!({"name": "Desk", "price": 100});
//! assert!(product.contains("100"));
//! assert!(!product.contains_strict("100"));
//! ```
//!
//! ### From Rust data
//!
//! ```rust
//! use fluent_collection::Collection;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Employee { email: String, position: String }
//!
//! let staff = vec![
//!     Employee { email: "abigail@example.com".into(), position: "Developer".into() },
//!     Employee { email: "james@example.com".into(), position: "Designer".into() },
//!     Employee { email: "victoria@example.com".into(), position: "Developer".into() },
//! ];
//! let collection = Collection::from_serialize(&staff).unwrap();
//! assert_eq!(collection.duplicates_by("position").count(), 1);
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`](https://docs.rs/tracing) and installs no
//! subscriber. Failed operations emit a `DEBUG` event naming the operation, and
//! [`Collection::dump`] emits the collection's contents.
//!
//! ## Performance Characteristics
//!
//! - Lookups by key: O(1)
//! - Most operations: O(n) over the receiver
//! - `diff`, `diff_assoc_using`, `duplicates`: O(n·m), since loose equality has no hash

pub mod aggregate;
pub mod collection;
pub mod compare;
pub mod diff;
pub mod error;
pub mod key;
pub mod macros;
pub mod map;
pub mod options;
pub mod search;
pub mod ser;
pub mod structure;
pub mod value;

pub use collection::Collection;
pub use error::{Error, Result};
pub use key::Key;
pub use map::OrderedMap;
pub use options::{CollectionOptions, Equality, PathFallback};
pub use search::Needle;
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use fluent_collection::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value: Value = to_value(&point).unwrap();
/// assert!(value.is_map());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (tuple or struct enum variants,
/// map keys that are themselves maps).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
