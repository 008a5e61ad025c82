//! Error types for collection operations.
//!
//! Every fallible operation returns [`Result`], and each failure class has its own
//! [`Error`] variant so callers can match on what went wrong.
//!
//! ## Error Categories
//!
//! - **Invalid arguments**: a zero chunk size, or a needle built from the wrong number of arguments
//! - **Length mismatches**: `combine` with collections of different sizes
//! - **Arithmetic**: averaging an empty collection, or a value that is not numeric
//! - **Keys**: a nested map used where a scalar key is required
//! - **Conversion**: a Rust value that cannot be turned into a [`Value`](crate::Value)
//!
//! ## Examples
//!
//! ```rust
//! use fluent_collection::{Collection, Error};
//!
//! let result = Collection::from(vec![1, 2, 3]).chunk(0);
//! assert!(matches!(result, Err(Error::InvalidArgument(_))));
//!
//! if let Err(err) = result {
//!     eprintln!("chunk failed: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by collection operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed call: wrong arity or an out-of-range argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Two collections that must be paired have different sizes
    #[error("Length mismatch: expected {expected} items, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// Averaging over zero items
    #[error("Division by zero: {0}")]
    DivideByZero(String),

    /// An operation that needs at least one entry ran on an empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// A value that cannot be used as an entry key
    #[error("Illegal key type: {0}")]
    InvalidKey(String),

    /// A value that cannot take part in arithmetic
    #[error("Value is not numeric: {0}")]
    NotNumeric(String),

    /// Unsupported type for conversion into a value
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid argument error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::Error;
    ///
    /// let err = Error::invalid_argument("chunk size must be positive");
    /// assert!(err.to_string().contains("chunk size"));
    /// ```
    pub fn invalid_argument<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidArgument(msg.to_string())
    }

    /// Creates a length mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::Error;
    ///
    /// let err = Error::length_mismatch(2, 3);
    /// assert_eq!(err.to_string(), "Length mismatch: expected 2 items, found 3");
    /// ```
    pub fn length_mismatch(expected: usize, found: usize) -> Self {
        Error::LengthMismatch { expected, found }
    }

    /// Creates a division by zero error.
    pub fn divide_by_zero(msg: &str) -> Self {
        Error::DivideByZero(msg.to_string())
    }

    /// Creates an empty collection error.
    pub fn empty_collection(msg: &str) -> Self {
        Error::EmptyCollection(msg.to_string())
    }

    /// Creates an illegal key error.
    pub fn invalid_key<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidKey(msg.to_string())
    }

    /// Creates a non-numeric value error.
    pub fn not_numeric<T: fmt::Display>(msg: T) -> Self {
        Error::NotNumeric(msg.to_string())
    }

    /// Creates an unsupported type error for Rust types that have no value representation.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Records the failure of `operation` as a debug event and hands the error back.
    pub(crate) fn traced(self, operation: &'static str) -> Self {
        tracing::debug!(operation, error = %self, "collection operation failed");
        self
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::invalid_argument("bad").to_string(),
            "Invalid argument: bad"
        );
        assert_eq!(
            Error::divide_by_zero("avg of empty collection").to_string(),
            "Division by zero: avg of empty collection"
        );
        assert_eq!(
            Error::invalid_key("map").to_string(),
            "Illegal key type: map"
        );
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::ser::Error>::custom("boom");
        assert_eq!(err, Error::Custom("boom".to_string()));
    }
}
