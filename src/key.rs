//! Entry keys.
//!
//! A [`Key`] is either a non-negative-by-convention integer index or an arbitrary string.
//! Strings that spell a canonical decimal integer are normalized to [`Key::Int`], so
//! `"1"` and `1` always address the same entry.
//!
//! ```rust
//! use fluent_collection::Key;
//!
//! assert_eq!(Key::from("7"), Key::Int(7));
//! assert_eq!(Key::from("07"), Key::Str("07".to_string()));
//! assert_eq!(Key::from("name").to_string(), "name");
//! ```

use crate::{Error, Number, Result, Value};
use serde::{Serialize, Serializer};
use std::fmt;

/// A scalar entry key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Returns `true` if this is an integer key.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// If this is an integer key, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    /// Builds a key from a string, normalizing canonical decimal integers.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match canonical_int(s) {
            Some(i) => Key::Int(i),
            None => Key::Str(s.to_string()),
        }
    }

    /// Converts a value into a key.
    ///
    /// Booleans become `0`/`1`, floats are truncated toward zero and `null` becomes the
    /// empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] for nested maps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{Key, Value};
    ///
    /// assert_eq!(Key::try_from_value(&Value::from(true)).unwrap(), Key::Int(1));
    /// assert_eq!(Key::try_from_value(&Value::from(2.9)).unwrap(), Key::Int(2));
    /// assert!(Key::try_from_value(&Value::from(vec![1, 2])).is_err());
    /// ```
    pub fn try_from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Key::Str(String::new())),
            Value::Bool(b) => Ok(Key::Int(i64::from(*b))),
            Value::Number(Number::Integer(i)) => Ok(Key::Int(*i)),
            Value::Number(Number::Float(f)) => {
                if f.is_finite() {
                    Ok(Key::Int(f.trunc() as i64))
                } else {
                    Err(Error::invalid_key(format!("non-finite float {}", f)))
                }
            }
            Value::String(s) => Ok(Key::parse(s)),
            Value::Map(_) => Err(Error::invalid_key("nested map cannot be used as a key")),
        }
    }

    /// Converts this key back into a value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Key::Int(i) => Value::Number(Number::Integer(*i)),
            Key::Str(s) => Value::String(s.clone()),
        }
    }
}

/// Parses `s` when it is exactly the decimal rendering of an `i64`.
fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if s == "-0" {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        // Positions past `i64::MAX` keep their digits as a string key.
        match i64::try_from(value) {
            Ok(index) => Key::Int(index),
            Err(_) => Key::Str(value.to_string()),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::parse(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_int(&value) {
            Some(i) => Key::Int(i),
            None => Key::Str(value),
        }
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_strings_normalize() {
        assert_eq!(Key::from("0"), Key::Int(0));
        assert_eq!(Key::from("42"), Key::Int(42));
        assert_eq!(Key::from("-3"), Key::Int(-3));
        assert_eq!(Key::from("42".to_string()), Key::Int(42));
    }

    #[test]
    fn test_non_canonical_strings_stay_strings() {
        for s in ["", "-", "-0", "007", "1.0", " 1", "1 ", "1e3", "abc"] {
            assert_eq!(Key::from(s), Key::Str(s.to_string()), "{:?}", s);
        }
        assert_eq!(
            Key::from("99999999999999999999"),
            Key::Str("99999999999999999999".to_string())
        );
    }

    #[test]
    fn test_try_from_value() {
        assert_eq!(Key::try_from_value(&Value::Null).unwrap(), Key::Str(String::new()));
        assert_eq!(Key::try_from_value(&Value::from(false)).unwrap(), Key::Int(0));
        assert_eq!(Key::try_from_value(&Value::from(-2.7)).unwrap(), Key::Int(-2));
        assert_eq!(Key::try_from_value(&Value::from("12")).unwrap(), Key::Int(12));
        assert!(matches!(
            Key::try_from_value(&Value::from(f64::NAN)),
            Err(Error::InvalidKey(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::Int(5).to_string(), "5");
        assert_eq!(Key::from("desk").to_string(), "desk");
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(Key::from(3usize), Key::Int(3));
        if usize::MAX as u128 > i64::MAX as u128 {
            assert_eq!(Key::from(usize::MAX), Key::Str(usize::MAX.to_string()));
        } else {
            assert_eq!(Key::from(usize::MAX), Key::Int(usize::MAX as i64));
        }
    }
}
