//! Dynamic value representation for collection entries.
//!
//! This module provides the [`Value`] enum which represents anything a collection can
//! hold: scalars and nested [`OrderedMap`]s. There is no separate array variant; a
//! nested sequence is a map whose keys are `0..n`.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, or nested map
//! - [`Number`]: an integer or a float
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use fluent_collection::{value, Value};
//!
//! let null = Value::Null;
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let list = Value::from(vec![1, 2, 3]);
//!
//! let product = value!({
//!     "name": "Desk",
//!     "price": 100
//! });
//! assert!(product.is_map());
//! ```
//!
//! ### Truthiness and Numeric Coercion
//!
//! ```rust
//! use fluent_collection::{Number, Value};
//!
//! assert!(!Value::from("0").is_truthy());
//! assert!(Value::from("0.0").is_truthy());
//! assert_eq!(Value::from(" 12 ").as_numeric(), Some(Number::Integer(12)));
//! assert_eq!(Value::from("abc").as_numeric(), None);
//! ```

use crate::{Key, OrderedMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed collection value.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Map(OrderedMap),
}

/// A numeric value: an integer or a float.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and floats with no fractional part
    /// that fit in i64 range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// Parses a numeric string.
    ///
    /// Accepts optional surrounding whitespace, an optional sign, digits with an optional
    /// fraction, and an optional exponent. Integers that fit in `i64` stay integers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::Number;
    ///
    /// assert_eq!(Number::parse("42"), Some(Number::Integer(42)));
    /// assert_eq!(Number::parse(" -1.5e2"), Some(Number::Float(-150.0)));
    /// assert_eq!(Number::parse(".5"), Some(Number::Float(0.5)));
    /// assert_eq!(Number::parse("inf"), None);
    /// assert_eq!(Number::parse("12abc"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Number> {
        let trimmed = s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'));
        let unsigned = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('+'))
            .unwrap_or(trimmed);

        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
            None => (unsigned, None),
        };

        let (whole, fraction) = match mantissa.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (mantissa, None),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !fraction.map_or(true, all_digits) {
            return None;
        }
        if whole.is_empty() && fraction.map_or(true, str::is_empty) {
            return None;
        }
        if let Some(exponent) = exponent {
            let digits = exponent
                .strip_prefix('-')
                .or_else(|| exponent.strip_prefix('+'))
                .unwrap_or(exponent);
            if digits.is_empty() || !all_digits(digits) {
                return None;
            }
        }

        if fraction.is_none() && exponent.is_none() {
            if let Ok(i) = trimmed.trim_start_matches('+').parse::<i64>() {
                return Some(Number::Integer(i));
            }
        }
        trimmed.parse::<f64>().ok().map(Number::Float)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) if fl.is_nan() => write!(f, "NAN"),
            Number::Float(fl) if fl.is_infinite() => {
                write!(f, "{}", if *fl > 0.0 { "INF" } else { "-INF" })
            }
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a nested map.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is a nested map, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&OrderedMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Unwraps a nested map, or returns `None` for scalars.
    #[must_use]
    pub fn into_map(self) -> Option<OrderedMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` when the value is a nested map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::{value, Value};
    ///
    /// let product = value!({"price": 100});
    /// assert_eq!(product.get("price"), Some(&Value::from(100)));
    /// assert_eq!(Value::from(1).get("price"), None);
    /// ```
    #[must_use]
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(&key.into()))
    }

    /// Returns the boolean interpretation of the value.
    ///
    /// `null`, `false`, `0`, `0.0`, `""`, `"0"` and the empty map are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(Number::Integer(i)) => *i != 0,
            Value::Number(Number::Float(f)) => *f != 0.0,
            Value::String(s) => !(s.is_empty() || s == "0"),
            Value::Map(map) => !map.is_empty(),
        }
    }

    /// Coerces the value to a number for arithmetic.
    ///
    /// Numbers are returned as-is, booleans become `0`/`1`, `null` becomes `0` and numeric
    /// strings are parsed with [`Number::parse`]. Everything else yields `None`.
    #[must_use]
    pub fn as_numeric(&self) -> Option<Number> {
        match self {
            Value::Null => Some(Number::Integer(0)),
            Value::Bool(b) => Some(Number::Integer(i64::from(*b))),
            Value::Number(n) => Some(*n),
            Value::String(s) => Number::parse(s),
            Value::Map(_) => None,
        }
    }

    /// Returns a short name for the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(Number::Integer(_)) => "int",
            Value::Number(Number::Float(_)) => "float",
            Value::String(_) => "string",
            Value::Map(_) => "map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Map(map) => write!(f, "{}", map),
        }
    }
}

impl fmt::Display for OrderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_list() {
            write!(
                f,
                "[{}]",
                self.values()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        } else {
            write!(
                f,
                "{{{}}}",
                self.iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        }
    }
}

impl Serialize for OrderedMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_list() {
            use serde::ser::SerializeSeq;
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for element in self.values() {
                seq.serialize_element(element)?;
            }
            seq.end()
        } else {
            use serde::ser::SerializeMap;
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (k, v) in self.iter() {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Map(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any collection value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Number(Number::Integer(value as i64)))
                } else {
                    Ok(Value::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut map = OrderedMap::new();
                while let Some(elem) = seq.next_element()? {
                    map.push(elem);
                }
                Ok(Value::Map(map))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = OrderedMap::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    values.insert(Key::from(key), value);
                }
                Ok(Value::Map(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting scalars from a Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| crate::Error::custom(format!("cannot convert {} to i64", n))),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {}",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value.type_name()
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(n) => Value::Number(Number::Integer(n)),
            Err(_) => Value::Number(Number::Float(value as f64)),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        value.to_value()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Map(value.into_iter().map(Into::into).collect())
    }
}

impl From<OrderedMap> for Value {
    fn from(value: OrderedMap) -> Self {
        Value::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tryfrom_i64() {
        let result: i64 = TryFrom::try_from(Value::from(42)).unwrap();
        assert_eq!(result, 42);

        let result: i64 = TryFrom::try_from(Value::from(42.0)).unwrap();
        assert_eq!(result, 42);

        assert!(i64::try_from(Value::from("test")).is_err());
        assert!(i64::try_from(Value::from(1.5)).is_err());
    }

    #[test]
    fn test_tryfrom_scalars() {
        assert_eq!(f64::try_from(Value::from(42)).unwrap(), 42.0);
        assert!(bool::try_from(Value::from(true)).unwrap());
        assert!(bool::try_from(Value::from(1)).is_err());
        assert_eq!(String::try_from(Value::from("hello")).unwrap(), "hello");
    }

    #[test]
    fn test_truthiness() {
        let falsy = [
            Value::Null,
            Value::from(false),
            Value::from(0),
            Value::from(0.0),
            Value::from(""),
            Value::from("0"),
            Value::Map(OrderedMap::new()),
        ];
        for value in &falsy {
            assert!(!value.is_truthy(), "{:?} should be falsy", value);
        }

        let truthy = [
            Value::from(true),
            Value::from(-1),
            Value::from(0.1),
            Value::from("a"),
            Value::from("0.0"),
            Value::from(" "),
            Value::from(vec![0]),
        ];
        for value in &truthy {
            assert!(value.is_truthy(), "{:?} should be truthy", value);
        }
    }

    #[test]
    fn test_number_parse() {
        assert_eq!(Number::parse("0"), Some(Number::Integer(0)));
        assert_eq!(Number::parse("+7"), Some(Number::Integer(7)));
        assert_eq!(Number::parse("-7"), Some(Number::Integer(-7)));
        assert_eq!(Number::parse("1."), Some(Number::Float(1.0)));
        assert_eq!(Number::parse("1e3"), Some(Number::Float(1000.0)));
        assert_eq!(Number::parse("\n5\t"), Some(Number::Integer(5)));
        assert_eq!(
            Number::parse("99999999999999999999"),
            Some(Number::Float(1e20))
        );

        for bad in ["", " ", ".", "-", "e5", "1e", "1e+", "0x1A", "NaN", "infinity", "1_000", "--1"] {
            assert_eq!(Number::parse(bad), None, "{:?}", bad);
        }
    }

    #[test]
    fn test_as_numeric() {
        assert_eq!(Value::Null.as_numeric(), Some(Number::Integer(0)));
        assert_eq!(Value::from(true).as_numeric(), Some(Number::Integer(1)));
        assert_eq!(Value::from("2.5").as_numeric(), Some(Number::Float(2.5)));
        assert_eq!(Value::from(vec![1]).as_numeric(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(1.0).to_string(), "1");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "INF");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");

        let mut map = OrderedMap::new();
        map.insert(Key::from("name"), Value::from("Desk"));
        assert_eq!(Value::Map(map).to_string(), "{name: Desk}");
    }

    #[test]
    fn test_from_collections() {
        let value = Value::from(vec![1, 2]);
        let map = value.as_map().unwrap();
        assert!(map.is_list());
        assert_eq!(map.get(&Key::Int(1)), Some(&Value::from(2)));

        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_null(v: &Value) -> bool {
            v.is_null()
        }

        assert!(check_null(&Value::Null));
        assert!(!check_null(&Value::from(0)));
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(Value::from(7usize), Value::Number(Number::Integer(7)));
        match Value::from(usize::MAX) {
            Value::Number(Number::Integer(n)) => assert!(n > 0),
            Value::Number(Number::Float(f)) => assert!(f > i64::MAX as f64 / 2.0),
            other => panic!("Expected number, got {:?}", other),
        }
    }
}
