//! Equality and ordering rules for values and keys.
//!
//! Two equality relations are defined:
//!
//! - [`loose_eq`]: cross-type equality with numeric/string coercion
//! - [`strict_eq`]: equality requiring identical type and value
//!
//! ## Loose Equality Rules
//!
//! | Left \ Right | Rule |
//! |--------------|------|
//! | bool vs anything | compare truthiness |
//! | null vs string | the string must be empty |
//! | null vs anything else | compare truthiness |
//! | number vs number | compare numerically (`1 == 1.0`) |
//! | number vs numeric string | compare numerically (`100 == "1e2"`) |
//! | number vs other string | compare the number's decimal rendering with the string |
//! | string vs string | numerically when both are numeric, otherwise byte-for-byte |
//! | map vs map | same size, and every key of one maps to a loosely equal value in the other (order ignored) |
//! | map vs scalar | never equal (except bool/null as above) |
//!
//! Strict equality compares maps entry by entry in order, and never equates an integer
//! with a float.
//!
//! [`string_eq`] is a third relation used by `diff_assoc` and `diff_assoc_using`: two
//! values are equal when their [`string_form`]s are identical.
//!
//! ```rust
//! use fluent_collection::{compare, Value};
//!
//! assert!(compare::loose_eq(&Value::from(100), &Value::from("100")));
//! assert!(!compare::strict_eq(&Value::from(100), &Value::from("100")));
//! assert!(!compare::loose_eq(&Value::from(0), &Value::from("a")));
//! ```

use crate::{Key, Number, Value};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Cross-type equality with numeric/string coercion.
#[must_use]
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Bool(_), _) | (_, Value::Bool(_)) => a.is_truthy() == b.is_truthy(),
        (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
        (Value::Null, _) | (_, Value::Null) => a.is_truthy() == b.is_truthy(),
        (Value::Number(x), Value::Number(y)) => numbers_eq(x, y),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            match Number::parse(s) {
                Some(parsed) => numbers_eq(n, &parsed),
                None => n.to_string() == *s,
            }
        }
        (Value::String(x), Value::String(y)) => match (Number::parse(x), Number::parse(y)) {
            (Some(nx), Some(ny)) => numbers_eq(&nx, &ny),
            _ => x == y,
        },
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, value)| y.get(key).map_or(false, |other| loose_eq(value, other)))
        }
        (Value::Map(_), _) | (_, Value::Map(_)) => false,
    }
}

/// Equality requiring identical type and value; maps must match entry by entry in order.
#[must_use]
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(Number::Integer(x)), Value::Number(Number::Integer(y))) => x == y,
        (Value::Number(Number::Float(x)), Value::Number(Number::Float(y))) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(y.iter())
                    .all(|((kx, vx), (ky, vy))| kx == ky && strict_eq(vx, vy))
        }
        _ => false,
    }
}

/// Renders a value the way a string cast does: `null` and `false` are empty, `true` is
/// `"1"`, numbers use their shortest decimal form and maps render as `"Array"`.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::{compare::string_form, Value};
///
/// assert_eq!(string_form(&Value::Null), "");
/// assert_eq!(string_form(&Value::from(true)), "1");
/// assert_eq!(string_form(&Value::from(2.0)), "2");
/// assert_eq!(string_form(&Value::from("1.0")), "1.0");
/// ```
#[must_use]
pub fn string_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null | Value::Bool(false) => Cow::Borrowed(""),
        Value::Bool(true) => Cow::Borrowed("1"),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::String(s) => Cow::Borrowed(s),
        Value::Map(_) => Cow::Borrowed("Array"),
    }
}

/// Equality of [`string_form`]s: `"1.0"` and `"1"` differ, `2.0` and `"2"` match.
#[must_use]
pub fn string_eq(a: &Value, b: &Value) -> bool {
    string_form(a) == string_form(b)
}

fn numbers_eq(a: &Number, b: &Number) -> bool {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => x == y,
        _ => a.as_f64() == b.as_f64(),
    }
}

/// Natural-order string comparison: digit runs compare by numeric value, so `"img12"`
/// sorts after `"img2"`.
///
/// A digit run starting with `0` is read as a fraction and compared digit by digit, so
/// `"a02"` sorts before `"a2"`. Zeros at the very start of a string are skipped.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::compare::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("img2", "img12"), Ordering::Less);
/// assert_eq!(natural_cmp("a", "B"), Ordering::Greater);
/// assert_eq!(natural_cmp("v1.02", "v1.2"), Ordering::Less);
/// ```
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_cmp_by(a, b, |c| c)
}

/// Case-insensitive natural-order string comparison.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::compare::natural_case_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_case_cmp("Color", "color"), Ordering::Equal);
/// assert_eq!(natural_case_cmp("File10", "file9"), Ordering::Greater);
/// ```
#[must_use]
pub fn natural_case_cmp(a: &str, b: &str) -> Ordering {
    natural_cmp_by(a, b, |c| c.to_ascii_lowercase())
}

/// [`natural_case_cmp`] over the string forms of two keys, for use with
/// [`Collection::diff_assoc_using`](crate::Collection::diff_assoc_using).
#[must_use]
pub fn key_natural_case_cmp(a: &Key, b: &Key) -> Ordering {
    natural_case_cmp(&a.to_string(), &b.to_string())
}

fn natural_cmp_by(a: &str, b: &str, fold: impl Fn(char) -> char) -> Ordering {
    let mut left = skip_leading_zeros(a).chars().peekable();
    let mut right = skip_leading_zeros(b).chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_x = take_digits(&mut left);
                let run_y = take_digits(&mut right);
                let ordering = compare_digit_runs(&run_x, &run_y);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(x), Some(y)) => {
                let ordering = fold(x).cmp(&fold(y));
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn skip_leading_zeros(s: &str) -> &str {
    let mut rest = s;
    while rest.starts_with('0') && rest[1..].starts_with(|c: char| c.is_ascii_digit()) {
        rest = &rest[1..];
    }
    rest
}

fn compare_digit_runs(x: &str, y: &str) -> Ordering {
    if x.starts_with('0') || y.starts_with('0') {
        // Fractional run: the first differing digit decides, a shorter prefix sorts first.
        return x.cmp(y);
    }
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}
