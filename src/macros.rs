//! Literal builders for values and collections.
//!
//! Arrays produce list-keyed maps; object keys go through [`Key::from`](crate::Key), so
//! `"1"` and `1` name the same entry. Any other token is converted with
//! [`to_value`](crate::to_value).

/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::{value, Value};
///
/// let desk = value!({"name": "Desk", "tags": ["wood", "office"], "discount": null});
/// assert_eq!(desk.get("name"), Some(&Value::from("Desk")));
/// assert_eq!(desk.get("discount"), Some(&Value::Null));
/// ```
#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Map($crate::OrderedMap::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {{
        let mut list = $crate::OrderedMap::new();
        $(
            list.push($crate::value!($elem));
        )*
        $crate::Value::Map(list)
    }};

    ({}) => {
        $crate::Value::Map($crate::OrderedMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::OrderedMap::new();
        $(
            object.insert($crate::Key::from($key), $crate::value!($value));
        )*
        $crate::Value::Map(object)
    }};

    // Any other expression goes through the value serializer
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}

/// Builds a [`Collection`](crate::Collection) from a JSON-like literal.
///
/// An array literal gives a list, an object literal an associative collection, and a
/// scalar a one-item list.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::{collect, Collection};
///
/// assert_eq!(collect!([1, 2, 3]), Collection::from(vec![1, 2, 3]));
/// assert_eq!(collect!({"a": 1}).count(), 1);
/// assert!(collect!().is_empty());
/// ```
#[macro_export]
macro_rules! collect {
    () => {
        $crate::Collection::default()
    };

    ($($tt:tt)+) => {
        $crate::Collection::from($crate::value!($($tt)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::{Collection, Key, Number, OrderedMap, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_lists() {
        assert_eq!(value!([]), Value::Map(OrderedMap::new()));

        let list = value!([1, "two", null]);
        let map = list.as_map().unwrap();
        assert!(map.is_list());
        assert_eq!(map.get(&Key::Int(1)), Some(&Value::from("two")));
        assert_eq!(map.get(&Key::Int(2)), Some(&Value::Null));
    }

    #[test]
    fn test_value_macro_objects() {
        let object = value!({"name": "Desk", "7": [1], 8: true});
        let keys: Vec<Key> = object.as_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("name"), Key::Int(7), Key::Int(8)]);
    }

    #[test]
    fn test_value_macro_expressions() {
        let price = 100;
        assert_eq!(value!(price), Value::from(100));
        assert_eq!(value!((vec![1, 2])), value!([1, 2]));
    }

    #[test]
    fn test_collect_macro() {
        assert_eq!(collect!(), Collection::default());
        assert_eq!(collect!("x"), Collection::from(vec!["x"]));
        assert_eq!(collect!({"a": 1}).get("a"), Some(&Value::from(1)));
    }
}
