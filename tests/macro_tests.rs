use fluent_collection::{collect, value, Collection, Key, Number, OrderedMap, Value};

#[test]
fn test_value_macro_null() {
    let value = value!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    let true_val = value!(true);
    assert_eq!(true_val, Value::Bool(true));

    let false_val = value!(false);
    assert_eq!(false_val, Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    let int_val = value!(42);
    assert_eq!(int_val, Value::Number(Number::Integer(42)));

    let float_val = value!(3.5);
    assert_eq!(float_val, Value::Number(Number::Float(3.5)));

    let negative_val = value!(-123);
    assert_eq!(negative_val, Value::Number(Number::Integer(-123)));
}

#[test]
fn test_value_macro_strings() {
    let string_val = value!("hello world");
    assert_eq!(string_val, Value::String("hello world".to_string()));

    let empty_string = value!("");
    assert_eq!(empty_string, Value::String("".to_string()));
}

#[test]
fn test_value_macro_lists() {
    let empty_list = value!([]);
    assert_eq!(empty_list, Value::Map(OrderedMap::new()));

    let mixed_list = value!([1, "hello", true, null]);
    let expected: OrderedMap = vec![
        Value::from(1),
        Value::from("hello"),
        Value::Bool(true),
        Value::Null,
    ]
    .into_iter()
    .collect();
    assert_eq!(mixed_list, Value::Map(expected));
}

#[test]
fn test_value_macro_nested() {
    let data = value!({
        "name": "Alice",
        "age": 30,
        "tags": ["rust", "serde"],
        "address": {"city": "Oslo", "zip": "0150"}
    });

    assert_eq!(data.get("name").and_then(Value::as_str), Some("Alice"));
    assert_eq!(data.get("age").and_then(Value::as_i64), Some(30));
    let address = data.get("address").unwrap();
    assert_eq!(address.get("zip"), Some(&Value::from("0150")));
    assert!(data.get("tags").and_then(Value::as_map).unwrap().is_list());
}

#[test]
fn test_value_macro_integer_like_keys() {
    let data = value!({"1": "a", 2: "b", "03": "c"});
    let keys: Vec<Key> = data.as_map().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        vec![Key::Int(1), Key::Int(2), Key::Str("03".to_string())]
    );
    assert_eq!(data.get(1), data.get("1"));
}

#[test]
fn test_value_macro_trailing_commas() {
    assert_eq!(value!([1, 2,]), value!([1, 2]));
    assert_eq!(value!({"a": 1,}), value!({"a": 1}));
}

#[test]
fn test_collect_macro() {
    let list = collect!(["a", "b"]);
    assert_eq!(list, Collection::from(vec!["a", "b"]));

    let map = collect!({"name": "Desk"});
    assert_eq!(map.get("name"), Some(&Value::from("Desk")));

    let scalar = collect!(5);
    assert_eq!(scalar, Collection::from(vec![5]));

    assert!(collect!(null).is_empty());
    assert!(collect!().is_empty());
}
