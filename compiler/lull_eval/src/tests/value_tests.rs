//! Tests for values, rendering and dictionary ordering.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lull_ir::TypeTag;
use pretty_assertions::assert_eq;

use crate::{Dict, Value};

#[test]
fn test_number_rendering() {
    assert_eq!(Value::Number(3.0).to_string(), "3");
    assert_eq!(Value::Number(-0.5).to_string(), "-0.5");
    assert_eq!(Value::Number(1e21).to_string(), "1000000000000000000000");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
}

#[test]
fn test_collection_rendering() {
    let dict: Dict = [
        ("b".to_string(), Value::Number(1.0)),
        ("a".to_string(), Value::list(vec![Value::string("x"), Value::Null])),
    ]
    .into_iter()
    .collect();
    assert_eq!(Value::dict(dict).to_string(), "{b=1, a=[x, null]}");
    assert_eq!(Value::function_ref("f").to_string(), "<function f>");
    assert_eq!(Value::TypeTag(TypeTag::Array).to_string(), "ARRAY");
}

#[test]
fn test_dict_overwrite_keeps_position() {
    let mut dict = Dict::new();
    dict.insert("x".into(), Value::Number(1.0));
    dict.insert("y".into(), Value::Number(2.0));
    dict.insert("x".into(), Value::Number(3.0));
    let keys: Vec<&str> = dict.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["x", "y"]);
    assert_eq!(dict.get("x"), Some(&Value::Number(3.0)));
    assert_eq!(dict.len(), 2);
}

#[test]
fn test_dict_equality_ignores_order() {
    let a: Dict = [("x".to_string(), Value::Null), ("y".to_string(), Value::Bool(true))]
        .into_iter()
        .collect();
    let b: Dict = [("y".to_string(), Value::Bool(true)), ("x".to_string(), Value::Null)]
        .into_iter()
        .collect();
    assert_eq!(a, b);
}

#[test]
fn test_lists_share_storage() {
    let original = Value::list(vec![Value::Number(1.0)]);
    let alias = original.clone();
    if let Value::List(items) = &alias {
        items.borrow_mut().push(Value::Number(2.0));
    }
    assert_eq!(original.to_string(), "[1, 2]");
}

#[test]
fn test_type_tags() {
    assert_eq!(Value::Null.type_tag(), Some(TypeTag::Null));
    assert_eq!(Value::dict(Dict::new()).type_tag(), Some(TypeTag::Structure));
    assert_eq!(Value::function_ref("f").type_tag(), Some(TypeTag::Function));
    assert_eq!(Value::TypeTag(TypeTag::Number).type_tag(), None);
    assert_eq!(Value::Bool(true).type_name(), "BOOLEAN");
    assert_eq!(Value::TypeTag(TypeTag::String).type_name(), "TYPE");
}
