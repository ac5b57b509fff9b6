//! Projection back to native values.

use std::collections::HashMap;

use easy_json::{classify, classify_any, project, project_any, AnyValue, Value};
use serde_json::{json, Value as JsonValue};

fn complex_value() -> Value {
    Value::object([(
        "array",
        Value::array([
            Value::object([
                ("name", Value::string("item1")),
                ("values", Value::array([Value::integer(1), Value::integer(2)])),
            ]),
            Value::object([
                ("name", Value::string("item2")),
                ("values", Value::array([Value::integer(3), Value::integer(4)])),
            ]),
        ]),
    )])
}

// ---------------------------------------------------------------------------
// serde_json::Value
// ---------------------------------------------------------------------------

#[test]
fn project_scalars() {
    assert_eq!(project(&Value::string("Hello World")), json!("Hello World"));
    assert_eq!(project(&Value::integer(42)), json!(42));
    assert_eq!(project(&Value::float(3.25)), json!(3.25));
    assert_eq!(project(&Value::boolean(true)), json!(true));
}

#[test]
fn project_preserves_numeric_storage() {
    let native = project(&Value::object([
        ("i", Value::integer(1)),
        ("d", Value::float(1.0)),
        (
            "mix",
            Value::array([Value::integer(2), Value::float(2.5), Value::integer(3)]),
        ),
    ]));

    assert!(native["i"].is_i64());
    assert!(native["d"].is_f64());
    assert_eq!(native["i"].as_i64(), Some(1));
    assert_eq!(native["d"].as_f64(), Some(1.0));

    let mix = native["mix"].as_array().unwrap();
    assert!(mix[0].is_i64());
    assert!(mix[1].is_f64());
    assert!(mix[2].is_i64());
}

#[test]
fn project_nested_structure() {
    let native = project(&complex_value());
    assert_eq!(
        native,
        json!({
            "array": [
                {"name": "item1", "values": [1, 2]},
                {"name": "item2", "values": [3, 4]}
            ]
        })
    );
}

#[test]
fn project_empty_containers() {
    let arr = project(&Value::array([]));
    let obj = project(&Value::Object(HashMap::new()));
    assert_eq!(arr.as_array().map(Vec::len), Some(0));
    assert_eq!(obj.as_object().map(|m| m.len()), Some(0));
    assert!(!arr.is_null());
    assert!(!obj.is_null());
}

#[test]
fn project_inverts_classify() {
    let original = json!({
        "string": "hello",
        "int": 7,
        "double": 7.5,
        "bool": false,
        "array": [1, 2.0, true, "x"],
        "object": {"a": 1, "b": 2.0, "c": {"nested": "y"}}
    });
    let round_tripped = project(&classify(&original).unwrap());
    assert_eq!(round_tripped, original);
    assert!(round_tripped["array"][1].is_f64());
    assert!(round_tripped["object"]["a"].is_i64());
}

#[test]
fn into_json_value_matches_project() {
    let v = complex_value();
    let borrowed: JsonValue = (&v).into();
    let owned: JsonValue = v.clone().into();
    assert_eq!(borrowed, project(&v));
    assert_eq!(owned, project(&v));
}

// ---------------------------------------------------------------------------
// dyn Any
// ---------------------------------------------------------------------------

#[test]
fn project_any_scalars() {
    let s = project_any(&Value::string("Hello World"));
    assert_eq!(s.downcast_ref::<String>().map(String::as_str), Some("Hello World"));

    let i = project_any(&Value::integer(42));
    assert_eq!(i.downcast_ref::<i64>(), Some(&42));
    assert!(i.downcast_ref::<f64>().is_none());

    let f = project_any(&Value::float(42.0));
    assert_eq!(f.downcast_ref::<f64>(), Some(&42.0));
    assert!(f.downcast_ref::<i64>().is_none());

    let b = project_any(&Value::boolean(true));
    assert_eq!(b.downcast_ref::<bool>(), Some(&true));
}

#[test]
fn project_any_array() {
    let projected = project_any(&Value::array([
        Value::integer(1),
        Value::string("two"),
        Value::float(3.0),
        Value::boolean(true),
    ]));
    let items = projected.downcast_ref::<Vec<AnyValue>>().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].downcast_ref::<i64>(), Some(&1));
    assert_eq!(items[1].downcast_ref::<String>().map(String::as_str), Some("two"));
    assert_eq!(items[2].downcast_ref::<f64>(), Some(&3.0));
    assert_eq!(items[3].downcast_ref::<bool>(), Some(&true));
}

#[test]
fn project_any_object() {
    let projected = project_any(&complex_value());
    let map = projected.downcast_ref::<HashMap<String, AnyValue>>().unwrap();
    let array = map["array"].downcast_ref::<Vec<AnyValue>>().unwrap();
    assert_eq!(array.len(), 2);

    let first = array[0].downcast_ref::<HashMap<String, AnyValue>>().unwrap();
    assert_eq!(
        first["name"].downcast_ref::<String>().map(String::as_str),
        Some("item1")
    );
    let values = first["values"].downcast_ref::<Vec<AnyValue>>().unwrap();
    assert_eq!(values[0].downcast_ref::<i64>(), Some(&1));
    assert_eq!(values[1].downcast_ref::<i64>(), Some(&2));
}

#[test]
fn project_any_empty_containers() {
    let arr = project_any(&Value::array([]));
    let obj = project_any(&Value::Object(HashMap::new()));
    assert!(arr.downcast_ref::<Vec<AnyValue>>().unwrap().is_empty());
    assert!(obj.downcast_ref::<HashMap<String, AnyValue>>().unwrap().is_empty());
}

#[test]
fn classify_any_inverts_project_any() {
    let v = complex_value();
    let native = project_any(&v);
    assert_eq!(classify_any(&native).unwrap(), v);
    assert_eq!(classify_any(&*native).unwrap(), v);
}
