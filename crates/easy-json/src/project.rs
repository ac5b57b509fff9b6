//! [`Value`] to native `serde_json::Value` projection.

use serde_json::{Map, Value as JsonValue};

use crate::Value;

/// Project a [`Value`] onto the native `serde_json::Value` it represents.
///
/// Integers become numbers stored as `i64` and floats become numbers stored
/// as `f64`, so the distinction survives in the native value. A non-finite
/// float has no JSON number form and projects to `Null`.
pub fn project(value: &Value) -> JsonValue {
    match value {
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Integer(n) => JsonValue::from(*n),
        Value::Float(n) => JsonValue::from(*n),
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Array(items) => JsonValue::Array(items.iter().map(project).collect()),
        Value::Object(map) => JsonValue::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), project(v)))
                .collect::<Map<String, JsonValue>>(),
        ),
    }
}

/// Owned variant of [`project`], moving strings and keys instead of cloning.
pub fn project_owned(value: Value) -> JsonValue {
    match value {
        Value::String(s) => JsonValue::String(s),
        Value::Integer(n) => JsonValue::from(n),
        Value::Float(n) => JsonValue::from(n),
        Value::Boolean(b) => JsonValue::Bool(b),
        Value::Array(items) => JsonValue::Array(items.into_iter().map(project_owned).collect()),
        Value::Object(map) => JsonValue::Object(
            map.into_iter()
                .map(|(k, v)| (k, project_owned(v)))
                .collect::<Map<String, JsonValue>>(),
        ),
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        project(value)
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        project_owned(value)
    }
}
