//! Native `serde_json::Value` to [`Value`] classification.

use std::collections::HashMap;

use serde_json::{Number, Value as JsonValue};

use crate::error::ClassificationError;
use crate::path::Path;
use crate::Value;

/// Classify a `serde_json::Value` into a [`Value`].
///
/// The shape tests run in a fixed order: text, whole number, floating
/// number, boolean, list, map. The whole-number test comes first so that a
/// number stored as an integer never becomes a `Float`. `null` is not one of
/// the recognized shapes and fails the whole classification.
///
/// ```
/// use easy_json::{classify, Value};
/// use serde_json::json;
///
/// assert_eq!(classify(&json!(4)).unwrap(), Value::Integer(4));
/// assert_eq!(classify(&json!(4.0)).unwrap(), Value::Float(4.0));
/// assert!(classify(&json!([1, null])).is_err());
/// ```
pub fn classify(native: &JsonValue) -> Result<Value, ClassificationError> {
    classify_at(native, &mut Path::new())
}

fn classify_at(native: &JsonValue, path: &mut Path) -> Result<Value, ClassificationError> {
    if let JsonValue::String(s) = native {
        return Ok(Value::String(s.clone()));
    }
    if let JsonValue::Number(n) = native {
        if let Some(i) = whole_number(n) {
            return Ok(Value::Integer(i));
        }
        if let Some(f) = floating_number(n) {
            return Ok(Value::Float(f));
        }
    }
    if let JsonValue::Bool(b) = native {
        return Ok(Value::Boolean(*b));
    }
    if let JsonValue::Array(items) = native {
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            path.push_index(i);
            out.push(classify_at(item, path)?);
            path.pop();
        }
        return Ok(Value::Array(out));
    }
    if let JsonValue::Object(map) = native {
        let mut out = HashMap::with_capacity(map.len());
        for (key, item) in map {
            path.push_key(key);
            out.insert(key.clone(), classify_at(item, path)?);
            path.pop();
        }
        return Ok(Value::Object(out));
    }
    Err(ClassificationError::Unrecognized {
        path: path.to_pointer(),
        found: native_shape(native),
    })
}

/// A number whose literal reads as a signed 64-bit integer.
///
/// Numbers keep their literal text, so `-0` is whole while `-0.0` and `1e3`
/// are not. Values above `i64::MAX` do not fit and fall through to the
/// floating-point test.
pub(crate) fn whole_number(n: &Number) -> Option<i64> {
    n.as_i64()
}

pub(crate) fn floating_number(n: &Number) -> Option<f64> {
    n.as_f64()
}

fn native_shape(native: &JsonValue) -> &'static str {
    match native {
        JsonValue::Null => "null",
        JsonValue::Number(_) => "number outside the integer and float ranges",
        JsonValue::Bool(_) => "boolean",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl TryFrom<&JsonValue> for Value {
    type Error = ClassificationError;

    fn try_from(native: &JsonValue) -> Result<Self, Self::Error> {
        classify(native)
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = ClassificationError;

    fn try_from(native: JsonValue) -> Result<Self, Self::Error> {
        classify(&native)
    }
}
