//! Conversions between [`Value`] and values held behind `dyn Any`.
//!
//! This is the runtime-typed counterpart of [`classify`](crate::classify()) and
//! [`project`](crate::project()): shapes are recognized by downcasting, in the
//! same order, so a boxed `i64` always becomes an `Integer`.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};

use serde_json::Value as JsonValue;

use crate::error::ClassificationError;
use crate::path::Path;
use crate::Value;

/// A boxed native value, as produced by [`project_any`].
pub type AnyValue = Box<dyn Any + Send + Sync>;

/// Classify a runtime-typed value.
///
/// A boxed value (`AnyValue` or `Box<dyn Any>`) is classified by its
/// contents, so the output of [`project_any`] can be passed back as is.
///
/// Recognized shapes, tested in this order:
/// - text: `String`, `&'static str`
/// - whole numbers: `i64`, `i32`, `i16`, `i8`, `isize`, `u32`, `u16`, `u8`,
///   and `u64`/`usize` when they fit in `i64`
/// - floating numbers: `f64`, `f32`
/// - `bool`
/// - lists: `Vec<AnyValue>`, `Vec<Box<dyn Any>>`
/// - maps: `HashMap<String, AnyValue>`, `HashMap<String, Box<dyn Any>>`,
///   `BTreeMap<String, AnyValue>`
/// - an already-built [`Value`], or a `serde_json::Value` (classified with
///   [`classify`](crate::classify()))
///
/// Anything else fails with [`ClassificationError::Unrecognized`].
///
/// ```
/// use easy_json::{classify_any, AnyValue, Value};
///
/// let mut list: Vec<AnyValue> = Vec::new();
/// list.push(Box::new(1i64));
/// list.push(Box::new("two"));
/// list.push(Box::new(3.0f64));
/// assert_eq!(
///     classify_any(&list).unwrap(),
///     Value::array([Value::integer(1), Value::string("two"), Value::float(3.0)]),
/// );
/// ```
pub fn classify_any(native: &dyn Any) -> Result<Value, ClassificationError> {
    classify_any_at(native, &mut Path::new())
}

fn classify_any_at(native: &dyn Any, path: &mut Path) -> Result<Value, ClassificationError> {
    if let Some(boxed) = native.downcast_ref::<AnyValue>() {
        return classify_any_at(&**boxed as &dyn Any, path);
    }
    if let Some(boxed) = native.downcast_ref::<Box<dyn Any>>() {
        return classify_any_at(&**boxed, path);
    }
    if let Some(s) = text(native) {
        return Ok(Value::String(s.to_owned()));
    }
    if let Some(n) = whole_number(native) {
        return Ok(Value::Integer(n));
    }
    if let Some(n) = floating_number(native) {
        return Ok(Value::Float(n));
    }
    if let Some(b) = native.downcast_ref::<bool>() {
        return Ok(Value::Boolean(*b));
    }
    if let Some(items) = native.downcast_ref::<Vec<AnyValue>>() {
        return classify_list(items.iter().map(|item| &**item as &dyn Any), path);
    }
    if let Some(items) = native.downcast_ref::<Vec<Box<dyn Any>>>() {
        return classify_list(items.iter().map(|item| &**item), path);
    }
    if let Some(map) = native.downcast_ref::<HashMap<String, AnyValue>>() {
        return classify_map(map.iter().map(|(k, v)| (k, &**v as &dyn Any)), path);
    }
    if let Some(map) = native.downcast_ref::<HashMap<String, Box<dyn Any>>>() {
        return classify_map(map.iter().map(|(k, v)| (k, &**v)), path);
    }
    if let Some(map) = native.downcast_ref::<BTreeMap<String, AnyValue>>() {
        return classify_map(map.iter().map(|(k, v)| (k, &**v as &dyn Any)), path);
    }
    if let Some(value) = native.downcast_ref::<Value>() {
        return Ok(value.clone());
    }
    if let Some(json) = native.downcast_ref::<JsonValue>() {
        return crate::classify(json).map_err(|err| rebase(err, path));
    }
    Err(ClassificationError::Unrecognized {
        path: path.to_pointer(),
        found: "value of an unrecognized type",
    })
}

fn text(native: &dyn Any) -> Option<&str> {
    if let Some(s) = native.downcast_ref::<String>() {
        return Some(s.as_str());
    }
    native.downcast_ref::<&'static str>().copied()
}

fn whole_number(native: &dyn Any) -> Option<i64> {
    macro_rules! widen {
        ($($ty:ty),*) => {
            $(if let Some(n) = native.downcast_ref::<$ty>() {
                return Some(i64::from(*n));
            })*
        };
    }
    widen!(i64, i32, i16, i8, u32, u16, u8);
    if let Some(n) = native.downcast_ref::<isize>() {
        return i64::try_from(*n).ok();
    }
    if let Some(n) = native.downcast_ref::<u64>() {
        return i64::try_from(*n).ok();
    }
    if let Some(n) = native.downcast_ref::<usize>() {
        return i64::try_from(*n).ok();
    }
    None
}

fn floating_number(native: &dyn Any) -> Option<f64> {
    if let Some(n) = native.downcast_ref::<f64>() {
        return Some(*n);
    }
    native.downcast_ref::<f32>().map(|n| f64::from(*n))
}

fn classify_list<'a>(
    items: impl Iterator<Item = &'a dyn Any>,
    path: &mut Path,
) -> Result<Value, ClassificationError> {
    let mut out = Vec::new();
    for (i, item) in items.enumerate() {
        path.push_index(i);
        out.push(classify_any_at(item, path)?);
        path.pop();
    }
    Ok(Value::Array(out))
}

fn classify_map<'a>(
    entries: impl Iterator<Item = (&'a String, &'a dyn Any)>,
    path: &mut Path,
) -> Result<Value, ClassificationError> {
    let mut out = HashMap::new();
    for (key, item) in entries {
        path.push_key(key);
        out.insert(key.clone(), classify_any_at(item, path)?);
        path.pop();
    }
    Ok(Value::Object(out))
}

/// Prefix the path of an error raised inside an embedded `serde_json::Value`.
fn rebase(err: ClassificationError, path: &Path) -> ClassificationError {
    match err {
        ClassificationError::Unrecognized { path: inner, found } => {
            ClassificationError::Unrecognized {
                path: format!("{}{}", path.to_pointer(), inner),
                found,
            }
        }
    }
}

/// Project a [`Value`] onto boxed native values.
///
/// Strings become `String`, integers `i64`, floats `f64`, booleans `bool`,
/// arrays `Vec<AnyValue>` and objects `HashMap<String, AnyValue>`.
/// [`classify_any`] inverts this exactly.
pub fn project_any(value: &Value) -> AnyValue {
    match value {
        Value::String(s) => Box::new(s.clone()),
        Value::Integer(n) => Box::new(*n),
        Value::Float(n) => Box::new(*n),
        Value::Boolean(b) => Box::new(*b),
        Value::Array(items) => Box::new(items.iter().map(project_any).collect::<Vec<AnyValue>>()),
        Value::Object(map) => Box::new(
            map.iter()
                .map(|(k, v)| (k.clone(), project_any(v)))
                .collect::<HashMap<String, AnyValue>>(),
        ),
    }
}
