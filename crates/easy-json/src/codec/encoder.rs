//! [`Value`] to JSON text encoding.

use std::io;

use serde::ser::{Error as _, Serialize, Serializer};

use crate::error::EncodeError;
use crate::path::Path;
use crate::Value;

/// Encoder from [`Value`] to JSON text.
///
/// Every variant is handed to the `serde_json` primitive for its Rust
/// payload: integers are written as `i64`, floats as `f64` (a whole float
/// keeps its `.0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueEncoder {
    /// Write object keys in byte order instead of map iteration order.
    pub sort_keys: bool,
    pub pretty: bool,
}

impl ValueEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        self.encode_to_writer(&mut out, value)?;
        Ok(out)
    }

    pub fn encode_to_string(&self, value: &Value) -> Result<String, EncodeError> {
        check_finite(value, &mut Path::new())?;
        let text = match (self.sort_keys, self.pretty) {
            (false, false) => serde_json::to_string(value)?,
            (false, true) => serde_json::to_string_pretty(value)?,
            (true, false) => serde_json::to_string(&Sorted(value))?,
            (true, true) => serde_json::to_string_pretty(&Sorted(value))?,
        };
        Ok(text)
    }

    pub fn encode_to_writer<W: io::Write>(&self, writer: W, value: &Value) -> Result<(), EncodeError> {
        check_finite(value, &mut Path::new())?;
        match (self.sort_keys, self.pretty) {
            (false, false) => serde_json::to_writer(writer, value)?,
            (false, true) => serde_json::to_writer_pretty(writer, value)?,
            (true, false) => serde_json::to_writer(writer, &Sorted(value))?,
            (true, true) => serde_json::to_writer_pretty(writer, &Sorted(value))?,
        }
        Ok(())
    }
}

/// JSON has no literal for NaN or the infinities.
fn check_finite(value: &Value, path: &mut Path) -> Result<(), EncodeError> {
    match value {
        Value::Float(n) if !n.is_finite() => Err(EncodeError::NonFiniteFloat {
            path: path.to_pointer(),
        }),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                path.push_index(i);
                check_finite(item, path)?;
                path.pop();
            }
            Ok(())
        }
        Value::Object(map) => {
            for (key, item) in map {
                path.push_key(key);
                check_finite(item, path)?;
                path.pop();
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Float(n) => Err(S::Error::custom(format_args!(
                "cannot encode non-finite float {n}"
            ))),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Object(map) => serializer.collect_map(map),
        }
    }
}

/// Serializes objects with their keys sorted, at every level.
struct Sorted<'a>(&'a Value);

impl Serialize for Sorted<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Value::Array(items) => serializer.collect_seq(items.iter().map(Sorted)),
            Value::Object(map) => {
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
                serializer.collect_map(entries.into_iter().map(|(k, v)| (k, Sorted(v))))
            }
            scalar => scalar.serialize(serializer),
        }
    }
}
