//! JSON text to [`Value`] decoding.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::Value as JsonValue;

use crate::classify::{floating_number, whole_number};
use crate::error::DecodeError;
use crate::path::Path;
use crate::Value;

use super::options::DEFAULT_MAX_DEPTH;

/// One way of reading a token. `None` means the token is not of that shape;
/// `Some(Err(_))` means it is, but a nested element failed.
type Attempt = fn(&ValueDecoder, &JsonValue, &mut Path) -> Option<Result<Value, DecodeError>>;

/// Interpretations tried on every token, in order. The first one that applies
/// wins. Integer must stay ahead of float: an integral literal is also a valid
/// float and would otherwise lose its tag.
const ATTEMPTS: [Attempt; 6] = [
    ValueDecoder::as_string,
    ValueDecoder::as_integer,
    ValueDecoder::as_float,
    ValueDecoder::as_boolean,
    ValueDecoder::as_array,
    ValueDecoder::as_object,
];

/// Decoder from JSON text to [`Value`].
///
/// Tokenizing is delegated to `serde_json`; this type decides which variant
/// each token becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueDecoder {
    /// Maximum container nesting. The root array or object is level 1.
    pub max_depth: usize,
}

impl Default for ValueDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueDecoder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Value, DecodeError> {
        check_nesting(bytes, self.max_depth)?;
        let token = tokenize(serde_json::Deserializer::from_slice(bytes)).map_err(|err| {
            malformed(String::from_utf8_lossy(bytes).into_owned(), &err)
        })?;
        self.interpret(&token)
    }

    pub fn decode_str(&self, text: &str) -> Result<Value, DecodeError> {
        check_nesting(text.as_bytes(), self.max_depth)?;
        let token = tokenize(serde_json::Deserializer::from_str(text))
            .map_err(|err| malformed(text.to_owned(), &err))?;
        self.interpret(&token)
    }

    /// Interpret an already tokenized JSON value.
    pub fn interpret(&self, token: &JsonValue) -> Result<Value, DecodeError> {
        self.interpret_at(token, &mut Path::new())
    }

    fn interpret_at(&self, token: &JsonValue, path: &mut Path) -> Result<Value, DecodeError> {
        for attempt in ATTEMPTS {
            if let Some(result) = attempt(self, token, path) {
                return result;
            }
        }
        Err(DecodeError::Unsupported {
            path: path.to_pointer(),
            raw: token.to_string(),
            reason: format!("no interpretation matches {}", token_shape(token)),
        })
    }

    fn as_string(&self, token: &JsonValue, _: &mut Path) -> Option<Result<Value, DecodeError>> {
        token.as_str().map(|s| Ok(Value::String(s.to_owned())))
    }

    fn as_integer(&self, token: &JsonValue, _: &mut Path) -> Option<Result<Value, DecodeError>> {
        match token {
            JsonValue::Number(n) => whole_number(n).map(|n| Ok(Value::Integer(n))),
            _ => None,
        }
    }

    fn as_float(&self, token: &JsonValue, _: &mut Path) -> Option<Result<Value, DecodeError>> {
        match token {
            JsonValue::Number(n) => floating_number(n).map(|n| Ok(Value::Float(n))),
            _ => None,
        }
    }

    fn as_boolean(&self, token: &JsonValue, _: &mut Path) -> Option<Result<Value, DecodeError>> {
        token.as_bool().map(|b| Ok(Value::Boolean(b)))
    }

    fn as_array(&self, token: &JsonValue, path: &mut Path) -> Option<Result<Value, DecodeError>> {
        let items = token.as_array()?;
        Some(self.decode_items(items, path))
    }

    fn as_object(&self, token: &JsonValue, path: &mut Path) -> Option<Result<Value, DecodeError>> {
        let map = token.as_object()?;
        Some(self.decode_entries(map, path))
    }

    fn decode_items(&self, items: &[JsonValue], path: &mut Path) -> Result<Value, DecodeError> {
        self.check_depth(path)?;
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            path.push_index(i);
            out.push(self.interpret_at(item, path)?);
            path.pop();
        }
        Ok(Value::Array(out))
    }

    fn decode_entries(
        &self,
        map: &serde_json::Map<String, JsonValue>,
        path: &mut Path,
    ) -> Result<Value, DecodeError> {
        self.check_depth(path)?;
        let mut out = std::collections::HashMap::with_capacity(map.len());
        for (key, item) in map {
            path.push_key(key);
            out.insert(key.clone(), self.interpret_at(item, path)?);
            path.pop();
        }
        Ok(Value::Object(out))
    }

    fn check_depth(&self, path: &Path) -> Result<(), DecodeError> {
        if path.depth() >= self.max_depth {
            return Err(DecodeError::TooDeep {
                path: path.to_pointer(),
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

/// Parses one JSON document. `serde_json`'s own recursion limit is lifted:
/// nesting was already bounded by [`check_nesting`], so `max_depth` is the
/// only limit in force.
fn tokenize<'de, R>(mut de: serde_json::Deserializer<R>) -> Result<JsonValue, serde_json::Error>
where
    R: serde_json::de::Read<'de>,
{
    de.disable_recursion_limit();
    let token = JsonValue::deserialize(&mut de)?;
    de.end()?;
    Ok(token)
}

/// A container open at the current scan position.
enum Frame {
    Array { index: usize },
    Object { key: String, expecting_key: bool },
}

/// Rejects input nesting deeper than `max_depth` before it is parsed.
///
/// Reports the same pointer [`ValueDecoder::check_depth`] would for the
/// first offending container. Anything malformed is left for the parser.
fn check_nesting(bytes: &[u8], max_depth: usize) -> Result<(), DecodeError> {
    let mut frames: Vec<Frame> = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = string_end(bytes, i);
                if let Some(Frame::Object { key, expecting_key }) = frames.last_mut() {
                    if *expecting_key {
                        *key = serde_json::from_slice(&bytes[i..end]).unwrap_or_default();
                        *expecting_key = false;
                    }
                }
                i = end;
                continue;
            }
            b'[' | b'{' => {
                if frames.len() >= max_depth {
                    return Err(DecodeError::TooDeep {
                        path: frame_pointer(&frames),
                        limit: max_depth,
                    });
                }
                frames.push(if bytes[i] == b'[' {
                    Frame::Array { index: 0 }
                } else {
                    Frame::Object {
                        key: String::new(),
                        expecting_key: true,
                    }
                });
            }
            b']' | b'}' => {
                frames.pop();
            }
            b',' => match frames.last_mut() {
                Some(Frame::Array { index }) => *index += 1,
                Some(Frame::Object { expecting_key, .. }) => *expecting_key = true,
                None => {}
            },
            _ => {}
        }
        i += 1;
    }
    Ok(())
}

/// Index just past the closing quote of the string opening at `start`.
fn string_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn frame_pointer(frames: &[Frame]) -> String {
    let mut path = Path::new();
    for frame in frames {
        match frame {
            Frame::Array { index } => path.push_index(*index),
            Frame::Object { key, .. } => path.push_key(key),
        }
    }
    path.to_pointer()
}

fn malformed(raw: String, err: &serde_json::Error) -> DecodeError {
    DecodeError::Unsupported {
        path: String::new(),
        raw,
        reason: err.to_string(),
    }
}

fn token_shape(token: &JsonValue) -> &'static str {
    match token {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "this number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Buffers the input as a `serde_json::Value`, then interprets it with the
/// default [`ValueDecoder`].
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = JsonValue::deserialize(deserializer)?;
        ValueDecoder::new().interpret(&token).map_err(D::Error::custom)
    }
}
