//! Convenience wrappers using the default codec settings.

use crate::error::{DecodeError, EncodeError};
use crate::Value;

use super::{ValueCodec, ValueDecoder, ValueEncoder};

/// Encode a [`Value`] as compact JSON bytes.
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    ValueEncoder::new().encode(value)
}

/// Encode a [`Value`] as compact JSON bytes with object keys sorted, so equal
/// values always produce identical bytes.
pub fn encode_stable(value: &Value) -> Result<Vec<u8>, EncodeError> {
    ValueCodec::stable().encode(value)
}

pub fn encode_to_string(value: &Value) -> Result<String, EncodeError> {
    ValueEncoder::new().encode_to_string(value)
}

/// Decode JSON bytes into a [`Value`].
///
/// ```
/// use easy_json::{decode, Value};
///
/// assert_eq!(decode(b"4").unwrap(), Value::Integer(4));
/// assert_eq!(decode(b"4.0").unwrap(), Value::Float(4.0));
/// assert!(decode(b"null").is_err());
/// ```
pub fn decode(bytes: &[u8]) -> Result<Value, DecodeError> {
    ValueDecoder::new().decode(bytes)
}

pub fn decode_str(text: &str) -> Result<Value, DecodeError> {
    ValueDecoder::new().decode_str(text)
}
