//! Error types for classification, decoding, and encoding.

use thiserror::Error;

/// A native value could not be turned into a [`Value`](crate::Value).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// The runtime shape at `path` is none of text, whole number, floating
    /// number, boolean, ordered list, or string-keyed map.
    #[error("unrecognized native value at `{path}`: {found}")]
    Unrecognized { path: String, found: &'static str },
}

/// Serialized input could not be decoded into a [`Value`](crate::Value).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No interpretation matched the token at `path`, or the input was not
    /// well-formed JSON. `raw` holds the offending input as text.
    #[error("unsupported JSON value at `{path}`: {reason}")]
    Unsupported {
        path: String,
        raw: String,
        reason: String,
    },
    #[error("JSON nesting at `{path}` exceeds the limit of {limit} levels")]
    TooDeep { path: String, limit: usize },
}

impl DecodeError {
    /// The raw input carried by an `Unsupported` error.
    pub fn raw(&self) -> Option<&str> {
        match self {
            DecodeError::Unsupported { raw, .. } => Some(raw),
            DecodeError::TooDeep { .. } => None,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            DecodeError::Unsupported { path, .. } | DecodeError::TooDeep { path, .. } => path,
        }
    }
}

/// A [`Value`](crate::Value) could not be written as JSON.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("cannot encode non-finite float at `{path}`")]
    NonFiniteFloat { path: String },
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
