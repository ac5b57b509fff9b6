//! Paired encoder and decoder sharing one set of options.

use std::io;

use crate::error::{DecodeError, EncodeError};
use crate::Value;

use super::{CodecOptions, ValueDecoder, ValueEncoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCodec {
    pub encoder: ValueEncoder,
    pub decoder: ValueDecoder,
}

impl Default for ValueCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueCodec {
    pub fn new() -> Self {
        Self::with_options(CodecOptions::default())
    }

    /// Codec whose encoder sorts object keys.
    pub fn stable() -> Self {
        Self::with_options(CodecOptions::default().with_sorted_keys(true))
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            encoder: options.encoder(),
            decoder: options.decoder(),
        }
    }

    pub fn options(&self) -> CodecOptions {
        CodecOptions {
            max_depth: self.decoder.max_depth,
            sort_keys: self.encoder.sort_keys,
            pretty: self.encoder.pretty,
        }
    }

    pub fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.encoder.encode(value)
    }

    pub fn encode_to_string(&self, value: &Value) -> Result<String, EncodeError> {
        self.encoder.encode_to_string(value)
    }

    pub fn encode_to_writer<W: io::Write>(&self, writer: W, value: &Value) -> Result<(), EncodeError> {
        self.encoder.encode_to_writer(writer, value)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Value, DecodeError> {
        self.decoder.decode(bytes)
    }

    pub fn decode_str(&self, text: &str) -> Result<Value, DecodeError> {
        self.decoder.decode_str(text)
    }
}
