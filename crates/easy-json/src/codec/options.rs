//! Codec settings.

use super::{ValueDecoder, ValueEncoder};

/// Container nesting accepted by default when decoding. The root array or
/// object is level 1.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings for a [`ValueCodec`](super::ValueCodec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Maximum container nesting accepted when decoding.
    pub max_depth: usize,
    /// Emit object keys in byte order.
    pub sort_keys: bool,
    /// Indent encoded output.
    pub pretty: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            sort_keys: false,
            pretty: false,
        }
    }
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_sorted_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub(super) fn encoder(&self) -> ValueEncoder {
        ValueEncoder {
            sort_keys: self.sort_keys,
            pretty: self.pretty,
        }
    }

    pub(super) fn decoder(&self) -> ValueDecoder {
        ValueDecoder {
            max_depth: self.max_depth,
        }
    }
}
