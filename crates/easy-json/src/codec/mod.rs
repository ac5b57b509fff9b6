//! JSON codec for [`Value`](crate::Value).
//!
//! Encoding forwards each variant to the matching `serde_json` primitive.
//! Decoding tokenizes with `serde_json` and then tries string, integer, float,
//! boolean, array and object interpretations in that order.

mod decoder;
mod encoder;
mod options;
mod shared;
mod value_codec;

pub use decoder::ValueDecoder;
pub use encoder::ValueEncoder;
pub use options::{CodecOptions, DEFAULT_MAX_DEPTH};
pub use shared::{decode, decode_str, encode, encode_stable, encode_to_string};
pub use value_codec::ValueCodec;
