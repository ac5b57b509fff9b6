//! easy-json - a JSON value that keeps integers and floats apart.
//!
//! JSON has a single number type. Most native type systems have two, and a
//! naive round-trip through JSON turns `1` into `1.0` or the other way around.
//! [`Value`] records which one a number is, and every conversion in this crate
//! preserves that tag:
//!
//! - [`classify`] / [`classify_any`]: native value to [`Value`]
//! - [`project`] / [`project_any`]: [`Value`] to native value
//! - [`decode`] / [`encode`]: JSON text to and from [`Value`]
//!
//! Classification and decoding test the whole-number reading before the
//! floating-point one, so `4` is always `Integer(4)` and `4.0` is always
//! `Float(4.0)`.
//!
//! ```
//! use easy_json::{decode, encode, project, Value};
//!
//! let v = decode(br#"{"a":1,"b":2.0}"#).unwrap();
//! assert_eq!(v.get("a"), Some(&Value::Integer(1)));
//! assert_eq!(v.get("b"), Some(&Value::Float(2.0)));
//! assert!(project(&v)["b"].is_f64());
//! assert_eq!(decode(&encode(&v).unwrap()).unwrap(), v);
//! ```

mod classify;
mod dynamic;
mod path;
mod project;
mod value;

pub mod codec;
pub mod error;

pub use classify::classify;
pub use codec::{
    decode, decode_str, encode, encode_stable, encode_to_string, CodecOptions, ValueCodec,
    ValueDecoder, ValueEncoder,
};
pub use dynamic::{classify_any, project_any, AnyValue};
pub use error::{ClassificationError, DecodeError, EncodeError};
pub use project::{project, project_owned};
pub use value::{Value, ValueKind};
