#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod value;
pub mod encode;
pub mod decode;

mod number;

#[cfg(feature = "serde")]
pub mod ser;
#[cfg(feature = "serde")]
pub mod de;

pub use crate::decode::{Values, decode_at, values};
pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::value::{Number, Value};

use std::io::{Read, Write};

/// Encode `value` as JSON text. Fails only for non-finite floats.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    encode_to_string(value).map(String::into_bytes)
}

pub fn encode_to_string(value: &Value) -> Result<String> {
    crate::encode::encode_value_to_string(value)
}

pub fn encode_to_writer<W: Write>(mut writer: W, value: &Value) -> Result<()> {
    let s = encode_to_string(value)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

/// Decode the first JSON value in `input`. Trailing bytes are not inspected.
///
/// Integer literals must fit in `i64`, or `u64` when non-negative; anything
/// wider is a `malformed number` syntax error.
pub fn decode(input: &[u8]) -> Result<Value> {
    crate::decode::decode(input)
}

pub fn decode_str(s: &str) -> Result<Value> {
    decode(s.as_bytes())
}

pub fn decode_with_options(input: &[u8], options: &Options) -> Result<Value> {
    crate::decode::decode_with_options(input, options)
}

pub fn decode_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Value> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    decode_with_options(&buf, options)
}
