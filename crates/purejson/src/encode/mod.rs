//! Encoding pipeline: `Value` -> JSON text.
//!
//! Output is always ASCII. Strings are escaped byte by byte (see
//! [`primitives::escape_and_quote_into`]), which is not the inverse of the
//! decoder's `\u` handling: `"\u00E9"` decodes to the two UTF-8 bytes of
//! `é` and re-encodes as `"\u00C3\u00A9"`.

pub mod encoders;
pub mod primitives;
pub mod writer;

use crate::{Result, value::Value};

pub fn encode_value_to_string(value: &Value) -> Result<String> {
    log::trace!("encoding {} value", kind_name(value));
    let mut w = writer::JsonWriter::with_capacity(encoders::size_hint(value));
    encoders::encode_value(value, &mut w)?;
    Ok(w.into_string())
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
