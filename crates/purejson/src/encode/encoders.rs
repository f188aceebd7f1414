use crate::{Result, encode::primitives, encode::writer::JsonWriter, value::Value};

pub fn encode_value(value: &Value, w: &mut JsonWriter) -> Result<()> {
    match value {
        Value::Null => w.raw(primitives::format_null()),
        Value::Bool(b) => w.raw(primitives::format_bool(*b)),
        Value::Number(n) => w.raw(&primitives::format_number(n)?),
        Value::String(s) => w.string(s),
        Value::Array(items) => {
            w.begin_array();
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.item_separator();
                }
                encode_value(item, w)?;
            }
            w.end_array();
        }
        Value::Object(pairs) => {
            w.begin_object();
            for (i, (k, v)) in pairs.iter().enumerate() {
                if i > 0 {
                    w.item_separator();
                }
                encode_value(k, w)?;
                w.key_separator();
                encode_value(v, w)?;
            }
            w.end_object();
        }
    }
    Ok(())
}

/// Rough output size, used to pre-size the writer.
pub fn size_hint(value: &Value) -> usize {
    match value {
        Value::Null | Value::Bool(_) => 5,
        Value::Number(_) => 8,
        Value::String(s) => s.len() + 2,
        Value::Array(items) => 4 + items.iter().map(|v| size_hint(v) + 2).sum::<usize>(),
        Value::Object(pairs) => {
            4 + pairs
                .iter()
                .map(|(k, v)| size_hint(k) + size_hint(v) + 4)
                .sum::<usize>()
        }
    }
}
