#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use purejson::{Number, Value, decode, encode};
use arbitrary::Arbitrary;

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

#[derive(Arbitrary, Debug)]
struct FuzzValue {
    choice: u8,
}

// Bytes above 0x7f do not survive encode -> decode unchanged, so strings stay 7-bit.
fn ascii_bytes(u: &mut arbitrary::Unstructured) -> arbitrary::Result<Vec<u8>> {
    let raw: Vec<u8> = u.arbitrary()?;
    Ok(raw.into_iter().map(|b| b & 0x7f).collect())
}

impl FuzzValue {
    fn to_value(&self, u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
        if depth >= MAX_DEPTH {
            return Ok(Value::Null);
        }

        Ok(match self.choice % 10 {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => Value::Number(Number::Int(u.arbitrary()?)),
            3 => {
                let n: f64 = u.arbitrary()?;
                if n.is_finite() {
                    Value::Number(Number::Float(n))
                } else {
                    Value::Null
                }
            }
            4 => Value::String(ascii_bytes(u)?),
            5..=7 => {
                let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
                let mut arr = Vec::with_capacity(size);
                for _ in 0..size {
                    let fv: FuzzValue = u.arbitrary()?;
                    arr.push(fv.to_value(u, depth + 1)?);
                }
                Value::Array(arr)
            }
            _ => {
                let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
                let mut pairs: Vec<(Value, Value)> = Vec::with_capacity(size);
                for _ in 0..size {
                    let key = Value::String(ascii_bytes(u)?);
                    let fv: FuzzValue = u.arbitrary()?;
                    let value = fv.to_value(u, depth + 1)?;
                    if !pairs.iter().any(|(k, _)| *k == key) {
                        pairs.push((key, value));
                    }
                }
                Value::Object(pairs)
            }
        })
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);

    if let Ok(fv) = u.arbitrary::<FuzzValue>() {
        if let Ok(value) = fv.to_value(&mut u, 0) {
            let encoded = encode(&value).expect("finite values always encode");
            match decode(&encoded) {
                Ok(decoded) => {
                    if value != decoded {
                        panic!(
                            "Structured roundtrip mismatch!\nOriginal: {:?}\nJSON: {}\nDecoded: {:?}",
                            value,
                            String::from_utf8_lossy(&encoded),
                            decoded
                        );
                    }
                }
                Err(e) => {
                    panic!(
                        "Failed to decode structured input!\nOriginal: {:?}\nJSON: {}\nError: {}",
                        value,
                        String::from_utf8_lossy(&encoded),
                        e
                    );
                }
            }
        }
    }
});
