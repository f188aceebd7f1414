//! In-memory value model shared by the encoder and the decoder.

use core::fmt;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash, Hasher, RandomState};

/// A JSON number. The decoder picks `Float` exactly when the literal had a
/// decimal point; `UInt` only holds integers above `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(i) => Some(i),
            Number::UInt(u) => i64::try_from(u).ok(),
            Number::Float(_) => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::Int(i) => u64::try_from(i).ok(),
            Number::UInt(u) => Some(u),
            Number::Float(_) => None,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::UInt(u) => u as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::UInt(u) => write!(f, "{}", u),
            Number::Float(num) => match crate::number::format_float(*num) {
                Some(s) => f.write_str(&s),
                None => write!(f, "{}", num),
            },
        }
    }
}

/// A decoded or to-be-encoded JSON value.
///
/// Strings are byte vectors: `\u` escapes decode to UTF-8 but any raw byte is
/// carried through untouched, valid UTF-8 or not. Object keys are full values
/// since the grammar accepts any value in key position.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(Vec<u8>),
    Array(Vec<Value>),
    Object(Vec<(Value, Value)>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The string contents, if this is a string holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| core::str::from_utf8(b).ok())
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Look up a string key in an object. With duplicate keys the last one wins.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .rev()
            .find(|(k, _)| k.as_bytes() == Some(key.as_bytes()))
            .map(|(_, v)| v)
    }
}

// Consistent with the derived `PartialEq`: 0.0 and -0.0 hash alike.
impl Hash for Number {
    fn hash<H: Hasher>(&self, h: &mut H) {
        core::mem::discriminant(self).hash(h);
        match *self {
            Number::Int(i) => i.hash(h),
            Number::UInt(u) => u.hash(h),
            Number::Float(f) => {
                if f == 0.0f64 {
                    0.0f64.to_bits().hash(h);
                } else {
                    f.to_bits().hash(h);
                }
            }
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, h: &mut H) {
        core::mem::discriminant(self).hash(h);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(h),
            Value::Number(n) => n.hash(h),
            Value::String(s) => s.hash(h),
            Value::Array(items) => items.hash(h),
            Value::Object(pairs) => pairs.hash(h),
        }
    }
}

/// Collects object pairs with mapping semantics: a key equal to an earlier
/// one keeps the earlier slot and takes the new value.
///
/// Slots are found through a hash index with per-slot collision chains, so
/// building an object with n keys is linear in n.
#[derive(Default)]
pub(crate) struct ObjectBuilder {
    pairs: Vec<(Value, Value)>,
    heads: HashMap<u64, usize>,
    next: Vec<Option<usize>>,
    state: RandomState,
}

impl ObjectBuilder {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
            heads: HashMap::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
            state: RandomState::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: Value, value: Value) {
        let hash = self.state.hash_one(&key);
        let mut slot = self.heads.get(&hash).copied();
        while let Some(i) = slot {
            if self.pairs[i].0 == key {
                self.pairs[i].1 = value;
                return;
            }
            slot = self.next[i];
        }
        let i = self.pairs.len();
        self.next.push(self.heads.insert(hash, i));
        self.pairs.push((key, value));
    }

    pub(crate) fn finish(self) -> Value {
        Value::Object(self.pairs)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Number(Number::Int(i64::from(n)))
            }
        }
    )*};
}
from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(i) => Value::Number(Number::Int(i)),
            Err(_) => Value::Number(Number::UInt(n)),
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into_bytes())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::String(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_prefers_last_duplicate() {
        let v = Value::Object(vec![
            (Value::from("a"), Value::from(1)),
            (Value::from("b"), Value::from(2)),
            (Value::from("a"), Value::from(3)),
        ]);
        assert_eq!(v.get("a"), Some(&Value::from(3)));
        assert_eq!(v.get("b").and_then(Value::as_i64), Some(2));
        assert_eq!(v.get("c"), None);
    }

    #[test]
    fn builder_overwrites_in_place() {
        let mut obj = ObjectBuilder::default();
        obj.insert(Value::from("a"), Value::from(1));
        obj.insert(Value::from("b"), Value::from(2));
        obj.insert(Value::from("a"), Value::from(3));
        assert_eq!(
            obj.finish(),
            Value::Object(vec![
                (Value::from("a"), Value::from(3)),
                (Value::from("b"), Value::from(2)),
            ])
        );
    }

    #[test]
    fn builder_matches_non_string_keys() {
        let mut obj = ObjectBuilder::with_capacity(4);
        obj.insert(Value::from(0.0), Value::from(1));
        obj.insert(Value::from(-0.0), Value::from(2));
        obj.insert(Value::from(vec![Value::Null]), Value::from(3));
        obj.insert(Value::from(vec![Value::Null]), Value::from(4));
        obj.insert(Value::from(1), Value::from(5));
        obj.insert(Value::from(1.0), Value::from(6));
        assert_eq!(
            obj.finish(),
            Value::Object(vec![
                (Value::from(0.0), Value::from(2)),
                (Value::from(vec![Value::Null]), Value::from(4)),
                (Value::from(1), Value::from(5)),
                (Value::from(1.0), Value::from(6)),
            ])
        );
    }

    #[test]
    fn builder_keeps_nan_keys_apart() {
        let mut obj = ObjectBuilder::default();
        obj.insert(Value::from(f64::NAN), Value::from(1));
        obj.insert(Value::from(f64::NAN), Value::from(2));
        assert_eq!(obj.finish().as_object().map(<[_]>::len), Some(2));
    }

    #[test]
    fn as_str_rejects_invalid_utf8() {
        let v = Value::String(vec![b'a', 0xff]);
        assert_eq!(v.as_bytes(), Some(&[b'a', 0xff][..]));
        assert_eq!(v.as_str(), None);
        assert_eq!(Value::from("h\u{e9}").as_str(), Some("h\u{e9}"));
    }

    #[test]
    fn number_conversions() {
        assert_eq!(Value::from(u64::MAX), Value::Number(Number::UInt(u64::MAX)));
        assert_eq!(Value::from(5u64), Value::Number(Number::Int(5)));
        assert_eq!(Number::Int(-1).as_u64(), None);
        assert_eq!(Number::Float(2.5).as_i64(), None);
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Int(2).to_string(), "2");
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }
}
