use core::fmt::Write as _;

use crate::number::format_float;
use crate::value::Number;
use crate::{Error, Result};

/// Bytes that never appear verbatim inside an encoded string: the quote, the
/// backslash, control bytes and everything above `~`.
#[inline]
pub fn needs_escape(b: u8) -> bool {
    b == b'"' || b == b'\\' || b < 0x20 || b > 0x7e
}

/// Append `s` as a quoted JSON string. Every byte is judged on its own value,
/// so a multi-byte UTF-8 sequence becomes one `\u00XX` escape per byte.
pub fn escape_and_quote_into(out: &mut String, s: &[u8]) {
    out.reserve(s.len() + 2);
    out.push('"');
    let mut start = 0usize;
    for (i, &b) in s.iter().enumerate() {
        if needs_escape(b) {
            push_ascii(out, &s[start..i]);
            let _ = write!(out, "\\u{:04X}", b);
            start = i + 1;
        }
    }
    push_ascii(out, &s[start..]);
    out.push('"');
}

pub fn escape_and_quote(s: &[u8]) -> String {
    let mut out = String::new();
    escape_and_quote_into(&mut out, s);
    out
}

// Runs between escapes only hold bytes in 0x20..=0x7e.
#[inline]
fn push_ascii(out: &mut String, run: &[u8]) {
    out.extend(run.iter().map(|&b| b as char));
}

pub fn format_number(n: &Number) -> Result<String> {
    match *n {
        Number::Int(i) => Ok(i.to_string()),
        Number::UInt(u) => Ok(u.to_string()),
        Number::Float(f) => {
            format_float(f).ok_or_else(|| Error::Unsupported(format!("non-finite float {}", f)))
        }
    }
}

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub fn format_null() -> &'static str {
    "null"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_and_backslash_use_numeric_escapes() {
        assert_eq!(escape_and_quote(b"a\"b"), "\"a\\u0022b\"");
        assert_eq!(escape_and_quote(b"a\\b"), "\"a\\u005Cb\"");
    }

    #[test]
    fn control_bytes_never_use_mnemonics() {
        assert_eq!(escape_and_quote(b"\n\t\x00"), "\"\\u000A\\u0009\\u0000\"");
    }

    #[test]
    fn high_bytes_escape_individually() {
        assert_eq!(escape_and_quote("\u{e9}".as_bytes()), "\"\\u00C3\\u00A9\"");
        assert_eq!(escape_and_quote(&[0x7f, 0xff]), "\"\\u007F\\u00FF\"");
    }

    #[test]
    fn printable_ascii_passes_through() {
        assert_eq!(escape_and_quote(b"hello / world ~"), "\"hello / world ~\"");
        assert_eq!(escape_and_quote(b""), "\"\"");
    }

    #[test]
    fn numbers() {
        assert_eq!(format_number(&Number::Int(-42)).unwrap(), "-42");
        assert_eq!(format_number(&Number::UInt(u64::MAX)).unwrap(), "18446744073709551615");
        assert_eq!(format_number(&Number::Float(1.0)).unwrap(), "1.0");
        assert!(matches!(
            format_number(&Number::Float(f64::NAN)),
            Err(Error::Unsupported(_))
        ));
    }
}
