//! Decoding pipeline: JSON text -> `Value`.
//!
//! A single top-level value is read starting at a byte offset; whatever
//! follows it is left alone, so several values can be read back to back from
//! one buffer by carrying the offset from call to call.

pub mod cursor;
pub mod parser;

use crate::{Error, Options, Result, value::Value};

use parser::Parser;

pub fn decode(input: &[u8]) -> Result<Value> {
    let mut pos = 0usize;
    decode_at(input, &mut pos)
}

/// Decode one value starting at `*pos`. On success `*pos` is moved just past
/// the value; on failure it is left untouched and the error carries the
/// offset where parsing stopped.
pub fn decode_at(input: &[u8], pos: &mut usize) -> Result<Value> {
    decode_at_with_options(input, pos, &Options::default())
}

pub fn decode_with_options(input: &[u8], options: &Options) -> Result<Value> {
    let mut pos = 0usize;
    decode_at_with_options(input, &mut pos, options)
}

pub fn decode_at_with_options(input: &[u8], pos: &mut usize, options: &Options) -> Result<Value> {
    log::trace!("decoding {} bytes from offset {}", input.len(), *pos);
    let mut parser = Parser::with_options(input, *pos, options);
    let result = parser.parse_value().and_then(|value| {
        if options.require_eof {
            let cur = parser.cursor_mut();
            cur.skip_whitespace();
            if !cur.is_at_end() {
                let at = cur.pos();
                return Err(Error::syntax(
                    at,
                    format!("trailing characters after value {}", cur.context(at)),
                ));
            }
        }
        Ok(value)
    });
    match result {
        Ok(value) => {
            *pos = parser.pos();
            Ok(value)
        }
        Err(e) => {
            log::debug!("decode failed: {}", e);
            Err(e)
        }
    }
}

/// Iterator over consecutive top-level values in one buffer.
///
/// Stops once only whitespace remains. After an error has been yielded the
/// iterator is exhausted.
pub struct Values<'a> {
    input: &'a [u8],
    pos: usize,
    options: Options,
    failed: bool,
}

pub fn values(input: &[u8]) -> Values<'_> {
    values_with_options(input, Options::default())
}

pub fn values_with_options(input: &[u8], options: Options) -> Values<'_> {
    Values {
        input,
        pos: 0,
        options: Options {
            require_eof: false,
            ..options
        },
        failed: false,
    }
}

impl Values<'_> {
    /// Offset of the next unconsumed byte.
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl Iterator for Values<'_> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let mut cur = cursor::Cursor::at(self.input, self.pos);
        cur.skip_whitespace();
        if cur.is_at_end() {
            self.pos = cur.pos();
            return None;
        }
        let result = decode_at_with_options(self.input, &mut self.pos, &self.options);
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_untouched_on_error() {
        let mut pos = 2usize;
        assert!(decode_at(b"1 [1,", &mut pos).is_err());
        assert_eq!(pos, 2);
    }

    #[test]
    fn require_eof_rejects_trailing_bytes() {
        let opts = Options::default().with_require_eof(true);
        assert!(decode_with_options(b" [1] \n", &opts).is_ok());
        let err = decode_with_options(b"[1] x", &opts).unwrap_err();
        assert_eq!(err.offset(), Some(4));
    }

    #[test]
    fn values_stop_after_error() {
        let mut it = values(b"1 } 2");
        assert!(matches!(it.next(), Some(Ok(_))));
        assert!(matches!(it.next(), Some(Err(_))));
        assert!(it.next().is_none());
    }

    #[test]
    fn values_skip_trailing_whitespace() {
        let mut it = values(b"1 2 \n");
        assert_eq!(it.by_ref().count(), 2);
        assert_eq!(it.offset(), 5);
    }
}
