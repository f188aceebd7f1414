use crate::decode::cursor::Cursor;
use crate::error::Error;
use crate::number::{parse_float, parse_integer};
use crate::value::{ObjectBuilder, Value};
use crate::{Options, Result};

/// Recursive-descent parser. Each `parse_*` method starts at the cursor and
/// leaves it just past the construct it recognized.
pub struct Parser<'a> {
    cur: Cursor<'a>,
    depth: usize,
    max_depth: Option<usize>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, 0, &Options::default())
    }

    pub fn with_options(input: &'a [u8], pos: usize, options: &Options) -> Self {
        Self {
            cur: Cursor::at(input, pos),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    pub fn pos(&self) -> usize {
        self.cur.pos()
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cur
    }

    fn error_here(&self, message: impl Into<String>) -> Error {
        Error::syntax(self.cur.pos(), message)
    }

    fn unexpected(&self, at: usize, what: &str) -> Error {
        Error::syntax(at, format!("{} {}", what, self.cur.context(at)))
    }

    pub fn parse_value(&mut self) -> Result<Value> {
        self.cur.skip_whitespace();
        match self.cur.peek() {
            None => Err(self.error_here("unexpected end of input")),
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'0'..=b'9' | b'-') => self.parse_number(),
            Some(b't') => self.parse_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Bool(false)),
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(_) => Err(self.unexpected(self.cur.pos(), "unexpected sequence")),
        }
    }

    fn parse_literal(&mut self, token: &[u8], value: Value) -> Result<Value> {
        if !self.cur.starts_with(token) {
            return Err(self.unexpected(self.cur.pos(), "unexpected sequence"));
        }
        self.cur.advance(token.len());
        Ok(value)
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        match self.max_depth {
            Some(max) if self.depth > max => {
                Err(self.error_here(format!("nesting deeper than {} levels", max)))
            }
            _ => Ok(()),
        }
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.cur.bump();
        let mut pairs = ObjectBuilder::default();
        self.cur.skip_whitespace();
        if self.cur.peek() == Some(b'}') {
            self.cur.bump();
            self.leave();
            return Ok(pairs.finish());
        }
        loop {
            let key = self.parse_value()?;
            self.cur.skip_whitespace();
            if self.cur.peek() != Some(b':') {
                return Err(self.unexpected(self.cur.pos(), "expected ':', got"));
            }
            self.cur.bump();
            let value = self.parse_value()?;
            pairs.insert(key, value);

            self.cur.skip_whitespace();
            match self.cur.peek() {
                Some(b',') => self.cur.bump(),
                Some(b'}') => {
                    self.cur.bump();
                    break;
                }
                _ => return Err(self.unexpected(self.cur.pos(), "expected ',' or '}', got")),
            }
        }
        self.leave();
        Ok(pairs.finish())
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.cur.bump();
        let mut items = Vec::new();
        self.cur.skip_whitespace();
        if self.cur.peek() == Some(b']') {
            self.cur.bump();
            self.leave();
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            self.cur.skip_whitespace();
            match self.cur.peek() {
                Some(b',') => self.cur.bump(),
                Some(b']') => {
                    self.cur.bump();
                    break;
                }
                _ => return Err(self.unexpected(self.cur.pos(), "expected ',' or ']', got")),
            }
        }
        self.leave();
        Ok(Value::Array(items))
    }

    /// Raw bytes are copied as-is; control bytes and invalid UTF-8 are accepted.
    fn parse_string(&mut self) -> Result<Vec<u8>> {
        self.cur.bump();
        let mut out = Vec::new();
        loop {
            let rest = self.cur.rest();
            let run = rest
                .iter()
                .position(|&b| b == b'"' || b == b'\\')
                .unwrap_or(rest.len());
            out.extend_from_slice(&rest[..run]);
            self.cur.advance(run);
            match self.cur.peek() {
                None => return Err(self.error_here("unexpected end of input in string")),
                Some(b'"') => {
                    self.cur.bump();
                    return Ok(out);
                }
                Some(_) => {
                    self.cur.bump();
                    self.parse_escape(&mut out)?;
                }
            }
        }
    }

    /// Decode one escape; the cursor is just past the backslash.
    fn parse_escape(&mut self, out: &mut Vec<u8>) -> Result<()> {
        let byte = match self.cur.peek() {
            Some(b'b') => 0x08,
            Some(b'f') => 0x0c,
            Some(b'n') => b'\n',
            Some(b'r') => b'\r',
            Some(b't') => b'\t',
            Some(c @ (b'"' | b'\\' | b'/')) => c,
            Some(b'u') => {
                let code = self.parse_hex4()?;
                push_utf8(out, code);
                return Ok(());
            }
            _ => return Err(self.unexpected(self.cur.pos() - 1, "unexpected escape")),
        };
        self.cur.bump();
        out.push(byte);
        Ok(())
    }

    /// Read `uXXXX`, leaving the cursor past the fourth hex digit. Errors
    /// point at the backslash.
    fn parse_hex4(&mut self) -> Result<u16> {
        let start = self.cur.pos() - 1;
        let digits = self.cur.rest().get(1..5);
        let code = digits
            .and_then(|d| core::str::from_utf8(d).ok())
            .filter(|s| s.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|s| u16::from_str_radix(s, 16).ok());
        match code {
            Some(code) => {
                self.cur.advance(5);
                Ok(code)
            }
            None => Err(self.unexpected(start, "invalid unicode escape")),
        }
    }

    /// Optional '-', digits, at most one '.'; anything else ends the literal.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.cur.pos();
        self.cur.bump();
        let mut float = false;
        while let Some(b) = self.cur.peek() {
            match b {
                b'0'..=b'9' => {}
                b'.' if !float => float = true,
                _ => break,
            }
            self.cur.bump();
        }
        let raw = self.cur.slice_from(start);
        if raw == b"-" {
            return Err(self.unexpected(start, "unexpected sequence"));
        }
        // Only ASCII digits, '-' and '.' were consumed.
        let token: String = raw.iter().map(|&b| char::from(b)).collect();
        let number = if float {
            parse_float(&token)
        } else {
            parse_integer(&token)
        };
        match number {
            Some(n) => Ok(Value::Number(n)),
            None => Err(self.unexpected(start, "malformed number")),
        }
    }
}

/// UTF-8 encode a `\u` code point. Surrogates are not paired; each becomes
/// its own three-byte sequence.
fn push_utf8(out: &mut Vec<u8>, code: u16) {
    let c = u32::from(code);
    if c <= 0x7f {
        out.push(c as u8);
    } else if c <= 0x7ff {
        out.push(0xc0 | (c >> 6) as u8);
        out.push(0x80 | (c & 0x3f) as u8);
    } else {
        out.push(0xe0 | (c >> 12) as u8);
        out.push(0x80 | ((c >> 6) & 0x3f) as u8);
        out.push(0x80 | (c & 0x3f) as u8);
    }
}
