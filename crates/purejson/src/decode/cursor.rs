/// Read position over an immutable input buffer.
///
/// Every parse routine shares one `Cursor` and advances it as tokens are
/// recognized; `pos` is always the next unconsumed byte.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

/// Bytes of input quoted in error messages.
const CONTEXT_LEN: usize = 4;

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::at(input, 0)
    }

    pub fn at(input: &'a [u8], pos: usize) -> Self {
        Self { input, pos }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline]
    pub fn bump(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn rest(&self) -> &'a [u8] {
        self.input.get(self.pos..).unwrap_or(&[])
    }

    pub fn starts_with(&self, token: &[u8]) -> bool {
        self.rest().starts_with(token)
    }

    /// Input bytes from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.input[start..self.pos]
    }

    /// Only space, tab, CR and LF count as whitespace.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.pos += 1;
        }
    }

    /// A short quoted excerpt of the input starting at `at`, for diagnostics.
    pub fn context(&self, at: usize) -> String {
        let start = at.min(self.input.len());
        let end = (start + CONTEXT_LEN).min(self.input.len());
        format!("{:?}", String::from_utf8_lossy(&self.input[start..end]))
    }
}
