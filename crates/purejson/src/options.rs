/// Decoder settings. The defaults match the plain `decode` entry points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    /// Maximum container nesting (None = unlimited). A depth of 0 allows only scalars.
    pub max_depth: Option<usize>,
    /// Reject anything but whitespace after the first top-level value.
    pub require_eof: bool,
}

impl Options {
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_require_eof(mut self, require_eof: bool) -> Self {
        self.require_eof = require_eof;
        self
    }
}
