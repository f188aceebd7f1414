use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed input. `offset` is the byte position the parser was looking at.
    #[error("syntax at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    /// A value the encoder cannot represent as JSON text.
    #[error("cannot serialize {0}")]
    Unsupported(String),
}

impl Error {
    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            offset,
            message: message.into(),
        }
    }

    /// Byte offset of a syntax error, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Syntax { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
