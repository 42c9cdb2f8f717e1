//! Error types for the minifier.

use thiserror::Error;

use crate::minify::reader::Position;

/// Fatal errors raised while minifying a single source text.
///
/// Each variant records where the unterminated construct *began*, so a caller
/// can point at the opening delimiter rather than at the end of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MinifyError {
    /// A `/* … */` comment was still open at end of input.
    #[error("unterminated comment starting at {start}")]
    UnterminatedComment {
        /// Location of the opening `/*`.
        start: Position,
    },

    /// A string or template literal was still open at end of input.
    #[error("unterminated string literal starting at {start}")]
    UnterminatedString {
        /// Location of the opening quote or backtick.
        start: Position,
    },

    /// A regular-expression literal ran into a line break or end of input.
    #[error("unterminated regular expression literal starting at {start}")]
    UnterminatedRegex {
        /// Location of the opening `/`.
        start: Position,
    },
}

impl MinifyError {
    /// Where the offending construct began.
    pub fn start(&self) -> Position {
        match *self {
            MinifyError::UnterminatedComment { start }
            | MinifyError::UnterminatedString { start }
            | MinifyError::UnterminatedRegex { start } => start,
        }
    }
}

/// Convenient `Result` alias for fallible minifier operations.
pub type MinifyResult<T> = Result<T, MinifyError>;
