//! Forward-only character reader with one character of lookahead.

use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Position
// ─────────────────────────────────────────────────────────────────────────────

/// A byte offset + line/column location in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the beginning of the source string.
    pub offset: usize,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number, measured in Unicode scalar values.
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader
// ─────────────────────────────────────────────────────────────────────────────

/// Reads a UTF-8 source string one character at a time.
///
/// [`Reader::peek`] looks at the next character without consuming it and
/// [`Iterator::next`] consumes it; `None` is the end-of-input sentinel. The
/// reader never moves backwards, so everything built on it is a single
/// forward pass.
///
/// # Example
///
/// ```
/// use jsmin_core::Reader;
///
/// let mut reader = Reader::new("a\nb");
/// assert_eq!(reader.peek(), Some('a'));
/// assert_eq!(reader.next(), Some('a'));
/// assert_eq!(reader.next(), Some('\n'));
/// assert_eq!(reader.position().line, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'src> {
    /// The complete source string.
    source: &'src str,
    /// Current byte position within `source`.
    pos: usize,
    /// Current 1-based line number.
    line: u32,
    /// Current 1-based column number.
    column: u32,
}

impl<'src> Reader<'src> {
    /// Create a reader positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The next character, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Location of the next character to be read.
    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns `true` when all input has been consumed.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

impl Iterator for Reader<'_> {
    type Item = char;

    /// Consume and return the next character.
    ///
    /// Characters are returned exactly as they appear in the source; only
    /// position tracking folds `\r\n` into a single line break.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        match ch {
            '\r' if self.source[self.pos..].starts_with('\n') => {
                // The following `\n` bumps the line.
                self.column += 1;
            }
            '\r' | '\n' => {
                self.line += 1;
                self.column = 1;
            }
            _ => {
                self.column += 1;
            }
        }
        Some(ch)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
