//! Single-character classification.
//!
//! See [`classify`] for the main entry point.

/// The lexical category of one input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Identifier characters and digits: ASCII letters, `0`–`9`, `_`, `$`,
    /// `\` (identifier escapes) and every non-ASCII character.
    Letter,
    /// Operator and punctuation characters other than `/`.
    Punctuator,
    /// String and template delimiters: `"`, `'` and `` ` ``.
    Quote,
    /// `/`: division, comment opener or regular-expression delimiter.
    Slash,
    /// Space, tab and the remaining ASCII control characters.
    Whitespace,
    /// `\n` or `\r`.
    Newline,
    /// End of input.
    Eof,
    /// Everything else: `#` (private names, shebangs) and `@` (decorators).
    Other,
}

impl CharClass {
    /// Classify an optional character, mapping `None` to [`CharClass::Eof`].
    pub fn of(c: Option<char>) -> Self {
        c.map_or(CharClass::Eof, classify)
    }
}

/// Returns the [`CharClass`] of `c`.
pub fn classify(c: char) -> CharClass {
    match c {
        'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '$' | '\\' => CharClass::Letter,
        '"' | '\'' | '`' => CharClass::Quote,
        '/' => CharClass::Slash,
        '\n' | '\r' => CharClass::Newline,
        ' ' => CharClass::Whitespace,
        c if c.is_ascii_control() => CharClass::Whitespace,
        '{' | '}' | '(' | ')' | '[' | ']' | ';' | ',' | '.' | '<' | '>' | '=' | '+' | '-'
        | '*' | '%' | '&' | '|' | '^' | '!' | '~' | '?' | ':' => CharClass::Punctuator,
        c if !c.is_ascii() => CharClass::Letter,
        _ => CharClass::Other,
    }
}

/// Returns `true` when `c` can be part of an identifier, keyword or number.
pub fn is_letter_like(c: char) -> bool {
    classify(c) == CharClass::Letter
}

/// Returns `true` for characters that must stay separated from an adjacent
/// identifier character: letter-like characters themselves and [`CharClass::Other`].
pub(crate) fn is_word_like(c: char) -> bool {
    matches!(classify(c), CharClass::Letter | CharClass::Other)
}

/// Returns `true` for every character that ends a line in JavaScript,
/// including U+2028 LINE SEPARATOR and U+2029 PARAGRAPH SEPARATOR, which
/// [`classify`] files under [`CharClass::Letter`].
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
