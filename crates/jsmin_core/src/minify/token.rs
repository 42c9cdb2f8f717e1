//! Last-significant-token tracking.
//!
//! The minifier never tokenizes, but two decisions depend on what came
//! before: whether a `/` opens a regular expression, and whether a `.` or
//! a sign after a gap would fuse into a preceding number. [`LastToken`]
//! watches the retained characters go by and keeps just enough state to
//! answer both.

use super::charclass::is_letter_like;

/// Coarse category of the most recent significant token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Kind {
    /// Nothing retained yet.
    #[default]
    Start,
    /// Identifier or keyword; its text is in [`LastToken::text`].
    Word {
        /// The word directly follows `.` or `?.` and is a property name.
        property: bool,
    },
    /// Numeric literal; its text is in [`LastToken::text`].
    Number,
    /// String or template literal.
    Literal,
    /// Regular-expression literal.
    Regex,
    /// `)` or `]`.
    Close,
    /// `++` or `--`.
    Increment,
    /// Any other punctuator.
    Punct(char),
}

/// Tracks the last significant token across retained characters.
#[derive(Debug, Clone, Default)]
pub struct LastToken {
    kind: Kind,
    /// Text of the current word or number.
    text: String,
}

/// Keywords after which an expression, and therefore a regex, may start.
fn is_regex_keyword(word: &str) -> bool {
    matches!(
        word,
        "return"
            | "typeof"
            | "instanceof"
            | "in"
            | "of"
            | "new"
            | "delete"
            | "void"
            | "throw"
            | "case"
            | "do"
            | "else"
            | "yield"
            | "await"
    )
}

/// Returns `true` for a decimal integer with no fraction, exponent, radix
/// prefix or BigInt suffix: the only numbers that would absorb a directly
/// following `.` as a decimal point.
///
/// Legacy octals (`017`) cannot take a fraction and are excluded.
fn is_plain_integer(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(|b| b.is_ascii_digit() || *b == b'_') {
        return false;
    }
    let legacy_octal = bytes.len() > 1 && bytes[0] == b'0' && bytes.iter().all(|b| *b <= b'7');
    !legacy_octal
}

impl LastToken {
    /// Record a retained character that is not part of a literal.
    ///
    /// `glued` is `true` when nothing was elided between this character and
    /// the previous retained one.
    pub fn push(&mut self, c: char, glued: bool) {
        if glued && self.extends_current(c) {
            self.text.push(c);
            return;
        }

        let previous = self.kind;
        self.text.clear();
        self.kind = match c {
            '0'..='9' => {
                // `.5`: the dot was already recorded as a punctuator.
                if glued && previous == Kind::Punct('.') {
                    self.text.push('.');
                }
                Kind::Number
            }
            c if is_letter_like(c) => Kind::Word {
                property: previous == Kind::Punct('.'),
            },
            ')' | ']' => Kind::Close,
            '+' | '-' if glued && previous == Kind::Punct(c) => Kind::Increment,
            other => Kind::Punct(other),
        };
        if matches!(self.kind, Kind::Word { .. } | Kind::Number) {
            self.text.push(c);
        }
    }

    /// Whether `c`, glued to the previous character, continues the current
    /// word or number.
    fn extends_current(&self, c: char) -> bool {
        match self.kind {
            Kind::Word { .. } => is_letter_like(c),
            Kind::Number => match c {
                '.' => is_plain_integer(&self.text),
                '+' | '-' => self.awaits_exponent_sign(),
                c => is_letter_like(c),
            },
            _ => false,
        }
    }

    /// `1e` followed by `+`/`-` is still one number; `0xe` followed by `+`
    /// is an addition.
    fn awaits_exponent_sign(&self) -> bool {
        let text = self.text.as_str();
        let hex = text.starts_with("0x") || text.starts_with("0X");
        !hex && (text.ends_with('e') || text.ends_with('E'))
    }

    /// Returns `true` when `c` glued to the current token would become part
    /// of it: a sign right after a dangling exponent marker such as `1e`.
    pub fn absorbs_sign(&self, c: char) -> bool {
        self.kind == Kind::Number && matches!(c, '+' | '-') && self.awaits_exponent_sign()
    }

    /// Record a string or template literal.
    pub fn literal(&mut self) {
        self.kind = Kind::Literal;
        self.text.clear();
    }

    /// Record a regular-expression literal.
    pub fn regex(&mut self) {
        self.kind = Kind::Regex;
        self.text.clear();
    }

    /// Returns `true` when a `/` at this point opens a regular-expression
    /// literal rather than acting as a division operator.
    ///
    /// `/` is *division* only after tokens that produce a value: identifiers,
    /// numbers, literals, `)`, `]`, `++`, `--` and the value keywords
    /// `this`/`super`/`null`/`true`/`false` (which are plain words here).
    /// After a `}` the answer is ambiguous without a parser; it is treated as
    /// a regex.
    pub fn slash_starts_regex(&self) -> bool {
        match self.kind {
            Kind::Start | Kind::Punct(_) => true,
            Kind::Word { property: false } => is_regex_keyword(&self.text),
            Kind::Word { property: true }
            | Kind::Number
            | Kind::Literal
            | Kind::Regex
            | Kind::Close
            | Kind::Increment => false,
        }
    }

    /// Returns `true` when the last token is a number that a glued `.` would
    /// extend with a fraction.
    pub fn is_plain_integer(&self) -> bool {
        self.kind == Kind::Number && is_plain_integer(&self.text)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
