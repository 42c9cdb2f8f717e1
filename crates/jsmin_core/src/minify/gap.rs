//! What to emit between two retained characters.
//!
//! While the engine skips whitespace and comments it only remembers the
//! widest kind of [`Gap`] it saw. When the next character is retained,
//! [`decide`] turns the previous character, the next character and that gap
//! into a [`Separator`].

use super::charclass::{CharClass, classify, is_letter_like, is_word_like};

/// The widest kind of insignificant text elided since the previous retained
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub enum Gap {
    /// The two characters were adjacent in the source.
    #[default]
    None,
    /// Spaces, tabs or comments on the same line.
    Blank,
    /// At least one line break, possibly inside a block comment.
    LineBreak,
}

impl Gap {
    /// Combine two observations, keeping the wider one.
    pub fn widen(self, other: Gap) -> Gap {
        self.max(other)
    }
}

/// The separator written before a retained character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// The characters become adjacent.
    Nothing,
    /// A single space.
    Space,
    /// A single `\n`.
    Newline,
}

impl Separator {
    /// Append the separator to `out`.
    pub fn write(self, out: &mut String) {
        match self {
            Separator::Nothing => {}
            Separator::Space => out.push(' '),
            Separator::Newline => out.push('\n'),
        }
    }
}

/// Context about the previous retained character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prev {
    /// The character itself.
    pub ch: char,
    /// `true` when `ch` closed a regular-expression literal, so a following
    /// letter would be read as a flag.
    pub closes_regex: bool,
}

impl Prev {
    fn is_word_like(self) -> bool {
        self.closes_regex || is_word_like(self.ch)
    }
}

/// Decide what to emit between `prev` and `next` given the elided `gap`.
pub fn decide(prev: Prev, next: char, gap: Gap) -> Separator {
    match gap {
        Gap::None => Separator::Nothing,
        Gap::Blank if needs_separator(prev, next) => Separator::Space,
        Gap::Blank => Separator::Nothing,
        Gap::LineBreak
            if needs_separator(prev, next) || (ends_statement(prev) && starts_statement(next)) =>
        {
            Separator::Newline
        }
        Gap::LineBreak => Separator::Nothing,
    }
}

/// Returns `true` when gluing `prev` and `next` together would lex
/// differently from the source.
fn needs_separator(prev: Prev, next: char) -> bool {
    let next_word = is_word_like(next);
    if prev.is_word_like() && next_word {
        // `#` and `@` only need room next to an identifier character.
        return prev.closes_regex || is_letter_like(prev.ch) || is_letter_like(next);
    }
    // `+ +x`, `- -x`, and anything that would open a comment.
    matches!(
        (prev.ch, next),
        ('+', '+') | ('-', '-') | ('/', '/') | ('/', '*')
    )
}

/// Characters after which a line break may terminate a statement.
fn ends_statement(prev: Prev) -> bool {
    prev.closes_regex
        || matches!(classify(prev.ch), CharClass::Letter | CharClass::Quote)
        || matches!(prev.ch, '}' | ']' | ')' | '+' | '-')
}

/// Characters that may begin a statement after a line break.
fn starts_statement(next: char) -> bool {
    matches!(
        classify(next),
        CharClass::Letter | CharClass::Quote | CharClass::Slash | CharClass::Other
    ) || matches!(next, '{' | '[' | '(' | '+' | '-' | '!' | '~')
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
