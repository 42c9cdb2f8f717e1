//! The minifier state machine.
//!
//! See [`minify`] and [`minify_into`] for the public entry points.

use std::mem;

use tracing::{debug, instrument, trace};

use super::charclass::{CharClass, classify, is_letter_like, is_line_terminator};
use super::gap::{self, Gap, Prev, Separator};
use super::reader::{Position, Reader};
use super::token::LastToken;
use crate::error::{MinifyError, MinifyResult};

/// Byte-order mark skipped at the very start of the input.
const BOM: char = '\u{FEFF}';

/// One frame of template-literal nesting while copying a template verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nest {
    /// Inside the text part of a template literal.
    Template,
    /// Inside a `${ … }` substitution, with the given count of open `{`.
    Substitution(usize),
}

/// Single-use minifier over one source text.
struct Minifier<'src, 'out> {
    reader: Reader<'src>,
    out: &'out mut String,
    /// The previous retained character, `None` before the first one.
    prev: Option<Prev>,
    /// What was elided since `prev`.
    gap: Gap,
    last: LastToken,
}

impl<'src, 'out> Minifier<'src, 'out> {
    fn new(source: &'src str, out: &'out mut String) -> Self {
        Self {
            reader: Reader::new(source),
            out,
            prev: None,
            gap: Gap::None,
            last: LastToken::default(),
        }
    }

    fn run(mut self) -> MinifyResult<()> {
        self.out.push('\n');
        if self.reader.peek() == Some(BOM) {
            self.reader.next();
        }

        loop {
            let start = self.reader.position();
            let Some(c) = self.reader.next() else {
                break;
            };
            match classify(c) {
                CharClass::Whitespace => self.gap = self.gap.widen(Gap::Blank),
                CharClass::Newline => self.gap = Gap::LineBreak,
                _ if is_line_terminator(c) => self.gap = Gap::LineBreak,
                CharClass::Slash => match self.reader.peek() {
                    Some('/') => self.skip_line_comment(),
                    Some('*') => self.skip_block_comment(start)?,
                    _ if self.last.slash_starts_regex() => self.copy_regex(start)?,
                    _ => self.retain(c),
                },
                CharClass::Quote => self.copy_string(c, start)?,
                _ => self.retain(c),
            }
        }
        Ok(())
    }

    // ── Separators ──────────────────────────────────────────────────────────

    /// Write whatever the elided gap before `next` requires, and report
    /// whether `next` was glued to the previous retained character.
    fn separate(&mut self, next: char) -> bool {
        let gap = mem::take(&mut self.gap);
        let Some(prev) = self.prev else {
            return true;
        };
        if gap == Gap::None {
            return true;
        }
        match gap::decide(prev, next, gap) {
            // `1e +5` must stay two tokens.
            Separator::Nothing if self.last.absorbs_sign(next) => {
                Separator::Space.write(self.out);
            }
            // `1 .toString()` must not become `1.toString()`.
            Separator::Nothing if next == '.' && self.last.is_plain_integer() => {
                self.out.push('.');
            }
            // `a < !--b` must not become the HTML comment opener `<!--`.
            Separator::Nothing if self.would_open_html_comment(prev.ch, next) => {
                Separator::Space.write(self.out);
            }
            sep => sep.write(self.out),
        }
        false
    }

    /// Returns `true` when gluing `next` to `prev` would spell `<!--`.
    ///
    /// `next` is already consumed, so the reader peeks at the character
    /// after it.
    fn would_open_html_comment(&self, prev: char, next: char) -> bool {
        let dash_follows = self.reader.peek() == Some('-');
        match (prev, next) {
            ('<', '!') => dash_follows,
            ('!', '-') => dash_follows && self.out.ends_with("<!"),
            _ => false,
        }
    }

    /// Emit a character outside any literal.
    fn retain(&mut self, c: char) {
        let glued = self.separate(c);
        self.out.push(c);
        self.last.push(c, glued);
        self.prev = Some(Prev {
            ch: c,
            closes_regex: false,
        });
    }

    // ── Comments ────────────────────────────────────────────────────────────

    /// Skip a `//` comment up to, but not including, the line terminator.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.reader.peek() {
            if is_line_terminator(c) {
                break;
            }
            self.reader.next();
        }
        self.gap = self.gap.widen(Gap::Blank);
    }

    /// Skip a `/* … */` comment; the leading `/` is already consumed.
    fn skip_block_comment(&mut self, start: Position) -> MinifyResult<()> {
        self.reader.next(); // *
        let mut gap = Gap::Blank;
        loop {
            match self.reader.next() {
                None => return Err(MinifyError::UnterminatedComment { start }),
                Some('*') if self.reader.peek() == Some('/') => {
                    self.reader.next();
                    break;
                }
                Some(c) if is_line_terminator(c) => gap = Gap::LineBreak,
                Some(_) => {}
            }
        }
        trace!(
            offset = start.offset,
            multiline = gap == Gap::LineBreak,
            "elided block comment"
        );
        self.gap = self.gap.widen(gap);
        Ok(())
    }

    // ── Literals ────────────────────────────────────────────────────────────

    /// Consume one character that must exist inside an open literal.
    fn literal_char(&mut self, err: MinifyError) -> MinifyResult<char> {
        let c = self.reader.next().ok_or(err)?;
        self.out.push(c);
        Ok(c)
    }

    /// Copy a string or template literal verbatim; the opening delimiter is
    /// already consumed.
    fn copy_string(&mut self, quote: char, start: Position) -> MinifyResult<()> {
        self.separate(quote);
        self.out.push(quote);
        if quote == '`' {
            self.copy_template(start)?;
        } else {
            self.copy_quoted(quote, start)?;
        }
        self.last.literal();
        self.prev = Some(Prev {
            ch: quote,
            closes_regex: false,
        });
        Ok(())
    }

    /// Copy the rest of a `'…'` or `"…"` string up to its closing quote.
    fn copy_quoted(&mut self, quote: char, start: Position) -> MinifyResult<()> {
        let err = MinifyError::UnterminatedString { start };
        loop {
            match self.literal_char(err)? {
                '\\' => {
                    self.literal_char(err)?;
                }
                c if c == quote => return Ok(()),
                _ => {}
            }
        }
    }

    /// Copy the rest of a template literal, including any `${ … }`
    /// substitutions, up to its closing backtick.
    ///
    /// Code inside a substitution is copied as is. Strings, nested templates,
    /// comments and regex literals there are tracked only so that their
    /// contents cannot end the template early.
    fn copy_template(&mut self, start: Position) -> MinifyResult<()> {
        let err = MinifyError::UnterminatedString { start };
        let mut stack = vec![Nest::Template];
        // Whether a `/` in the current substitution would open a regex.
        let mut operand_expected = true;
        while let Some(&top) = stack.last() {
            let at = self.reader.position();
            let c = self.literal_char(err)?;
            match (top, c) {
                (_, '\\') => {
                    self.literal_char(err)?;
                }
                (Nest::Template, '`') => {
                    stack.pop();
                    operand_expected = false;
                }
                (Nest::Template, '$') if self.reader.peek() == Some('{') => {
                    self.literal_char(err)?;
                    stack.push(Nest::Substitution(0));
                    operand_expected = true;
                }
                (Nest::Template, _) => {}
                (Nest::Substitution(_), c)
                    if classify(c) == CharClass::Whitespace || is_line_terminator(c) => {}
                (Nest::Substitution(_), '`') => stack.push(Nest::Template),
                (Nest::Substitution(_), '"' | '\'') => {
                    self.copy_quoted(c, at)?;
                    operand_expected = false;
                }
                (Nest::Substitution(_), '/') => match self.reader.peek() {
                    Some('/' | '*') => self.copy_substitution_comment(err)?,
                    _ if operand_expected => {
                        self.copy_regex_body(at)?;
                        operand_expected = false;
                    }
                    _ => operand_expected = true,
                },
                (Nest::Substitution(depth), '{') => {
                    stack.pop();
                    stack.push(Nest::Substitution(depth + 1));
                    operand_expected = true;
                }
                (Nest::Substitution(depth), '}') => {
                    stack.pop();
                    if depth > 0 {
                        stack.push(Nest::Substitution(depth - 1));
                    }
                    // A substitution is an expression, so `}` closes a value.
                    operand_expected = false;
                }
                (Nest::Substitution(_), c) => {
                    operand_expected = !(is_letter_like(c) || matches!(c, ')' | ']'));
                }
            }
        }
        Ok(())
    }

    /// Copy a comment inside a template substitution; its leading `/` is
    /// already copied.
    fn copy_substitution_comment(&mut self, err: MinifyError) -> MinifyResult<()> {
        if self.literal_char(err)? == '/' {
            while self.reader.peek().is_some_and(|c| !is_line_terminator(c)) {
                self.literal_char(err)?;
            }
            return Ok(());
        }
        loop {
            if self.literal_char(err)? == '*' && self.reader.peek() == Some('/') {
                self.literal_char(err)?;
                return Ok(());
            }
        }
    }

    /// Copy a regular-expression literal and its flags verbatim; the opening
    /// `/` is already consumed.
    fn copy_regex(&mut self, start: Position) -> MinifyResult<()> {
        trace!(offset = start.offset, "regex literal");
        self.separate('/');
        self.out.push('/');
        let last = self.copy_regex_body(start)?;

        self.last.regex();
        self.prev = Some(Prev {
            ch: last,
            closes_regex: last == '/',
        });
        Ok(())
    }

    /// Copy a regex body, its closing `/` and any flags, returning the last
    /// character copied.
    fn copy_regex_body(&mut self, start: Position) -> MinifyResult<char> {
        let err = MinifyError::UnterminatedRegex { start };
        let mut in_class = false;
        loop {
            let c = match self.reader.next() {
                Some(c) if !is_line_terminator(c) => c,
                _ => return Err(err),
            };
            self.out.push(c);
            match c {
                '\\' => match self.reader.next() {
                    Some(e) if !is_line_terminator(e) => self.out.push(e),
                    _ => return Err(err),
                },
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => break,
                _ => {}
            }
        }

        let mut last = '/';
        while let Some(flag) = self.reader.peek().filter(char::is_ascii_alphabetic) {
            self.reader.next();
            self.out.push(flag);
            last = flag;
        }
        Ok(last)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Minify `source`, appending the result to `out`.
///
/// The appended text always starts with a single `\n`. On error nothing is
/// appended: `out` is restored to its previous length, so a caller
/// concatenating many files never keeps half a file.
///
/// # Errors
///
/// Returns [`MinifyError::UnterminatedComment`],
/// [`MinifyError::UnterminatedString`] or [`MinifyError::UnterminatedRegex`]
/// when the input ends inside the corresponding construct.
#[instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn minify_into(source: &str, out: &mut String) -> MinifyResult<()> {
    let mark = out.len();
    match Minifier::new(source, out).run() {
        Ok(()) => {
            debug!(input = source.len(), output = out.len() - mark, "minified source");
            Ok(())
        }
        Err(err) => {
            debug!(%err, "minification failed");
            out.truncate(mark);
            Err(err)
        }
    }
}

/// Minify `source` and return the result.
///
/// # Example
///
/// ```
/// let out = jsmin_core::minify("$(\"#x\").val(1 /* Calendar */.toString());").unwrap();
/// assert_eq!(out, "\n$(\"#x\").val(1..toString());");
/// ```
///
/// # Errors
///
/// See [`minify_into`].
pub fn minify(source: &str) -> MinifyResult<String> {
    let mut out = String::with_capacity(source.len() + 1);
    minify_into(source, &mut out)?;
    Ok(out)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
