//! Minifier internals.
//!
//! - [`charclass`]: maps a single character to its [`charclass::CharClass`].
//! - [`reader`]: forward-only character reader with one character of
//!   lookahead and [`reader::Position`] tracking.
//! - [`gap`]: decides what to emit between two retained characters when
//!   whitespace or comments were elided.
//! - [`token`]: tracks the category of the last significant token, which
//!   drives the regex-versus-division heuristic.
//! - [`engine`]: the state machine tying the pieces together.

/// Character classification.
pub mod charclass;
/// The minifier state machine and public entry points.
pub mod engine;
/// Separator decisions for elided spans.
pub mod gap;
/// Lookahead reader with source positions.
pub mod reader;
/// Last-significant-token tracking.
pub mod token;

#[cfg(test)]
mod properties;
