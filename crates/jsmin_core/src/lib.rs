//! `jsmin_core`: a single-pass whitespace and comment minifier for
//! JavaScript source.
//!
//! The minifier never builds tokens or a syntax tree. It walks the input
//! once with one character of lookahead, drops comments and insignificant
//! whitespace, copies string, template and regular-expression literals
//! verbatim, and decides between nothing, a space or a newline wherever it
//! elided something.
//!
//! ```
//! let out = jsmin_core::minify("var a = 1 ;  // one\nvar b = a + +a;").unwrap();
//! assert_eq!(out, "\nvar a=1;var b=a+ +a;");
//! ```
//!
//! # Crate layout
//!
//! - [`minify`]: character classification, the lookahead reader and the
//!   minifier state machine.
//! - [`error`]: the [`MinifyError`] taxonomy.

/// Error taxonomy for unterminated literals and comments.
pub mod error;
/// Character classification, lookahead reader and the minifier itself.
pub mod minify;

pub use error::{MinifyError, MinifyResult};
pub use minify::charclass::{CharClass, classify};
pub use minify::engine::{minify, minify_into};
pub use minify::reader::{Position, Reader};
