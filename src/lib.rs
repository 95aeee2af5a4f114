//! Lexical scanner for the Lox scripting language.
//!
//! Turns source text into an ordered sequence of classified tokens
//! (keywords, identifiers, literals, operators, punctuation), each
//! tagged with its byte span and starting line. Lexical errors never
//! abort a scan: they go to a [`Reporter`] and scanning resumes with
//! the next character.
//!
//! # Quick start
//!
//! ```
//! use lox_scanner::{TokenKind, scan, ScanError};
//!
//! let mut errors: Vec<ScanError> = Vec::new();
//! let tokens = scan("print 1 + 2;", &mut errors);
//! assert!(errors.is_empty());
//! assert_eq!(
//!     tokens.kinds(),
//!     vec![
//!         TokenKind::Print,
//!         TokenKind::Number,
//!         TokenKind::Plus,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! ## Strict scanning
//!
//! ```
//! use lox_scanner::{tokenize, ScanErrorKind};
//!
//! let err = tokenize("\"open").unwrap_err();
//! assert_eq!(err.first().kind, ScanErrorKind::UnterminatedString);
//! assert_eq!(err.to_string(), "[line 1] Error: Unterminated string.");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod config;
pub mod dump;
pub mod error;
pub mod reporter;
pub mod scanner;
pub mod source;
pub mod token;

pub use dump::dump;
pub use error::{ScanError, ScanErrorKind, ScanErrors};
pub use reporter::{Reporter, StderrReporter};
pub use scanner::{Scanner, scan};
pub use token::{KEYWORDS, Span, Token, TokenKind, Tokens};

/// Scan `source` and fail if any lexical error was reported.
///
/// The error carries every report, not just the first.
pub fn tokenize(source: &str) -> Result<Tokens, ScanErrors> {
    let mut errors: Vec<ScanError> = Vec::new();
    let tokens = scan(source, &mut errors);
    ScanErrors::from_reported(errors).map_or(Ok(tokens), Err)
}
