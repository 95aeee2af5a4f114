//! Human-readable token dump used by the `loxscan` binary.
//!
//! One line per token: right-aligned line number, kind name padded to
//! the widest kind, then the token's text.

use crate::token::{Token, TokenKind};

const KIND_WIDTH: usize = 13;

/// Format every token in `tokens` against the `source` it came from.
#[must_use]
pub fn dump<'t>(tokens: impl IntoIterator<Item = &'t Token>, source: &str) -> String {
    let mut out = String::new();
    for token in tokens {
        dump_token(&mut out, token, source);
        out.push('\n');
    }
    out
}

/// Text shown for a token: the numeric value for numbers, the owned
/// literal for strings and identifiers, the source lexeme otherwise.
#[must_use]
pub fn display_text(token: &Token, source: &str) -> String {
    match token.kind {
        TokenKind::Number => token.number_value().map_or_else(
            || token.literal().unwrap_or_default().to_string(),
            |value| value.to_string(),
        ),
        TokenKind::Eof => String::new(),
        _ => token
            .literal()
            .or_else(|| token.lexeme(source))
            .unwrap_or_default()
            .to_string(),
    }
}

fn dump_token(out: &mut String, token: &Token, source: &str) {
    let text = display_text(token, source);
    let line = if text.is_empty() {
        format!("{:>4} {}", token.line, token.kind)
    } else {
        format!("{:>4} {:<KIND_WIDTH$} {text}", token.line, token.kind)
    };
    out.push_str(&line);
}
