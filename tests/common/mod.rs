#![allow(dead_code)]

use lox_scanner::{ScanError, Token, TokenKind, Tokens, scan};

/// Scan `source`, returning tokens and every reported error.
pub fn scan_collect(source: &str) -> (Tokens, Vec<ScanError>) {
    let mut errors: Vec<ScanError> = Vec::new();
    let tokens = scan(source, &mut errors);
    (tokens, errors)
}

/// Scan `source`, asserting that nothing was reported.
pub fn scan_clean(source: &str) -> Tokens {
    let (tokens, errors) = scan_collect(source);
    assert!(
        errors.is_empty(),
        "unexpected scan errors:\n--- source ---\n{source}\n--- errors ---\n{errors:?}"
    );
    tokens
}

pub fn kinds(source: &str) -> Vec<TokenKind> {
    scan_collect(source).0.kinds()
}

/// Literal payloads in order, `None` for non-literal tokens.
pub fn literals(tokens: &Tokens) -> Vec<Option<&str>> {
    tokens.iter().map(Token::literal).collect()
}
