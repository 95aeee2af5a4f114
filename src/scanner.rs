use crate::error::{ScanError, ScanErrorKind};
use crate::reporter::Reporter;
use crate::token::{Span, Token, TokenKind, Tokens};

/// Returned by the lookahead primitives once the cursor runs off the end.
pub const SENTINEL: char = '\0';

/// Scan `source` in one pass, handing lexical errors to `reporter`.
pub fn scan(source: &str, reporter: &mut impl Reporter) -> Tokens {
    Scanner::new(source).scan_tokens(reporter)
}

/// Single-pass scanner over an immutable source buffer.
///
/// Invariant: `start <= current <= source.len()`.
#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    start: usize,
    current: usize,
    line: usize,
    tokens: Tokens,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Tokens::new(),
        }
    }

    /// Scan the whole source. The result always ends with exactly one
    /// EOF token; lexical errors go to `reporter` and leave no token.
    pub fn scan_tokens(mut self, reporter: &mut impl Reporter) -> Tokens {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_one(reporter);
        }

        self.start = self.current;
        self.emit(TokenKind::Eof, None);
        self.tokens
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    /// Consume and return the next character. At the end this returns
    /// [`SENTINEL`] and leaves the cursor where it is.
    pub fn advance(&mut self) -> char {
        match self.bytes.get(self.current) {
            Some(&b) => {
                self.current += 1;
                char::from(b)
            }
            None => SENTINEL,
        }
    }

    #[must_use]
    pub fn peek(&self) -> char {
        self.char_at(self.current)
    }

    #[must_use]
    pub fn peek_next(&self) -> char {
        self.char_at(self.current + 1)
    }

    /// Consume the next character only if it is `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn char_at(&self, pos: usize) -> char {
        self.bytes.get(pos).map_or(SENTINEL, |&b| char::from(b))
    }

    fn emit(&mut self, kind: TokenKind, literal: Option<String>) {
        let span = Span::new(self.start, self.current);
        self.emit_spanned(kind, span, literal);
    }

    fn emit_spanned(&mut self, kind: TokenKind, span: Span, literal: Option<String>) {
        self.tokens.push(Token {
            kind,
            span,
            line: self.line,
            literal,
        });
    }

    fn error(&self, reporter: &mut impl Reporter, kind: ScanErrorKind) {
        reporter.report(ScanError::new(kind, self.line));
    }

    fn scan_one(&mut self, reporter: &mut impl Reporter) {
        match self.advance() {
            '(' => self.emit(TokenKind::LeftParen, None),
            ')' => self.emit(TokenKind::RightParen, None),
            '{' => self.emit(TokenKind::LeftBrace, None),
            '}' => self.emit(TokenKind::RightBrace, None),
            ',' => self.emit(TokenKind::Comma, None),
            '.' => self.emit(TokenKind::Dot, None),
            '-' => self.emit(TokenKind::Minus, None),
            '+' => self.emit(TokenKind::Plus, None),
            ';' => self.emit(TokenKind::Semicolon, None),
            '*' => self.emit(TokenKind::Star, None),
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.emit(kind, None);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.emit(kind, None);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.emit(kind, None);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.emit(kind, None);
            }
            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else {
                    self.emit(TokenKind::Slash, None);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(reporter),
            '0'..='9' => self.number(),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),
            _ => self.unexpected(reporter),
        }
    }

    // Stops before the newline so the main loop still counts it.
    fn skip_line_comment(&mut self) {
        while self.peek() != '\n' && !self.is_at_end() {
            self.current += 1;
        }
    }

    fn string(&mut self, reporter: &mut impl Reporter) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_at_end() {
            self.error(reporter, ScanErrorKind::UnterminatedString);
            return;
        }

        // closing quote
        self.advance();

        let content = Span::new(self.start + 1, self.current - 1);
        let literal = self.source[content.range()].to_string();
        self.emit_spanned(TokenKind::String, content, Some(literal));
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.current += 1;
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.current += 1;
            while self.peek().is_ascii_digit() {
                self.current += 1;
            }
        }

        let literal = self.lexeme().to_string();
        self.emit(TokenKind::Number, Some(literal));
    }

    fn identifier(&mut self) {
        while is_identifier_continue(self.peek()) {
            self.current += 1;
        }

        let text = self.lexeme();
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        let literal = text.to_string();
        self.emit(kind, Some(literal));
    }

    fn unexpected(&mut self, reporter: &mut impl Reporter) {
        // Skip a whole multi-byte character so the cursor stays on a
        // char boundary and the character is reported once.
        let ch = self.source[self.start..].chars().next().unwrap_or(SENTINEL);
        self.current = self.start + ch.len_utf8();
        self.error(reporter, ScanErrorKind::UnexpectedCharacter(ch));
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }
}

const fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
