use std::fmt;
use std::ops::{Deref, Range};

/// Half-open byte range `[start, end)` into the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `at`.
    #[must_use]
    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Token kinds produced by the scanner.
///
/// The set is closed: downstream consumers rely on exactly these
/// variants and on the names returned by [`TokenKind::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character punctuation.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character operators.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

/// Reserved words and the kind each one scans to.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

impl TokenKind {
    /// Look up a reserved word. Only an exact match counts, so
    /// `orchid` is not `or`.
    #[must_use]
    pub fn keyword(text: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(word, _)| *word == text)
            .map(|&(_, kind)| kind)
    }

    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Class
                | Self::Else
                | Self::False
                | Self::Fun
                | Self::For
                | Self::If
                | Self::Nil
                | Self::Or
                | Self::Print
                | Self::Return
                | Self::Super
                | Self::This
                | Self::True
                | Self::Var
                | Self::While
        )
    }

    /// Identifier, string and number tokens carry owned literal text.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self, Self::Identifier | Self::String | Self::Number)
    }

    /// Wire name of the kind, e.g. `LEFT_PAREN` or `EOF`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A single token with its kind, source span, starting line and,
/// for literal kinds, an owned copy of the literal text.
///
/// Literal text is copied eagerly so a token stays meaningful after
/// the source buffer is dropped. Punctuation, operators, keywords and
/// EOF copy nothing; their text is only available through
/// [`Token::lexeme`] while the source is still alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: usize,
    pub literal: Option<String>,
}

impl Token {
    /// Source text covered by this token's span, if `source` is the
    /// buffer it was scanned from.
    #[must_use]
    pub fn lexeme<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.span.range())
    }

    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Numeric value of a `NUMBER` token. The scanner only checks the
    /// shape `digits[.digits]`; turning it into a value is up to the
    /// consumer.
    #[must_use]
    pub fn number_value(&self) -> Option<f64> {
        if self.kind != TokenKind::Number {
            return None;
        }
        self.literal.as_deref()?.parse().ok()
    }
}

/// Ordered token sequence in source order, always ending with a
/// single EOF token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    pub(crate) const fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.0.push(token);
    }

    /// Kinds in order, handy for comparing against expectations.
    #[must_use]
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.0.iter().map(|t| t.kind).collect()
    }

    /// The trailing EOF token, if the sequence is complete.
    #[must_use]
    pub fn eof(&self) -> Option<&Token> {
        self.0.last().filter(|t| t.kind == TokenKind::Eof)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Token> {
        self.0
    }
}

impl Deref for Tokens {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_agrees_with_lookup() {
        for (text, kind) in KEYWORDS {
            assert_eq!(TokenKind::keyword(text), Some(kind));
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn keyword_lookup_uses_table_only() {
        let names: Vec<_> = KEYWORDS.iter().map(|(word, _)| *word).collect();
        assert_eq!(names.len(), 16);
        assert!(TokenKind::keyword("Eof").is_none());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
    }

    #[test]
    fn tokens_into_vec_keeps_order() {
        let mut tokens = Tokens::new();
        for (i, kind) in [TokenKind::Nil, TokenKind::Eof].into_iter().enumerate() {
            tokens.push(Token {
                kind,
                span: Span::new(i, i + 1),
                line: 1,
                literal: None,
            });
        }
        let kinds: Vec<_> = tokens.into_vec().into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Nil, TokenKind::Eof]);
    }

    #[test]
    fn keyword_lookup_is_exact() {
        assert_eq!(TokenKind::keyword("orchid"), None);
        assert_eq!(TokenKind::keyword("o"), None);
        assert_eq!(TokenKind::keyword("And"), None);
        assert_eq!(TokenKind::keyword(""), None);
    }

    #[test]
    fn names_match_wire_protocol() {
        assert_eq!(TokenKind::LeftParen.name(), "LEFT_PAREN");
        assert_eq!(TokenKind::GreaterEqual.name(), "GREATER_EQUAL");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
        assert_eq!(format!("{:<6}|", TokenKind::Or), "OR    |");
    }

    #[test]
    fn number_value_only_for_numbers() {
        let number = Token {
            kind: TokenKind::Number,
            span: Span::new(0, 4),
            line: 1,
            literal: Some("12.5".to_string()),
        };
        assert_eq!(number.number_value(), Some(12.5));

        let ident = Token {
            kind: TokenKind::Identifier,
            span: Span::new(0, 2),
            line: 1,
            literal: Some("12".to_string()),
        };
        assert_eq!(ident.number_value(), None);
    }

    #[test]
    fn lexeme_out_of_bounds_is_none() {
        let token = Token {
            kind: TokenKind::Dot,
            span: Span::new(5, 6),
            line: 1,
            literal: None,
        };
        assert_eq!(token.lexeme("ab"), None);
        assert_eq!(token.lexeme("hello."), Some("."));
    }
}
