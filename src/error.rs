use std::fmt;

/// Classifies a lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// Input ended before the closing `"` of a string literal.
    UnterminatedString,
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => write!(f, "Unterminated string."),
            Self::UnexpectedCharacter(_) => write!(f, "Unexpected character."),
        }
    }
}

/// Lexical error reported while scanning. Scanning carries on after
/// one of these; they never abort a pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[line {line}] Error: {kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
}

impl ScanError {
    #[must_use]
    pub const fn new(kind: ScanErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// Message text without the line prefix.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Every error reported during one scan, in source order.
///
/// Returned by [`crate::tokenize`] when at least one error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanErrors(Vec<ScanError>);

impl ScanErrors {
    /// Wrap a list of reported errors, or `None` if it is empty.
    #[must_use]
    pub fn from_reported(errors: Vec<ScanError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    #[must_use]
    pub fn first(&self) -> &ScanError {
        &self.0[0]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ScanError] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ScanError> {
        self.0
    }
}

impl fmt::Display for ScanErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ScanErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_lox_report_format() {
        let err = ScanError::new(ScanErrorKind::UnterminatedString, 3);
        assert_eq!(err.to_string(), "[line 3] Error: Unterminated string.");
        assert_eq!(err.message(), "Unterminated string.");
    }

    #[test]
    fn unexpected_character_keeps_the_char() {
        let err = ScanError::new(ScanErrorKind::UnexpectedCharacter('@'), 1);
        assert_eq!(err.kind, ScanErrorKind::UnexpectedCharacter('@'));
        assert_eq!(err.to_string(), "[line 1] Error: Unexpected character.");
    }

    #[test]
    fn empty_report_list_is_not_an_error() {
        assert!(ScanErrors::from_reported(Vec::new()).is_none());
    }

    #[test]
    fn errors_display_one_per_line() {
        let errors = ScanErrors::from_reported(vec![
            ScanError::new(ScanErrorKind::UnexpectedCharacter('#'), 1),
            ScanError::new(ScanErrorKind::UnterminatedString, 2),
        ])
        .expect("non-empty");
        assert_eq!(
            errors.to_string(),
            "[line 1] Error: Unexpected character.\n[line 2] Error: Unterminated string."
        );
        assert_eq!(errors.first().line, 1);

        let lines: Vec<_> = errors.into_vec().into_iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }
}
