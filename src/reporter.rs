//! Sinks for lexical errors.
//!
//! The scanner never prints. It hands each [`ScanError`] to a
//! [`Reporter`] chosen by the caller and keeps going.

use crate::error::ScanError;

/// Receives lexical errors as the scanner finds them.
pub trait Reporter {
    fn report(&mut self, error: ScanError);
}

/// Collects errors so callers and tests can inspect them afterwards.
impl Reporter for Vec<ScanError> {
    fn report(&mut self, error: ScanError) {
        self.push(error);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, error: ScanError) {
        (**self).report(error);
    }
}

/// Writes each error to stderr as `[line N] Error: message` and
/// remembers whether anything was reported.
#[derive(Debug, Default)]
pub struct StderrReporter {
    count: usize,
}

impl StderrReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.count > 0
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl Reporter for StderrReporter {
    fn report(&mut self, error: ScanError) {
        eprintln!("{error}");
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanErrorKind;

    #[test]
    fn vec_collects_in_order() {
        let mut errors: Vec<ScanError> = Vec::new();
        errors.report(ScanError::new(ScanErrorKind::UnterminatedString, 4));
        errors.report(ScanError::new(ScanErrorKind::UnexpectedCharacter('$'), 5));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].line, 4);
        assert_eq!(errors[1].kind, ScanErrorKind::UnexpectedCharacter('$'));
    }

    #[test]
    fn stderr_reporter_counts() {
        let mut reporter = StderrReporter::new();
        assert!(!reporter.had_error());
        reporter.report(ScanError::new(ScanErrorKind::UnterminatedString, 1));
        assert!(reporter.had_error());
        assert_eq!(reporter.count(), 1);
    }
}
