//! Command-line configuration for the `loxscan` binary.

use std::path::PathBuf;

/// Usage text printed for `--help` and on argument errors.
pub const USAGE: &str = "Usage: loxscan [script]\n\
\n\
With a script path, scan the file and print its tokens.\n\
Without arguments, start an interactive prompt.";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Repl,
    File(PathBuf),
}

/// Argument vector that does not describe a valid invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("too many arguments")]
    TooManyArguments,
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

impl Command {
    /// Parse arguments, not including the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        match args.as_slice() {
            [] => Ok(Self::Repl),
            [flag] if flag == "-h" || flag == "--help" => Ok(Self::Help),
            [flag] if flag.starts_with('-') => Err(UsageError::UnknownOption(flag.clone())),
            [path] => Ok(Self::File(PathBuf::from(path))),
            _ => Err(UsageError::TooManyArguments),
        }
    }
}
