//! Error types for loading and saving configuration files.

use std::io;
use thiserror::Error;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error raised when a configuration file cannot be parsed.
///
/// Every variant carries the 1-based line number of the offending line.
/// Indentation is never itself invalid, so there is no indentation variant:
/// any relative depth is accepted by the hierarchy builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A backslash with nothing left to escape.
    #[error("unexpected `\\' at end of line {0}")]
    TrailingEscape(usize),

    /// A quote opened but never closed before the end of the line.
    #[error("missing ending quote at line {0}")]
    UnterminatedQuote(usize),

    /// Content after the name that is neither `:` nor `=`.
    #[error("expected one of `:' or `=' at line {0}")]
    MissingSeparator(usize),

    /// A separator with no name before it.
    #[error("missing setting/section name at line {0}")]
    MissingName(usize),

    /// A section declaration carrying a value.
    #[error("unexpected characters after `:' at line {0}")]
    UnexpectedSectionValue(usize),

    /// Stray content after a complete value.
    #[error("unexpected characters after value at line {0}")]
    TrailingCharacters(usize),
}

impl ParseError {
    /// The 1-based source line the error occurred on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::TrailingEscape(line)
            | ParseError::UnterminatedQuote(line)
            | ParseError::MissingSeparator(line)
            | ParseError::MissingName(line)
            | ParseError::UnexpectedSectionValue(line)
            | ParseError::TrailingCharacters(line) => *line,
        }
    }
}

/// Error raised by the file backend's load and save operations.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file: {0}")]
    Read(#[source] io::Error),

    /// The configuration file could not be written or published.
    #[error("failed to write configuration file: {0}")]
    Write(#[source] io::Error),

    /// The configuration file could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
