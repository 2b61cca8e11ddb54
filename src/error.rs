//! Error types for cmdparse.

use thiserror::Error;

/// Errors raised by the parser.
///
/// Only configuration mistakes are errors. Every input line, however odd,
/// produces a well-formed result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The argument separator was an empty string.
    #[error("argument separator can't be an empty string")]
    EmptySeparator,
}

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;
