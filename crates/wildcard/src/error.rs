// third-party imports
use thiserror::Error;

/// Result is an alias for standard result with bound ParseError type.
pub type Result<T> = std::result::Result<T, ParseError>;

/// ParseError is an error which may occur when a glob pattern is compiled.
///
/// Matching never fails, so this is the only error the crate produces.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    /// Byte offset in the pattern where the problem was detected.
    pub offset: usize,
    pub kind: ErrorKind,
}

impl ParseError {
    #[inline]
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { offset, kind }
    }

    /// Returns the human readable message without the offset.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("unterminated character class")]
    UnterminatedClass,
    #[error("unterminated group")]
    UnterminatedGroup,
    #[error("invalid character range")]
    InvalidRange,
    #[error("trailing escape character")]
    TrailingEscape,
    #[error("empty character class")]
    EmptyClass,
}
