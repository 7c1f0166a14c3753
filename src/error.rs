// std imports
use std::io::{self, Write};

// third-party imports
use config::ConfigError;
use thiserror::Error;

// workspace imports
use wildcard::ParseError;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to parse utf-8 string: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl Error {
    /// Writes the error in the form it is reported to the user.
    pub fn log_to(&self, target: &mut impl Write) -> io::Result<()> {
        writeln!(target, "error: {}", self)?;
        if let Self::Pattern { pattern, source } = self {
            writeln!(target, "  {}", pattern)?;
            writeln!(target, "  {:>width$}", "^", width = pattern[..source.offset].chars().count() + 1)?;
        }
        Ok(())
    }

    pub fn log(&self) {
        self.log_to(&mut io::stderr().lock()).ok();
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
