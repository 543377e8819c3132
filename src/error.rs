//! The error types of this crate.

use std::path::PathBuf;
use thiserror::Error;

/// Raised when a grammar description file violates the line-oriented format.
#[derive(Debug, Error)]
pub struct ParsingError {
    path: PathBuf,
    line: usize,
    msg: String,
}

impl ParsingError {
    pub(crate) fn new<P: Into<PathBuf>, S: Into<String>>(path: P, line: usize, msg: S) -> Self {
        Self {
            path: path.into(),
            line,
            msg: msg.into(),
        }
    }

    /// Number of the offending line, starting at 1.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsingError in {}:{}: {}", self.path.display(), self.line, self.msg)
    }
}

/// Everything that can go wrong while compiling a grammar description
/// into a CFG artifact.
#[derive(Debug, Error)]
pub enum Error {
    /// The grammar source could not be read or the artifact could not be written
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The grammar source is not a valid grammar description
    #[error("{0}")]
    MalformedGrammar(#[from] ParsingError),
}
