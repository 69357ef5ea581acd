//! Error types and position tracking for configuration parsing
//!
//! A parse failure is described by a [`ParseError`] carrying the 1-based
//! line and column where the problem was diagnosed plus a human-readable
//! message. The parser latches the first error it encounters and reports
//! the same error on every subsequent advance.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A position in the source text.
///
/// Columns count decoded code points since the last newline, not bytes,
/// so positions stay meaningful for non-ASCII configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based), reset to 1 after each newline.
    pub column: usize,
}

impl Position {
    /// Creates a position at the start of input.
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The error produced when a configuration file cannot be parsed.
///
/// Rendered as `[line, col] message`, for example
/// `[4, 5] Unexpected ']', expecting '[', NAME, ';' or '#'.`.
/// Once the parser has produced a `ParseError` it is sticky: every later
/// advance returns a clone of the same error without rescanning the input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("[{line}, {column}] {message}")]
pub struct ParseError {
    /// Line where the error occurred (1-based).
    pub line: usize,
    /// Column in the line where the error occurred (1-based).
    pub column: usize,
    /// A description of the error.
    pub message: String,
}

impl ParseError {
    /// Creates a parse error at the given position.
    pub fn new(position: Position, message: impl Into<String>) -> Self {
        Self {
            line: position.line,
            column: position.column,
            message: message.into(),
        }
    }

    /// Where the error was diagnosed.
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}
