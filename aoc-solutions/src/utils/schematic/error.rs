//! Structural errors raised while reading a crate schematic.

use thiserror::Error;

/// Everything that can abort a schematic parse
///
/// Line numbers are 1-based, columns are 1-based character positions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchematicError {
    /// Unexpected character at a token boundary
    #[error("Invalid crate-schematic on line {line}: '{character}' is not a valid starting token")]
    InvalidToken { line: usize, character: char },

    /// A `[` that is not followed by exactly one label and a closing `]`
    #[error("Invalid crate-schematic on line {line}: unterminated crate definition at column {column}")]
    MalformedItem { line: usize, column: usize },

    /// A crate that cannot be attributed to any stack header
    #[error("Invalid crate-schematic on line {line}: encountered floating or excess crate '[{item}]' at column {column}")]
    FloatingItem { line: usize, column: usize, item: char },

    /// An instruction line with a missing or non-numeric field
    #[error("Invalid instruction on line {line}: {field} {reason}")]
    MalformedInstruction {
        line: usize,
        field: &'static str,
        reason: String,
    },
}

impl SchematicError {
    /// Line the error was reported on
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidToken { line, .. }
            | Self::MalformedItem { line, .. }
            | Self::FloatingItem { line, .. }
            | Self::MalformedInstruction { line, .. } => *line,
        }
    }

    /// Column of the offending text, where one is known
    pub fn column(&self) -> Option<usize> {
        match self {
            Self::MalformedItem { column, .. } | Self::FloatingItem { column, .. } => Some(*column),
            Self::InvalidToken { .. } | Self::MalformedInstruction { .. } => None,
        }
    }
}
