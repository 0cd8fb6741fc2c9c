//! Located parse failures.

use std::fmt;

use thiserror::Error;

/// A 1-based line and character column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

/// Errors produced while turning log text into a `Document`.
///
/// Every variant names the position of the offending token. Parsing stops at
/// the first one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The date token matches none of the accepted layouts, or is not a
    /// valid calendar date.
    #[error("invalid date '{text}' in {position}")]
    InvalidDate { text: String, position: Position },

    /// The time token has an unsupported number of colons or out of range
    /// components.
    #[error("invalid time '{text}' in {position}")]
    InvalidTime { text: String, position: Position },

    /// The duration token is not a number with optional unit suffixes.
    #[error("invalid duration '{text}' in {position}")]
    InvalidDuration { text: String, position: Position },

    /// The end of a time interval is not strictly after its start.
    #[error("invalid time interval in {position}: end > start must hold, but got end={end}, start={start}")]
    InvalidInterval {
        start: String,
        end: String,
        position: Position,
    },

    /// The line has no legal shape.
    #[error("malformed line in {position}: {reason}")]
    MalformedLine {
        reason: &'static str,
        position: Position,
    },

    /// The line is well formed but not allowed where it appears.
    #[error("unexpected line in {position}: {reason}")]
    StructuralError {
        reason: &'static str,
        position: Position,
    },
}

impl ParseError {
    pub const fn position(&self) -> Position {
        match self {
            Self::InvalidDate { position, .. }
            | Self::InvalidTime { position, .. }
            | Self::InvalidDuration { position, .. }
            | Self::InvalidInterval { position, .. }
            | Self::MalformedLine { position, .. }
            | Self::StructuralError { position, .. } => *position,
        }
    }

    pub const fn line(&self) -> usize {
        self.position().line
    }

    pub const fn column(&self) -> usize {
        self.position().column
    }

    /// The human readable description, including the location.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_text_and_location() {
        let err = ParseError::InvalidDate {
            text: "2024-13-01".to_string(),
            position: Position::new(3, 1),
        };
        assert_eq!(err.message(), "invalid date '2024-13-01' in line 3, col 1");
        assert_eq!(err.line(), 3);
        assert_eq!(err.column(), 1);
    }

    #[test]
    fn test_interval_message_shows_both_ends() {
        let err = ParseError::InvalidInterval {
            start: "12:00:00".to_string(),
            end: "08:00:00".to_string(),
            position: Position::new(1, 12),
        };
        assert_eq!(
            err.to_string(),
            "invalid time interval in line 1, col 12: end > start must hold, but got end=08:00:00, start=12:00:00"
        );
    }
}
