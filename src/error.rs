//! Error types for token scanning
//!
//! Scanning itself only fails on unterminated quoted literals, pushback misuse
//! and I/O problems in stream sources. Malformed numbers and escape sequences
//! are reported by the explicit value conversions instead.

use thiserror::Error;

/// Main error type for scanner operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// A quoted literal ran past the end of the input
    #[error("Unterminated string literal opened with {delimiter} (input ended at offset {offset})")]
    UnterminatedLiteral { delimiter: char, offset: usize },

    /// The token pushback protocol was misused
    #[error("Internal error: {message}")]
    InvariantViolation { message: String },

    /// `verify_token` did not find the expected token
    #[error("{}", describe_mismatch(.expected, .found.as_deref()))]
    TokenMismatch {
        expected: String,
        found: Option<String>,
    },

    /// Numeric or string value conversion failed
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Reading from a stream source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced when converting token text into a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Text is not a number literal
    #[error("'{token}' is not a valid number")]
    InvalidNumber { token: String },

    /// Hex literal does not fit in 64 bits
    #[error("number '{token}' is out of range")]
    NumberOutOfRange { token: String },

    /// Text is not enclosed in matching quotes
    #[error("{token} is not a quoted string literal")]
    NotAStringLiteral { token: String },

    /// Unknown or malformed escape sequence
    #[error("Invalid escape sequence '\\{sequence}' at index {index}")]
    InvalidEscape { sequence: String, index: usize },

    /// The delimiter appears unescaped inside the literal body
    #[error("Unescaped {delimiter} inside string literal at index {index}")]
    UnescapedDelimiter { delimiter: char, index: usize },
}

fn describe_mismatch(expected: &str, found: Option<&str>) -> String {
    match found {
        None => format!("missing `{expected}`"),
        Some(token) => format!("found `{token}` when expecting `{expected}`"),
    }
}

impl ScanError {
    /// Returns true if the scanner may keep scanning after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ScanError::InvariantViolation { .. })
    }

    /// Generate suggestions for fixing the error
    pub fn suggest_fix(&self) -> Vec<String> {
        match self {
            ScanError::UnterminatedLiteral { delimiter, .. } => {
                vec![format!("Close the literal with a matching {delimiter}")]
            }
            ScanError::InvariantViolation { .. } => {
                vec!["Read the saved token with next_token before saving another".to_string()]
            }
            ScanError::Conversion(err) => err.suggest_fix(),
            _ => vec![],
        }
    }
}

impl ConversionError {
    /// Generate suggestions for conversion errors
    pub fn suggest_fix(&self) -> Vec<String> {
        match self {
            ConversionError::InvalidEscape { sequence, .. } => match sequence.chars().next() {
                Some('x') => vec!["Use \\xHH with exactly two hex digits".to_string()],
                Some('u') => vec![
                    "Use \\uHHHH with exactly four hex digits".to_string(),
                    "Surrogate code points (D800-DFFF) cannot be encoded".to_string(),
                ],
                Some(c) if c.is_ascii_digit() => {
                    vec!["Decimal escapes take at most three digits and must be <= 255".to_string()]
                }
                _ => vec![
                    "Supported escapes: \\n \\t \\r \\b \\f \\v \\a \\0 \\\\ \\' \\\"".to_string(),
                ],
            },
            ConversionError::UnescapedDelimiter { delimiter, .. } => {
                vec![format!("Escape the quote as \\{delimiter}")]
            }
            ConversionError::NotAStringLiteral { .. } => {
                vec!["Enclose the text in matching ' or \" quotes".to_string()]
            }
            _ => vec![],
        }
    }
}
