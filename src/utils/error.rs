//! Error handling for hwpmath conversions
//!
//! The Unicode converter is infallible; these types cover the HwpEqn parser
//! and the external-process bridge.

use std::fmt;

use thiserror::Error;

/// Structural problem found while parsing an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A `{` with no matching `}` before end of input.
    UnbalancedBraces,
    /// A `}` with no open group.
    UnexpectedClosingBrace,
    /// `^`, `_` or a fraction command with nothing to take as its argument.
    MissingArgument,
    /// Groups, fractions or scripts nested beyond the parser's limit.
    NestingTooDeep,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::UnbalancedBraces => "unbalanced braces",
            ErrorKind::UnexpectedClosingBrace => "unexpected closing brace",
            ErrorKind::MissingArgument => "missing argument",
            ErrorKind::NestingTooDeep => "nesting too deep",
        };
        f.write_str(text)
    }
}

/// Parse error with the byte offset into the source where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// Conversion error type
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("No LaTeX provided")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Equation converter '{program}' not found")]
    ExternalNotFound { program: String },

    #[error("Equation converter failed (exit {}): {stderr}", exit_label(.status))]
    ExternalFailed { status: Option<i32>, stderr: String },

    #[error("Equation converter timed out after {seconds} seconds")]
    Timeout { seconds: f64 },

    #[error("Equation converter returned empty output")]
    EmptyOutput,
}

fn exit_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(ErrorKind::UnbalancedBraces, 6);
        assert_eq!(err.to_string(), "unbalanced braces at offset 6");

        let err: ConversionError = err.into();
        assert_eq!(err.to_string(), "Parse error: unbalanced braces at offset 6");
    }

    #[test]
    fn test_external_failed_display() {
        let err = ConversionError::ExternalFailed {
            status: Some(2),
            stderr: "boom".into(),
        };
        assert_eq!(err.to_string(), "Equation converter failed (exit 2): boom");

        let err = ConversionError::ExternalFailed {
            status: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("exit signal"));
    }
}
