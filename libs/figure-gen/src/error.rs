//! # Error Types
//!
//! Error types for figure generation. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - Parameters are validated before the first triangle is emitted
//! - Malformed input streams fail fast with the offending line
//! - A failed generation produces no valid output; callers discard any
//!   partial writes

use std::fmt;
use thiserror::Error;

// =============================================================================
// GENERATOR ERROR
// =============================================================================

/// Errors that can occur while generating, writing or reading figures.
///
/// ## Example
///
/// ```rust
/// use figure_gen::{Generator, GeneratorError};
/// use figure_gen::primitives::Sphere;
///
/// let sphere = Sphere::new(1.0, 0, 8);
/// match Generator::default().generate(&sphere) {
///     Ok(soup) => println!("{} triangles", soup.triangle_count()),
///     Err(GeneratorError::InvalidParameter { parameter, .. }) => {
///         eprintln!("bad parameter: {parameter}")
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A shape parameter is out of its valid range.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Description of the accepted range
        message: String,
    },

    /// The input describes geometry that cannot be tessellated, such as a
    /// quad with a zero-length edge.
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// A Bezier patch references a control point outside the pool.
    #[error("Patch {patch} references control point {index}, but only {available} are defined")]
    IndexOutOfRange {
        /// Zero-based patch number
        patch: usize,
        /// The offending control-point index
        index: u32,
        /// Size of the control-point pool
        available: usize,
    },

    /// The figure would exceed the configured triangle budget.
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Number of triangles the figure would emit
        count: u64,
        /// Configured limit
        max: u64,
    },

    /// Malformed topology or triangle-stream input.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Failure of the underlying sink or source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry(message.into())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for generator operations.
///
/// ## Example
///
/// ```rust
/// use figure_gen::error::GeneratorResult;
/// use figure_gen::TriangleSoup;
///
/// fn empty() -> GeneratorResult<TriangleSoup> {
///     Ok(TriangleSoup::new())
/// }
/// # assert!(empty().is_ok());
/// ```
pub type GeneratorResult<T> = Result<T, GeneratorError>;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with its 1-based line number.
///
/// ## Example
///
/// ```rust
/// use figure_gen::error::{ParseError, ParseErrorKind};
///
/// let error = ParseError::new(ParseErrorKind::InvalidNumber { text: "x".into() }, 3);
/// assert_eq!(error.to_string(), "invalid number 'x' at line 3");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Line on which the error was detected (1-based).
    pub line: usize,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// Create unexpected end of input error.
    pub fn unexpected_eof(expected: &str, line: usize) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            line,
        )
    }

    /// Create invalid number error.
    pub fn invalid_number(text: &str, line: usize) -> Self {
        Self::new(
            ParseErrorKind::InvalidNumber {
                text: text.to_string(),
            },
            line,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}", self.kind, self.line)
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Input ended before a required record.
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },

    /// A token is not a valid number of the expected type.
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// A record has the wrong number of fields.
    TokenCount {
        /// Number of fields required.
        expected: usize,
        /// Number of fields present.
        found: usize,
    },

    /// The stream header names no known figure.
    UnknownFigure {
        /// The header line as read.
        tag: String,
    },

    /// A vertex block does not divide into whole triangles.
    TruncatedTriangle {
        /// Number of vertices in the block.
        vertices: usize,
    },

    /// Records follow the last one announced by the counts.
    TrailingInput {
        /// The first unexpected record.
        text: String,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, expected {}", expected)
            }
            Self::InvalidNumber { text } => {
                write!(f, "invalid number '{}'", text)
            }
            Self::TokenCount { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            Self::UnknownFigure { tag } => {
                write!(f, "unknown figure '{}'", tag)
            }
            Self::TruncatedTriangle { vertices } => {
                write!(f, "{} vertices do not form whole triangles", vertices)
            }
            Self::TrailingInput { text } => {
                write!(f, "unexpected trailing record '{}'", text)
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = GeneratorError::invalid_parameter("slices", "must be at least 1");
        assert!(err.to_string().contains("slices"));

        let err = GeneratorError::IndexOutOfRange {
            patch: 2,
            index: 40,
            available: 32,
        };
        let msg = err.to_string();
        assert!(msg.contains("Patch 2"));
        assert!(msg.contains("40"));
    }

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::unexpected_eof("control-point count", 7);
        let msg = error.to_string();
        assert!(msg.contains("unexpected end of input"));
        assert!(msg.ends_with("at line 7"));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: GeneratorError = ParseError::invalid_number("abc", 1).into();
        assert!(matches!(err, GeneratorError::Parse(_)));
    }

    /// Test error types are Send + Sync so failures can cross threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeneratorError>();
    }
}
