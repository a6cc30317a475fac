//! Error type shared by every linear algebra operation.

use std::fmt;

/// Failure raised by vector, matrix and elimination operations.
///
/// Every error is raised at the point of violation and nothing is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        /// Shape the operation needed
        expected: String,
        /// Shape it was given
        actual: String,
    },

    /// An operand of an unsupported kind was passed to a polymorphic operation.
    TypeMismatch {
        operation: &'static str,
        operand: &'static str,
    },

    /// Element access outside of `[0, len)`.
    IndexOutOfBounds { index: usize, len: usize },

    /// Block access that does not fit inside the matrix.
    RangeOutOfBounds {
        /// Requested `(row, col)` end of the block
        end: (usize, usize),
        /// Shape of the matrix
        shape: (usize, usize),
    },

    /// Square matrix without an inverse.
    SingularMatrix,

    /// The receiver is not in the state the operation requires.
    InvalidState(String),

    DivisionByZero,

    Parse(String),
}

impl LinalgError {
    pub fn dimension(expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        LinalgError::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            LinalgError::TypeMismatch { operation, operand } => {
                write!(f, "type mismatch: cannot {operation} by a {operand}")
            }
            LinalgError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            LinalgError::RangeOutOfBounds { end, shape } => write!(
                f,
                "block ending at ({}, {}) exceeds {}x{} matrix",
                end.0, end.1, shape.0, shape.1
            ),
            LinalgError::SingularMatrix => write!(f, "singular matrix is not invertible"),
            LinalgError::InvalidState(msg) => write!(f, "invalid state: {msg}"),
            LinalgError::DivisionByZero => write!(f, "division by zero"),
            LinalgError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for LinalgError {}

pub type LinalgResult<T> = Result<T, LinalgError>;

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
