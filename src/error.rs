//! Error types for Lineal operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Lineal operations.
///
/// Provides detailed context about failures including dimension mismatches,
/// non-square operands, singular matrices, and out-of-range coordinate
/// access.
///
/// # Examples
///
/// ```
/// use lineal::error::LinealError;
///
/// let err = LinealError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone)]
pub enum LinealError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Determinant or inverse requested on a non-square matrix.
    NonSquareMatrix {
        /// Row count of the operand
        rows: usize,
        /// Column count of the operand
        cols: usize,
    },

    /// Matrix is singular (non-invertible).
    SingularMatrix {
        /// Determinant value (close to zero)
        det: f32,
    },

    /// Coordinate index outside the vector's dimension.
    IndexOutOfRange {
        /// Index requested
        index: usize,
        /// Dimension of the vector
        len: usize,
    },
}

impl fmt::Display for LinealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinealError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            LinealError::NonSquareMatrix { rows, cols } => {
                write!(
                    f,
                    "non-square matrix: {rows}x{cols}, operation requires rows == cols"
                )
            }
            LinealError::SingularMatrix { det } => {
                write!(f, "singular matrix: determinant = {det}, cannot invert")
            }
            LinealError::IndexOutOfRange { index, len } => {
                write!(f, "coordinate index {index} out of range (dimension {len})")
            }
        }
    }
}

impl std::error::Error for LinealError {}

impl LinealError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create a dimension mismatch error from two full shapes
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for LinealError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<LinealError> for &str {
    fn eq(&self, other: &LinealError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LinealError>;
