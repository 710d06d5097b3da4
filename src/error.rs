//! # Errors of linear algebra operations
//!
//! All failures are definitional: a singular matrix has no inverse, a ragged grid is not a matrix.
//! None of them are transient, so they are reported to the caller immediately.
use thiserror::Error;

/// Shorthand for results of fallible linear algebra operations.
pub type Result<T> = std::result::Result<T, LinearAlgebraError>;

/// Which index of a matrix was out of range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    /// A row index.
    Row,
    /// A column index.
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Something that went wrong during the construction or transformation of a matrix or vector.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LinearAlgebraError {
    /// The data does not describe a valid shape.
    ///
    /// Empty input, ragged rows, or operands that should have had identical shapes.
    #[error("invalid shape: {reason}")]
    Shape {
        /// Message for the end user.
        reason: String,
    },
    /// Operands have shapes that are incompatible for the operation.
    #[error("dimension mismatch in {operation}: {left:?} and {right:?}")]
    DimensionMismatch {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// (rows, columns) of the left operand.
        left: (usize, usize),
        /// (rows, columns) of the right operand.
        right: (usize, usize),
    },
    /// The matrix does not row reduce to the identity.
    #[error("matrix is not invertible")]
    NotInvertible,
    /// A division by the length of a zero vector was attempted.
    #[error("operation is undefined for the zero vector")]
    ZeroVector,
    /// An index was outside of `[0, len)`.
    #[error("{axis} index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Whether a row or a column was indexed.
        axis: Axis,
        /// The offending index.
        index: usize,
        /// The number of rows or columns.
        len: usize,
    },
}

impl LinearAlgebraError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        LinearAlgebraError::Shape { reason: reason.into() }
    }
}

#[cfg(test)]
mod test {
    use crate::error::{Axis, LinearAlgebraError};

    #[test]
    fn display() {
        let error = LinearAlgebraError::IndexOutOfRange { axis: Axis::Column, index: 3, len: 2 };
        assert_eq!(error.to_string(), "column index 3 out of range for length 2");

        let error = LinearAlgebraError::DimensionMismatch {
            operation: "multiplication",
            left: (2, 3),
            right: (2, 3),
        };
        assert_eq!(error.to_string(), "dimension mismatch in multiplication: (2, 3) and (2, 3)");

        assert_eq!(LinearAlgebraError::shape("empty").to_string(), "invalid shape: empty");
    }
}
