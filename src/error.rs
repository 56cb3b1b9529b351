//! Error types for sparse matrix operations

use crate::matrix::ops::Operation;
use thiserror::Error;

/// Result type alias using the crate's [`MatrixError`]
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Matrix shape as `(rows, cols)`
pub type Shape = (usize, usize);

/// Errors that can occur while building, decoding or combining matrices
#[derive(Error, Debug)]
pub enum MatrixError {
    /// The text does not follow the `rows=`/`cols=`/`(r, c, v)` grammar
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number of the offending line
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Operand shapes are incompatible for the requested operation
    #[error("Cannot {operation} a {}x{} matrix and a {}x{} matrix: {}", .left.0, .left.1, .right.0, .right.1, .operation.shape_rule())]
    DimensionMismatch {
        /// The operation that was attempted
        operation: Operation,
        /// Shape of the left operand
        left: Shape,
        /// Shape of the right operand
        right: Shape,
    },

    /// A coordinate falls outside the matrix bounds
    #[error("Index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    OutOfRange {
        /// Requested row (may be negative when it came from text)
        row: i64,
        /// Requested column (may be negative when it came from text)
        col: i64,
        /// Number of rows in the matrix
        rows: usize,
        /// Number of columns in the matrix
        cols: usize,
    },

    /// An arithmetic result does not fit the element type
    #[error("Arithmetic overflow computing entry ({row}, {col})")]
    Overflow {
        /// Row of the overflowing entry
        row: usize,
        /// Column of the overflowing entry
        col: usize,
    },

    /// Reading or writing a matrix file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatrixError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        MatrixError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}
