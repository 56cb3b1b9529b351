//! The binary operations a session can request

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::Result;
use crate::matrix::{Element, SparseMatrix};

/// A binary matrix operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Element-wise sum, shapes must match
    Add,
    /// Element-wise difference, shapes must match
    Subtract,
    /// Matrix product, left columns must equal right rows
    Multiply,
}

impl Operation {
    /// All operations in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Menu number shown to the user (1-based)
    pub fn menu_number(&self) -> usize {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
        }
    }

    /// Human readable label for menus
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
        }
    }

    /// The shape constraint the operands must satisfy
    pub fn shape_rule(&self) -> &'static str {
        match self {
            Operation::Add | Operation::Subtract => "shapes must be identical",
            Operation::Multiply => "left columns must equal right rows",
        }
    }

    /// Applies the operation to `a` and `b`, producing a new matrix
    pub fn apply<T: Element>(
        &self,
        a: &SparseMatrix<T>,
        b: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => a.add(b),
            Operation::Subtract => a.subtract(b),
            Operation::Multiply => a.multiply(b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        };
        write!(f, "{verb}")
    }
}

/// Error returned when a menu choice does not name an operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operation selected: '{0}'")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Accepts the menu number or the operation name, case-insensitively
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "add" | "addition" => Ok(Operation::Add),
            "2" | "sub" | "subtract" | "subtraction" => Ok(Operation::Subtract),
            "3" | "mul" | "multiply" | "multiplication" => Ok(Operation::Multiply),
            _ => Err(UnknownOperation(s.trim().to_string())),
        }
    }
}
