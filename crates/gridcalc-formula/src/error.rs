//! Formula error types

use crate::functions::{ArityRule, Function};
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Malformed formula, or an argument that is neither a number nor a
    /// usable cell reference
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    /// Unknown function
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Wrong number of arguments
    #[error("Wrong number of arguments for {function}: expected {expected}, got {actual}")]
    Arity {
        function: Function,
        expected: ArityRule,
        actual: usize,
    },

    /// DIVIDE or MOD with a zero divisor
    #[error("Division by zero in {function}")]
    DivisionByZero { function: Function },

    /// A reference chain leads back to a cell already being evaluated
    #[error("Circular reference detected involving cell {0}")]
    CircularReference(String),

    /// A reference chain is longer than the configured limit
    #[error("Reference chain deeper than {limit} cells")]
    DepthExceeded { limit: usize },

    /// Table lookup failure (cell not found, malformed label)
    #[error(transparent)]
    Cell(#[from] gridcalc_core::Error),
}
