//! Error types for gridcalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridcalc-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Label does not follow the `LETTERS` + `DIGITS` shape
    #[error("Invalid cell index: '{0}'")]
    InvalidCellIndex(String),

    /// No cell exists at the requested label
    #[error("Cell not found: {0}")]
    CellNotFound(String),

    /// Parse options that cannot describe a separator
    #[error("Invalid parse options: {0}")]
    InvalidOptions(String),
}
