//! Prelude module - common imports for gridcalc users
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use crate::{
    // Calculation
    CellCalculationExt,
    TableCalculationExt,

    // Core types
    Cell,
    CellAddress,
    ParseOptions,
    Table,

    // Formula types
    EvaluationOptions,
    Expression,
    Function,

    // Error types
    Error,
    FormulaError,
    FormulaResult,
    Result,
};
