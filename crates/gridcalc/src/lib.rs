//! # gridcalc
//!
//! A small spreadsheet formula engine.
//!
//! Tables are plain text: one row per line, cells separated by a tab or by
//! two or more spaces. A cell is either a literal, shown as written, or a
//! formula starting with `=`:
//!
//! - `=B2` shows the value of cell B2
//! - `=ADD(A1,2.5)` calls one of ADD, MULTIPLY, SUBTRACT, DIVIDE or MOD
//!   with numbers or cell labels as arguments
//!
//! Computed numbers print without decimals when integral and with exactly
//! two decimals otherwise.
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let table = Table::parse("3   2.5\n=ADD(A1,B1)  =MULTIPLY(A1,2)");
//!
//! assert_eq!(table.raw_content_at("A2").unwrap(), "=ADD(A1,B1)");
//! assert_eq!(table.value_at("A2").unwrap(), "5.50");
//! assert_eq!(table.render().unwrap(), "3\t2.50\n5.50\t6");
//! ```

pub mod calculation;
pub mod prelude;

// Re-export calculation types
pub use calculation::{CellCalculationExt, TableCalculationExt};

// Re-export core types
pub use gridcalc_core::{Cell, CellAddress, Error, ParseOptions, Result, Table};

// Re-export formula types
pub use gridcalc_formula::{
    evaluate, format_number, parse_expression, Argument, ArityRule, EvaluationContext,
    EvaluationOptions, Expression, FormulaError, FormulaResult, Function,
};
