//! # gridcalc-formula
//!
//! Formula parser and evaluator for gridcalc.
//!
//! This crate provides:
//! - Content classification (literal, bare reference, function call)
//! - Evaluation against a [`gridcalc_core::Table`], with cycle detection
//! - The built-in functions ADD, MULTIPLY, SUBTRACT, DIVIDE and MOD
//! - The formatting rule for computed numbers
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::Table;
//! use gridcalc_formula::EvaluationContext;
//!
//! let table = Table::parse("3\t=ADD(A1,2.5)");
//! let ctx = EvaluationContext::new(&table);
//!
//! assert_eq!(ctx.value_at("B1").unwrap(), "5.50");
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod functions;
pub mod parser;

pub use ast::{Argument, Expression};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, EvaluationContext, EvaluationOptions};
pub use format::format_number;
pub use functions::{ArityRule, Function};
pub use parser::parse_expression;
