//! Formula evaluator
//!
//! Evaluates cell content against a [`Table`], following references
//! recursively. Nothing is stored on the table: each request re-parses and
//! re-evaluates the whole reference chain unless caching is switched on.

use std::cell::RefCell;

use ahash::AHashMap;
use gridcalc_core::{Cell, CellAddress, Error, Table};

use crate::ast::{Argument, Expression};
use crate::error::{FormulaError, FormulaResult};
use crate::format::format_number;
use crate::parser::parse_expression;

/// Options for formula evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Longest chain of cell-to-cell references followed before giving up
    /// (default: 256)
    pub max_depth: usize,
    /// Remember each cell's value for the lifetime of one context
    /// (default: false, every lookup is recomputed)
    pub cache_values: bool,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            max_depth: 256,
            cache_values: false,
        }
    }
}

/// Context for formula evaluation
///
/// Tracks the cells currently being evaluated so a reference cycle is
/// reported as [`FormulaError::CircularReference`] instead of recursing
/// forever.
pub struct EvaluationContext<'a> {
    /// Table used for cell lookups
    pub table: &'a Table,
    options: EvaluationOptions,
    /// Cells being evaluated, outermost first
    in_progress: RefCell<Vec<CellAddress>>,
    cache: RefCell<AHashMap<CellAddress, String>>,
}

impl<'a> EvaluationContext<'a> {
    /// Create a context with default options
    pub fn new(table: &'a Table) -> Self {
        Self::with_options(table, EvaluationOptions::default())
    }

    /// Create a context with custom options
    pub fn with_options(table: &'a Table, options: EvaluationOptions) -> Self {
        Self {
            table,
            options,
            in_progress: RefCell::new(Vec::new()),
            cache: RefCell::new(AHashMap::new()),
        }
    }

    /// The options this context evaluates with
    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Computed value of the cell at `label`
    pub fn value_at(&self, label: &str) -> FormulaResult<String> {
        let cell = self.table.cell(label)?;
        self.cell_value(cell)
    }

    /// Computed value of the cell at `address`
    pub fn value_at_address(&self, address: CellAddress) -> FormulaResult<String> {
        let cell = self
            .table
            .cell_at(address)
            .ok_or_else(|| Error::CellNotFound(address.to_label()))?;
        self.cell_value(cell)
    }

    /// Computed value of a cell
    pub fn cell_value(&self, cell: &Cell) -> FormulaResult<String> {
        let address = cell.address();

        if let Some(value) = self.cache.borrow().get(&address) {
            return Ok(value.clone());
        }

        self.enter(address)?;
        let result = parse_expression(cell.raw_content()).and_then(|expr| evaluate(&expr, self));
        self.in_progress.borrow_mut().pop();
        let value = result?;

        if self.options.cache_values {
            self.cache.borrow_mut().insert(address, value.clone());
        }

        Ok(value)
    }

    fn enter(&self, address: CellAddress) -> FormulaResult<()> {
        let mut in_progress = self.in_progress.borrow_mut();

        if in_progress.contains(&address) {
            tracing::debug!(cell = %address, chain = ?in_progress, "circular reference");
            return Err(FormulaError::CircularReference(address.to_label()));
        }
        if in_progress.len() >= self.options.max_depth {
            return Err(FormulaError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }

        tracing::trace!(cell = %address, depth = in_progress.len(), "evaluating cell");
        in_progress.push(address);
        Ok(())
    }

    /// Resolve a call argument to a number
    fn resolve_argument(&self, arg: &Argument) -> FormulaResult<f64> {
        match *arg {
            Argument::Number(n) => Ok(n),
            Argument::Reference(address) => {
                let value = self.value_at_address(address)?;
                value
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| {
                        FormulaError::InvalidExpression(format!(
                            "{address} holds '{value}', which is not a number"
                        ))
                    })
            }
        }
    }
}

/// Evaluate an expression to its displayed text
///
/// Literals come back verbatim; references yield the referenced cell's value;
/// calls yield their result formatted by [`format_number`].
pub fn evaluate(expr: &Expression, ctx: &EvaluationContext) -> FormulaResult<String> {
    match expr {
        Expression::Literal(text) => Ok(text.clone()),
        Expression::Reference(address) => ctx.value_at_address(*address),
        Expression::Call { function, args } => {
            let values = args
                .iter()
                .map(|arg| ctx.resolve_argument(arg))
                .collect::<FormulaResult<Vec<_>>>()?;
            let result = function.apply(&values)?;
            if !result.is_finite() {
                return Err(FormulaError::InvalidExpression(format!(
                    "{function} result is out of range"
                )));
            }
            Ok(format_number(result))
        }
    }
}
