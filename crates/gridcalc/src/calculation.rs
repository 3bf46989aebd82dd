//! Table calculation
//!
//! Adds formula-aware reads to [`Table`]: computed values by label, the full
//! grid of computed values, and the tab/newline rendering of that grid.
//!
//! # Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let table = Table::parse("3   2.5\n=ADD(A1,B1)  =MULTIPLY(A1,2)");
//!
//! assert_eq!(table.value_at("A2").unwrap(), "5.50");
//! assert_eq!(table.render().unwrap(), "3\t2.50\n5.50\t6");
//! ```

use crate::{
    parse_expression, Cell, CellAddress, EvaluationContext, EvaluationOptions, FormulaResult,
    Table,
};

/// Extension trait for Table to add calculation methods
pub trait TableCalculationExt {
    /// Computed value of the cell at `label`
    fn value_at(&self, label: &str) -> FormulaResult<String>;

    /// Computed value of the cell at `label`, with custom options
    fn value_at_with_options(
        &self,
        label: &str,
        options: &EvaluationOptions,
    ) -> FormulaResult<String>;

    /// Computed value of every cell, grouped by row
    fn evaluate_all(&self) -> FormulaResult<Vec<Vec<String>>>;

    /// Computed value of every cell, with custom options
    fn evaluate_all_with_options(
        &self,
        options: &EvaluationOptions,
    ) -> FormulaResult<Vec<Vec<String>>>;

    /// Computed values, tab-separated within a row and newline-separated
    /// between rows
    fn render(&self) -> FormulaResult<String>;

    /// Render with custom options
    fn render_with_options(&self, options: &EvaluationOptions) -> FormulaResult<String>;

    /// Cells that the content at `label` reads directly
    fn precedents(&self, label: &str) -> FormulaResult<Vec<CellAddress>>;
}

impl TableCalculationExt for Table {
    fn value_at(&self, label: &str) -> FormulaResult<String> {
        self.value_at_with_options(label, &EvaluationOptions::default())
    }

    fn value_at_with_options(
        &self,
        label: &str,
        options: &EvaluationOptions,
    ) -> FormulaResult<String> {
        EvaluationContext::with_options(self, options.clone()).value_at(label)
    }

    fn evaluate_all(&self) -> FormulaResult<Vec<Vec<String>>> {
        self.evaluate_all_with_options(&EvaluationOptions::default())
    }

    fn evaluate_all_with_options(
        &self,
        options: &EvaluationOptions,
    ) -> FormulaResult<Vec<Vec<String>>> {
        let ctx = EvaluationContext::with_options(self, options.clone());

        let grid = self
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| ctx.cell_value(cell))
                    .collect::<FormulaResult<Vec<_>>>()
            })
            .collect::<FormulaResult<Vec<_>>>()?;

        tracing::debug!(
            rows = grid.len(),
            cells = self.len(),
            cached = options.cache_values,
            "evaluated table"
        );

        Ok(grid)
    }

    fn render(&self) -> FormulaResult<String> {
        self.render_with_options(&EvaluationOptions::default())
    }

    fn render_with_options(&self, options: &EvaluationOptions) -> FormulaResult<String> {
        let grid = self.evaluate_all_with_options(options)?;

        Ok(grid
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn precedents(&self, label: &str) -> FormulaResult<Vec<CellAddress>> {
        let cell = self.cell(label)?;
        Ok(parse_expression(cell.raw_content())?.references())
    }
}

/// Extension trait for Cell to compute its displayed value
pub trait CellCalculationExt {
    /// Computed value of this cell, resolving references against `table`
    fn value(&self, table: &Table) -> FormulaResult<String>;
}

impl CellCalculationExt for Cell {
    fn value(&self, table: &Table) -> FormulaResult<String> {
        EvaluationContext::new(table).cell_value(self)
    }
}
