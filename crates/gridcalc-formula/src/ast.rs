//! Formula expression types

use crate::functions::Function;
use gridcalc_core::CellAddress;

/// A classified cell content
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Content without a leading `=`, shown verbatim
    Literal(String),
    /// `=B2`: the value of another cell
    Reference(CellAddress),
    /// `=NAME(arg, ...)`
    Call {
        function: Function,
        args: Vec<Argument>,
    },
}

/// A function call argument
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument {
    /// Numeric literal (`3`, `2.5`)
    Number(f64),
    /// Cell whose value is coerced to a number
    Reference(CellAddress),
}

impl Expression {
    /// Whether this content is computed rather than shown verbatim
    pub fn is_formula(&self) -> bool {
        !matches!(self, Expression::Literal(_))
    }

    /// Cells this expression reads, in the order they appear
    pub fn references(&self) -> Vec<CellAddress> {
        match self {
            Expression::Literal(_) => Vec::new(),
            Expression::Reference(address) => vec![*address],
            Expression::Call { args, .. } => args
                .iter()
                .filter_map(|arg| match arg {
                    Argument::Reference(address) => Some(*address),
                    Argument::Number(_) => None,
                })
                .collect(),
        }
    }
}
