//! Built-in arithmetic functions
//!
//! The catalogue is closed: a formula's function name is resolved to a
//! [`Function`] once, when the formula is parsed, and unknown names are
//! rejected there.

pub mod math;

use crate::error::{FormulaError, FormulaResult};
use std::fmt;

/// Function implementation signature
///
/// Arguments arrive already resolved to numbers and arity-checked.
pub type FunctionImpl = fn(&[f64]) -> FormulaResult<f64>;

/// How many arguments a function accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArityRule {
    /// Exactly this many
    Exact(usize),
    /// This many or more
    AtLeast(usize),
}

impl ArityRule {
    /// Whether `count` arguments satisfy the rule
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            ArityRule::Exact(n) => count == n,
            ArityRule::AtLeast(n) => count >= n,
        }
    }

    /// Fail with [`FormulaError::Arity`] unless `count` satisfies the rule
    pub fn check(&self, function: Function, count: usize) -> FormulaResult<()> {
        if self.accepts(count) {
            Ok(())
        } else {
            Err(FormulaError::Arity {
                function,
                expected: *self,
                actual: count,
            })
        }
    }
}

impl fmt::Display for ArityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArityRule::Exact(n) => write!(f, "exactly {}", n),
            ArityRule::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Function definition
pub struct FunctionDef {
    /// Function name (uppercase)
    pub name: &'static str,
    /// Accepted argument count
    pub arity: ArityRule,
    /// Implementation
    pub implementation: FunctionImpl,
}

static ADD: FunctionDef = FunctionDef {
    name: "ADD",
    arity: ArityRule::AtLeast(2),
    implementation: math::fn_add,
};

static MULTIPLY: FunctionDef = FunctionDef {
    name: "MULTIPLY",
    arity: ArityRule::AtLeast(2),
    implementation: math::fn_multiply,
};

static SUBTRACT: FunctionDef = FunctionDef {
    name: "SUBTRACT",
    arity: ArityRule::Exact(2),
    implementation: math::fn_subtract,
};

static DIVIDE: FunctionDef = FunctionDef {
    name: "DIVIDE",
    arity: ArityRule::Exact(2),
    implementation: math::fn_divide,
};

static MOD: FunctionDef = FunctionDef {
    name: "MOD",
    arity: ArityRule::Exact(2),
    implementation: math::fn_mod,
};

/// One of the built-in functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Add,
    Multiply,
    Subtract,
    Divide,
    Mod,
}

impl Function {
    /// Every built-in function
    pub const ALL: [Function; 5] = [
        Function::Add,
        Function::Multiply,
        Function::Subtract,
        Function::Divide,
        Function::Mod,
    ];

    /// Resolve a function by name
    ///
    /// Names are case-sensitive: `ADD` is a function, `add` is not.
    pub fn from_name(name: &str) -> Option<Function> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// The function's definition
    pub fn def(&self) -> &'static FunctionDef {
        match self {
            Function::Add => &ADD,
            Function::Multiply => &MULTIPLY,
            Function::Subtract => &SUBTRACT,
            Function::Divide => &DIVIDE,
            Function::Mod => &MOD,
        }
    }

    /// Uppercase name as written in formulas
    pub fn name(&self) -> &'static str {
        self.def().name
    }

    /// Accepted argument count
    pub fn arity(&self) -> ArityRule {
        self.def().arity
    }

    /// Check arity, then apply the function
    pub fn apply(&self, args: &[f64]) -> FormulaResult<f64> {
        self.arity().check(*self, args.len())?;
        (self.def().implementation)(args)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
