//! Math functions

use super::Function;
use crate::error::{FormulaError, FormulaResult};

/// ADD(a, b, ...) - Sum of all arguments
pub fn fn_add(args: &[f64]) -> FormulaResult<f64> {
    Ok(args.iter().sum())
}

/// MULTIPLY(a, b, ...) - Product of all arguments
pub fn fn_multiply(args: &[f64]) -> FormulaResult<f64> {
    Ok(args.iter().product())
}

/// SUBTRACT(a, b) - a minus b
pub fn fn_subtract(args: &[f64]) -> FormulaResult<f64> {
    let (a, b) = pair(args, Function::Subtract)?;
    Ok(a - b)
}

/// DIVIDE(a, b) - a divided by b
pub fn fn_divide(args: &[f64]) -> FormulaResult<f64> {
    let (a, b) = pair(args, Function::Divide)?;
    if b == 0.0 {
        return Err(FormulaError::DivisionByZero {
            function: Function::Divide,
        });
    }
    Ok(a / b)
}

/// MOD(number, divisor) - Remainder after division
///
/// Uses number - divisor * floor(number / divisor), so the result takes the
/// sign of the divisor (unlike Rust's `%`).
pub fn fn_mod(args: &[f64]) -> FormulaResult<f64> {
    let (number, divisor) = pair(args, Function::Mod)?;
    if divisor == 0.0 {
        return Err(FormulaError::DivisionByZero {
            function: Function::Mod,
        });
    }
    Ok(number - divisor * (number / divisor).floor())
}

fn pair(args: &[f64], function: Function) -> FormulaResult<(f64, f64)> {
    match args {
        [a, b] => Ok((*a, *b)),
        _ => Err(FormulaError::Arity {
            function,
            expected: function.arity(),
            actual: args.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_multiply() {
        assert_eq!(fn_add(&[1.0, 2.0, 3.5]).unwrap(), 6.5);
        assert_eq!(fn_multiply(&[2.0, 3.0, 4.0]).unwrap(), 24.0);
        assert_eq!(fn_multiply(&[2.5, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_subtract_and_divide() {
        assert_eq!(fn_subtract(&[1.0, 3.0]).unwrap(), -2.0);
        assert_eq!(fn_divide(&[7.0, 2.0]).unwrap(), 3.5);
        assert_eq!(
            fn_divide(&[7.0, 0.0]),
            Err(FormulaError::DivisionByZero {
                function: Function::Divide
            })
        );
    }

    #[test]
    fn test_mod_sign_follows_divisor() {
        assert_eq!(fn_mod(&[7.0, 3.0]).unwrap(), 1.0);
        assert_eq!(fn_mod(&[-7.0, 3.0]).unwrap(), 2.0);
        assert_eq!(fn_mod(&[7.0, -3.0]).unwrap(), -2.0);
        assert_eq!(fn_mod(&[5.5, 2.0]).unwrap(), 1.5);
        assert!(matches!(
            fn_mod(&[1.0, 0.0]),
            Err(FormulaError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_pair_requires_two() {
        assert!(matches!(
            fn_subtract(&[1.0]),
            Err(FormulaError::Arity { actual: 1, .. })
        ));
    }
}
