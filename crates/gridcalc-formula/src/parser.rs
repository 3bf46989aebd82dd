//! Cell content parser
//!
//! Content is classified by its first character. Anything not starting with
//! `=` is a literal. After the `=` comes either a bare cell label or a single
//! flat call `NAME(arg, ...)` whose arguments are numbers or cell labels.

use crate::ast::{Argument, Expression};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::Function;
use gridcalc_core::CellAddress;
use lazy_regex::regex_is_match;

/// Parse cell content into an expression
///
/// # Example
/// ```rust
/// use gridcalc_formula::{parse_expression, Argument, Expression, Function};
/// use gridcalc_core::CellAddress;
///
/// let expr = parse_expression("=ADD(A1,2)").unwrap();
/// assert_eq!(
///     expr,
///     Expression::Call {
///         function: Function::Add,
///         args: vec![
///             Argument::Reference(CellAddress::new(1, 1)),
///             Argument::Number(2.0),
///         ],
///     }
/// );
///
/// assert_eq!(parse_expression("hello").unwrap(), Expression::Literal("hello".into()));
/// ```
pub fn parse_expression(content: &str) -> FormulaResult<Expression> {
    let formula = match content.strip_prefix('=') {
        Some(formula) => formula,
        None => return Ok(Expression::Literal(content.to_string())),
    };

    if let Ok(address) = CellAddress::parse(formula) {
        return Ok(Expression::Reference(address));
    }

    parse_call(formula)
}

fn parse_call(formula: &str) -> FormulaResult<Expression> {
    let malformed = |reason: &str| FormulaError::InvalidExpression(format!("={formula}: {reason}"));

    let open = formula
        .find('(')
        .ok_or_else(|| malformed("missing '('"))?;
    let close = formula
        .rfind(')')
        .ok_or_else(|| malformed("missing ')'"))?;

    if close < open {
        return Err(malformed("')' before '('"));
    }

    let name = &formula[..open];
    let function =
        Function::from_name(name).ok_or_else(|| FormulaError::UnknownFunction(name.to_string()))?;

    // Arity is checked when the call is applied, after arguments resolve
    let args = formula[open + 1..close]
        .split(',')
        .map(str::trim)
        .map(parse_argument)
        .collect::<FormulaResult<Vec<_>>>()?;

    Ok(Expression::Call { function, args })
}

fn parse_argument(token: &str) -> FormulaResult<Argument> {
    if regex_is_match!(r"^[0-9]+(\.[0-9]+)?$", token) {
        return token
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Argument::Number)
            .ok_or_else(|| FormulaError::InvalidExpression(format!("bad number '{token}'")));
    }

    // A malformed label inside a call is a malformed expression, not a bad index
    CellAddress::parse(token)
        .map(Argument::Reference)
        .map_err(|_| FormulaError::InvalidExpression(format!("bad argument '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn a(label: &str) -> Argument {
        Argument::Reference(CellAddress::parse(label).unwrap())
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse_expression("3").unwrap(), Expression::Literal("3".into()));
        assert_eq!(
            parse_expression("ADD(1,2)").unwrap(),
            Expression::Literal("ADD(1,2)".into())
        );
        assert_eq!(parse_expression("").unwrap(), Expression::Literal(String::new()));
    }

    #[test]
    fn test_bare_reference() {
        assert_eq!(
            parse_expression("=B12").unwrap(),
            Expression::Reference(CellAddress::new(12, 2))
        );
    }

    #[test]
    fn test_calls() {
        assert_eq!(
            parse_expression("=MULTIPLY( A1 , 2.5,C3 )").unwrap(),
            Expression::Call {
                function: Function::Multiply,
                args: vec![a("A1"), Argument::Number(2.5), a("C3")],
            }
        );
        assert_eq!(
            parse_expression("=MOD(10,3)").unwrap(),
            Expression::Call {
                function: Function::Mod,
                args: vec![Argument::Number(10.0), Argument::Number(3.0)],
            }
        );
    }

    #[test]
    fn test_missing_parens() {
        for content in ["=ADD(1,2", "=ADD1,2)", "=ADD", "=a1", "=)ADD("] {
            assert!(
                matches!(
                    parse_expression(content),
                    Err(FormulaError::InvalidExpression(_))
                ),
                "content {content:?}"
            );
        }
    }

    #[test]
    fn test_text_after_last_paren_is_ignored() {
        assert_eq!(
            parse_expression("=ADD(1,2)x").unwrap(),
            Expression::Call {
                function: Function::Add,
                args: vec![Argument::Number(1.0), Argument::Number(2.0)],
            }
        );
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            parse_expression("=FOO(1,2)"),
            Err(FormulaError::UnknownFunction("FOO".into()))
        );
        assert_eq!(
            parse_expression("=add(1,2)"),
            Err(FormulaError::UnknownFunction("add".into()))
        );
        assert_eq!(
            parse_expression("= ADD(1,2)"),
            Err(FormulaError::UnknownFunction(" ADD".into()))
        );
    }

    #[test]
    fn test_bad_arguments() {
        for content in [
            "=ADD(1,A0)",
            "=ADD(1,1A)",
            "=ADD(1,-2)",
            "=ADD(1,.5)",
            "=ADD(1,2.)",
            "=ADD(1,)",
            "=ADD()",
            "=ADD(ADD(1,2),3)",
        ] {
            assert!(
                matches!(
                    parse_expression(content),
                    Err(FormulaError::InvalidExpression(_))
                ),
                "content {content:?}"
            );
        }
    }

    #[test]
    fn test_number_too_large() {
        let content = format!("=ADD({},1)", "9".repeat(400));
        assert!(matches!(
            parse_expression(&content),
            Err(FormulaError::InvalidExpression(_))
        ));
    }

    #[test]
    fn test_arity_is_left_to_evaluation() {
        assert_eq!(
            parse_expression("=ADD(1)").unwrap(),
            Expression::Call {
                function: Function::Add,
                args: vec![Argument::Number(1.0)],
            }
        );
        assert!(parse_expression("=SUBTRACT(1,2,3)").is_ok());
        assert!(parse_expression("=ADD(1,2,3,4)").is_ok());
    }

    #[test]
    fn test_references() {
        let expr = parse_expression("=ADD(B1,2,A3)").unwrap();
        assert_eq!(
            expr.references(),
            vec![CellAddress::new(1, 2), CellAddress::new(3, 1)]
        );
        assert!(expr.is_formula());

        let literal = parse_expression("x").unwrap();
        assert!(literal.references().is_empty());
        assert!(!literal.is_formula());
    }
}
