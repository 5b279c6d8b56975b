use crate::error::FormulaError;
use crate::expr::{BinOp, Expr};
use crate::parse::parse;

/// Evaluates an expression tree to a boolean.
///
/// Post-order walk; total over any tree with no [`Expr::Var`] leaves.
/// Reaching a variable fails with [`FormulaError::UnboundVariable`] —
/// callers that want per-assignment results substitute constants first
/// (see [`truth_table`][crate::truth_table::truth_table]).
pub fn eval(expr: &Expr) -> Result<bool, FormulaError> {
    match expr {
        Expr::Const(c) => Ok(*c),
        Expr::Var(v) => Err(FormulaError::UnboundVariable { var: *v }),
        Expr::Not(x) => Ok(!eval(x)?),
        Expr::Binary(op, a, b) => {
            let a = eval(a)?;
            let b = eval(b)?;
            Ok(match op {
                BinOp::And => a && b,
                BinOp::Or => a || b,
                BinOp::Xor => a ^ b,
                BinOp::Implies => !a || b,
                BinOp::Equiv => a == b,
            })
        }
    }
}

/// Parses and evaluates a variable-free postfix formula.
pub fn eval_formula(formula: &str) -> Result<bool, FormulaError> {
    let expr = parse(formula)?;
    eval(&expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_eval_constants() {
        assert_eq!(eval_formula("0").unwrap(), false);
        assert_eq!(eval_formula("1").unwrap(), true);
    }

    #[test]
    fn test_eval_connectives() {
        // Every connective over every pair of constants.
        let table = [
            ("00&", false),
            ("01&", false),
            ("10&", false),
            ("11&", true),
            ("00|", false),
            ("01|", true),
            ("10|", true),
            ("11|", true),
            ("00^", false),
            ("01^", true),
            ("10^", true),
            ("11^", false),
            ("00>", true),
            ("01>", true),
            ("10>", false),
            ("11>", true),
            ("00=", true),
            ("01=", false),
            ("10=", false),
            ("11=", true),
            ("0!", true),
            ("1!", false),
        ];
        for (formula, expected) in table {
            println!("{} = {}", formula, expected);
            assert_eq!(eval_formula(formula).unwrap(), expected);
        }
    }

    #[test]
    fn test_eval_nested() {
        assert_eq!(eval_formula("1011||=").unwrap(), true);
        assert_eq!(eval_formula("10&1|").unwrap(), true);
        assert_eq!(eval_formula("10|1&").unwrap(), true);
        assert_eq!(eval_formula("01&1!&").unwrap(), false);
    }

    #[test]
    fn test_eval_unbound_variable() {
        assert!(matches!(
            eval_formula("AB&"),
            Err(FormulaError::UnboundVariable { var: 'A' })
        ));
        assert!(matches!(
            eval_formula("1A|"),
            Err(FormulaError::UnboundVariable { var: 'A' })
        ));
    }

    #[test]
    fn test_eval_collapse_round_trip_preserves_value() {
        for f in ["10&", "1011||=", "10>1=", "01^1!&", "110&|"] {
            let tree = parse(f).unwrap();
            let back = tree.to_postfix();
            println!("{} -> {}", f, back);
            assert_eq!(eval_formula(f).unwrap(), eval_formula(&back).unwrap());
        }
    }
}
