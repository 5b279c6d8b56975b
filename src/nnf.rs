use log::debug;

use crate::error::FormulaError;
use crate::expr::{BinOp, Expr};
use crate::parse::parse;

/// Rewrites a formula into Negation Normal Form.
///
/// The result is an equivalent tree containing only [`Expr::Var`],
/// [`Expr::Const`], `And`, `Or`, and `Not` applied to a leaf. The derived
/// connectives are eliminated:
///
/// - `a > b`  becomes  `!a | b`
/// - `a = b`  becomes  `(a & b) | (!a & !b)`
/// - `a ^ b`  becomes  `(a & !b) | (!a & b)`
///
/// and negation is pushed down to the leaves with double-negation
/// elimination and De Morgan's laws. Rules apply bottom-up until no rule
/// fires; applying `to_nnf` to its own output returns the tree unchanged.
///
/// Constants are not folded here; that is the CNF rewriter's concern.
pub fn to_nnf(expr: &Expr) -> Expr {
    match expr {
        Expr::Const(_) | Expr::Var(_) => expr.clone(),
        Expr::Not(inner) => match inner.as_ref() {
            // A negated leaf is already in normal form.
            Expr::Const(_) | Expr::Var(_) => expr.clone(),
            Expr::Not(x) => to_nnf(x),
            Expr::Binary(BinOp::And, a, b) => {
                Expr::or(to_nnf(&negated(a)), to_nnf(&negated(b)))
            }
            Expr::Binary(BinOp::Or, a, b) => {
                Expr::and(to_nnf(&negated(a)), to_nnf(&negated(b)))
            }
            // Negated derived connective: eliminate the connective first,
            // then push the negation through the And/Or skeleton it left.
            derived => to_nnf(&Expr::not(to_nnf(derived))),
        },
        Expr::Binary(BinOp::And, a, b) => Expr::and(to_nnf(a), to_nnf(b)),
        Expr::Binary(BinOp::Or, a, b) => Expr::or(to_nnf(a), to_nnf(b)),
        Expr::Binary(BinOp::Implies, a, b) => Expr::or(to_nnf(&negated(a)), to_nnf(b)),
        Expr::Binary(BinOp::Equiv, a, b) => Expr::or(
            Expr::and(to_nnf(a), to_nnf(b)),
            Expr::and(to_nnf(&negated(a)), to_nnf(&negated(b))),
        ),
        Expr::Binary(BinOp::Xor, a, b) => Expr::or(
            Expr::and(to_nnf(a), to_nnf(&negated(b))),
            Expr::and(to_nnf(&negated(a)), to_nnf(b)),
        ),
    }
}

// Operands are reused in multiple constructed subexpressions (EQUIV, XOR),
// so each use gets its own owned copy.
fn negated(x: &Expr) -> Expr {
    Expr::not(x.clone())
}

/// Parses a postfix formula and returns its Negation Normal Form, again in
/// postfix notation.
pub fn negation_normal_form(formula: &str) -> Result<String, FormulaError> {
    let tree = parse(formula)?;
    let nnf = to_nnf(&tree);
    debug!("nnf({}) = {}", formula, nnf);
    Ok(nnf.to_postfix())
}
