use log::debug;

use crate::error::FormulaError;
use crate::expr::{BinOp, Expr};

/// Default bound on the height of a parsed tree.
///
/// All consumers of a tree (evaluator, rewriters, collapser) recurse to the
/// tree's height, so the parser bounds it up front instead of letting
/// attacker-controlled input exhaust the stack later.
pub const MAX_DEPTH: usize = 512;

/// Parses a postfix formula into an expression tree.
///
/// Single left-to-right scan with an explicit stack of partially built
/// subtrees; O(n) in the formula length, no backtracking.
///
/// - `0`, `1` push a constant; `A`-`Z` push a variable.
/// - `!` pops one operand and pushes its negation.
/// - `&`, `|`, `^`, `>`, `=` pop the later operand, then the earlier one,
///   and push the combined node with the operands in source order.
///
/// Fails with [`FormulaError::InvalidCharacter`] on any other character,
/// and with [`FormulaError::Malformed`] when an operator finds too few
/// operands or the scan ends with a stack depth other than 1 (which also
/// rejects the empty string).
pub fn parse(formula: &str) -> Result<Expr, FormulaError> {
    parse_with_limit(formula, MAX_DEPTH)
}

/// Same as [`parse`], with an explicit tree-height limit.
pub fn parse_with_limit(formula: &str, limit: usize) -> Result<Expr, FormulaError> {
    // Each stack entry carries the height of its subtree, so the depth
    // check is O(1) per constructed node.
    let mut stack: Vec<(Expr, usize)> = Vec::new();

    for (pos, ch) in formula.chars().enumerate() {
        match ch {
            '0' => stack.push((Expr::Const(false), 1)),
            '1' => stack.push((Expr::Const(true), 1)),
            'A'..='Z' => stack.push((Expr::Var(ch), 1)),
            '!' => {
                let (x, h) = stack.pop().ok_or_else(|| {
                    FormulaError::malformed("operator `!` expects one operand")
                })?;
                push_checked(&mut stack, Expr::not(x), h + 1, limit)?;
            }
            _ => {
                let op = BinOp::from_symbol(ch)
                    .ok_or(FormulaError::InvalidCharacter { ch, pos })?;
                let (b, hb) = stack.pop().ok_or_else(|| too_few(op))?;
                let (a, ha) = stack.pop().ok_or_else(|| too_few(op))?;
                push_checked(&mut stack, Expr::binary(op, a, b), ha.max(hb) + 1, limit)?;
            }
        }
    }

    if stack.len() != 1 {
        return Err(FormulaError::malformed(format!(
            "expected exactly one tree after the scan, found {}",
            stack.len()
        )));
    }
    let (root, height) = stack.pop().ok_or_else(|| {
        FormulaError::malformed("expected exactly one tree after the scan, found 0")
    })?;
    debug!("parse({:?}) -> tree of height {}", formula, height);
    Ok(root)
}

fn too_few(op: BinOp) -> FormulaError {
    FormulaError::malformed(format!("operator `{}` expects two operands", op))
}

fn push_checked(
    stack: &mut Vec<(Expr, usize)>,
    expr: Expr,
    height: usize,
    limit: usize,
) -> Result<(), FormulaError> {
    if height > limit {
        return Err(FormulaError::TooDeep {
            depth: height,
            limit,
        });
    }
    stack.push((expr, height));
    Ok(())
}
