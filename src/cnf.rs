use log::debug;

use crate::error::FormulaError;
use crate::expr::{BinOp, Expr};
use crate::nnf::to_nnf;
use crate::parse::parse;

/// Rewrites a formula into Conjunctive Normal Form.
///
/// The input is first normalized with [`to_nnf`], then every OR node with an
/// AND child is distributed until no AND remains below an OR, with constant
/// folding on OR nodes along the way. Finally, maximal AND and OR spines
/// are re-associated to the right, so a chain like `AB&C&D&` comes out as
/// `ABCD&&&`.
///
/// Known limitations, kept on purpose: constants under an AND are not
/// folded, and no simplification across clauses (absorption, subsumption,
/// contradiction detection) is attempted beyond the single-literal
/// `x | x!` collapse.
pub fn to_cnf(expr: &Expr) -> Expr {
    let nnf = to_nnf(expr);
    let distributed = distribute(&nnf);
    reassociate(&distributed)
}

/// Pushes every OR over the ANDs below it. Expects NNF input.
fn distribute(expr: &Expr) -> Expr {
    match expr {
        Expr::Binary(BinOp::And, a, b) => Expr::and(distribute(a), distribute(b)),
        Expr::Binary(BinOp::Or, a, b) => or_clause(distribute(a), distribute(b)),
        // Leaves and negated leaves; nothing else survives NNF.
        _ => expr.clone(),
    }
}

/// Combines two already-distributed operands under an OR.
fn or_clause(a: Expr, b: Expr) -> Expr {
    // Fold constants first, so nothing is distributed over `0` or `1`.
    if a == Expr::Const(true) || b == Expr::Const(true) {
        return Expr::Const(true);
    }
    if a == Expr::Const(false) {
        return b;
    }
    if b == Expr::Const(false) {
        return a;
    }
    if let Expr::Binary(BinOp::And, p, q) = a {
        return Expr::and(or_clause(*p, b.clone()), or_clause(*q, b));
    }
    if let Expr::Binary(BinOp::And, p, q) = b {
        return Expr::and(or_clause(a.clone(), *p), or_clause(a, *q));
    }
    if complementary(&a, &b) {
        return Expr::Const(true);
    }
    Expr::or(a, b)
}

/// `x | x!` at the literal level only.
fn complementary(a: &Expr, b: &Expr) -> bool {
    match (a, b) {
        (Expr::Var(v), Expr::Not(x)) | (Expr::Not(x), Expr::Var(v)) => {
            matches!(x.as_ref(), Expr::Var(w) if w == v)
        }
        _ => false,
    }
}

/// Flattens maximal same-operator AND/OR spines and rebuilds them
/// right-nested, keeping the members in source order.
fn reassociate(expr: &Expr) -> Expr {
    match expr {
        Expr::Binary(op @ (BinOp::And | BinOp::Or), _, _) => {
            let mut members = Vec::new();
            collect_spine(expr, *op, &mut members);
            let mut members = members.into_iter().map(reassociate).rev();
            // A spine has at least two members.
            let mut acc = match members.next() {
                Some(last) => last,
                None => return expr.clone(),
            };
            for member in members {
                acc = Expr::binary(*op, member, acc);
            }
            acc
        }
        _ => expr.clone(),
    }
}

fn collect_spine<'a>(expr: &'a Expr, op: BinOp, out: &mut Vec<&'a Expr>) {
    match expr {
        Expr::Binary(o, a, b) if *o == op => {
            collect_spine(a, op, out);
            collect_spine(b, op, out);
        }
        _ => out.push(expr),
    }
}

/// Parses a postfix formula and returns its Conjunctive Normal Form, again
/// in postfix notation.
pub fn conjunctive_normal_form(formula: &str) -> Result<String, FormulaError> {
    let tree = parse(formula)?;
    let cnf = to_cnf(&tree);
    debug!("cnf({}) = {}", formula, cnf);
    Ok(cnf.to_postfix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_cnf_already_normal() {
        assert_eq!(conjunctive_normal_form("A").unwrap(), "A");
        assert_eq!(conjunctive_normal_form("A!").unwrap(), "A!");
        assert_eq!(conjunctive_normal_form("AB|C&").unwrap(), "AB|C&");
    }

    #[test]
    fn test_cnf_de_morgan() {
        assert_eq!(conjunctive_normal_form("AB&!").unwrap(), "A!B!|");
        assert_eq!(conjunctive_normal_form("AB|!").unwrap(), "A!B!&");
    }

    #[test]
    fn test_cnf_chains_reassociate() {
        assert_eq!(conjunctive_normal_form("AB&C&D&").unwrap(), "ABCD&&&");
        assert_eq!(conjunctive_normal_form("AB|C|D|").unwrap(), "ABCD|||");
        assert_eq!(conjunctive_normal_form("AB&!C!|").unwrap(), "A!B!C!||");
        assert_eq!(conjunctive_normal_form("AB|!C!&").unwrap(), "A!B!C!&&");
    }

    #[test]
    fn test_cnf_distribution() {
        // OR over AND, both orientations.
        assert_eq!(conjunctive_normal_form("AB&C|").unwrap(), "AC|BC|&");
        assert_eq!(conjunctive_normal_form("ABC&|").unwrap(), "AB|AC|&");
        // Nested: (A&B) | (C&D) distributes to four clauses, and the
        // resulting AND spine is rebuilt right-nested.
        assert_eq!(
            conjunctive_normal_form("AB&CD&|").unwrap(),
            "AC|AD|BC|BD|&&&"
        );
    }

    #[test]
    fn test_cnf_constant_folding() {
        assert_eq!(conjunctive_normal_form("A1|").unwrap(), "1");
        assert_eq!(conjunctive_normal_form("1A|").unwrap(), "1");
        assert_eq!(conjunctive_normal_form("A0|").unwrap(), "A");
        assert_eq!(conjunctive_normal_form("0A|").unwrap(), "A");
        // Folding happens before distribution.
        assert_eq!(conjunctive_normal_form("AB&1|").unwrap(), "1");
        // Constants under an AND are left alone.
        assert_eq!(conjunctive_normal_form("A1&").unwrap(), "A1&");
    }

    #[test]
    fn test_cnf_literal_tautology() {
        assert_eq!(conjunctive_normal_form("AA!|").unwrap(), "1");
        assert_eq!(conjunctive_normal_form("A!A|").unwrap(), "1");
        // Only the literal-level case collapses.
        assert_ne!(conjunctive_normal_form("AB&AB&!|").unwrap(), "1");
    }

    #[test]
    fn test_cnf_no_and_under_or() {
        fn or_has_and_child(expr: &Expr) -> bool {
            match expr {
                Expr::Binary(BinOp::Or, a, b) => {
                    matches!(a.as_ref(), Expr::Binary(BinOp::And, ..))
                        || matches!(b.as_ref(), Expr::Binary(BinOp::And, ..))
                        || or_has_and_child(a)
                        || or_has_and_child(b)
                }
                Expr::Binary(_, a, b) => or_has_and_child(a) || or_has_and_child(b),
                Expr::Not(x) => or_has_and_child(x),
                _ => false,
            }
        }

        for f in ["AB&CD&|", "AB=", "AB^", "AB=CD=|", "AB&C|D|", "AB^C^"] {
            let out = conjunctive_normal_form(f).unwrap();
            println!("cnf({}) = {}", f, out);
            let tree = parse(&out).unwrap();
            assert!(!or_has_and_child(&tree), "AND under OR in {}", out);
        }
    }

    #[test]
    fn test_cnf_preserves_truth_value() {
        use crate::eval::eval_formula;
        use crate::truth_table::{substitute, variables};

        for f in ["AB&CD&|", "AB=", "AB^C^", "AB>C=", "AB|C&!", "AB&C&D&"] {
            let cnf = conjunctive_normal_form(f).unwrap();
            let vars = variables(f);
            for bits in 0..(1u32 << vars.len()) {
                let lhs = eval_formula(&substitute(f, &vars, bits)).unwrap();
                let rhs = eval_formula(&substitute(&cnf, &vars, bits)).unwrap();
                assert_eq!(lhs, rhs, "mismatch for {} under assignment {:b}", f, bits);
            }
        }
    }
}
