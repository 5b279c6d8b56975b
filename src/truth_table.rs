use std::fmt::Write;

use crate::error::FormulaError;
use crate::eval::eval_formula;
use crate::parse::parse;

/// Returns the distinct variables of a formula, sorted.
pub fn variables(formula: &str) -> Vec<char> {
    let mut vars: Vec<char> = formula.chars().filter(char::is_ascii_uppercase).collect();
    vars.sort_unstable();
    vars.dedup();
    vars
}

/// Substitutes an assignment into the formula string.
///
/// Bit `i` of `bits` (counted from the most significant used bit) is the
/// value of `vars[i]`, so iterating `bits` upward enumerates rows in
/// increasing binary order with the first variable as the most significant
/// column.
pub fn substitute(formula: &str, vars: &[char], bits: u32) -> String {
    formula
        .chars()
        .map(|c| match vars.iter().position(|&v| v == c) {
            Some(i) => {
                if bits >> (vars.len() - 1 - i) & 1 == 1 {
                    '1'
                } else {
                    '0'
                }
            }
            None => c,
        })
        .collect()
}

/// Builds the truth table of a formula.
///
/// The core is used as a black box: each row substitutes constants into the
/// formula string and runs it through the parser and evaluator. A formula
/// with no variables yields a single row.
///
/// ```
/// let table = boole_rs::truth_table("AB&").unwrap();
/// assert_eq!(table.lines().count(), 2 + 4);
/// ```
pub fn truth_table(formula: &str) -> Result<String, FormulaError> {
    // Validate up front so a malformed formula fails before any row.
    parse(formula)?;
    let vars = variables(formula);

    let mut out = String::new();
    for v in &vars {
        write!(out, "| {} ", v).expect("writing to a String cannot fail");
    }
    out.push_str("| = |\n");
    for _ in 0..=vars.len() {
        out.push_str("|---");
    }
    out.push_str("|\n");

    for bits in 0..(1u32 << vars.len()) {
        let row = substitute(formula, &vars, bits);
        let value = eval_formula(&row)?;
        for i in 0..vars.len() {
            write!(out, "| {} ", bits >> (vars.len() - 1 - i) & 1)
                .expect("writing to a String cannot fail");
        }
        writeln!(out, "| {} |", value as u32).expect("writing to a String cannot fail");
    }
    Ok(out)
}

/// Prints the truth table of a formula to stdout.
pub fn print_truth_table(formula: &str) -> Result<(), FormulaError> {
    print!("{}", truth_table(formula)?);
    Ok(())
}
