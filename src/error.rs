use thiserror::Error;

/// Errors produced while parsing or evaluating a postfix formula.
///
/// Every violation aborts the whole call with no partial result; nothing is
/// retried. The rewriters ([`to_nnf`][crate::nnf::to_nnf],
/// [`to_cnf`][crate::cnf::to_cnf]) operate on parser-validated trees and are
/// infallible.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FormulaError {
    /// A character outside `{0, 1, A-Z, !, &, |, ^, >, =}`.
    #[error("invalid character {ch:?} at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    /// An operator found too few operands on the stack, or the scan finished
    /// with a residual stack depth other than 1.
    #[error("malformed formula: {reason}")]
    Malformed { reason: String },

    /// The evaluator reached a variable leaf. Variables must be substituted
    /// with constants beforehand (e.g. by the truth-table driver).
    #[error("unbound variable {var:?}")]
    UnboundVariable { var: char },

    /// The formula would build a tree deeper than the configured limit.
    #[error("formula tree too deep: {depth} exceeds limit {limit}")]
    TooDeep { depth: usize, limit: usize },
}

impl FormulaError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        FormulaError::Malformed {
            reason: reason.into(),
        }
    }
}
