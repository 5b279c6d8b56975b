//! # boole-rs: postfix propositional logic in Rust
//!
//! **`boole-rs`** parses propositional formulas written in reverse-Polish
//! (postfix) notation, evaluates them, and rewrites them into **Negation
//! Normal Form (NNF)** and **Conjunctive Normal Form (CNF)** by recursive
//! term rewriting.
//!
//! ## The formula format
//!
//! A formula is a string over the alphabet:
//!
//! - `0`, `1` — the constants false and true
//! - `A`-`Z` — variables
//! - `!` — negation (unary, postfix)
//! - `&`, `|`, `^`, `>`, `=` — AND, OR, XOR, IMPLIES, EQUIV (binary, postfix)
//!
//! Operators follow their operands, so no parentheses are needed:
//! `AB&C|` reads as `(A ∧ B) ∨ C`.
//!
//! ## Quick start
//!
//! ```rust
//! use boole_rs::{conjunctive_normal_form, eval_formula, negation_normal_form};
//!
//! // Evaluate a variable-free formula.
//! assert_eq!(eval_formula("10&").unwrap(), false);
//! assert_eq!(eval_formula("1011||=").unwrap(), true);
//!
//! // Rewrite to normal forms.
//! assert_eq!(negation_normal_form("AB&!").unwrap(), "A!B!|");
//! assert_eq!(negation_normal_form("AB>").unwrap(), "A!B|");
//! assert_eq!(conjunctive_normal_form("AB&C&D&").unwrap(), "ABCD&&&");
//! ```
//!
//! ## Core components
//!
//! - **[`parse`](mod@crate::parse)**: the stack-based postfix parser
//!   producing an [`Expr`] tree.
//! - **[`eval`](mod@crate::eval)**: the recursive evaluator over
//!   variable-free trees.
//! - **[`nnf`]**: elimination of the derived connectives and De Morgan
//!   rewriting down to the leaves.
//! - **[`cnf`]**: OR-over-AND distribution on top of NNF, with constant
//!   folding and spine re-association.
//! - **[`truth_table`](mod@crate::truth_table)**: assignment enumeration
//!   over the string API.
//! - **[`arith`]**: bitwise adder, multiplier, and Gray code.
//! - **[`render`](mod@crate::render)**: ASCII rendering of an expression tree.
//!
//! All trees are owned values: every rewrite consumes a tree by reference
//! and returns a freshly built one, so subtrees are never shared or mutated
//! across rewrites.

pub mod arith;
pub mod cnf;
pub mod error;
pub mod eval;
pub mod expr;
pub mod nnf;
pub mod parse;
pub mod render;
pub mod truth_table;

pub use crate::cnf::{conjunctive_normal_form, to_cnf};
pub use crate::error::FormulaError;
pub use crate::eval::{eval, eval_formula};
pub use crate::expr::{BinOp, Expr};
pub use crate::nnf::{negation_normal_form, to_nnf};
pub use crate::parse::{parse, parse_with_limit, MAX_DEPTH};
pub use crate::render::render;
pub use crate::truth_table::{print_truth_table, truth_table, variables};
