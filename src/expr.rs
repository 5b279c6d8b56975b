use std::fmt::{Display, Formatter};

/// A binary connective of a propositional formula.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinOp {
    And,
    Or,
    Xor,
    Implies,
    Equiv,
}

impl BinOp {
    /// Returns the postfix symbol of the connective.
    pub const fn symbol(self) -> char {
        match self {
            BinOp::And => '&',
            BinOp::Or => '|',
            BinOp::Xor => '^',
            BinOp::Implies => '>',
            BinOp::Equiv => '=',
        }
    }

    /// Returns the connective for a postfix symbol, if any.
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '&' => Some(BinOp::And),
            '|' => Some(BinOp::Or),
            '^' => Some(BinOp::Xor),
            '>' => Some(BinOp::Implies),
            '=' => Some(BinOp::Equiv),
            _ => None,
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A propositional formula as an owned expression tree.
///
/// Each node owns its children outright. Binary children are stored in
/// source order: the first child of [`Expr::Binary`] is the earlier operand
/// of the postfix formula (the one popped *second* at parse time), the
/// second child is the later operand. With this layout
/// [`to_postfix`][Expr::to_postfix] is the plain mirror of the parser and
/// `parse -> to_postfix` is the identity on the input string.
///
/// Rewriting is functional: the transformers in [`nnf`][crate::nnf] and
/// [`cnf`][crate::cnf] consume a tree by reference and build a fresh one,
/// so no subtree is ever shared or mutated across rewrites.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    /// The constant `0` or `1`.
    Const(bool),
    /// A variable, a single uppercase ASCII letter `A`-`Z`.
    Var(char),
    /// Negation, exactly one child.
    Not(Box<Expr>),
    /// A binary connective, exactly two children.
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn not(x: Self) -> Self {
        Expr::Not(Box::new(x))
    }

    pub fn binary(op: BinOp, a: Self, b: Self) -> Self {
        Expr::Binary(op, Box::new(a), Box::new(b))
    }

    pub fn and(a: Self, b: Self) -> Self {
        Expr::binary(BinOp::And, a, b)
    }

    pub fn or(a: Self, b: Self) -> Self {
        Expr::binary(BinOp::Or, a, b)
    }

    pub fn xor(a: Self, b: Self) -> Self {
        Expr::binary(BinOp::Xor, a, b)
    }

    pub fn implies(a: Self, b: Self) -> Self {
        Expr::binary(BinOp::Implies, a, b)
    }

    pub fn equiv(a: Self, b: Self) -> Self {
        Expr::binary(BinOp::Equiv, a, b)
    }

    /// Returns `true` for `Const` and `Var` nodes.
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Expr::Const(_) | Expr::Var(_))
    }

    /// Returns `true` for a literal: a leaf or a negated leaf.
    pub fn is_literal(&self) -> bool {
        match self {
            Expr::Const(_) | Expr::Var(_) => true,
            Expr::Not(x) => x.is_leaf(),
            Expr::Binary(..) => false,
        }
    }

    /// Returns the height of the tree (a leaf has height 1).
    pub fn height(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 1,
            Expr::Not(x) => 1 + x.height(),
            Expr::Binary(_, a, b) => 1 + a.height().max(b.height()),
        }
    }

    /// Serializes the tree back into postfix notation, the inverse of
    /// [`parse`][crate::parse::parse].
    ///
    /// Leaves emit their symbol, `Not(x)` emits `x` followed by `!`, and a
    /// binary node emits its earlier operand, then its later operand, then
    /// the connective symbol.
    pub fn to_postfix(&self) -> String {
        let mut out = String::new();
        self.write_postfix(&mut out);
        out
    }

    fn write_postfix(&self, out: &mut String) {
        match self {
            Expr::Const(false) => out.push('0'),
            Expr::Const(true) => out.push('1'),
            Expr::Var(v) => out.push(*v),
            Expr::Not(x) => {
                x.write_postfix(out);
                out.push('!');
            }
            Expr::Binary(op, a, b) => {
                a.write_postfix(out);
                b.write_postfix(out);
                out.push(op.symbol());
            }
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_postfix())
    }
}
