use crate::expr::Expr;

/// Renders an expression tree as ASCII art, one node per line, children in
/// source order. For human inspection only; nothing parses this back.
///
/// ```
/// let tree = boole_rs::parse("AB&C|").unwrap();
/// println!("{}", boole_rs::render(&tree));
/// // |
/// // ├── &
/// // │   ├── A
/// // │   └── B
/// // └── C
/// ```
pub fn render(expr: &Expr) -> String {
    let mut out = String::new();
    out.push_str(&label(expr));
    out.push('\n');
    walk(expr, "", &mut out);
    out
}

fn label(expr: &Expr) -> String {
    match expr {
        Expr::Const(false) => "0".to_string(),
        Expr::Const(true) => "1".to_string(),
        Expr::Var(v) => v.to_string(),
        Expr::Not(_) => "!".to_string(),
        Expr::Binary(op, _, _) => op.symbol().to_string(),
    }
}

fn walk(expr: &Expr, prefix: &str, out: &mut String) {
    let children: Vec<&Expr> = match expr {
        Expr::Const(_) | Expr::Var(_) => vec![],
        Expr::Not(x) => vec![x.as_ref()],
        Expr::Binary(_, a, b) => vec![a.as_ref(), b.as_ref()],
    };

    let last = children.len().saturating_sub(1);
    for (i, child) in children.iter().enumerate() {
        let (branch, pad) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(prefix);
        out.push_str(branch);
        out.push_str(&label(child));
        out.push('\n');
        walk(child, &format!("{}{}", prefix, pad), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn test_render_leaf() {
        assert_eq!(render(&Expr::Var('A')), "A\n");
        assert_eq!(render(&Expr::Const(true)), "1\n");
    }

    #[test]
    fn test_render_tree() {
        let tree = parse("AB&C|").unwrap();
        let art = render(&tree);
        println!("{}", art);
        let expected = "\
|
├── &
│   ├── A
│   └── B
└── C
";
        assert_eq!(art, expected);
    }

    #[test]
    fn test_render_not_chain() {
        let tree = parse("A!!").unwrap();
        let expected = "\
!
└── !
    └── A
";
        assert_eq!(render(&tree), expected);
    }
}
