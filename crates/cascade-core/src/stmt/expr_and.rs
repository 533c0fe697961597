use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// Combines two expressions with AND, flattening nested conjunctions.
    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let mut operands = vec![];

        for expr in [lhs.into(), rhs.into()] {
            match expr {
                Expr::And(and) => operands.extend(and.operands),
                expr => operands.push(expr),
            }
        }

        ExprAnd { operands }.into()
    }

    pub fn and_from_vec(operands: Vec<Expr>) -> Expr {
        match operands.len() {
            0 => Expr::Value(true.into()),
            1 => operands.into_iter().next().unwrap(),
            _ => ExprAnd { operands }.into(),
        }
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Expr::And(value)
    }
}
