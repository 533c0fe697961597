use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let mut operands = vec![];

        for expr in [lhs.into(), rhs.into()] {
            match expr {
                Expr::Or(or) => operands.extend(or.operands),
                expr => operands.push(expr),
            }
        }

        ExprOr { operands }.into()
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Expr::Or(value)
    }
}
