use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    pub expr: Box<Expr>,
    pub negate: bool,
}

impl Expr {
    pub fn is_null(expr: impl Into<Expr>) -> Expr {
        ExprIsNull {
            expr: Box::new(expr.into()),
            negate: false,
        }
        .into()
    }

    pub fn is_not_null(expr: impl Into<Expr>) -> Expr {
        ExprIsNull {
            expr: Box::new(expr.into()),
            negate: true,
        }
        .into()
    }
}

impl From<ExprIsNull> for Expr {
    fn from(value: ExprIsNull) -> Self {
        Expr::IsNull(value)
    }
}
