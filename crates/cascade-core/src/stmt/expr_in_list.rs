use super::{Expr, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,
    pub list: Vec<Value>,
    pub negated: bool,
}

impl Expr {
    pub fn in_list(expr: impl Into<Expr>, list: Vec<Value>) -> Expr {
        ExprInList {
            expr: Box::new(expr.into()),
            list,
            negated: false,
        }
        .into()
    }

    pub fn not_in_list(expr: impl Into<Expr>, list: Vec<Value>) -> Expr {
        ExprInList {
            expr: Box::new(expr.into()),
            list,
            negated: true,
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Expr::InList(value)
    }
}
