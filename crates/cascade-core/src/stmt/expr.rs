use super::{
    BinaryOp, ExprAnd, ExprBinaryOp, ExprColumn, ExprExists, ExprInList, ExprIsNull, ExprOr,
    Value,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of binary expressions
    And(ExprAnd),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// References a column of a table in the statement's source
    Column(ExprColumn),

    /// Tests whether a subquery returns any rows
    Exists(ExprExists),

    /// Whether an expression is (or is not) in a list of values
    InList(ExprInList),

    /// Whether an expression is (or is not) null
    IsNull(ExprIsNull),

    /// OR a set of binary expressions
    Or(ExprOr),

    /// A constant value
    Value(Value),
}

impl Expr {
    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        ExprBinaryOp::new(lhs, BinaryOp::Eq, rhs).into()
    }

    pub fn ne(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        ExprBinaryOp::new(lhs, BinaryOp::Ne, rhs).into()
    }

    pub fn gt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        ExprBinaryOp::new(lhs, BinaryOp::Gt, rhs).into()
    }

    pub fn ge(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        ExprBinaryOp::new(lhs, BinaryOp::Ge, rhs).into()
    }

    pub fn lt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        ExprBinaryOp::new(lhs, BinaryOp::Lt, rhs).into()
    }

    pub fn le(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        ExprBinaryOp::new(lhs, BinaryOp::Le, rhs).into()
    }

    pub fn value(value: impl Into<Value>) -> Expr {
        Expr::Value(value.into())
    }

    pub const fn is_value(&self) -> bool {
        matches!(self, Expr::Value(_))
    }

    pub const fn is_value_null(&self) -> bool {
        matches!(self, Expr::Value(Value::Null))
    }

    pub fn as_column(&self) -> Option<&ExprColumn> {
        match self {
            Expr::Column(expr) => Some(expr),
            _ => None,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}
