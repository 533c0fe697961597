use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// Project the listed expressions, in order.
    Exprs(Vec<Expr>),

    /// A constant row, used when only row existence matters.
    One,
}

impl Returning {
    pub fn as_exprs(&self) -> &[Expr] {
        match self {
            Returning::Exprs(exprs) => exprs,
            Returning::One => &[],
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Returning::Exprs(exprs) => exprs.len(),
            Returning::One => 1,
        }
    }
}
