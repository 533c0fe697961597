use super::{Expr, Limit, OrderBy, OrderByExpr, Returning, Source};
use crate::schema::TableId;

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Tables the query reads from
    pub source: Source,

    /// Row filter, `None` selects every row
    pub filter: Option<Expr>,

    /// Ordering of the returned rows
    pub order_by: Option<OrderBy>,

    /// Row cap and offset
    pub limit: Option<Limit>,

    /// What each returned row contains
    pub returning: Returning,
}

impl Select {
    pub fn new(table: TableId) -> Self {
        Self {
            source: Source::table(table),
            filter: None,
            order_by: None,
            limit: None,
            returning: Returning::One,
        }
    }

    /// ANDs `expr` into the query's filter.
    pub fn and(&mut self, expr: impl Into<Expr>) {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
    }

    pub fn push_order_by(&mut self, expr: OrderByExpr) {
        match &mut self.order_by {
            Some(order_by) => order_by.exprs.push(expr),
            None => self.order_by = Some(expr.into()),
        }
    }
}
