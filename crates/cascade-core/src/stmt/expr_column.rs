use super::Expr;
use crate::schema::ColumnId;

/// A reference to a column of one of the tables in a statement's source.
///
/// Subqueries may reference columns of an enclosing query; `nesting` counts
/// how many query levels up the referenced source lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprColumn {
    /// Query levels between the reference and the source it points into.
    pub nesting: usize,

    /// Index of the table within that source: 0 is the main table, joins
    /// follow in declaration order.
    pub table: usize,

    /// Index of the column within the referenced table.
    pub column: usize,
}

impl ExprColumn {
    /// A column of the main table of the current query.
    pub fn new(column: ColumnId) -> Self {
        Self {
            nesting: 0,
            table: 0,
            column: column.index,
        }
    }

    /// A column of the `table`-th table in the current query's source.
    pub fn joined(table: usize, column: ColumnId) -> Self {
        Self {
            nesting: 0,
            table,
            column: column.index,
        }
    }

    /// The same column, referenced from `levels` queries deeper.
    pub fn outer(self, levels: usize) -> Self {
        Self {
            nesting: self.nesting + levels,
            ..self
        }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Expr::Column(value)
    }
}
