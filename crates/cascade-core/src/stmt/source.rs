use super::Expr;
use crate::schema::TableId;

/// The tables a query reads from: a main table plus inner joins.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub table: TableId,
    pub joins: Vec<Join>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: TableId,
    pub on: Expr,
}

impl Source {
    pub fn table(table: TableId) -> Self {
        Self {
            table,
            joins: vec![],
        }
    }

    /// Returns the table at `index`: 0 is the main table, joins follow.
    pub fn table_at(&self, index: usize) -> TableId {
        match index {
            0 => self.table,
            i => self.joins[i - 1].table,
        }
    }

    /// Adds an inner join, returning the index by which columns of the joined
    /// table are referenced.
    pub fn join(&mut self, table: TableId, on: Expr) -> usize {
        self.joins.push(Join { table, on });
        self.joins.len()
    }
}
