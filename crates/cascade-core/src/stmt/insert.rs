use super::ValueRecord;
use crate::schema::{ColumnId, TableId};

/// Inserts rows into a single table.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: TableId,

    /// Target columns; every row supplies one value per column.
    pub columns: Vec<ColumnId>,

    pub rows: Vec<ValueRecord>,
}
