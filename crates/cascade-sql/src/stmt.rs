mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod name;
pub use name::Name;

pub use cascade_core::stmt::*;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
    Insert(Insert),
    Query(Select),
}

impl Statement {
    /// Returns the number of fields in each returned row, `None` when the
    /// statement returns a row count.
    pub fn returning_len(&self) -> Option<usize> {
        match self {
            Statement::Query(select) => Some(select.returning.width()),
            _ => None,
        }
    }
}

impl From<cascade_core::stmt::Statement> for Statement {
    fn from(value: cascade_core::stmt::Statement) -> Self {
        match value {
            cascade_core::stmt::Statement::Insert(stmt) => Statement::Insert(stmt),
            cascade_core::stmt::Statement::Query(stmt) => Statement::Query(stmt),
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Query(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
