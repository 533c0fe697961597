use super::*;

use cascade_core::schema::Table;

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Index into `columns` of the primary key column
    pub primary_key: Option<usize>,
}

impl Statement {
    pub fn create_table(table: &Table) -> Self {
        CreateTable {
            name: Name::from(&table.name),
            columns: table.columns.iter().map(ColumnDef::from_schema).collect(),
            primary_key: table.primary_key.map(|column| column.index),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
