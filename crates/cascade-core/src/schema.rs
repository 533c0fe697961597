mod builder;
pub use builder::{Builder, ColumnBuilder, TableBuilder};

mod column;
pub use column::{Column, ColumnId};

mod relation;
pub use relation::{BelongsTo, BelongsToMany, HasMany, Relation};

mod table;
pub use table::{Table, TableId};

use crate::{Error, Result};

/// The tables Cascade reads from, with the relations declared between them.
#[derive(Debug, Default)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        &self.tables[id.into().0]
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        &self.table(id.table).columns[id.index]
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Looks up a table by name, failing with an "unknown table" error.
    pub fn resolve_table(&self, name: &str) -> Result<&Table> {
        self.table_by_name(name)
            .ok_or_else(|| Error::unknown_table(name))
    }
}
