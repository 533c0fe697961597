use super::{Column, ColumnId, Relation};
use crate::{Error, Result};

id_type! {
    /// Uniquely identifies a table
    TableId
}

/// A database table
#[derive(Debug)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,

    /// The single-column primary key, when declared
    pub primary_key: Option<ColumnId>,

    /// Named relations to other tables
    pub relations: Vec<Relation>,
}

impl Table {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Looks up a column by name, failing with an "unknown column" error.
    pub fn resolve_column(&self, name: &str) -> Result<&Column> {
        self.column_by_name(name)
            .ok_or_else(|| Error::unknown_column(&self.name, name))
    }

    pub fn primary_key_column(&self) -> Option<&Column> {
        self.primary_key.map(|id| self.column(id))
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.iter().find(|relation| relation.name() == name)
    }

    /// Looks up a relation by name, failing with an "unknown relation" error.
    pub fn resolve_relation(&self, name: &str) -> Result<&Relation> {
        self.relation(name)
            .ok_or_else(|| Error::unknown_relation(&self.name, name))
    }
}

impl From<&Table> for TableId {
    fn from(value: &Table) -> Self {
        value.id
    }
}
