use super::{ColumnId, TableId};

/// A named path from one table to another, traversed by relationship
/// constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum Relation {
    BelongsTo(BelongsTo),
    HasMany(HasMany),
    BelongsToMany(BelongsToMany),
}

/// The source row holds a foreign key to the target's key.
#[derive(Debug, Clone, PartialEq)]
pub struct BelongsTo {
    pub name: String,
    pub target: TableId,

    /// Column on the source table
    pub foreign_key: ColumnId,

    /// Column on the target table
    pub references: ColumnId,
}

/// Target rows hold a foreign key to the source's key.
#[derive(Debug, Clone, PartialEq)]
pub struct HasMany {
    pub name: String,
    pub target: TableId,

    /// Column on the target table
    pub foreign_key: ColumnId,

    /// Column on the source table
    pub references: ColumnId,
}

/// Source and target are linked through a pivot table.
#[derive(Debug, Clone, PartialEq)]
pub struct BelongsToMany {
    pub name: String,
    pub target: TableId,
    pub pivot: TableId,

    /// Pivot column holding the source key
    pub pivot_source: ColumnId,

    /// Pivot column holding the target key
    pub pivot_target: ColumnId,

    /// Key column on the source table
    pub source_key: ColumnId,

    /// Key column on the target table
    pub target_key: ColumnId,
}

impl Relation {
    pub fn name(&self) -> &str {
        match self {
            Relation::BelongsTo(rel) => &rel.name,
            Relation::HasMany(rel) => &rel.name,
            Relation::BelongsToMany(rel) => &rel.name,
        }
    }

    pub fn target(&self) -> TableId {
        match self {
            Relation::BelongsTo(rel) => rel.target,
            Relation::HasMany(rel) => rel.target,
            Relation::BelongsToMany(rel) => rel.target,
        }
    }
}
