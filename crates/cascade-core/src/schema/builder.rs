use super::{
    BelongsTo, BelongsToMany, Column, ColumnId, HasMany, Relation, Schema, Table, TableId,
};
use crate::{stmt, Error, Result};

use std::collections::HashSet;

/// Declares tables, columns and relations, then resolves them into a
/// [`Schema`].
///
/// Relations are declared by name and resolved in [`Builder::build`], so
/// tables may reference tables declared after them.
#[derive(Debug, Default)]
pub struct Builder {
    tables: Vec<TableBuilder>,
}

#[derive(Debug)]
pub struct TableBuilder {
    name: String,
    columns: Vec<ColumnBuilder>,
    relations: Vec<PendingRelation>,
}

#[derive(Debug)]
pub struct ColumnBuilder {
    name: String,
    ty: stmt::Type,
    nullable: bool,
    primary_key: bool,
    auto_increment: bool,
}

#[derive(Debug)]
enum PendingRelation {
    BelongsTo {
        name: String,
        target: String,
        foreign_key: String,
        references: Option<String>,
    },
    HasMany {
        name: String,
        target: String,
        foreign_key: String,
        references: Option<String>,
    },
    BelongsToMany {
        name: String,
        target: String,
        pivot: String,
        pivot_source: String,
        pivot_target: String,
    },
}

impl Builder {
    /// Declares a table; `f` declares its columns and relations.
    pub fn table(&mut self, name: impl Into<String>, f: impl FnOnce(&mut TableBuilder)) -> &mut Self {
        let mut table = TableBuilder {
            name: name.into(),
            columns: vec![],
            relations: vec![],
        };
        f(&mut table);
        self.tables.push(table);
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let mut seen = HashSet::new();
        for table in &self.tables {
            if !seen.insert(table.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` is declared more than once",
                    table.name
                )));
            }
        }

        let mut schema = Schema {
            tables: self
                .tables
                .iter()
                .enumerate()
                .map(|(index, table)| table.build_columns(TableId(index)))
                .collect::<Result<Vec<_>>>()?,
        };

        for (index, table) in self.tables.iter().enumerate() {
            let relations = table
                .relations
                .iter()
                .map(|relation| relation.resolve(&schema, TableId(index)))
                .collect::<Result<Vec<_>>>()?;

            let mut names = HashSet::new();
            for relation in &relations {
                if !names.insert(relation.name().to_string()) {
                    return Err(Error::invalid_schema(format!(
                        "relation `{}` is declared more than once on table `{}`",
                        relation.name(),
                        table.name
                    )));
                }
            }

            schema.tables[index].relations = relations;
        }

        Ok(schema)
    }
}

impl TableBuilder {
    pub fn column(&mut self, name: impl Into<String>, ty: stmt::Type) -> &mut ColumnBuilder {
        self.columns.push(ColumnBuilder {
            name: name.into(),
            ty,
            nullable: false,
            primary_key: false,
            auto_increment: false,
        });
        self.columns.last_mut().unwrap()
    }

    /// Declares the conventional `id` integer primary key.
    pub fn id(&mut self) -> &mut ColumnBuilder {
        self.column("id", stmt::Type::I64)
            .primary_key()
            .auto_increment()
    }

    /// The table holds `foreign_key`, referencing the primary key of `target`.
    pub fn belongs_to(
        &mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> &mut Self {
        self.relations.push(PendingRelation::BelongsTo {
            name: name.into(),
            target: target.into(),
            foreign_key: foreign_key.into(),
            references: None,
        });
        self
    }

    /// Rows of `target` hold `foreign_key`, referencing this table's primary
    /// key.
    pub fn has_many(
        &mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> &mut Self {
        self.relations.push(PendingRelation::HasMany {
            name: name.into(),
            target: target.into(),
            foreign_key: foreign_key.into(),
            references: None,
        });
        self
    }

    /// This table and `target` are linked through rows of `pivot`.
    pub fn belongs_to_many(
        &mut self,
        name: impl Into<String>,
        target: impl Into<String>,
        pivot: impl Into<String>,
        pivot_source: impl Into<String>,
        pivot_target: impl Into<String>,
    ) -> &mut Self {
        self.relations.push(PendingRelation::BelongsToMany {
            name: name.into(),
            target: target.into(),
            pivot: pivot.into(),
            pivot_source: pivot_source.into(),
            pivot_target: pivot_target.into(),
        });
        self
    }

    /// Overrides the key column referenced by the most recently declared
    /// `belongs_to` or `has_many` relation.
    pub fn references(&mut self, column: impl Into<String>) -> &mut Self {
        match self.relations.last_mut() {
            Some(PendingRelation::BelongsTo { references, .. })
            | Some(PendingRelation::HasMany { references, .. }) => {
                *references = Some(column.into());
            }
            _ => panic!("`references` must follow `belongs_to` or `has_many`"),
        }
        self
    }

    fn build_columns(&self, id: TableId) -> Result<Table> {
        let mut seen = HashSet::new();
        let mut primary_key = None;
        let mut columns = vec![];

        for (index, column) in self.columns.iter().enumerate() {
            if !seen.insert(column.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "column `{}` is declared more than once on table `{}`",
                    column.name, self.name
                )));
            }

            let column_id = ColumnId { table: id, index };

            if column.primary_key {
                if primary_key.is_some() {
                    return Err(Error::invalid_schema(format!(
                        "table `{}` declares more than one primary key column",
                        self.name
                    )));
                }
                primary_key = Some(column_id);
            }

            if column.auto_increment && column.ty != stmt::Type::I64 {
                return Err(Error::invalid_schema(format!(
                    "auto increment column `{}` must be an integer",
                    column.name
                )));
            }

            columns.push(Column {
                id: column_id,
                name: column.name.clone(),
                ty: column.ty,
                nullable: column.nullable,
                primary_key: column.primary_key,
                auto_increment: column.auto_increment,
            });
        }

        Ok(Table {
            id,
            name: self.name.clone(),
            columns,
            primary_key,
            relations: vec![],
        })
    }
}

impl ColumnBuilder {
    pub fn nullable(&mut self) -> &mut Self {
        self.nullable = true;
        self
    }

    pub fn primary_key(&mut self) -> &mut Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(&mut self) -> &mut Self {
        self.auto_increment = true;
        self
    }
}

impl PendingRelation {
    fn resolve(&self, schema: &Schema, source: TableId) -> Result<Relation> {
        let source = schema.table(source);

        Ok(match self {
            PendingRelation::BelongsTo {
                name,
                target,
                foreign_key,
                references,
            } => {
                let target = table(schema, name, target)?;
                Relation::BelongsTo(BelongsTo {
                    name: name.clone(),
                    target: target.id,
                    foreign_key: column(source, name, foreign_key)?,
                    references: key_column(target, name, references.as_deref())?,
                })
            }
            PendingRelation::HasMany {
                name,
                target,
                foreign_key,
                references,
            } => {
                let target = table(schema, name, target)?;
                Relation::HasMany(HasMany {
                    name: name.clone(),
                    target: target.id,
                    foreign_key: column(target, name, foreign_key)?,
                    references: key_column(source, name, references.as_deref())?,
                })
            }
            PendingRelation::BelongsToMany {
                name,
                target,
                pivot,
                pivot_source,
                pivot_target,
            } => {
                let target = table(schema, name, target)?;
                let pivot = table(schema, name, pivot)?;
                Relation::BelongsToMany(BelongsToMany {
                    name: name.clone(),
                    target: target.id,
                    pivot: pivot.id,
                    pivot_source: column(pivot, name, pivot_source)?,
                    pivot_target: column(pivot, name, pivot_target)?,
                    source_key: key_column(source, name, None)?,
                    target_key: key_column(target, name, None)?,
                })
            }
        })
    }
}

fn table<'a>(schema: &'a Schema, relation: &str, name: &str) -> Result<&'a Table> {
    schema.table_by_name(name).ok_or_else(|| {
        Error::invalid_schema(format!(
            "relation `{relation}` references missing table `{name}`"
        ))
    })
}

fn column(table: &Table, relation: &str, name: &str) -> Result<ColumnId> {
    table.column_by_name(name).map(|column| column.id).ok_or_else(|| {
        Error::invalid_schema(format!(
            "relation `{relation}` references missing column `{}.{name}`",
            table.name
        ))
    })
}

fn key_column(table: &Table, relation: &str, name: Option<&str>) -> Result<ColumnId> {
    match name {
        Some(name) => column(table, relation, name),
        None => table.primary_key.ok_or_else(|| {
            Error::invalid_schema(format!(
                "relation `{relation}` needs a primary key on table `{}`",
                table.name
            ))
        }),
    }
}
