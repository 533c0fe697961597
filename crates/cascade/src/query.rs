use crate::{Error, Result};

use cascade_core::{
    schema::{ColumnId, Relation, Schema, Table, TableId},
    stmt::{Direction, Expr, ExprColumn, Limit, OrderByExpr, Returning, Select, Type, Value},
};

use std::sync::Arc;

/// A query against one table, built up by chaining.
///
/// Column and relation names are resolved as they are added. The first
/// resolution failure is kept and returned when the query runs, so a chain
/// never has to be interrupted to handle errors.
#[derive(Debug, Clone)]
pub struct Query {
    schema: Arc<Schema>,
    table: TableId,
    select: Select,

    /// Projected columns; empty projects every column of the table
    columns: Vec<ColumnId>,

    error: Option<Error>,
}

/// A query lowered to a statement, with the name and type of each
/// projected column.
pub(crate) struct Compiled {
    pub(crate) select: Select,
    pub(crate) names: Vec<String>,
    pub(crate) tys: Vec<Type>,
}

impl Query {
    pub(crate) fn new(schema: Arc<Schema>, table: &str) -> Result<Query> {
        let table = schema.resolve_table(table)?.id;
        Ok(Query::for_table(schema, table))
    }

    fn for_table(schema: Arc<Schema>, table: TableId) -> Query {
        Query {
            schema,
            table,
            select: Select::new(table),
            columns: vec![],
            error: None,
        }
    }

    /// The table being queried
    pub fn table(&self) -> &Table {
        self.schema.table(self.table)
    }

    pub fn where_eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        if let Some((column, value)) = self.column_value(column, value.into()) {
            self.select.and(match value {
                Value::Null => Expr::is_null(column),
                value => Expr::eq(column, value),
            });
        }
        self
    }

    /// Like [`where_eq`](Self::where_eq), except that a value which does not
    /// convert to the column's type matches no rows instead of failing the
    /// query.
    pub fn where_eq_lenient(mut self, column: &str, value: impl Into<Value>) -> Self {
        let Some((id, ty)) = self.column(column) else {
            return self;
        };

        let column = ExprColumn::new(id);

        match value.into().cast(ty) {
            Ok(Value::Null) => self.select.and(Expr::is_null(column)),
            Ok(value) => self.select.and(Expr::eq(column, value)),
            Err(err) => {
                tracing::debug!(error = %err, "value does not match column type");
                self.select.and(Expr::in_list(column, vec![]));
            }
        }
        self
    }

    pub fn where_ne(mut self, column: &str, value: impl Into<Value>) -> Self {
        if let Some((column, value)) = self.column_value(column, value.into()) {
            self.select.and(match value {
                Value::Null => Expr::is_not_null(column),
                value => Expr::ne(column, value),
            });
        }
        self
    }

    /// Matches rows whose `column` is one of `values`. An empty list matches
    /// no rows.
    pub fn where_in<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let Some((id, ty)) = self.column(column) else {
            return self;
        };

        let values = values
            .into_iter()
            .map(|value| value.into().cast(ty))
            .collect::<Result<Vec<_>>>();

        match values {
            Ok(values) => self.select.and(Expr::in_list(ExprColumn::new(id), values)),
            Err(err) => self.fail(err),
        }
        self
    }

    pub fn where_null(mut self, column: &str) -> Self {
        if let Some((id, _)) = self.column(column) {
            self.select.and(Expr::is_null(ExprColumn::new(id)));
        }
        self
    }

    pub fn where_not_null(mut self, column: &str) -> Self {
        if let Some((id, _)) = self.column(column) {
            self.select.and(Expr::is_not_null(ExprColumn::new(id)));
        }
        self
    }

    /// Matches rows with at least one row related through `relation` that
    /// satisfies the query built by `f`.
    pub fn where_has(mut self, relation: &str, f: impl FnOnce(Query) -> Query) -> Self {
        let schema = self.schema.clone();

        let relation = match schema.table(self.table).resolve_relation(relation) {
            Ok(relation) => relation,
            Err(err) => {
                self.fail(err);
                return self;
            }
        };

        let related = f(Query::for_table(schema.clone(), relation.target()));

        let mut subquery = match related.into_select() {
            Ok(select) => select,
            Err(err) => {
                self.fail(err);
                return self;
            }
        };

        match relation {
            Relation::BelongsTo(rel) => subquery.and(Expr::eq(
                ExprColumn::new(rel.references),
                ExprColumn::new(rel.foreign_key).outer(1),
            )),
            Relation::HasMany(rel) => subquery.and(Expr::eq(
                ExprColumn::new(rel.foreign_key),
                ExprColumn::new(rel.references).outer(1),
            )),
            Relation::BelongsToMany(rel) => {
                let pivot = subquery.source.joins.len() + 1;

                subquery.source.join(
                    rel.pivot,
                    Expr::eq(
                        ExprColumn::joined(pivot, rel.pivot_target),
                        ExprColumn::new(rel.target_key),
                    ),
                );
                subquery.and(Expr::eq(
                    ExprColumn::joined(pivot, rel.pivot_source),
                    ExprColumn::new(rel.source_key).outer(1),
                ));
            }
        }

        subquery.returning = Returning::One;
        subquery.order_by = None;
        subquery.limit = None;

        self.select.and(Expr::exists(subquery));
        self
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        if let Some((id, _)) = self.column(column) {
            self.select.push_order_by(match direction {
                Direction::Asc => OrderByExpr::asc(ExprColumn::new(id)),
                Direction::Desc => OrderByExpr::desc(ExprColumn::new(id)),
            });
        }
        self
    }

    pub fn order_by_asc(self, column: &str) -> Self {
        self.order_by(column, Direction::Asc)
    }

    pub fn order_by_desc(self, column: &str) -> Self {
        self.order_by(column, Direction::Desc)
    }

    pub fn limit(mut self, limit: u64) -> Self {
        let offset = self.select.limit.and_then(|limit| limit.offset);
        self.select.limit = Some(Limit { limit, offset });
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        // SQL has no OFFSET without LIMIT
        let limit = self.select.limit.map_or(i64::MAX as u64, |limit| limit.limit);
        self.select.limit = Some(Limit::with_offset(limit, offset));
        self
    }

    /// Projects `columns`, in order, instead of every column of the table.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.columns.clear();

        for column in columns {
            if let Some((id, _)) = self.column(column.as_ref()) {
                self.columns.push(id);
            }
        }
        self
    }

    /// Lowers the query to a statement, failing with the first error recorded
    /// while building it.
    pub fn into_select(self) -> Result<Select> {
        self.compile().map(|compiled| compiled.select)
    }

    pub(crate) fn compile(mut self) -> Result<Compiled> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let table = self.schema.table(self.table);

        let columns = if self.columns.is_empty() {
            table.columns.iter().map(|column| column.id).collect()
        } else {
            self.columns
        };

        let names = columns
            .iter()
            .map(|id| table.column(*id).name.clone())
            .collect();
        let tys = columns.iter().map(|id| table.column(*id).ty).collect();

        self.select.returning = Returning::Exprs(
            columns
                .into_iter()
                .map(|id| ExprColumn::new(id).into())
                .collect(),
        );

        Ok(Compiled {
            select: self.select,
            names,
            tys,
        })
    }

    fn column(&mut self, name: &str) -> Option<(ColumnId, Type)> {
        let schema = self.schema.clone();

        match schema.table(self.table).resolve_column(name) {
            Ok(column) => Some((column.id, column.ty)),
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    /// Resolves `column` and converts `value` to its type.
    fn column_value(&mut self, column: &str, value: Value) -> Option<(ExprColumn, Value)> {
        let (id, ty) = self.column(column)?;

        match value.cast(ty) {
            Ok(value) => Some((ExprColumn::new(id), value)),
            Err(err) => {
                self.fail(err.context(cascade_core::err!("comparing column `{column}`")));
                None
            }
        }
    }

    fn fail(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}
