use super::Db;
use crate::Result;

use cascade_core::{
    driver::QuerySql,
    stmt::{self, Value, ValueRecord},
};

/// Inserts rows into one table, see [`Db::insert`].
#[derive(Debug)]
pub struct Insert<'a> {
    db: &'a Db,
    table: String,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl<'a> Insert<'a> {
    pub(super) fn new(db: &'a Db, table: &str) -> Self {
        Self {
            db,
            table: table.to_string(),
            columns: vec![],
            rows: vec![],
        }
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a row, one value per column in [`columns`](Self::columns) order.
    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rows.push(values.into_iter().map(Into::into).collect());
        self
    }

    /// Runs the insert, returning the number of inserted rows.
    pub async fn exec(self) -> Result<u64> {
        if self.rows.is_empty() {
            return Ok(0);
        }

        let schema = self.db.schema();
        let table = schema.resolve_table(&self.table)?;

        let columns = self
            .columns
            .iter()
            .map(|name| table.resolve_column(name))
            .collect::<Result<Vec<_>>>()?;

        let mut rows = Vec::with_capacity(self.rows.len());

        for row in self.rows {
            if row.len() != columns.len() {
                cascade_core::bail!(
                    "insert into `{}` expects {} values per row, got {}",
                    table.name,
                    columns.len(),
                    row.len()
                );
            }

            let fields = row
                .into_iter()
                .zip(&columns)
                .map(|(value, column)| value.cast(column.ty))
                .collect::<Result<Vec<_>>>()?;

            rows.push(ValueRecord::from_vec(fields));
        }

        let insert = stmt::Insert {
            table: table.id,
            columns: columns.iter().map(|column| column.id).collect(),
            rows,
        };

        let response = self
            .db
            .exec(QuerySql {
                stmt: insert.into(),
                ret: None,
            })
            .await?;

        Ok(response.rows.into_count())
    }
}
