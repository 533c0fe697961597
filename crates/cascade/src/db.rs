mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

mod insert;
pub use insert::Insert;

mod pool;
pub use pool::{Pool, PoolConnection};

use crate::{query::Compiled, Query, Record, Result};

use cascade_core::{
    driver::{QuerySql, Response},
    Schema,
};

use std::sync::Arc;

/// Shared state between all `Db` clones.
#[derive(Debug)]
struct Shared {
    schema: Arc<Schema>,
    pool: Pool,
}

/// A database handle. Cloning is cheap; clones share the schema and the
/// connection pool.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.shared.schema
    }

    /// Starts a query against `table`.
    pub fn query(&self, table: &str) -> Result<Query> {
        Query::new(self.shared.schema.clone(), table)
    }

    /// Starts an insert into `table`.
    pub fn insert(&self, table: &str) -> Insert<'_> {
        Insert::new(self, table)
    }

    /// Execute a query, returning all matching records
    pub async fn all(&self, query: Query) -> Result<Vec<Record>> {
        let Compiled {
            select,
            names,
            tys,
        } = query.compile()?;

        let response = self
            .exec(QuerySql {
                stmt: select.into(),
                ret: Some(tys),
            })
            .await?;

        Ok(response
            .rows
            .into_values()
            .into_iter()
            .map(|row| names.iter().cloned().zip(row.fields).collect())
            .collect())
    }

    /// Execute a statement on a pooled connection
    pub async fn exec(&self, op: QuerySql) -> Result<Response> {
        let mut connection = self.shared.pool.get().await?;
        connection.exec(&self.shared.schema, op).await
    }

    /// Creates the tables that do not exist yet.
    pub async fn push_schema(&self) -> Result<()> {
        let mut connection = self.shared.pool.get().await?;
        connection.push_schema(&self.shared.schema).await
    }

    /// Drops and recreates every table, discarding all rows.
    pub async fn reset_db(&self) -> Result<()> {
        let mut connection = self.shared.pool.get().await?;
        connection.reset_schema(&self.shared.schema).await
    }
}
