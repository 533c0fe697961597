mod value;
pub(crate) use value::Value;

use cascade_core::{
    async_trait,
    driver::{Driver, QuerySql, Response},
    schema::{Schema, Table},
    stmt, Error, Result,
};
use cascade_sql as sql;
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    sync::Arc,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL: `sqlite::memory:` or
    /// `sqlite:<path>`.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        match url.path() {
            ":memory:" => Ok(Self::InMemory),
            "" => Err(Error::invalid_connection_url(format!(
                "connection URL is missing a database path; url={url_str}"
            ))),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn cascade_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }

    // Every in-memory connection is its own database
    fn max_connections(&self) -> Option<usize> {
        matches!(self, Self::InMemory).then_some(1)
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }
}

#[async_trait]
impl cascade_core::Connection for Connection {
    async fn exec(&mut self, schema: &Arc<Schema>, op: QuerySql) -> Result<Response> {
        let sql: sql::Statement = op.stmt.into();

        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::sqlite(schema).serialize(&sql, &mut params);

        tracing::trace!(sql = %sql_str, params = params.len(), "sqlite exec");

        let mut stmt = self
            .connection
            .prepare_cached(&sql_str)
            .map_err(Error::driver_operation_failed)?;

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        let Some(ret_tys) = op.ret else {
            let count = stmt
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(Error::driver_operation_failed)?;

            return Ok(Response::count(count as _));
        };

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let mut items = Vec::with_capacity(ret_tys.len());

            for (index, ty) in ret_tys.iter().enumerate() {
                items.push(Value::from_sql(row, index, *ty)?.into_inner());
            }

            ret.push(stmt::ValueRecord::from_vec(items));
        }

        Ok(Response::values(ret))
    }

    async fn push_schema(&mut self, schema: &Schema) -> Result<()> {
        for table in &schema.tables {
            if !self.table_exists(&table.name)? {
                self.create_table(schema, table)?;
            }
        }

        Ok(())
    }

    async fn reset_schema(&mut self, schema: &Schema) -> Result<()> {
        for table in schema.tables.iter().rev() {
            self.execute_ddl(schema, sql::Statement::drop_table_if_exists(table))?;
        }

        for table in &schema.tables {
            self.create_table(schema, table)?;
        }

        Ok(())
    }
}

impl Connection {
    fn table_exists(&self, name: &str) -> Result<bool> {
        let mut stmt = self
            .connection
            .prepare_cached("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .map_err(Error::driver_operation_failed)?;

        stmt.exists([name]).map_err(Error::driver_operation_failed)
    }

    fn create_table(&mut self, schema: &Schema, table: &Table) -> Result<()> {
        tracing::debug!(table = %table.name, "creating table");
        self.execute_ddl(schema, sql::Statement::create_table(table))
    }

    fn execute_ddl(&mut self, schema: &Schema, stmt: sql::Statement) -> Result<()> {
        let mut params: Vec<stmt::Value> = vec![];
        let stmt = sql::Serializer::sqlite(schema).serialize(&stmt, &mut params);
        assert!(params.is_empty());

        tracing::trace!(sql = %stmt, "sqlite ddl");

        self.connection
            .execute(&stmt, [])
            .map_err(Error::driver_operation_failed)?;

        Ok(())
    }
}
