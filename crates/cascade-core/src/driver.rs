mod operation;
pub use operation::QuerySql;

mod response;
pub use response::{Response, Rows};

use crate::{async_trait, schema::Schema};

use std::{borrow::Cow, fmt::Debug, sync::Arc};

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The connection URL this driver was created from.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection to the database.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;

    /// Upper bound on open connections, `None` to let the pool decide.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a statement
    async fn exec(&mut self, schema: &Arc<Schema>, op: QuerySql) -> crate::Result<Response>;

    /// Creates every table of the schema that does not exist yet.
    async fn push_schema(&mut self, schema: &Schema) -> crate::Result<()>;

    /// Drops every table of the schema, then creates them again.
    async fn reset_schema(&mut self, schema: &Schema) -> crate::Result<()>;
}
