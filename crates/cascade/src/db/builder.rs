use super::{Connect, Db, Pool, Shared};
use crate::Result;

use cascade_core::{driver::Driver, schema};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    schema: schema::Builder,
}

impl Builder {
    /// Declares a table; see [`schema::Builder::table`].
    pub fn table(
        &mut self,
        name: impl Into<String>,
        f: impl FnOnce(&mut schema::TableBuilder),
    ) -> &mut Self {
        self.schema.table(name, f);
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let schema = self.schema.build()?;

        tracing::debug!(url = %driver.url(), tables = schema.tables.len(), "connecting");

        let pool = Pool::new(driver).await?;

        Ok(Db {
            shared: Arc::new(Shared {
                schema: Arc::new(schema),
                pool,
            }),
        })
    }
}
