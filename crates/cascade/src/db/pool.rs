//! Connection pooling for database connections.

use std::ops::{Deref, DerefMut};

use cascade_core::{driver::Driver, Connection, Error};

use crate::db::Connect;

/// A connection pool that manages database connections.
#[derive(Debug)]
pub struct Pool {
    inner: deadpool::managed::Pool<Manager>,
}

impl Pool {
    /// Creates a new connection pool from the given driver.
    ///
    /// One connection is opened eagerly so that a bad URL or an unreachable
    /// database fails here rather than on the first query.
    pub async fn new(driver: impl Driver) -> crate::Result<Self> {
        let max_connections = driver.max_connections();
        let mut builder = deadpool::managed::Pool::builder(Manager {
            driver: Box::new(driver),
        })
        .runtime(deadpool::Runtime::Tokio1);

        if let Some(max_connections) = max_connections {
            builder = builder.max_size(max_connections);
        }

        let inner = builder.build().map_err(Error::connection_pool)?;

        inner.get().await.map_err(Error::connection_pool)?;

        Ok(Self { inner })
    }

    /// Creates a new connection pool from a connection URL.
    pub async fn connect(url: &str) -> crate::Result<Self> {
        Self::new(Connect::new(url)?).await
    }

    /// Retrieves a connection from the pool.
    pub async fn get(&self) -> crate::Result<PoolConnection> {
        let connection = self.inner.get().await.map_err(Error::connection_pool)?;
        Ok(PoolConnection { inner: connection })
    }

    /// Maximum number of connections the pool opens.
    pub fn max_size(&self) -> usize {
        self.inner.status().max_size
    }
}

#[derive(Debug)]
struct Manager {
    driver: Box<dyn Driver>,
}

impl deadpool::managed::Manager for Manager {
    type Type = Box<dyn Connection>;
    type Error = Error;

    async fn create(&self) -> Result<Self::Type, Self::Error> {
        tracing::debug!(url = %self.driver.url(), "opening connection");
        self.driver.connect().await
    }

    async fn recycle(
        &self,
        _obj: &mut Self::Type,
        _metrics: &deadpool::managed::Metrics,
    ) -> deadpool::managed::RecycleResult<Self::Error> {
        Ok(())
    }
}

/// A connection retrieved from a pool.
///
/// When dropped, the connection is returned to the pool for reuse.
pub struct PoolConnection {
    inner: deadpool::managed::Object<Manager>,
}

impl Deref for PoolConnection {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PoolConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
