#[macro_use]
mod macros;

mod cascade_test;
pub mod db;
pub mod fixtures;
pub mod http;
pub mod prelude;

// Public for macro expansion
pub use cascade_test::CascadeTest;

use cascade::Db;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    /// Connects and recreates every table of `builder`'s schema.
    async fn setup(&self, builder: cascade::db::Builder) -> Db {
        let db = self.connect(builder).await.unwrap();
        db.reset_db().await.unwrap();
        db
    }

    async fn connect(&self, builder: cascade::db::Builder) -> cascade::Result<Db>;
}
