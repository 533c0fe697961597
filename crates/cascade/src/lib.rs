pub mod db;
pub use db::Db;

pub mod filter;
pub use filter::{Constraint, Dependency, DependentFilter, Filter, SelectFilter};

mod query;
pub use query::Query;

mod record;
pub use record::Record;

pub mod resource;
pub use resource::{Page, Registry, Resource};

pub use cascade_core::{
    filter::{DependencyMeta, FilterMeta, OptionEntry, ParentValues},
    schema, stmt, Error, Result,
};

pub use async_trait::async_trait;
