//! Common imports for test files: `use tests::prelude::*;`

pub use crate::fixtures::{self, CLIENT, PROJECT};
pub use crate::http::{self, get};
pub use crate::{tests, Setup};

pub use cascade::{
    stmt::Value, Constraint, Db, DependentFilter, Filter, OptionEntry, ParentValues, Registry,
    Resource, SelectFilter,
};
pub use serde_json::json;
