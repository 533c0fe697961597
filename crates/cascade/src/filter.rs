//! Filters narrow a resource's listing. Dependent filters also compute their
//! own dropdown options from the selections of other filters.

mod dependency;
pub use dependency::{Constraint, Dependency};

mod dependent;
pub use dependent::DependentFilter;

mod select;
pub use select::SelectFilter;

use crate::{Db, FilterMeta, Query, Result};

use cascade_core::{async_trait, stmt::Value};

use std::fmt::Debug;

#[async_trait]
pub trait Filter: Debug + Send + Sync + 'static {
    /// Identifies the filter within its resource and in query strings
    fn key(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Name of the component that renders the filter
    fn component(&self) -> &'static str;

    /// Narrows the resource listing to rows matching `value`.
    fn apply(&self, query: Query, value: &Value) -> Query;

    /// Describes the filter for rendering, with `current` as the selected
    /// value.
    async fn meta(&self, db: &Db, current: &Value) -> Result<FilterMeta>;

    /// Returns the filter as a dependent filter, when it is one. Only
    /// dependent filters are served by the options endpoint.
    fn as_dependent(&self) -> Option<&DependentFilter> {
        None
    }
}
