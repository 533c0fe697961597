//! Types exchanged between the options endpoint and filter components.

mod meta;
pub use meta::{DependencyMeta, FilterMeta};

mod option;
pub use option::OptionEntry;

mod parent_values;
pub use parent_values::ParentValues;

/// Prefix of every dependent filter key; the bound column follows.
pub const DEPENDENT_FILTER_KEY_PREFIX: &str = "dependent-filter-";
