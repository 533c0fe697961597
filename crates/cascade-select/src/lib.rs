//! Client side of dependent select filters.
//!
//! A [`DependentSelect`] holds one dropdown's options and selection and
//! refetches its options whenever a parent filter's selection changes. A
//! [`FilterPanel`] routes selection changes between the selects of one
//! resource. Rendering is left to the caller, which observes
//! [`Snapshot`]s through [`DependentSelect::subscribe`].

mod error;
pub use error::FetchError;

mod panel;
pub use panel::FilterPanel;

mod select;
pub use select::{DependentSelect, Refresh, SelectState, Snapshot};

mod source;
pub use source::{HttpOptionsSource, OptionsRequest, OptionsSource};

pub use cascade_core::filter::{FilterMeta, OptionEntry, ParentValues};
pub use cascade_core::stmt::Value;
