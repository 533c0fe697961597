use super::OptionEntry;
use crate::stmt::Value;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What a filter component needs to render itself, serialized with the
/// resource's filter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterMeta {
    /// Name of the component that renders the filter
    pub component: String,

    pub key: String,

    pub name: String,

    /// Options available before any parent selection
    pub options: Vec<OptionEntry>,

    pub current_value: Value,

    /// Parent filter key → how the parent constrains this filter's options
    #[serde(default)]
    pub depends_on: IndexMap<String, DependencyMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyMeta {
    ForeignKey(String),
    Relationship(String),
}

impl FilterMeta {
    pub fn is_dependent(&self) -> bool {
        !self.depends_on.is_empty()
    }
}
