use crate::stmt::Value;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One dropdown entry.
///
/// Serialized as `{"label": .., "value": .., ...extra}`; extra fields are
/// additional columns the filter projects into its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub label: String,
    pub value: Value,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl OptionEntry {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            extra: IndexMap::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
