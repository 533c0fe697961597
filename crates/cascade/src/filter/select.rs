use super::Filter;
use crate::{Db, FilterMeta, OptionEntry, Query, Result};

use cascade_core::{async_trait, stmt::Value};

use indexmap::IndexMap;

/// A dropdown filter with a fixed list of options.
#[derive(Debug, Clone)]
pub struct SelectFilter {
    key: String,
    name: String,
    column: String,
    options: Vec<OptionEntry>,
}

impl SelectFilter {
    pub fn new(name: impl Into<String>, column: impl Into<String>) -> Self {
        let column = column.into();
        assert!(!column.is_empty(), "select filter needs a bound column");

        Self {
            key: format!("select-filter-{column}"),
            name: name.into(),
            column,
            options: vec![],
        }
    }

    pub fn option(mut self, label: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.push(OptionEntry::new(label, value));
        self
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn options(&self) -> &[OptionEntry] {
        &self.options
    }
}

#[async_trait]
impl Filter for SelectFilter {
    fn key(&self) -> &str {
        &self.key
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn component(&self) -> &'static str {
        "select-filter"
    }

    fn apply(&self, query: Query, value: &Value) -> Query {
        query.where_eq_lenient(&self.column, value.clone())
    }

    async fn meta(&self, _db: &Db, current: &Value) -> Result<FilterMeta> {
        Ok(FilterMeta {
            component: self.component().to_string(),
            key: self.key.clone(),
            name: self.name.clone(),
            options: self.options.clone(),
            current_value: current.clone(),
            depends_on: IndexMap::new(),
        })
    }
}
