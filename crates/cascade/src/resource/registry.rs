use super::Resource;
use crate::{Error, Result};

use indexmap::IndexMap;
use std::collections::HashSet;

/// The resources served by the endpoints, keyed by resource key.
#[derive(Debug, Default)]
pub struct Registry {
    resources: IndexMap<String, Resource>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource. Fails if the key is taken or if two of the
    /// resource's filters share a key.
    pub fn register(&mut self, resource: Resource) -> Result<&mut Self> {
        if self.resources.contains_key(resource.key()) {
            return Err(Error::duplicate_key("resource", resource.key()));
        }

        let mut seen = HashSet::new();
        for filter in resource.filters() {
            if !seen.insert(filter.key()) {
                tracing::warn!(resource = %resource.key(), filter = %filter.key(), "duplicate filter key");
                return Err(Error::duplicate_key("filter", filter.key()));
            }
        }
        let filters = seen.len();
        drop(seen);

        tracing::debug!(resource = %resource.key(), filters, "registered resource");

        self.resources.insert(resource.key().to_string(), resource);
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Resource> {
        self.resources.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
