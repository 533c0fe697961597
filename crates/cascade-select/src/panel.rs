use crate::{DependentSelect, FilterMeta, OptionsSource, Refresh, Value};

use indexmap::IndexMap;
use std::sync::Arc;
use tokio::task::JoinSet;

/// The dependent selects of one resource, keyed by filter key.
#[derive(Debug, Default)]
pub struct FilterPanel {
    selects: IndexMap<String, DependentSelect>,
}

impl FilterPanel {
    pub const COMPONENT: &'static str = "dependent-select-filter";

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a select for every dependent filter in `filters`. Other
    /// filters are left to the caller but can still be passed to
    /// [`FilterPanel::select`] as parents.
    pub fn from_meta(
        resource: &str,
        filters: &[FilterMeta],
        source: Arc<dyn OptionsSource>,
    ) -> Self {
        let mut panel = Self::new();

        for meta in filters.iter().filter(|meta| meta.component == Self::COMPONENT) {
            panel.add(DependentSelect::from_meta(resource, meta, source.clone()));
        }

        panel
    }

    pub fn add(&mut self, select: DependentSelect) -> &mut Self {
        self.selects.insert(select.key().to_string(), select);
        self
    }

    pub fn get(&self, key: &str) -> Option<&DependentSelect> {
        self.selects.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DependentSelect> {
        self.selects.values()
    }

    pub fn len(&self) -> usize {
        self.selects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selects.is_empty()
    }

    /// Mounts every select concurrently.
    pub async fn mount(&self) {
        let mut tasks = JoinSet::new();

        for select in self.selects.values() {
            let select = select.clone();
            tasks.spawn(async move { select.mount().await });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(err) = joined {
                tracing::warn!(error = %err, "mount task failed");
            }
        }
    }

    /// Records a selection on filter `key` and refreshes every select that
    /// depends on it. Children of one parent refresh concurrently, each
    /// with its own request. A child whose selection is dropped by the
    /// refresh is passed on to its own dependents as cleared.
    pub async fn select(&self, key: &str, value: impl Into<Value>) {
        let value = value.into();

        if let Some(select) = self.selects.get(key) {
            select.select(value.clone());
        }

        let mut changed = vec![(key.to_string(), value)];

        while let Some((parent, value)) = changed.pop() {
            let mut tasks = JoinSet::new();

            for select in self.selects.values().filter(|select| select.depends_on(&parent)) {
                let select = select.clone();
                let parent = parent.clone();
                let value = value.clone();

                tasks.spawn(async move {
                    let refresh = select.parent_changed(&parent, value).await;
                    (select.key().to_string(), refresh)
                });
            }

            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok((child, Refresh::Applied { cleared: true })) => {
                        changed.push((child, Value::Null))
                    }
                    Ok(_) => {}
                    Err(err) => tracing::warn!(error = %err, "options refresh task failed"),
                }
            }
        }
    }
}
