use crate::{FilterMeta, OptionEntry, OptionsRequest, OptionsSource, ParentValues, Value};

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectState {
    /// Not mounted yet
    Idle,

    /// An options request is in flight
    Loading,

    /// Options are up to date, or the last request failed and the previous
    /// options were kept
    Loaded,
}

/// What a renderer needs to draw the dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: SelectState,
    pub options: Vec<OptionEntry>,
    pub selected: Option<Value>,
}

/// Outcome of an options refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The options were replaced. `cleared` is set when the selection was
    /// dropped because the new options no longer contain it.
    Applied { cleared: bool },

    /// A newer refresh started before this one completed
    Superseded,

    /// The request failed and the previous options were kept
    Failed,

    /// Nothing was fetched
    Skipped,
}

/// One dependent dropdown.
///
/// Handles are cheap to clone and share the same state. Each refresh
/// cancels the one still in flight, so a slow response to an older parent
/// selection never replaces the options for a newer one.
#[derive(Clone)]
pub struct DependentSelect {
    inner: Arc<Inner>,
}

struct Inner {
    resource: String,
    key: String,
    parents: Vec<String>,
    source: Arc<dyn OptionsSource>,
    snapshot: watch::Sender<Snapshot>,
    control: Mutex<Control>,
}

struct Control {
    parent_values: ParentValues,
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl DependentSelect {
    pub fn new<I, S>(
        resource: impl Into<String>,
        key: impl Into<String>,
        parents: I,
        source: Arc<dyn OptionsSource>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parents: Vec<String> = parents.into_iter().map(Into::into).collect();
        let parent_values = parents.iter().map(|key| (key.clone(), Value::Null)).collect();

        let (snapshot, _) = watch::channel(Snapshot {
            state: SelectState::Idle,
            options: vec![],
            selected: None,
        });

        Self {
            inner: Arc::new(Inner {
                resource: resource.into(),
                key: key.into(),
                parents,
                source,
                snapshot,
                control: Mutex::new(Control {
                    parent_values,
                    generation: 0,
                    in_flight: None,
                }),
            }),
        }
    }

    /// Builds a select from the filter metadata served by the resource's
    /// filters endpoint, starting from its initial options and selection.
    pub fn from_meta(
        resource: impl Into<String>,
        meta: &FilterMeta,
        source: Arc<dyn OptionsSource>,
    ) -> Self {
        let select = Self::new(resource, &meta.key, meta.depends_on.keys(), source);

        select.inner.snapshot.send_modify(|snapshot| {
            snapshot.options = meta.options.clone();
            snapshot.selected = selection(&meta.current_value);
        });

        select
    }

    pub fn key(&self) -> &str {
        &self.inner.key
    }

    pub fn resource(&self) -> &str {
        &self.inner.resource
    }

    /// Keys of the filters whose selection narrows this one's options
    pub fn parents(&self) -> &[String] {
        &self.inner.parents
    }

    pub fn depends_on(&self, parent: &str) -> bool {
        self.inner.parents.iter().any(|key| key == parent)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.snapshot.borrow().clone()
    }

    pub fn selected(&self) -> Option<Value> {
        self.inner.snapshot.borrow().selected.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.snapshot.subscribe()
    }

    /// Fetches the options once if the select has no parents. A select with
    /// parents keeps its initial options until a parent changes.
    pub async fn mount(&self) -> Refresh {
        if self.inner.parents.is_empty() {
            return self.refresh().await;
        }

        self.inner
            .snapshot
            .send_modify(|snapshot| snapshot.state = SelectState::Loaded);
        Refresh::Skipped
    }

    /// Records the user's selection. Blank values clear it.
    pub fn select(&self, value: impl Into<Value>) {
        let selected = selection(&value.into());
        self.inner
            .snapshot
            .send_modify(|snapshot| snapshot.selected = selected);
    }

    /// Records a parent's new selection and refetches the options. Changes
    /// to filters that are not parents of this one are skipped. A blank
    /// value still refetches.
    pub async fn parent_changed(&self, parent: &str, value: impl Into<Value>) -> Refresh {
        if !self.depends_on(parent) {
            return Refresh::Skipped;
        }

        self.control().parent_values.insert(parent, value);
        self.refresh().await
    }

    /// Refetches the options for the current parent values.
    pub async fn refresh(&self) -> Refresh {
        let (token, generation, request) = {
            let mut control = self.control();

            if let Some(superseded) = control.in_flight.take() {
                superseded.cancel();
            }

            control.generation += 1;

            let token = CancellationToken::new();
            control.in_flight = Some(token.clone());

            let request = OptionsRequest {
                resource: self.inner.resource.clone(),
                filter: self.inner.key.clone(),
                parents: control.parent_values.clone(),
            };

            (token, control.generation, request)
        };

        self.inner
            .snapshot
            .send_modify(|snapshot| snapshot.state = SelectState::Loading);

        let result = tokio::select! {
            _ = token.cancelled() => return Refresh::Superseded,
            result = self.inner.source.fetch(&request) => result,
        };

        let mut control = self.control();
        if control.generation != generation {
            return Refresh::Superseded;
        }
        control.in_flight = None;

        match result {
            Ok(options) => {
                let mut cleared = false;

                self.inner.snapshot.send_modify(|snapshot| {
                    if let Some(selected) = &snapshot.selected {
                        if !contains(&options, selected) {
                            snapshot.selected = None;
                            cleared = true;
                        }
                    }

                    snapshot.options = options;
                    snapshot.state = SelectState::Loaded;
                });

                tracing::debug!(filter = %self.inner.key, cleared, "options refreshed");
                Refresh::Applied { cleared }
            }
            Err(err) => {
                tracing::warn!(filter = %self.inner.key, error = %err, "failed to fetch options");

                self.inner
                    .snapshot
                    .send_modify(|snapshot| snapshot.state = SelectState::Loaded);
                Refresh::Failed
            }
        }
    }

    fn control(&self) -> MutexGuard<'_, Control> {
        self.inner
            .control
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for DependentSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependentSelect")
            .field("resource", &self.inner.resource)
            .field("key", &self.inner.key)
            .field("parents", &self.inner.parents)
            .field("snapshot", &*self.inner.snapshot.borrow())
            .finish()
    }
}

fn selection(value: &Value) -> Option<Value> {
    (!value.is_blank()).then(|| value.clone())
}

// Selections coming from the query string are strings while option values
// keep their column type, so both compare by their text as well.
fn contains(options: &[OptionEntry], selected: &Value) -> bool {
    let text = selected.to_string();
    options
        .iter()
        .any(|option| option.value == *selected || option.value.to_string() == text)
}
