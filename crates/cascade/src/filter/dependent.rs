use super::{Constraint, Dependency, Filter};
use crate::{Db, DependencyMeta, FilterMeta, OptionEntry, ParentValues, Query, Result};

use cascade_core::{async_trait, filter::DEPENDENT_FILTER_KEY_PREFIX, stmt::Value};

use std::{fmt, sync::Arc};

type Scope = Arc<dyn Fn(Query) -> Query + Send + Sync>;

/// A dropdown filter whose options can be narrowed by the selections of
/// other filters.
///
/// The filter is bound to `column` of the resource it is registered on; its
/// options are rows of `table`, labelled by `label` (default `name`) and
/// valued by `value` (default `id`).
///
/// ```
/// use cascade::{DependentFilter, Filter};
///
/// let client = DependentFilter::new("Client", "clients", "client_id");
/// let project = DependentFilter::new("Project", "projects", "project_id")
///     .depends_on_foreign_key(client.key(), "client_id");
///
/// assert_eq!(project.key(), "dependent-filter-project_id");
/// ```
#[derive(Clone)]
pub struct DependentFilter {
    key: String,
    name: String,
    table: String,
    column: String,
    label: String,
    value: String,
    scope: Option<Scope>,
    dependencies: Vec<Dependency>,
    limit: Option<u64>,
    extra: Vec<String>,
}

impl DependentFilter {
    /// Options returned when no limit is configured
    pub const DEFAULT_LIMIT: u64 = 1000;

    pub fn new(name: impl Into<String>, table: impl Into<String>, column: impl Into<String>) -> Self {
        let column = column.into();
        assert!(!column.is_empty(), "dependent filter needs a bound column");

        Self {
            key: format!("{DEPENDENT_FILTER_KEY_PREFIX}{column}"),
            name: name.into(),
            table: table.into(),
            column,
            label: "name".to_string(),
            value: "id".to_string(),
            scope: None,
            dependencies: vec![],
            limit: Some(Self::DEFAULT_LIMIT),
            extra: vec![],
        }
    }

    pub fn depends_on(mut self, parent: impl Into<String>, constraint: Constraint) -> Self {
        self.dependencies.push(Dependency {
            parent: parent.into(),
            constraint,
        });
        self
    }

    /// Narrows options to rows whose `column` equals the parent's value.
    pub fn depends_on_foreign_key(
        self,
        parent: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        self.depends_on(parent, Constraint::ForeignKey(column.into()))
    }

    /// Narrows options to rows related through `relation` to a row whose `id`
    /// equals the parent's value.
    pub fn depends_on_relationship(
        self,
        parent: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        self.depends_on(parent, Constraint::Relationship(relation.into()))
    }

    /// Restricts the options query. Replaces any previously set scope.
    pub fn scope(mut self, scope: impl Fn(Query) -> Query + Send + Sync + 'static) -> Self {
        self.scope = Some(Arc::new(scope));
        self
    }

    pub fn label(mut self, column: impl Into<String>) -> Self {
        self.label = column.into();
        self
    }

    pub fn value(mut self, column: impl Into<String>) -> Self {
        self.value = column.into();
        self
    }

    /// Caps the number of options, applied after ordering.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Removes the cap on the number of options.
    pub fn unlimited(mut self) -> Self {
        self.limit = None;
        self
    }

    /// Projects `column` of the options table into every option.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.extra.push(column.into());
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn option_limit(&self) -> Option<u64> {
        self.limit
    }

    /// Options with no parent selected.
    pub async fn initial_options(&self, db: &Db) -> Result<Vec<OptionEntry>> {
        self.resolve_options(db, &ParentValues::new()).await
    }

    /// Options matching the selected parent values, ordered by label, then value.
    ///
    /// A dependency whose parent has no selection (see
    /// [`ParentValues::selected`]) does not constrain the options.
    pub async fn resolve_options(
        &self,
        db: &Db,
        parents: &ParentValues,
    ) -> Result<Vec<OptionEntry>> {
        self.resolve(db, parents).await.map_err(|err| {
            err.context(cascade_core::err!("resolving options for `{}`", self.key))
        })
    }

    async fn resolve(&self, db: &Db, parents: &ParentValues) -> Result<Vec<OptionEntry>> {
        let mut query = db.query(&self.table)?;

        if let Some(scope) = &self.scope {
            query = scope(query);
        }

        for dependency in &self.dependencies {
            let Some(value) = parents.selected(&dependency.parent) else {
                tracing::trace!(filter = %self.key, parent = %dependency.parent, "no parent selection");
                continue;
            };

            query = match &dependency.constraint {
                Constraint::ForeignKey(column) => query.where_eq_lenient(column, value.clone()),
                Constraint::Relationship(relation) => {
                    query.where_has(relation, |related| related.where_eq_lenient("id", value.clone()))
                }
            };
        }

        // Value breaks label ties so a limit always keeps the same rows
        query = query.order_by_asc(&self.label).order_by_asc(&self.value);

        if let Some(limit) = self.limit {
            query = query.limit(limit);
        }

        let columns = [&self.label, &self.value].into_iter().chain(&self.extra);
        let records = db.all(query.select(columns)).await?;

        tracing::debug!(filter = %self.key, options = records.len(), "resolved options");

        Ok(records
            .into_iter()
            .map(|mut record| {
                let value = record.take(&self.value).unwrap_or_default();
                let label = match record.take(&self.label) {
                    Some(Value::String(label)) => label,
                    Some(Value::Null) | None => value.to_string(),
                    Some(label) => label.to_string(),
                };

                OptionEntry {
                    label,
                    value,
                    extra: record.into_fields(),
                }
            })
            .collect())
    }
}

#[async_trait]
impl Filter for DependentFilter {
    fn key(&self) -> &str {
        &self.key
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn component(&self) -> &'static str {
        "dependent-select-filter"
    }

    fn apply(&self, query: Query, value: &Value) -> Query {
        query.where_eq_lenient(&self.column, value.clone())
    }

    async fn meta(&self, db: &Db, current: &Value) -> Result<FilterMeta> {
        Ok(FilterMeta {
            component: self.component().to_string(),
            key: self.key.clone(),
            name: self.name.clone(),
            options: self.initial_options(db).await?,
            current_value: current.clone(),
            depends_on: self
                .dependencies
                .iter()
                .map(|dependency| {
                    (
                        dependency.parent.clone(),
                        DependencyMeta::from(&dependency.constraint),
                    )
                })
                .collect(),
        })
    }

    fn as_dependent(&self) -> Option<&DependentFilter> {
        Some(self)
    }
}

impl fmt::Debug for DependentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependentFilter")
            .field("key", &self.key)
            .field("table", &self.table)
            .field("label", &self.label)
            .field("value", &self.value)
            .field("scoped", &self.scope.is_some())
            .field("dependencies", &self.dependencies)
            .field("limit", &self.limit)
            .field("extra", &self.extra)
            .finish()
    }
}
