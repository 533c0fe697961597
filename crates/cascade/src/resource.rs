mod page;
pub use page::{IndexParams, Page};

mod registry;
pub use registry::Registry;

use crate::{Db, DependentFilter, Filter, FilterMeta, ParentValues, Result};

use cascade_core::stmt::Value;

use heck::ToKebabCase;

/// A listable table with the filters that narrow its listing.
#[derive(Debug)]
pub struct Resource {
    key: String,
    table: String,
    per_page: u64,
    filters: Vec<Box<dyn Filter>>,
}

impl Resource {
    pub const DEFAULT_PER_PAGE: u64 = 25;

    /// Largest page a listing request may ask for
    pub const MAX_PER_PAGE: u64 = 500;

    /// Last page number whose row offset still fits the database's signed
    /// 64-bit integers
    pub const MAX_PAGE: u64 = i64::MAX as u64 / Self::MAX_PER_PAGE;

    /// A resource listing `table`, keyed by the table name in kebab case.
    pub fn new(table: impl Into<String>) -> Self {
        let table = table.into();

        Self {
            key: table.to_kebab_case(),
            table,
            per_page: Self::DEFAULT_PER_PAGE,
            filters: vec![],
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn per_page(mut self, per_page: u64) -> Self {
        self.per_page = per_page.clamp(1, Self::MAX_PER_PAGE);
        self
    }

    pub fn filter(mut self, filter: impl Filter) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn filters(&self) -> impl Iterator<Item = &dyn Filter> {
        self.filters.iter().map(|filter| &**filter)
    }

    pub fn find_filter(&self, key: &str) -> Option<&dyn Filter> {
        self.filters().find(|filter| filter.key() == key)
    }

    /// Finds a dependent filter by key; plain filters never match.
    pub fn dependent_filter(&self, key: &str) -> Option<&DependentFilter> {
        self.find_filter(key)?.as_dependent()
    }

    /// Describes every filter, in registration order.
    pub async fn filter_meta(&self, db: &Db, selected: &ParentValues) -> Result<Vec<FilterMeta>> {
        let mut ret = Vec::with_capacity(self.filters.len());

        for filter in &self.filters {
            let current = selected.get(filter.key()).cloned().unwrap_or(Value::Null);
            ret.push(filter.meta(db, &current).await?);
        }

        Ok(ret)
    }

    /// Lists one page of rows, narrowed by every filter with a selection and
    /// ordered by primary key.
    pub async fn index(&self, db: &Db, params: &IndexParams) -> Result<Page> {
        let per_page = params
            .per_page
            .unwrap_or(self.per_page)
            .clamp(1, Self::MAX_PER_PAGE);
        let page = params.page.clamp(1, Self::MAX_PAGE);

        let mut query = db.query(&self.table)?;

        for filter in &self.filters {
            if let Some(value) = params.filters.selected(filter.key()) {
                query = filter.apply(query, value);
            }
        }

        let pk = query.table().primary_key_column().map(|pk| pk.name.clone());
        if let Some(pk) = pk {
            query = query.order_by_asc(&pk);
        }

        // One extra row tells whether another page follows
        query = query.limit(per_page + 1).offset((page - 1) * per_page);

        let mut data = db.all(query).await?;
        let has_more = data.len() as u64 > per_page;
        data.truncate(per_page as usize);

        Ok(Page {
            data,
            page,
            per_page,
            has_more,
        })
    }
}
