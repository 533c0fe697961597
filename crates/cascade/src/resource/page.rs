use crate::{ParentValues, Record};

use serde::Serialize;

/// What to list: a page number (from 1), a page size, and filter selections
/// keyed by filter key.
#[derive(Debug, Clone, Default)]
pub struct IndexParams {
    pub page: u64,
    pub per_page: Option<u64>,
    pub filters: ParentValues,
}

/// One page of a resource listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub data: Vec<Record>,
    pub page: u64,
    pub per_page: u64,
    pub has_more: bool,
}
