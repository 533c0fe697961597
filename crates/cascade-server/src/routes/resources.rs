use crate::{ApiError, AppState};

use cascade::{resource::IndexParams, FilterMeta, Page, ParentValues, Resource};

use axum::{
    extract::{Path, Query, State},
    Json,
};

/// `GET /resources/{resource}/filters`. Query parameters are the current
/// selections, keyed by filter key.
pub(crate) async fn filters(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<FilterMeta>>, ApiError> {
    let resource = state.registry.get(&resource).ok_or(ApiError::NotFound)?;
    let selected = ParentValues::from_query(params);

    Ok(Json(resource.filter_meta(&state.db, &selected).await?))
}

/// `GET /resources/{resource}?page=..&perPage=..&<filter>=<value>..`
pub(crate) async fn index(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Page>, ApiError> {
    let resource = state.registry.get(&resource).ok_or(ApiError::NotFound)?;

    let mut index = IndexParams::default();
    let mut filters = vec![];

    for (key, value) in params {
        match key.as_str() {
            "page" => index.page = parse_page(&value)?,
            "perPage" => index.per_page = Some(parse_number(&key, &value)?),
            _ => filters.push((key, value)),
        }
    }
    index.filters = ParentValues::from_query(filters);

    Ok(Json(resource.index(&state.db, &index).await?))
}

fn parse_number(key: &str, value: &str) -> Result<u64, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("`{key}` must be a positive integer")))
}

fn parse_page(value: &str) -> Result<u64, ApiError> {
    let page = parse_number("page", value)?;

    if page > Resource::MAX_PAGE {
        return Err(ApiError::BadRequest(format!(
            "`page` must be at most {}",
            Resource::MAX_PAGE
        )));
    }

    Ok(page)
}
