use crate::{ApiError, AppState};

use cascade::{Filter, OptionEntry, ParentValues};

use axum::{
    extract::{Query, State},
    Json,
};

/// `GET /dependent-filter-options?resource=..&filter=..&<parent>=<value>..`
///
/// Every parameter other than `resource` and `filter` is a parent value.
pub(crate) async fn index(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<OptionEntry>>, ApiError> {
    let mut resource = None;
    let mut filter = None;
    let mut parents = vec![];

    for (key, value) in params {
        match key.as_str() {
            "resource" => resource = Some(value),
            "filter" => filter = Some(value),
            _ => parents.push((key, value)),
        }
    }

    let resource = resource
        .and_then(|key| state.registry.get(&key))
        .ok_or(ApiError::NotFound)?;

    let filter = filter
        .and_then(|key| resource.dependent_filter(&key))
        .ok_or(ApiError::NotFound)?;

    let parents = ParentValues::from_query(parents);
    tracing::debug!(resource = %resource.key(), filter = %filter.key(), parents = parents.len(), "resolving options");

    let options = filter.resolve_options(&state.db, &parents).await?;
    Ok(Json(options))
}
