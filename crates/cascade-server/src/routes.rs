mod options;
mod resources;

use crate::AppState;

use axum::{routing::get, Router};

pub(crate) fn routes() -> Router<AppState> {
    Router::new()
        .route("/dependent-filter-options", get(options::index))
        .route("/resources/:resource", get(resources::index))
        .route("/resources/:resource/filters", get(resources::filters))
}
