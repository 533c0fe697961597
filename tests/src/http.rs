//! Drives the router in-process.

use cascade::{Db, Registry};
use cascade_server::{AppState, Config};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

/// The router over `db` and the fixture registry, mounted under the default
/// prefix.
pub fn app(db: Db) -> Router {
    app_with(db, crate::fixtures::registry())
}

pub fn app_with(db: Db, registry: Registry) -> Router {
    cascade_server::router(Config::DEFAULT_PREFIX, AppState::new(db, registry))
}

/// Issues `GET {prefix}{path}` and decodes the JSON body.
pub async fn get(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let uri = format!("{}{path}", Config::DEFAULT_PREFIX);
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}
