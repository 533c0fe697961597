mod config;
pub use config::Config;

mod error;
pub use error::ApiError;

mod routes;

use cascade::{Db, Registry};

use axum::Router;
use std::{future::Future, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Db,
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(db: Db, registry: Registry) -> Self {
        Self {
            db,
            registry: Arc::new(registry),
        }
    }
}

/// Builds the router with every endpoint mounted under `prefix`.
pub fn router(prefix: &str, state: AppState) -> Router {
    let routes = routes::routes();

    let app = match prefix.trim_end_matches('/') {
        "" => Router::new().merge(routes),
        prefix => Router::new().nest(prefix, routes),
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Serves until `shutdown` completes.
pub async fn serve(
    config: &Config,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.listen()).await?;
    serve_on(listener, config.prefix(), state, shutdown).await
}

/// Serves on an already bound listener.
pub async fn serve_on(
    listener: TcpListener,
    prefix: &str,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    tracing::info!(addr = %listener.local_addr()?, prefix, "listening");

    axum::serve(listener, router(prefix, state))
        .with_graceful_shutdown(shutdown)
        .await
}
