//! HTTP backend serving a greeting and a static member list.
//!
//! Two routes are registered: `GET /` returns plain text and `GET /api`
//! returns the member list as JSON. Everything else falls through to the
//! framework's default 404/405 responses.

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, LogFormat};
pub use error::{Result, ServerError};

/// Creates the Axum application router with all routes.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::hello))
        .route("/api", get(routes::members::list))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn serve<F>(config: &Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    serve_on(listener, shutdown).await
}

/// Serves the application on an already bound listener.
pub async fn serve_on<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    match listener.local_addr() {
        Ok(addr) => tracing::info!(%addr, "starting backend server"),
        Err(err) => tracing::warn!(error = %err, "starting backend server on unknown address"),
    }

    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server shut down gracefully");
    Ok(())
}
