//! HTTP front end: the UDF datafeed routes over axum.

pub mod config;
pub mod envelope;
pub mod routes;

pub use config::{Config, ConfigError};
pub use envelope::ApiError;

use crate::client::UdfClient;
use crate::error::AdapterError;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] AdapterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared handler state.
pub struct AppState {
    pub client: UdfClient,
    /// Bars requested when `countback` is absent.
    pub default_countback: u32,
}

impl AppState {
    pub fn new(client: UdfClient, default_countback: u32) -> Self {
        Self {
            client,
            default_countback,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/datafeeds", get(routes::index))
        .route("/datafeeds/time", get(routes::time))
        .route("/datafeeds/config", get(routes::config))
        .route("/datafeeds/symbols", get(routes::symbols))
        .route("/datafeeds/history", get(routes::history))
        .route("/datafeeds/transactions", get(routes::transactions))
        .route("/datafeeds/pair-info", get(routes::pair_info))
        .route("/health", get(routes::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Build the client from `config`, load the catalog, and serve until Ctrl-C.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let client = UdfClient::builder()
        .subgraph_url(&config.graph_client)
        .retry(config.retry.clone())
        .cache_ttl(config.cache_ttl)
        .pairs_limit(config.pairs_limit)
        .exchange(config.exchange.clone())
        .build()?;

    client.symbols().load().await;
    let symbols = client.symbols().snapshot().await.len();
    tracing::info!(symbols, subgraph = %config.graph_client, "symbol catalog ready");

    let app = router(Arc::new(AppState::new(client, config.default_countback)));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("UDF adapter listening on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("UDF adapter stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
