//! High-level client — `UdfClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared catalog handle, and accessor methods.

use crate::domain::history::client::History;
use crate::domain::pair::client::Pairs;
use crate::domain::symbol::client::Symbols;
use crate::domain::symbol::{CatalogHandle, ExchangeDescriptor};
use crate::domain::transaction::client::Transactions;
use crate::error::AdapterError;
use crate::graphql::{RetryPolicy, SubgraphQuery};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::pair::client::Pairs as PairsClient;
pub use crate::domain::symbol::client::Symbols as SymbolsClient;
pub use crate::domain::transaction::client::Transactions as TransactionsClient;

/// The primary entry point of the adapter.
///
/// Provides nested sub-client accessors for each domain:
/// `client.symbols()`, `client.history()`, etc. Clones share the catalog.
#[derive(Clone)]
pub struct UdfClient {
    pub(crate) subgraph: Arc<dyn SubgraphQuery>,
    pub(crate) catalog: Arc<CatalogHandle>,
    pub(crate) exchange: ExchangeDescriptor,
    pub(crate) pairs_limit: u32,
}

impl UdfClient {
    pub fn builder() -> UdfClientBuilder {
        UdfClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn symbols(&self) -> Symbols<'_> {
        Symbols { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    pub fn pairs(&self) -> Pairs<'_> {
        Pairs { client: self }
    }

    pub fn exchange(&self) -> &ExchangeDescriptor {
        &self.exchange
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct UdfClientBuilder {
    subgraph: Option<Arc<dyn SubgraphQuery>>,
    subgraph_url: Option<String>,
    retry: RetryPolicy,
    cache_ttl: Duration,
    pairs_limit: u32,
    exchange: ExchangeDescriptor,
}

impl Default for UdfClientBuilder {
    fn default() -> Self {
        Self {
            subgraph: None,
            subgraph_url: None,
            retry: RetryPolicy::None,
            cache_ttl: Duration::from_secs(crate::network::DEFAULT_CACHE_TTL_SECS),
            pairs_limit: crate::network::DEFAULT_PAIRS_LIMIT,
            exchange: ExchangeDescriptor::default(),
        }
    }
}

impl UdfClientBuilder {
    /// Query the subgraph at `url` over HTTP.
    pub fn subgraph_url(mut self, url: &str) -> Self {
        self.subgraph_url = Some(url.to_string());
        self
    }

    /// Use a ready-made query function. Takes precedence over `subgraph_url`.
    pub fn subgraph(mut self, subgraph: Arc<dyn SubgraphQuery>) -> Self {
        self.subgraph = Some(subgraph);
        self
    }

    /// Retry policy for HTTP subgraph requests.
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// TTL of cache-first HTTP responses.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn pairs_limit(mut self, limit: u32) -> Self {
        self.pairs_limit = limit;
        self
    }

    /// Exchange advertised in `config` and symbol descriptors.
    pub fn exchange(mut self, exchange: ExchangeDescriptor) -> Self {
        self.exchange = exchange;
        self
    }

    pub fn build(self) -> Result<UdfClient, AdapterError> {
        let subgraph: Arc<dyn SubgraphQuery> = match (self.subgraph, self.subgraph_url) {
            (Some(subgraph), _) => subgraph,
            #[cfg(feature = "http")]
            (None, Some(url)) => Arc::new(
                crate::graphql::SubgraphHttp::new(&url)?
                    .with_retry(self.retry)
                    .with_cache_ttl(self.cache_ttl),
            ),
            #[cfg(not(feature = "http"))]
            (None, Some(_)) => {
                return Err(AdapterError::Configuration(
                    "subgraph_url requires the `http` feature".to_string(),
                ))
            }
            (None, None) => {
                return Err(AdapterError::Configuration(
                    "no subgraph configured".to_string(),
                ))
            }
        };

        if self.pairs_limit == 0 {
            return Err(AdapterError::Configuration(
                "pairs limit must be positive".to_string(),
            ));
        }

        Ok(UdfClient {
            subgraph,
            catalog: Arc::new(CatalogHandle::new()),
            exchange: self.exchange,
            pairs_limit: self.pairs_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::MockSubgraph;

    #[test]
    fn test_build_requires_subgraph() {
        let err = UdfClient::builder().build().err().unwrap();
        assert!(matches!(err, AdapterError::Configuration(_)));
    }

    #[test]
    fn test_build_rejects_zero_pairs_limit() {
        let result = UdfClient::builder()
            .subgraph(Arc::new(MockSubgraph::new()))
            .pairs_limit(0)
            .build();
        assert!(matches!(result, Err(AdapterError::Configuration(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_build_from_url() {
        let client = UdfClient::builder()
            .subgraph_url("http://localhost:8000/subgraphs/name/amm")
            .build();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_catalog() {
        let mock = Arc::new(MockSubgraph::new().with_response(
            "allPairs",
            serde_json::json!({ "pairs": [{ "id": "a-b", "token0": "a", "token1": "b" }] }),
        ));
        let client = UdfClient::builder().subgraph(mock).build().unwrap();
        let other = client.clone();
        client.symbols().load().await;
        assert!(other.symbols().exists("a-b").await);
    }
}
