//! Symbols sub-client — catalog loading, lookup, UDF descriptors.

use crate::client::UdfClient;
use crate::domain::symbol::wire::PairsResponse;
use crate::domain::symbol::{
    CatalogReload, ExchangeConfig, Symbol, SymbolCatalog, SymbolInfo,
};
use crate::error::AdapterError;
use crate::graphql::{query_as, queries, FetchPolicy};
use serde_json::json;
use std::sync::Arc;

/// Sub-client for the symbol catalog.
pub struct Symbols<'a> {
    pub(crate) client: &'a UdfClient,
}

impl<'a> Symbols<'a> {
    /// Fetch all pairs and install them as the catalog.
    ///
    /// Pairs failing validation are skipped. If a load started later has
    /// already been installed, the result is discarded and reported as
    /// [`CatalogReload::Superseded`].
    pub async fn reload(&self) -> Result<CatalogReload, AdapterError> {
        let ticket = self.client.catalog.begin();

        let resp: PairsResponse = query_as(
            self.client.subgraph.as_ref(),
            queries::ALL_PAIRS,
            json!({ "limit": self.client.pairs_limit }),
            FetchPolicy::CacheFirst,
        )
        .await?;

        let mut symbols = Vec::with_capacity(resp.pairs.len());
        for pair in resp.pairs {
            match Symbol::try_from(pair) {
                Ok(symbol) => symbols.push(symbol),
                Err(e) => tracing::warn!("Skipping pair: {}", e),
            }
        }

        let outcome = self.client.catalog.install(ticket, symbols).await;
        match &outcome {
            CatalogReload::Installed { version, symbols } => {
                tracing::info!(version, symbols, "symbol catalog installed");
            }
            CatalogReload::Superseded { version, installed } => {
                tracing::warn!(version, installed, "symbol catalog load superseded");
            }
        }
        Ok(outcome)
    }

    /// Reload the catalog, keeping the previous one on failure.
    ///
    /// The failure is logged, not returned: afterwards an empty catalog may
    /// mean either "no pairs" or "never loaded".
    pub async fn load(&self) {
        if let Err(e) = self.reload().await {
            tracing::warn!("Symbol catalog load failed: {}", e);
        }
    }

    /// Alias of [`load`](Self::load), called before each lookup-driven request.
    pub async fn refresh(&self) {
        self.load().await
    }

    /// The current catalog snapshot.
    pub async fn snapshot(&self) -> Arc<SymbolCatalog> {
        self.client.catalog.snapshot().await
    }

    /// Exact-match membership test. Callers lower-case ids first.
    pub async fn exists(&self, id: &str) -> bool {
        self.snapshot().await.exists(id)
    }

    pub async fn find(&self, id: &str) -> Option<Symbol> {
        self.snapshot().await.find(id).cloned()
    }

    /// Like [`find`](Self::find), failing with `SymbolNotFound`.
    pub async fn get(&self, id: &str) -> Result<Symbol, AdapterError> {
        self.find(id)
            .await
            .ok_or_else(|| AdapterError::SymbolNotFound(id.to_string()))
    }

    /// UDF descriptor for `id`.
    pub async fn info(&self, id: &str) -> Result<SymbolInfo, AdapterError> {
        Ok(self.get(id).await?.info(&self.client.exchange))
    }

    /// Static datafeed configuration.
    pub fn describe(&self) -> ExchangeConfig {
        ExchangeConfig::new(self.client.exchange.clone())
    }
}
