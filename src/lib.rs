//! # UDF Adapter
//!
//! Serves the charting widget's Universal Data Feed (UDF) contract from an AMM
//! subgraph: a symbol catalog built from on-chain pairs, OHLCV bars with exact
//! decimal price normalization, simplified swap transactions and pair lookup.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Newtypes, decimal scaling, domain models (always available)
//! 2. **Subgraph** — The `SubgraphQuery` seam, GraphQL documents, `SubgraphHttp` with retry and TTL cache
//! 3. **High-Level Client** — `UdfClient` with nested sub-clients and the shared symbol catalog
//! 4. **Server** — axum routes, response envelope, environment config (`server` feature)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use udf_adapter::prelude::*;
//!
//! let client = UdfClient::builder()
//!     .subgraph_url("https://graph.example.org/subgraphs/name/amm")
//!     .build()?;
//!
//! client.symbols().load().await;
//! let bars = client.history().get("tka-tkb", from, to, "60", 1000).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and decimal arithmetic.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified adapter error types.
pub mod error;

/// Default limits and exchange metadata.
pub mod network;

// ── Layer 2: Subgraph ────────────────────────────────────────────────────────

/// GraphQL transport, documents, retry policies.
pub mod graphql;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `UdfClient` — the primary entry point.
pub mod client;

// ── Layer 4: Server ──────────────────────────────────────────────────────────

/// HTTP front end for the chart.
#[cfg(feature = "server")]
pub mod server;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{PairDecimals, Resolution, SymbolId, TokenId};

    // Domain types
    pub use crate::domain::history::{Bar, HistoryResponse, RawCandle};
    pub use crate::domain::pair::{PairInfo, PairInfoResponse};
    pub use crate::domain::symbol::{
        CatalogReload, ExchangeConfig, ExchangeDescriptor, Symbol, SymbolCatalog, SymbolInfo,
    };
    pub use crate::domain::transaction::Transaction;

    // Subgraph
    pub use crate::graphql::{FetchPolicy, RetryConfig, RetryPolicy, SubgraphQuery};
    #[cfg(any(test, feature = "test-util"))]
    pub use crate::graphql::MockSubgraph;
    #[cfg(feature = "http")]
    pub use crate::graphql::SubgraphHttp;

    // Client
    pub use crate::client::{UdfClient, UdfClientBuilder};

    // Errors
    pub use crate::error::{AdapterError, GraphqlError};
    pub use crate::shared::ScalingError;
}
