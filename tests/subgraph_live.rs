//! Integration tests against a live AMM subgraph.
//!
//! All tests are `#[ignore]` because they require network access and a
//! `GRAPH_CLIENT` endpoint (read from the environment or `.env`).
//!
//! Run with:
//! ```bash
//! cargo test --test subgraph_live -- --ignored
//! ```

#![cfg(feature = "server")]

use udf_adapter::prelude::*;

fn live_client() -> UdfClient {
    dotenvy::dotenv().ok();
    let url = std::env::var("GRAPH_CLIENT").expect("GRAPH_CLIENT must be set");
    UdfClient::builder()
        .subgraph_url(&url)
        .retry(RetryPolicy::Idempotent)
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore]
async fn test_live_catalog_loads() {
    let client = live_client();
    let outcome = client.symbols().reload().await.expect("allPairs should succeed");
    assert!(matches!(outcome, CatalogReload::Installed { .. }));
}

#[tokio::test]
#[ignore]
async fn test_live_history_for_first_symbol() {
    let client = live_client();
    client.symbols().load().await;
    let catalog = client.symbols().snapshot().await;
    let Some(symbol) = catalog.symbols().first() else {
        return;
    };

    let now = chrono::Utc::now().timestamp();
    let history = client
        .history()
        .get(symbol.id.as_str(), now - 7 * 86_400, now, "60", 100)
        .await
        .expect("candles should succeed");
    let times: Vec<u64> = history.bars().iter().map(|b| b.time).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
}
