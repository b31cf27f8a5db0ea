//! End-to-end behavior of `UdfClient` against a canned subgraph.

use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use serde_json::json;

use udf_adapter::prelude::*;

fn pairs() -> serde_json::Value {
    json!({ "pairs": [
        { "id": "tka-tkb", "token0": "tka", "token1": "tkb" },
        { "id": "tkc-tkd", "token0": "tkc", "token1": "tkd" },
    ]})
}

async fn loaded(mock: MockSubgraph) -> (Arc<MockSubgraph>, UdfClient) {
    let mock = Arc::new(mock.with_response("allPairs", pairs()));
    let client = UdfClient::builder().subgraph(mock.clone()).build().unwrap();
    client.symbols().load().await;
    (mock, client)
}

#[tokio::test]
async fn test_reciprocal_scenario() {
    let (_, client) = loaded(MockSubgraph::new().with_response(
        "candles",
        json!({ "candles": [{
            "time": 100, "open": "2", "close": "2", "high": "2", "low": "2",
            "token1TotalAmount": "0"
        }]}),
    ))
    .await;

    let history = client.history().get("tka-tkb", 0, 200, "60", 1000).await.unwrap();
    let bars = history.bars();
    assert_eq!(bars.len(), 1);

    let half = BigDecimal::from_str("0.5").unwrap();
    assert_eq!(bars[0].time, 100);
    assert_eq!(bars[0].o, half);
    assert_eq!(bars[0].h, half);
    assert_eq!(bars[0].l, half);
    assert_eq!(bars[0].c, half);
}

#[tokio::test]
async fn test_no_data_serializes_without_data_key() {
    let (_, client) =
        loaded(MockSubgraph::new().with_response("candles", json!({ "candles": [] }))).await;

    let history = client.history().get("tkc-tkd", 0, 200, "15", 10).await.unwrap();
    let value = serde_json::to_value(&history).unwrap();
    assert_eq!(value, json!({ "s": "no_data" }));
    assert!(value.get("data").is_none());
}

#[tokio::test]
async fn test_invalid_resolution_before_any_fetch() {
    let (mock, client) = loaded(MockSubgraph::new()).await;

    let err = client.history().get("tka-tkb", 0, 200, "abc", 10).await.unwrap_err();
    assert!(matches!(err, AdapterError::InvalidResolution(_)));
    assert!(mock.calls_for("candles").is_empty());
}

#[tokio::test]
async fn test_day_resolution_queries_minutes() {
    let (mock, client) =
        loaded(MockSubgraph::new().with_response("candles", json!({ "candles": [] }))).await;

    client.history().get("tka-tkb", 0, 200, "7D", 10).await.unwrap();
    assert_eq!(mock.calls_for("candles")[0].variables["period"], json!(10080));
}

#[tokio::test]
async fn test_transaction_buy_classification() {
    let (_, client) = loaded(MockSubgraph::new().with_response(
        "transactions",
        json!({ "transactions": [{
            "id": "0xfeed", "timestamp": "1700000000",
            "swaps": [{ "amount0In": "0", "amount0Out": "12.5", "amount1In": "25", "amount1Out": "0" }]
        }]}),
    ))
    .await;

    let txs = client.transactions().list("tka-tkb", 0, 10).await.unwrap();
    assert_eq!(
        serde_json::to_value(&txs).unwrap(),
        json!([{
            "timestamp": 1700000000u64, "txHash": "0xfeed", "isBuy": true,
            "baseAmount": "12.5", "quoteAmount": "25"
        }])
    );
}

#[tokio::test]
async fn test_pair_address_symmetric() {
    let mock = Arc::new(MockSubgraph::new().with_response(
        "pairsByTokens",
        json!({ "pairs": [{ "id": "0xpool", "token0": "tka", "token1": "tkb" }] }),
    ));
    let client = UdfClient::builder().subgraph(mock).build().unwrap();

    let ab = client.pairs().address("tka", "tkb").await.unwrap();
    let ba = client.pairs().address("tkb", "tka").await.unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab.pair_info.pair_address, "0xpool");
}

#[tokio::test]
async fn test_catalog_load_failure_is_swallowed() {
    let mock = Arc::new(MockSubgraph::new().with_error("allPairs", "indexer unavailable"));
    let client = UdfClient::builder().subgraph(mock).build().unwrap();

    client.symbols().load().await;
    assert!(client.symbols().snapshot().await.is_empty());

    let err = client.history().get("tka-tkb", 0, 1, "60", 1).await.unwrap_err();
    assert!(matches!(err, AdapterError::SymbolNotFound(_)));
}

#[tokio::test]
async fn test_concurrent_reloads_never_regress() {
    let (_, client) = loaded(MockSubgraph::new()).await;

    let (sa, sb) = (client.symbols(), client.symbols());
    let (a, b) = tokio::join!(sa.reload(), sb.reload());
    let outcomes = [a.unwrap(), b.unwrap()];
    let installed = client.symbols().snapshot().await.version;

    let newest = outcomes
        .iter()
        .map(|o| match o {
            CatalogReload::Installed { version, .. } => *version,
            CatalogReload::Superseded { installed, .. } => *installed,
        })
        .max()
        .unwrap();
    assert_eq!(installed, newest);
}
