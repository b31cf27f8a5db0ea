//! Subgraph transport layer.
//!
//! The core only sees [`SubgraphQuery`]: a function from a GraphQL document plus
//! variables to the response's `data` object. `SubgraphHttp` is the production
//! implementation; `MockSubgraph` serves canned responses in tests (`test-util`).

#[cfg(feature = "http")]
pub mod client;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;
pub mod queries;
pub mod retry;

#[cfg(feature = "http")]
pub use client::SubgraphHttp;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockSubgraph;
pub use retry::{RetryConfig, RetryPolicy};

use crate::error::GraphqlError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a query may be answered from a previously fetched response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Serve a cached response while it is younger than the cache TTL.
    CacheFirst,
    /// Always go to the network.
    #[default]
    NetworkOnly,
}

/// The query-function seam between the core and the subgraph.
#[async_trait]
pub trait SubgraphQuery: Send + Sync {
    /// Execute `document` with `variables` and return the response's `data` object.
    async fn query(
        &self,
        document: &str,
        variables: Value,
        policy: FetchPolicy,
    ) -> Result<Value, GraphqlError>;
}

/// Execute a query and decode `data` into a wire type.
pub async fn query_as<T: DeserializeOwned>(
    subgraph: &dyn SubgraphQuery,
    document: &str,
    variables: Value,
    policy: FetchPolicy,
) -> Result<T, GraphqlError> {
    let data = subgraph.query(document, variables, policy).await?;
    serde_json::from_value(data).map_err(|e| {
        GraphqlError::Malformed(format!(
            "{} response: {}",
            queries::operation_name(document),
            e
        ))
    })
}

/// Request body sent to the subgraph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: &'a Value,
}

/// Response envelope returned by the subgraph.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorMessage>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlErrorMessage {
    pub message: String,
}

impl GraphqlResponse {
    /// Split the envelope: any reported error wins over partial data.
    pub fn into_data(self) -> Result<Value, GraphqlError> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            return Err(GraphqlError::Query(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        match self.data {
            Some(Value::Null) | None => Err(GraphqlError::MissingData),
            Some(data) => Ok(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_data_returns_data() {
        let resp: GraphqlResponse =
            serde_json::from_value(json!({ "data": { "pairs": [] } })).unwrap();
        assert_eq!(resp.into_data().unwrap(), json!({ "pairs": [] }));
    }

    #[test]
    fn test_into_data_prefers_errors() {
        let resp: GraphqlResponse = serde_json::from_value(json!({
            "data": { "pairs": [] },
            "errors": [{ "message": "indexing error" }]
        }))
        .unwrap();
        match resp.into_data() {
            Err(GraphqlError::Query(msgs)) => assert_eq!(msgs, vec!["indexing error"]),
            other => panic!("expected Query error, got {other:?}"),
        }
    }

    #[test]
    fn test_into_data_null_is_missing() {
        let resp: GraphqlResponse = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(matches!(resp.into_data(), Err(GraphqlError::MissingData)));
    }

    #[tokio::test]
    async fn test_query_as_rejects_malformed_shape() {
        #[derive(Debug, Deserialize)]
        struct Pairs {
            #[allow(dead_code)]
            pairs: Vec<String>,
        }

        let mock = MockSubgraph::new().with_response("allPairs", json!({ "pairs": 42 }));
        let result: Result<Pairs, _> =
            query_as(&mock, queries::ALL_PAIRS, json!({}), FetchPolicy::NetworkOnly).await;
        match result {
            Err(GraphqlError::Malformed(msg)) => assert!(msg.starts_with("allPairs response")),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }
}
