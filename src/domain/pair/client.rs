//! Pairs sub-client — order-independent pair lookup.

use crate::client::UdfClient;
use crate::domain::pair::{PairInfo, PairInfoResponse};
use crate::domain::symbol::wire::PairsResponse;
use crate::error::AdapterError;
use crate::graphql::{query_as, queries, FetchPolicy};
use serde_json::json;

pub struct Pairs<'a> {
    pub(crate) client: &'a UdfClient,
}

impl<'a> Pairs<'a> {
    /// The pair made of `token_a` and `token_b`, in either order.
    pub async fn address(&self, token_a: &str, token_b: &str) -> Result<PairInfoResponse, AdapterError> {
        let resp: PairsResponse = query_as(
            self.client.subgraph.as_ref(),
            queries::PAIRS_BY_TOKENS,
            json!({ "token0": token_a, "token1": token_b }),
            FetchPolicy::NetworkOnly,
        )
        .await?;

        let pair = resp
            .pairs
            .into_iter()
            .next()
            .ok_or_else(|| AdapterError::PairNotFound {
                token0: token_a.to_string(),
                token1: token_b.to_string(),
            })?;

        Ok(PairInfoResponse {
            pair_info: PairInfo::from(pair),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::client::UdfClient;
    use crate::error::AdapterError;
    use crate::graphql::MockSubgraph;
    use serde_json::json;
    use std::sync::Arc;

    fn client(mock: Arc<MockSubgraph>) -> UdfClient {
        UdfClient::builder().subgraph(mock).build().unwrap()
    }

    #[tokio::test]
    async fn test_order_independent() {
        let mock = Arc::new(MockSubgraph::new().with_response(
            "pairsByTokens",
            json!({ "pairs": [{ "id": "0xpair", "token0": "tka", "token1": "tkb" }] }),
        ));
        let client = client(mock.clone());

        let ab = client.pairs().address("tka", "tkb").await.unwrap();
        let ba = client.pairs().address("tkb", "tka").await.unwrap();
        assert_eq!(ab.pair_info.pair_address, ba.pair_info.pair_address);
        assert_eq!(ba.pair_info.token0, "tka");

        let calls = mock.calls_for("pairsByTokens");
        assert_eq!(calls[1].variables, json!({ "token0": "tkb", "token1": "tka" }));
    }

    #[tokio::test]
    async fn test_empty_result_is_not_found() {
        let mock = Arc::new(MockSubgraph::new().with_response("pairsByTokens", json!({ "pairs": [] })));
        let err = client(mock).pairs().address("x", "y").await.unwrap_err();
        assert!(matches!(err, AdapterError::PairNotFound { .. }));
    }

    #[tokio::test]
    async fn test_serialized_shape() {
        let mock = Arc::new(MockSubgraph::new().with_response(
            "pairsByTokens",
            json!({ "pairs": [{ "id": "0xpair", "token0": "tka", "token1": "tkb" }] }),
        ));
        let resp = client(mock).pairs().address("tkb", "tka").await.unwrap();
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "pairInfo": { "token0": "tka", "token1": "tkb", "pairAddress": "0xpair" } })
        );
    }
}
