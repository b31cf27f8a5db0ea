//! Transactions sub-client.

use crate::client::UdfClient;
use crate::domain::transaction::wire::TransactionsResponse;
use crate::domain::transaction::Transaction;
use crate::error::AdapterError;
use crate::graphql::{query_as, queries, FetchPolicy};
use serde_json::json;

/// Sub-client for a pair's swap transactions.
pub struct Transactions<'a> {
    pub(crate) client: &'a UdfClient,
}

impl<'a> Transactions<'a> {
    /// Transactions for `symbol`, newest first, paged by `skip`/`limit`.
    ///
    /// Transactions without swap legs are dropped.
    pub async fn list(
        &self,
        symbol: &str,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Transaction>, AdapterError> {
        let symbol = self.client.symbols().get(symbol).await?;

        let resp: TransactionsResponse = query_as(
            self.client.subgraph.as_ref(),
            queries::TRANSACTIONS,
            json!({ "pair": symbol.id, "skip": skip, "limit": limit }),
            FetchPolicy::NetworkOnly,
        )
        .await?;

        let mut out = Vec::with_capacity(resp.transactions.len());
        for tx in resp.transactions {
            match Transaction::try_from(tx) {
                Ok(t) => out.push(t),
                Err(e) => tracing::debug!("Skipping transaction: {}", e),
            }
        }
        Ok(out)
    }
}
