//! History sub-client — resolves a symbol and window into UDF bars.

use crate::client::UdfClient;
use crate::domain::history::wire::CandlesResponse;
use crate::domain::history::{HistoryResponse, RawCandle};
use crate::error::AdapterError;
use crate::graphql::{query_as, queries, FetchPolicy};
use crate::shared::Resolution;
use serde_json::json;

/// Sub-client for bar history.
pub struct History<'a> {
    pub(crate) client: &'a UdfClient,
}

impl<'a> History<'a> {
    /// Bars for `symbol` in `[from, to]` at `resolution`, at most `countback` of them.
    ///
    /// Symbol and resolution are validated before anything is fetched. Candles
    /// are always fetched from the network, once; the subgraph applies
    /// `countback` as its page limit.
    pub async fn get(
        &self,
        symbol: &str,
        from: i64,
        to: i64,
        resolution: &str,
        countback: u32,
    ) -> Result<HistoryResponse, AdapterError> {
        let symbol = self.client.symbols().get(symbol).await?;
        let resolution: Resolution = resolution.parse()?;

        let resp: CandlesResponse = query_as(
            self.client.subgraph.as_ref(),
            queries::CANDLES,
            json!({
                "period": resolution.period_minutes(),
                "from": from,
                "to": to,
                "token0": symbol.token0,
                "token1": symbol.token1,
                "limit": countback,
            }),
            FetchPolicy::NetworkOnly,
        )
        .await?;

        if resp.candles.is_empty() {
            return Ok(HistoryResponse::NoData);
        }

        let decimals = symbol.decimals();
        let mut bars = Vec::with_capacity(resp.candles.len());
        for candle in resp.candles {
            let raw = RawCandle::try_from(candle)?;
            bars.push(raw.to_bar(decimals)?);
        }
        bars.sort_by_key(|b| b.time);

        tracing::debug!(symbol = %symbol.id, %resolution, bars = bars.len(), "history resolved");
        Ok(HistoryResponse::Bars { data: bars })
    }
}
