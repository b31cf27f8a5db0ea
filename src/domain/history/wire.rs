//! Wire types for candle queries.

use serde::{Deserialize, Serialize};

/// A candle as the subgraph reports it. Prices are token0 per token1.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(deserialize_with = "crate::shared::serde_util::u64_from_any::deserialize")]
    pub time: u64,
    #[serde(deserialize_with = "crate::shared::serde_util::decimal_text::deserialize")]
    pub open: String,
    #[serde(deserialize_with = "crate::shared::serde_util::decimal_text::deserialize")]
    pub close: String,
    #[serde(deserialize_with = "crate::shared::serde_util::decimal_text::deserialize")]
    pub low: String,
    #[serde(deserialize_with = "crate::shared::serde_util::decimal_text::deserialize")]
    pub high: String,
    #[serde(
        default,
        deserialize_with = "crate::shared::serde_util::decimal_text::deserialize_opt"
    )]
    pub token1_total_amount: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandlesResponse {
    #[serde(default)]
    pub candles: Vec<CandleResponse>,
}
