//! Wire types for transaction queries.

use crate::domain::symbol::wire::PairResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    #[serde(deserialize_with = "crate::shared::serde_util::decimal_text::deserialize")]
    pub amount0_in: String,
    #[serde(deserialize_with = "crate::shared::serde_util::decimal_text::deserialize")]
    pub amount0_out: String,
    #[serde(deserialize_with = "crate::shared::serde_util::decimal_text::deserialize")]
    pub amount1_in: String,
    #[serde(deserialize_with = "crate::shared::serde_util::decimal_text::deserialize")]
    pub amount1_out: String,
    #[serde(default)]
    pub pair: Option<PairResponse>,
}

/// A transaction and the swap legs it contains. `id` is the tx hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: String,
    #[serde(deserialize_with = "crate::shared::serde_util::u64_from_any::deserialize")]
    pub timestamp: u64,
    #[serde(default)]
    pub swaps: Vec<SwapResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<TransactionResponse>,
}
