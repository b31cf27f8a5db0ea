//! Pair domain — resolving a token pair to its pool address.

pub mod client;
mod convert;

use serde::{Deserialize, Serialize};

/// A pair address with the token order stored on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairInfo {
    pub token0: String,
    pub token1: String,
    pub pair_address: String,
}

/// `pair-info` result body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairInfoResponse {
    pub pair_info: PairInfo,
}
