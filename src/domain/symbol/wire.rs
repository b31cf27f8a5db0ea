//! Wire types for pair listings.

use serde::{Deserialize, Serialize};

/// A pair as the subgraph reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairResponse {
    pub id: String,
    pub token0: String,
    pub token1: String,
}

/// `pairs` query result (`allPairs` and `pairsByTokens`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairsResponse {
    #[serde(default)]
    pub pairs: Vec<PairResponse>,
}
