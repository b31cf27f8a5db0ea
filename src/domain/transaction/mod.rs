//! Transaction domain — swaps reduced to buy/sell records.

pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A simplified swap record. Amounts are the subgraph's decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub timestamp: u64,
    pub tx_hash: String,
    pub is_buy: bool,
    pub base_amount: String,
    pub quote_amount: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum TransactionValidationError {
    /// The transaction carries no swap legs.
    NoSwaps(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionValidationError::NoSwaps(id) => write!(f, "Transaction {id} has no swaps"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
