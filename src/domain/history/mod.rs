//! History domain — raw candles, UDF bars, the `history` result.

pub mod client;
mod convert;
pub mod wire;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// A validated subgraph candle. Prices are still token0 per token1.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCandle {
    pub time: u64,
    pub open: BigDecimal,
    pub close: BigDecimal,
    pub high: BigDecimal,
    pub low: BigDecimal,
    pub token1_total_amount: Option<BigDecimal>,
}

/// One UDF bar, token1 per token0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: u64,
    #[serde(with = "crate::shared::serde_util::decimal_number")]
    pub o: BigDecimal,
    #[serde(with = "crate::shared::serde_util::decimal_number")]
    pub h: BigDecimal,
    #[serde(with = "crate::shared::serde_util::decimal_number")]
    pub l: BigDecimal,
    #[serde(with = "crate::shared::serde_util::decimal_number")]
    pub c: BigDecimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<String>,
}

/// Result of a `history` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "s")]
pub enum HistoryResponse {
    /// No candles in the window. Terminal, not an error.
    #[serde(rename = "no_data")]
    NoData,
    #[serde(rename = "ok")]
    Bars { data: Vec<Bar> },
}

impl HistoryResponse {
    pub fn bars(&self) -> &[Bar] {
        match self {
            HistoryResponse::NoData => &[],
            HistoryResponse::Bars { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_no_data_has_no_data_key() {
        let v = serde_json::to_value(HistoryResponse::NoData).unwrap();
        assert_eq!(v, json!({ "s": "no_data" }));
    }

    #[test]
    fn test_ok_shape() {
        let half = BigDecimal::from_str("0.5").unwrap();
        let bar = Bar {
            time: 100,
            o: half.clone(),
            h: half.clone(),
            l: half.clone(),
            c: half,
            v: Some("0".to_string()),
        };
        let v = serde_json::to_value(HistoryResponse::Bars { data: vec![bar] }).unwrap();
        assert_eq!(
            v,
            json!({ "s": "ok", "data": [{ "time": 100, "o": 0.5, "h": 0.5, "l": 0.5, "c": 0.5, "v": "0" }] })
        );
    }
}
