//! Static exchange configuration served by the UDF `config` endpoint.

use crate::network::{DEFAULT_EXCHANGE_DESC, DEFAULT_EXCHANGE_NAME, DEFAULT_EXCHANGE_VALUE};
use crate::shared::{Resolution, SUPPORTED_RESOLUTIONS};
use serde::{Deserialize, Serialize};

/// An exchange entry in the chart's exchange filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeDescriptor {
    pub value: String,
    pub name: String,
    pub desc: String,
}

impl Default for ExchangeDescriptor {
    fn default() -> Self {
        Self {
            value: DEFAULT_EXCHANGE_VALUE.to_string(),
            name: DEFAULT_EXCHANGE_NAME.to_string(),
            desc: DEFAULT_EXCHANGE_DESC.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolType {
    pub value: String,
    pub name: String,
}

/// Datafeed configuration block. Fixed data, independent of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeConfig {
    pub exchanges: Vec<ExchangeDescriptor>,
    pub symbol_types: Vec<SymbolType>,
    pub supported_resolutions: Vec<Resolution>,
    pub supports_search: bool,
    pub supports_group_request: bool,
    pub supports_marks: bool,
    pub supports_timescale_marks: bool,
    pub supports_time: bool,
}

impl ExchangeConfig {
    pub fn new(exchange: ExchangeDescriptor) -> Self {
        Self {
            exchanges: vec![exchange],
            symbol_types: vec![SymbolType {
                value: "crypto".to_string(),
                name: "cryptocurrency".to_string(),
            }],
            supported_resolutions: SUPPORTED_RESOLUTIONS.to_vec(),
            supports_search: true,
            supports_group_request: false,
            supports_marks: false,
            supports_timescale_marks: false,
            supports_time: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_flags() {
        let v = serde_json::to_value(ExchangeConfig::new(ExchangeDescriptor::default())).unwrap();
        assert_eq!(v["supports_search"], json!(true));
        assert_eq!(v["supports_group_request"], json!(false));
        assert_eq!(v["supports_marks"], json!(false));
        assert_eq!(v["supports_timescale_marks"], json!(false));
        assert_eq!(v["supports_time"], json!(true));
        assert_eq!(
            v["exchanges"],
            json!([{ "value": "U2USWAP", "name": "U2USwap", "desc": "U2USwap DEX" }])
        );
        assert_eq!(
            v["symbol_types"],
            json!([{ "value": "crypto", "name": "cryptocurrency" }])
        );
        assert_eq!(
            v["supported_resolutions"],
            json!(["5", "15", "60", "240", "1D", "7D"])
        );
    }
}
