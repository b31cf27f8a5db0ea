//! Symbol domain — tradable pairs, the symbol catalog, UDF descriptors.

pub mod client;
pub mod config;
mod convert;
pub mod state;
pub mod wire;

pub use config::{ExchangeConfig, ExchangeDescriptor};
pub use state::{CatalogHandle, CatalogReload, SymbolCatalog};

use crate::shared::{PairDecimals, Resolution, SymbolId, TokenId, REFERENCE_DECIMALS, SUPPORTED_RESOLUTIONS};
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// A tradable pair as held in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub token0: TokenId,
    pub token1: TokenId,
    pub token0_decimals: u8,
    pub token1_decimals: u8,
    pub supported_resolutions: Vec<Resolution>,
}

impl Symbol {
    /// A pair with both tokens on the 18-decimal reference.
    pub fn new(id: impl Into<SymbolId>, token0: impl Into<TokenId>, token1: impl Into<TokenId>) -> Self {
        Self {
            id: id.into(),
            token0: token0.into(),
            token1: token1.into(),
            token0_decimals: REFERENCE_DECIMALS,
            token1_decimals: REFERENCE_DECIMALS,
            supported_resolutions: SUPPORTED_RESOLUTIONS.to_vec(),
        }
    }

    pub fn decimals(&self) -> PairDecimals {
        PairDecimals {
            token0: self.token0_decimals,
            token1: self.token1_decimals,
        }
    }

    /// UDF `symbols` descriptor for this pair.
    pub fn info(&self, exchange: &ExchangeDescriptor) -> SymbolInfo {
        let id = self.id.to_string();
        SymbolInfo {
            symbol: id.clone(),
            ticker: id.clone(),
            name: id.clone(),
            full_name: id,
            token0: self.token0.clone(),
            token1: self.token1.clone(),
            token0_decimals: self.token0_decimals,
            token1_decimals: self.token1_decimals,
            description: format!("{}/{}", self.token0, self.token1),
            exchange: exchange.value.clone(),
            listed_exchange: exchange.value.clone(),
            symbol_type: "crypto".to_string(),
            currency_code: self.token1.to_string(),
            session: "24x7".to_string(),
            timezone: "UTC".to_string(),
            minmovement: 1,
            minmov: 1,
            minmovement2: 0,
            minmov2: 0,
            pricescale: 1,
            supported_resolutions: self.supported_resolutions.clone(),
            has_intraday: true,
            has_daily: true,
            has_weekly_and_monthly: true,
            data_status: "streaming".to_string(),
        }
    }
}

// ─── SymbolInfo ──────────────────────────────────────────────────────────────

/// The symbol descriptor the chart's `symbols` endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub symbol: String,
    pub ticker: String,
    pub name: String,
    pub full_name: String,
    pub token0: TokenId,
    pub token1: TokenId,
    #[serde(rename = "token0Decimals")]
    pub token0_decimals: u8,
    #[serde(rename = "token1Decimals")]
    pub token1_decimals: u8,
    pub description: String,
    pub exchange: String,
    pub listed_exchange: String,
    #[serde(rename = "type")]
    pub symbol_type: String,
    pub currency_code: String,
    pub session: String,
    pub timezone: String,
    pub minmovement: u32,
    pub minmov: u32,
    pub minmovement2: u32,
    pub minmov2: u32,
    pub pricescale: u64,
    pub supported_resolutions: Vec<Resolution>,
    pub has_intraday: bool,
    pub has_daily: bool,
    pub has_weekly_and_monthly: bool,
    pub data_status: String,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum SymbolValidationError {
    Multiple(String, Vec<SymbolValidationError>),
    MissingId,
    MissingToken0,
    MissingToken1,
}

impl fmt::Display for SymbolValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolValidationError::Multiple(id, errors) => {
                writeln!(f, "Pair validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            SymbolValidationError::MissingId => write!(f, "Missing pair id"),
            SymbolValidationError::MissingToken0 => write!(f, "Missing token0"),
            SymbolValidationError::MissingToken1 => write!(f, "Missing token1"),
        }
    }
}

impl std::error::Error for SymbolValidationError {}
