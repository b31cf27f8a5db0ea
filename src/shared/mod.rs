//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the subgraph sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod price;
pub mod scaling;
pub mod serde_util;

pub use price::{normalize_price, scale_volume, PairDecimals};
pub use scaling::{parse_decimal, ScalingError, REFERENCE_DECIMALS};

use crate::error::AdapterError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── SymbolId ────────────────────────────────────────────────────────────────

/// Newtype for symbol identifiers. A symbol id is the pair's on-chain id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(String);

impl SymbolId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SymbolId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SymbolId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for SymbolId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for SymbolId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SymbolId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SymbolId(s))
    }
}

// ─── TokenId ─────────────────────────────────────────────────────────────────

/// A token identifier (contract address) as reported by the subgraph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TokenId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Bar period requested by the chart: a minute count or a day/week code.
///
/// Textual forms: `"5"` (minutes), `"1D"` / `"D"` (days), `"1W"` / `"W"` (weeks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Minutes(u32),
    Days(u32),
    Weeks(u32),
}

/// Resolutions advertised to the chart, in display order.
pub const SUPPORTED_RESOLUTIONS: [Resolution; 6] = [
    Resolution::Minutes(5),
    Resolution::Minutes(15),
    Resolution::Minutes(60),
    Resolution::Minutes(240),
    Resolution::Days(1),
    Resolution::Days(7),
];

const MINUTES_PER_DAY: u32 = 24 * 60;
const MINUTES_PER_WEEK: u32 = 7 * MINUTES_PER_DAY;

impl Resolution {
    /// Period length in minutes, as the subgraph indexes candles.
    pub fn period_minutes(&self) -> u32 {
        match self {
            Self::Minutes(n) => *n,
            Self::Days(n) => n.saturating_mul(MINUTES_PER_DAY),
            Self::Weeks(n) => n.saturating_mul(MINUTES_PER_WEEK),
        }
    }

    /// Duration of one bar in seconds.
    pub fn seconds(&self) -> u64 {
        self.period_minutes() as u64 * 60
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minutes(n) => write!(f, "{}", n),
            Self::Days(n) => write!(f, "{}D", n),
            Self::Weeks(n) => write!(f, "{}W", n),
        }
    }
}

impl FromStr for Resolution {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AdapterError::InvalidResolution(s.to_string());
        let trimmed = s.trim();

        let (digits, unit) = match trimmed.char_indices().last() {
            Some((idx, c)) if c.eq_ignore_ascii_case(&'d') || c.eq_ignore_ascii_case(&'w') => {
                (&trimmed[..idx], Some(c.to_ascii_uppercase()))
            }
            Some(_) => (trimmed, None),
            None => return Err(invalid()),
        };

        let count = if digits.is_empty() && unit.is_some() {
            1
        } else {
            digits.parse::<u32>().map_err(|_| invalid())?
        };
        if count == 0 {
            return Err(invalid());
        }

        Ok(match unit {
            None => Resolution::Minutes(count),
            Some('D') => Resolution::Days(count),
            Some(_) => Resolution::Weeks(count),
        })
    }
}

impl Serialize for Resolution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Resolution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_id_serde() {
        let id = SymbolId::from("tka-tkb");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"tka-tkb\"");
        let back: SymbolId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_resolution_parses_minutes() {
        assert_eq!("5".parse::<Resolution>().unwrap(), Resolution::Minutes(5));
        assert_eq!("240".parse::<Resolution>().unwrap(), Resolution::Minutes(240));
    }

    #[test]
    fn test_resolution_parses_day_and_week_codes() {
        assert_eq!("1D".parse::<Resolution>().unwrap(), Resolution::Days(1));
        assert_eq!("D".parse::<Resolution>().unwrap(), Resolution::Days(1));
        assert_eq!("7D".parse::<Resolution>().unwrap(), Resolution::Days(7));
        assert_eq!("1w".parse::<Resolution>().unwrap(), Resolution::Weeks(1));
        assert_eq!(Resolution::Days(7).period_minutes(), 10_080);
        assert_eq!(Resolution::Weeks(1).period_minutes(), 10_080);
    }

    #[test]
    fn test_resolution_rejects_garbage_and_zero() {
        for bad in ["abc", "", "0", "0D", "-5", "5m", "1.5"] {
            let err = bad.parse::<Resolution>().unwrap_err();
            assert!(
                matches!(err, AdapterError::InvalidResolution(_)),
                "expected InvalidResolution for {bad:?}"
            );
        }
    }

    #[test]
    fn test_resolution_serde_roundtrips_supported_list() {
        let json = serde_json::to_string(&SUPPORTED_RESOLUTIONS).unwrap();
        assert_eq!(json, r#"["5","15","60","240","1D","7D"]"#);
        let back: Vec<Resolution> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SUPPORTED_RESOLUTIONS.to_vec());
    }

    #[test]
    fn test_resolution_seconds() {
        assert_eq!(Resolution::Minutes(15).seconds(), 900);
        assert_eq!(Resolution::Days(1).seconds(), 86_400);
    }
}
