//! Custom serde helpers for subgraph wire formats.
//!
//! GraphQL `Int` fields arrive as JSON numbers while `BigInt`/`BigDecimal` fields
//! arrive as strings; different subgraph deployments disagree on which a given
//! field uses, so wire types accept both.

use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    String(String),
}

/// Deserializes a JSON number or numeric string into `u64`.
pub mod u64_from_any {
    use super::NumberOrString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => n
                .as_u64()
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid unsigned integer: {}", n))),
            NumberOrString::String(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| serde::de::Error::custom(format!("Invalid unsigned integer: {}", s))),
        }
    }
}

/// Deserializes a JSON number or string into its decimal text.
pub mod decimal_text {
    use super::NumberOrString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Ok(n.to_string()),
            NumberOrString::String(s) => Ok(s),
        }
    }

    /// As [`deserialize`], with JSON `null` mapping to `None`.
    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
            Some(NumberOrString::Number(n)) => Some(n.to_string()),
            Some(NumberOrString::String(s)) => Some(s),
            None => None,
        })
    }
}

/// Serializes a `BigDecimal` as a JSON number; accepts a number or a numeric string.
///
/// The value is exact up to this boundary; the JSON number is the nearest `f64`.
pub mod decimal_number {
    use super::NumberOrString;
    use bigdecimal::{BigDecimal, ToPrimitive};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let float = value.to_f64().ok_or_else(|| {
            serde::ser::Error::custom(format!("Decimal out of f64 range: {}", value))
        })?;
        serializer.serialize_f64(float)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::String(s) => s,
        };
        BigDecimal::from_str(text.trim())
            .map_err(|_| serde::de::Error::custom(format!("Invalid decimal: {}", text)))
    }
}
