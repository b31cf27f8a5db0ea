//! Price normalization for AMM candles.
//!
//! The subgraph reports candle prices in the opposite orientation to what the chart
//! expects, and measured against the 18-decimal reference. Normalizing a raw price `p`
//! for a pair with token decimals `d0`, `d1`:
//!
//! ```text
//! S0     = 10^(18 - d0)
//! S1     = 10^(18 - d1)
//! result = (1 / p) * S0 / S1
//! ```
//!
//! The output is token1 per token0 and stays an exact decimal.

use bigdecimal::{BigDecimal, One, Zero};

use super::scaling::{self, ScalingError, REFERENCE_DECIMALS};

/// Token decimal counts of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairDecimals {
    pub token0: u8,
    pub token1: u8,
}

impl Default for PairDecimals {
    fn default() -> Self {
        Self {
            token0: REFERENCE_DECIMALS,
            token1: REFERENCE_DECIMALS,
        }
    }
}

/// Normalize a raw candle price string.
pub fn normalize_price(raw: &str, decimals: PairDecimals) -> Result<BigDecimal, ScalingError> {
    let price = scaling::parse_decimal(raw)?;
    normalize_decimal_price(&price, decimals)
}

/// Normalize an already-parsed raw price.
///
/// Zero fails with [`ScalingError::DivisionByZero`]; negative prices are rejected.
pub fn normalize_decimal_price(
    price: &BigDecimal,
    decimals: PairDecimals,
) -> Result<BigDecimal, ScalingError> {
    if price.is_zero() {
        return Err(ScalingError::DivisionByZero {
            context: "1 / price".to_string(),
        });
    }
    if *price < BigDecimal::zero() {
        return Err(ScalingError::NonPositivePrice(price.to_plain_string()));
    }

    let s0 = scaling::scale_factor(decimals.token0);
    let s1 = scaling::scale_factor(decimals.token1);

    let inverted = scaling::checked_div(&BigDecimal::one(), price, "1 / price")?;
    let normalized = scaling::checked_div(&(inverted * s0), &s1, "price * S0 / S1")?;

    Ok(normalized.normalized())
}

/// Volume proxy: a raw 18-decimal amount scaled by `10^-18`.
pub fn scale_volume(raw: &str) -> Result<BigDecimal, ScalingError> {
    Ok(scale_volume_decimal(&scaling::parse_decimal(raw)?))
}

pub fn scale_volume_decimal(amount: &BigDecimal) -> BigDecimal {
    (amount * scaling::pow10(-(REFERENCE_DECIMALS as i32))).normalized()
}
