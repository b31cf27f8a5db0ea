//! Exact decimal helpers for token-amount normalization.
//!
//! All math uses `bigdecimal::BigDecimal`. Subgraph `BigInt`/`BigDecimal` fields are
//! unbounded, so nothing here has a digit ceiling and nothing goes through `f64`.
//! No async, no network calls.

use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};

/// Decimal count every scale factor is measured against.
pub const REFERENCE_DECIMALS: u8 = 18;

/// Significant digits kept by a non-terminating division.
pub const DIVISION_PRECISION: u64 = 100;

/// Errors that can occur during decimal arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalingError {
    DivisionByZero { context: String },
    NonPositivePrice(String),
    InvalidDecimal { input: String, reason: String },
}

impl fmt::Display for ScalingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalingError::DivisionByZero { context } => write!(f, "Division by zero: {}", context),
            ScalingError::NonPositivePrice(v) => write!(f, "Price must be positive, got {}", v),
            ScalingError::InvalidDecimal { input, reason } => {
                write!(f, "Invalid decimal '{}': {}", input, reason)
            }
        }
    }
}

impl std::error::Error for ScalingError {}

/// Parse a decimal string as the subgraph renders `BigDecimal`/`BigInt` values.
///
/// Accepts plain (`"0.5"`) and scientific (`"5e-1"`) notation.
pub fn parse_decimal(input: &str) -> Result<BigDecimal, ScalingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScalingError::InvalidDecimal {
            input: input.to_string(),
            reason: "empty".to_string(),
        });
    }

    BigDecimal::from_str(trimmed).map_err(|e| ScalingError::InvalidDecimal {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// `10^exp` as an exact decimal. Negative exponents yield `0.00..1`.
pub fn pow10(exp: i32) -> BigDecimal {
    BigDecimal::new(1.into(), -i64::from(exp))
}

/// Scale factor `10^(18 - decimals)` bringing a token's amounts onto the 18-digit reference.
pub fn scale_factor(decimals: u8) -> BigDecimal {
    pow10(REFERENCE_DECIMALS as i32 - decimals as i32)
}

/// `lhs / rhs`, exact when the quotient terminates within [`DIVISION_PRECISION`] digits.
pub fn checked_div(
    lhs: &BigDecimal,
    rhs: &BigDecimal,
    context: &str,
) -> Result<BigDecimal, ScalingError> {
    if rhs.is_zero() {
        return Err(ScalingError::DivisionByZero {
            context: context.to_string(),
        });
    }
    Ok((lhs / rhs).with_prec(DIVISION_PRECISION))
}
