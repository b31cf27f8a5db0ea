//! Conversions: CandleResponse → RawCandle → Bar.

use super::wire::CandleResponse;
use super::{Bar, RawCandle};
use crate::error::GraphqlError;
use crate::shared::price::{normalize_decimal_price, scale_volume_decimal};
use crate::shared::{parse_decimal, PairDecimals, ScalingError};
use bigdecimal::BigDecimal;

fn field(name: &str, raw: &str) -> Result<BigDecimal, GraphqlError> {
    parse_decimal(raw).map_err(|e| GraphqlError::Malformed(format!("candle {name}: {e}")))
}

impl TryFrom<CandleResponse> for RawCandle {
    type Error = GraphqlError;

    fn try_from(c: CandleResponse) -> Result<Self, Self::Error> {
        Ok(RawCandle {
            time: c.time,
            open: field("open", &c.open)?,
            close: field("close", &c.close)?,
            high: field("high", &c.high)?,
            low: field("low", &c.low)?,
            token1_total_amount: c
                .token1_total_amount
                .as_deref()
                .map(|raw| field("token1TotalAmount", raw))
                .transpose()?,
        })
    }
}

impl RawCandle {
    /// Normalize each price field independently; volume from `token1TotalAmount`.
    pub fn to_bar(&self, decimals: PairDecimals) -> Result<Bar, ScalingError> {
        let v = self
            .token1_total_amount
            .as_ref()
            .map(|amount| scale_volume_decimal(amount).to_plain_string());

        Ok(Bar {
            time: self.time,
            o: normalize_decimal_price(&self.open, decimals)?,
            h: normalize_decimal_price(&self.high, decimals)?,
            l: normalize_decimal_price(&self.low, decimals)?,
            c: normalize_decimal_price(&self.close, decimals)?,
            v,
        })
    }
}
