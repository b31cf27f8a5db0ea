//! Conversion: PairResponse → PairInfo.

use super::PairInfo;
use crate::domain::symbol::wire::PairResponse;

impl From<PairResponse> for PairInfo {
    fn from(pair: PairResponse) -> Self {
        PairInfo {
            token0: pair.token0,
            token1: pair.token1,
            pair_address: pair.id,
        }
    }
}
