//! Conversion: PairResponse → Symbol (TryFrom + validation).

use super::wire::PairResponse;
use super::{Symbol, SymbolValidationError};

impl TryFrom<PairResponse> for Symbol {
    type Error = SymbolValidationError;

    fn try_from(source: PairResponse) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        if source.id.trim().is_empty() {
            errors.push(SymbolValidationError::MissingId);
        }
        if source.token0.trim().is_empty() {
            errors.push(SymbolValidationError::MissingToken0);
        }
        if source.token1.trim().is_empty() {
            errors.push(SymbolValidationError::MissingToken1);
        }

        if !errors.is_empty() {
            return Err(SymbolValidationError::Multiple(source.id, errors));
        }

        Ok(Symbol::new(source.id, source.token0, source.token1))
    }
}
