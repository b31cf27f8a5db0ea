//! Conversion: TransactionResponse → Transaction.

use super::wire::TransactionResponse;
use super::{Transaction, TransactionValidationError};

impl TryFrom<TransactionResponse> for Transaction {
    type Error = TransactionValidationError;

    /// Direction and amounts come from the first swap leg only.
    fn try_from(tx: TransactionResponse) -> Result<Self, Self::Error> {
        let Some(swap) = tx.swaps.into_iter().next() else {
            return Err(TransactionValidationError::NoSwaps(tx.id));
        };

        // token0 left the pool: the trader bought token0 with token1.
        let is_buy = swap.amount0_in == "0";
        let (base_amount, quote_amount) = if is_buy {
            (swap.amount0_out, swap.amount1_in)
        } else {
            (swap.amount0_in, swap.amount1_out)
        };

        Ok(Transaction {
            timestamp: tx.timestamp,
            tx_hash: tx.id,
            is_buy,
            base_amount,
            quote_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tx(swaps: serde_json::Value) -> TransactionResponse {
        serde_json::from_value(json!({ "id": "0xabc", "timestamp": "1700000000", "swaps": swaps }))
            .unwrap()
    }

    fn swap(a0in: &str, a0out: &str, a1in: &str, a1out: &str) -> serde_json::Value {
        json!({ "amount0In": a0in, "amount0Out": a0out, "amount1In": a1in, "amount1Out": a1out })
    }

    #[test]
    fn test_buy_when_amount0_in_is_zero() {
        let t = Transaction::try_from(tx(json!([swap("0", "5", "10", "0")]))).unwrap();
        assert!(t.is_buy);
        assert_eq!(t.base_amount, "5");
        assert_eq!(t.quote_amount, "10");
        assert_eq!(t.tx_hash, "0xabc");
        assert_eq!(t.timestamp, 1_700_000_000);
    }

    #[test]
    fn test_sell() {
        let t = Transaction::try_from(tx(json!([swap("3", "0", "0", "7")]))).unwrap();
        assert!(!t.is_buy);
        assert_eq!(t.base_amount, "3");
        assert_eq!(t.quote_amount, "7");
    }

    #[test]
    fn test_only_first_leg_counts() {
        let t = Transaction::try_from(tx(json!([
            swap("3", "0", "0", "7"),
            swap("0", "1", "1", "0"),
        ])))
        .unwrap();
        assert!(!t.is_buy);
    }

    #[test]
    fn test_zero_is_literal() {
        let t = Transaction::try_from(tx(json!([swap("0.0", "0", "0", "0")]))).unwrap();
        assert!(!t.is_buy);
    }

    #[test]
    fn test_no_swaps() {
        let err = Transaction::try_from(tx(json!([]))).unwrap_err();
        assert_eq!(err, TransactionValidationError::NoSwaps("0xabc".to_string()));
    }

    #[test]
    fn test_serializes_camel_case() {
        let t = Transaction::try_from(tx(json!([swap("0", "5", "10", "0")]))).unwrap();
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(
            v,
            json!({ "timestamp": 1700000000u64, "txHash": "0xabc", "isBuy": true, "baseAmount": "5", "quoteAmount": "10" })
        );
    }
}
