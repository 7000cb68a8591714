/*
[INPUT]:  Custody API request schemas
[OUTPUT]: Typed request bodies serialized in wire key order
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /custody/{chain}/hot-wallets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHotWalletRequest {
    /// Name of the vault backing the hot wallet
    pub vault: String,
    pub internal_wallet_id: Uuid,
}

/// Body of `POST /custody/{chain}/gas/refill-gas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefillGasRequest {
    /// Balance each active gas wallet is topped up to
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_hot_wallet_request_key_order() {
        let id = Uuid::from_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        let req = CreateHotWalletRequest {
            vault: "Ethereum Sepolia Hot Wallet".to_string(),
            internal_wallet_id: id,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"vault":"Ethereum Sepolia Hot Wallet","internal_wallet_id":"67e55044-10b1-426f-9247-bb680e5fe0c8"}"#
        );
    }

    #[test]
    fn test_refill_amount_is_a_json_number() {
        let req = RefillGasRequest {
            amount: Decimal::from_str("0.01").unwrap(),
        };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"amount":0.01}"#);
    }
}
