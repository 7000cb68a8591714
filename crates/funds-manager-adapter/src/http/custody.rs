/*
[INPUT]:  Chain name and wallet/gas parameters
[OUTPUT]: Created wallet addresses and refill results
[POS]:    HTTP layer - funds manager custody endpoints (optional HMAC auth)
[UPDATE]: When adding custody endpoints or changing request bodies
*/

use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::SigningRequest;
use crate::http::{AuthenticatedClient, Result};
use crate::types::{
    CreateGasWalletResponse, CreateHotWalletRequest, CreateHotWalletResponse, RefillGasRequest,
};

/// Default chain for operator commands
pub const DEFAULT_CHAIN: &str = "ethereum-sepolia";

pub fn gas_wallets_path(chain: &str) -> String {
    format!("/custody/{chain}/gas-wallets")
}

pub fn hot_wallets_path(chain: &str) -> String {
    format!("/custody/{chain}/hot-wallets")
}

pub fn refill_gas_path(chain: &str) -> String {
    format!("/custody/{chain}/gas/refill-gas")
}

impl AuthenticatedClient {
    /// Create a gas wallet
    ///
    /// POST /custody/{chain}/gas-wallets (empty body)
    pub async fn create_gas_wallet(&self, chain: &str) -> Result<CreateGasWalletResponse> {
        let request = SigningRequest::empty(Method::POST, gas_wallets_path(chain));
        self.send_json(request).await
    }

    /// Create a hot wallet backed by `vault`
    ///
    /// POST /custody/{chain}/hot-wallets
    pub async fn create_hot_wallet(
        &self,
        chain: &str,
        vault: &str,
        internal_wallet_id: Uuid,
    ) -> Result<CreateHotWalletResponse> {
        let body = CreateHotWalletRequest {
            vault: vault.to_string(),
            internal_wallet_id,
        };
        let request = SigningRequest::json(Method::POST, hot_wallets_path(chain), &body)?;
        self.send_json(request).await
    }

    /// Top up every active gas wallet to `amount`
    ///
    /// POST /custody/{chain}/gas/refill-gas
    pub async fn refill_gas(&self, chain: &str, amount: Decimal) -> Result<Value> {
        let body = RefillGasRequest { amount };
        let request = SigningRequest::json(Method::POST, refill_gas_path(chain), &body)?;
        Ok(self.send(request).await?.body)
    }
}
