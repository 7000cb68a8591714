/*
[INPUT]:  Fireblocks API key id and RSA private key
[OUTPUT]: Vault account pages
[POS]:    HTTP layer - Fireblocks endpoints (require RS256 bearer token)
[UPDATE]: When adding Fireblocks endpoints
*/

use reqwest::Method;
use serde_json::Value;

use crate::auth::SigningRequest;
use crate::http::{AuthenticatedClient, Result};
use crate::types::VaultAccountsPage;

/// Production Fireblocks API host
pub const FIREBLOCKS_BASE_URL: &str = "https://api.fireblocks.io";

pub const VAULT_ACCOUNTS_PAGED_PATH: &str = "/v1/vault/accounts_paged";

impl AuthenticatedClient {
    /// First page of vault accounts, as returned by the API
    ///
    /// GET /v1/vault/accounts_paged
    pub async fn list_vault_accounts_raw(&self) -> Result<Value> {
        let request = SigningRequest::empty(Method::GET, VAULT_ACCOUNTS_PAGED_PATH);
        Ok(self.send(request).await?.body)
    }

    /// First page of vault accounts
    pub async fn list_vault_accounts(&self) -> Result<VaultAccountsPage> {
        let request = SigningRequest::empty(Method::GET, VAULT_ACCOUNTS_PAGED_PATH);
        self.send_json(request).await
    }
}
