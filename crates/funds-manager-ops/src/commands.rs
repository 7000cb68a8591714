/*
[INPUT]:  Resolved OpsConfig and per-command arguments
[OUTPUT]: Custody / Fireblocks API calls with results printed to stdout
[POS]:    Command layer - one function per operator command
[UPDATE]: When adding operator commands or changing their output
*/

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use console::style;
use funds_manager_adapter::auth::{has_hmac_key, hmac_or_unsigned};
use funds_manager_adapter::{AuthenticatedClient, FireblocksSigner, FundsManagerError};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::OpsConfig;

pub const DEFAULT_VAULT: &str = "Ethereum Sepolia Hot Wallet";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The server refills every active wallet before it answers
const REFILL_TIMEOUT: Duration = Duration::from_secs(300);

fn custody_client(config: &OpsConfig, default_timeout: Duration) -> Result<AuthenticatedClient> {
    let host = config.require_host()?;
    let signer = hmac_or_unsigned(config.hmac_key.as_deref()).context("load hmac key")?;
    if !has_hmac_key(config.hmac_key.as_deref()) {
        warn!("no HMAC key configured; sending unsigned requests");
    }
    AuthenticatedClient::with_config(host, Arc::from(signer), config.client_config(default_timeout))
        .context("build custody client")
}

/// Print the remote status and raw body before failing
fn report(err: FundsManagerError) -> anyhow::Error {
    if let FundsManagerError::RemoteRejection { status, body } = &err {
        eprintln!("{} {}: {}", style("Error").red().bold(), status.as_u16(), body);
    }
    anyhow!(err)
}

/// Create `count` gas wallets, stopping at the first failure
pub async fn create_gas_wallets(config: &OpsConfig, count: u32) -> Result<Vec<String>> {
    let client = custody_client(config, DEFAULT_TIMEOUT)?;
    let mut addresses = Vec::with_capacity(count as usize);

    for i in 1..=count {
        let wallet = client
            .create_gas_wallet(&config.chain)
            .await
            .map_err(report)
            .with_context(|| format!("create gas wallet {i}/{count}"))?;
        println!("[{i}/{count}] Created gas wallet: {}", wallet.address);
        addresses.push(wallet.address);
    }

    println!("Done. Created {count} gas wallet(s).");
    Ok(addresses)
}

/// Create one hot wallet; a fresh internal wallet id is generated when absent
pub async fn create_hot_wallet(
    config: &OpsConfig,
    vault: &str,
    internal_wallet_id: Option<Uuid>,
) -> Result<Value> {
    let client = custody_client(config, DEFAULT_TIMEOUT)?;
    let internal_wallet_id = internal_wallet_id.unwrap_or_else(Uuid::new_v4);
    println!("Using internal wallet ID: {internal_wallet_id}");

    let response = client
        .create_hot_wallet(&config.chain, vault, internal_wallet_id)
        .await
        .map_err(report)
        .context("create hot wallet")?;
    let response = serde_json::to_value(response)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(response)
}

/// Top every active gas wallet up to `amount`
pub async fn refill_gas(config: &OpsConfig, amount: Decimal) -> Result<Value> {
    let client = custody_client(config, REFILL_TIMEOUT)?;
    println!(
        "Refilling gas wallets on {} to {} ETH each...",
        config.chain, amount
    );

    let response = client
        .refill_gas(&config.chain, amount)
        .await
        .map_err(report)
        .context("refill gas")?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(response)
}

/// List the first page of Fireblocks vault accounts
pub async fn list_vault_accounts(config: &OpsConfig) -> Result<Value> {
    let fireblocks = &config.fireblocks;
    let api_key = fireblocks
        .api_key
        .as_deref()
        .context("Fireblocks API key is required (--api-key or `fireblocks.api_key`)")?;
    let key_path = fireblocks
        .secret_key_path
        .as_deref()
        .context("Fireblocks secret key path is required (--secret-key-path)")?;

    let signer = FireblocksSigner::from_pem_file(api_key, key_path).context("load Fireblocks key")?;
    let client = AuthenticatedClient::with_config(
        fireblocks.base_url.as_str(),
        Arc::new(signer),
        config.client_config(DEFAULT_TIMEOUT),
    )
    .context("build Fireblocks client")?;

    info!(base_url = %fireblocks.base_url, "listing vault accounts");
    let response = client
        .list_vault_accounts_raw()
        .await
        .map_err(report)
        .context("list vault accounts")?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> OpsConfig {
        OpsConfig {
            host: Some(server.uri()),
            ..OpsConfig::default()
        }
    }

    #[tokio::test]
    async fn test_create_gas_wallets_batch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/custody/ethereum-sepolia/gas-wallets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "address": "0xabc",
            })))
            .expect(3)
            .mount(&server)
            .await;

        let addresses = assert_ok!(create_gas_wallets(&config_for(&server), 3).await);
        assert_eq!(addresses, vec!["0xabc"; 3]);
    }

    #[tokio::test]
    async fn test_blank_hmac_key_sends_unsigned_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/custody/ethereum-sepolia/gas-wallets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "address": "0xdef",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = OpsConfig {
            hmac_key: Some(String::new()),
            ..config_for(&server)
        };
        assert_ok!(create_gas_wallets(&config, 1).await);

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(!received[0].headers.contains_key("x-signature"));
    }

    #[tokio::test]
    async fn test_create_gas_wallets_aborts_on_first_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let err = create_gas_wallets(&config_for(&server), 5).await.unwrap_err();
        let source = err.downcast_ref::<FundsManagerError>().unwrap();
        assert!(source.is_remote_rejection());
    }

    #[tokio::test]
    async fn test_missing_host_fails_before_network() {
        let err = create_hot_wallet(&OpsConfig::default(), DEFAULT_VAULT, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("host is required"));
    }

    #[tokio::test]
    async fn test_invalid_hmac_key_fails_before_network() {
        let config = OpsConfig {
            host: Some("http://127.0.0.1:1".to_string()),
            hmac_key: Some("not-hex".to_string()),
            ..OpsConfig::default()
        };
        let err = refill_gas(&config, Decimal::ONE).await.unwrap_err();
        assert!(err.to_string().contains("load hmac key"));
    }

    #[tokio::test]
    async fn test_list_vault_accounts_requires_credentials() {
        let err = list_vault_accounts(&OpsConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("API key is required"));
    }
}
