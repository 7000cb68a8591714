/*
[INPUT]:  Optional YAML configuration file and command-line overrides
[OUTPUT]: Resolved operator settings (host, keys, chain, timeouts)
[POS]:    Configuration layer - operator command setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use funds_manager_adapter::ClientConfig;
use funds_manager_adapter::http::{DEFAULT_CHAIN, FIREBLOCKS_BASE_URL};
use serde::{Deserialize, Serialize};

/// Top-level configuration for operator commands
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpsConfig {
    /// Funds manager host, e.g. `http://localhost:3000`
    #[serde(default)]
    pub host: Option<String>,
    /// Hex HMAC key; absent when the server runs with auth disabled
    #[serde(default)]
    pub hmac_key: Option<String>,
    #[serde(default = "default_chain")]
    pub chain: String,
    /// Overall request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub fireblocks: FireblocksConfig,
}

/// Fireblocks API credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FireblocksConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    /// Path to the PEM-encoded RSA private key
    #[serde(default)]
    pub secret_key_path: Option<PathBuf>,
    #[serde(default = "default_fireblocks_base_url")]
    pub base_url: String,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            host: None,
            hmac_key: None,
            chain: default_chain(),
            timeout_secs: None,
            fireblocks: FireblocksConfig::default(),
        }
    }
}

impl Default for FireblocksConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            secret_key_path: None,
            base_url: default_fireblocks_base_url(),
        }
    }
}

fn default_chain() -> String {
    DEFAULT_CHAIN.to_string()
}

fn default_fireblocks_base_url() -> String {
    FIREBLOCKS_BASE_URL.to_string()
}

impl OpsConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content).context("parse config yaml")?;
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Funds manager host, required by custody commands
    pub fn require_host(&self) -> Result<&str> {
        self.host
            .as_deref()
            .context("funds manager host is required (--host or `host:` in config)")
    }

    /// Client configuration, falling back to `default_timeout` when unset
    pub fn client_config(&self, default_timeout: Duration) -> ClientConfig {
        let timeout = self
            .timeout_secs
            .map_or(default_timeout, Duration::from_secs);
        ClientConfig::default().with_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OpsConfig::default();
        assert_eq!(config.chain, "ethereum-sepolia");
        assert_eq!(config.fireblocks.base_url, "https://api.fireblocks.io");
        assert!(config.require_host().is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
host: http://localhost:3000
hmac_key: deadbeef
chain: base-sepolia
timeout_secs: 60
fireblocks:
  api_key: key-id
  secret_key_path: /etc/fireblocks/secret.pem
"#;
        let config: OpsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.require_host().unwrap(), "http://localhost:3000");
        assert_eq!(config.hmac_key.as_deref(), Some("deadbeef"));
        assert_eq!(config.chain, "base-sepolia");
        assert_eq!(config.fireblocks.api_key.as_deref(), Some("key-id"));
        assert_eq!(config.fireblocks.base_url, "https://api.fireblocks.io");
        assert_eq!(
            config.client_config(Duration::from_secs(30)).timeout,
            Duration::from_secs(60)
        );
    }

    #[test]
    fn test_client_config_falls_back_to_command_default() {
        let config = OpsConfig::default();
        assert_eq!(
            config.client_config(Duration::from_secs(300)).timeout,
            Duration::from_secs(300)
        );
    }

    #[test]
    fn test_demo_config_keeps_command_timeouts() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/ops.yaml");
        let config = OpsConfig::from_file(&path).unwrap();
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.hmac_key, None);
        assert_eq!(
            config.client_config(Duration::from_secs(300)).timeout,
            Duration::from_secs(300)
        );
    }
}
