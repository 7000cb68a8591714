/*
[INPUT]:  CLI arguments, optional YAML configuration file, environment
[OUTPUT]: One authenticated custody or Fireblocks operation, exit status
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use funds_manager_ops::OpsConfig;
use funds_manager_ops::commands::{self, DEFAULT_VAULT};

#[derive(Parser, Debug)]
#[command(name = "funds-manager-ops", version, about = "Operator commands for the funds manager custody service")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    /// Funds manager host, e.g. http://localhost:3000
    #[arg(long, global = true)]
    host: Option<String>,
    /// HMAC key as hex string (omit if auth is disabled)
    #[arg(long = "hmac-key", env = "FUNDS_MANAGER_HMAC_KEY", hide_env_values = true, global = true)]
    hmac_key: Option<String>,
    #[arg(long = "timeout-secs", value_name = "SECS", global = true)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create gas wallets
    CreateGasWallets {
        #[arg(long)]
        chain: Option<String>,
        /// Number of gas wallets to create
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: u32,
    },
    /// Create a hot wallet
    CreateHotWallet {
        #[arg(long)]
        chain: Option<String>,
        #[arg(long, default_value = DEFAULT_VAULT)]
        vault: String,
        /// Internal wallet UUID (generated if omitted)
        #[arg(long = "internal-wallet-id")]
        internal_wallet_id: Option<Uuid>,
    },
    /// Refill gas for all active gas wallets
    RefillGas {
        #[arg(long)]
        chain: Option<String>,
        /// Amount of ETH to top up each wallet to
        #[arg(long, default_value = "0.01")]
        amount: Decimal,
    },
    /// List Fireblocks vault accounts
    ListVaultAccounts {
        #[arg(long = "api-key")]
        api_key: Option<String>,
        /// Path to the RSA private key file
        #[arg(long = "secret-key-path", value_name = "PATH")]
        secret_key_path: Option<PathBuf>,
        #[arg(long = "base-url")]
        base_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = OpsConfig::load(args.config_path.as_deref()).context("load config")?;
    apply_overrides(&mut config, &args);
    info!(chain = %config.chain, "funds-manager-ops starting");

    match args.command {
        Command::CreateGasWallets { count, .. } => {
            commands::create_gas_wallets(&config, count).await?;
        }
        Command::CreateHotWallet {
            vault,
            internal_wallet_id,
            ..
        } => {
            commands::create_hot_wallet(&config, &vault, internal_wallet_id).await?;
        }
        Command::RefillGas { amount, .. } => {
            commands::refill_gas(&config, amount).await?;
        }
        Command::ListVaultAccounts { .. } => {
            commands::list_vault_accounts(&config).await?;
        }
    }

    Ok(())
}

/// Command-line values win over the config file
fn apply_overrides(config: &mut OpsConfig, args: &Cli) {
    if let Some(host) = &args.host {
        config.host = Some(host.clone());
    }
    if let Some(key) = &args.hmac_key {
        config.hmac_key = Some(key.clone());
    }
    if let Some(timeout) = args.timeout_secs {
        config.timeout_secs = Some(timeout);
    }

    match &args.command {
        Command::CreateGasWallets { chain, .. }
        | Command::CreateHotWallet { chain, .. }
        | Command::RefillGas { chain, .. } => {
            if let Some(chain) = chain {
                config.chain = chain.clone();
            }
        }
        Command::ListVaultAccounts {
            api_key,
            secret_key_path,
            base_url,
        } => {
            if let Some(api_key) = api_key {
                config.fireblocks.api_key = Some(api_key.clone());
            }
            if let Some(path) = secret_key_path {
                config.fireblocks.secret_key_path = Some(path.clone());
            }
            if let Some(base_url) = base_url {
                config.fireblocks.base_url = base_url.clone();
            }
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
