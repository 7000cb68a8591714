/*
[INPUT]:  Custody and Fireblocks API response schemas
[OUTPUT]: Typed response structs tolerant of extra fields
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGasWalletResponse {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHotWalletResponse {
    pub address: String,
}

/// Page returned by `GET /v1/vault/accounts_paged`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultAccountsPage {
    #[serde(default)]
    pub accounts: Vec<VaultAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
    #[serde(rename = "previousUrl", default, skip_serializing_if = "Option::is_none")]
    pub previous_url: Option<String>,
    #[serde(rename = "nextUrl", default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultAccount {
    pub id: String,
    pub name: String,
    #[serde(rename = "hiddenOnUI", default)]
    pub hidden_on_ui: bool,
    #[serde(rename = "autoFuel", default)]
    pub auto_fuel: bool,
    #[serde(default)]
    pub assets: Vec<VaultAsset>,
}

/// Balances are strings on the wire; unknown fields are kept verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultAsset {
    pub id: String,
    #[serde(default)]
    pub total: Option<String>,
    #[serde(default)]
    pub available: Option<String>,
    #[serde(default)]
    pub pending: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
