/*
[INPUT]:  Host configuration, request signers and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod custody;
pub mod error;
pub mod fireblocks;

pub use error::{FundsManagerError, Result};

pub use client::{ApiResponse, AuthenticatedClient, ClientConfig};
pub use custody::DEFAULT_CHAIN;
pub use fireblocks::{FIREBLOCKS_BASE_URL, VAULT_ACCOUNTS_PAGED_PATH};
