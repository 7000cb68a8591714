/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public funds manager adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AuthenticatedRequest,
    Clock,
    FireblocksSigner,
    HmacKey,
    HmacSigner,
    NonceSource,
    RequestSigner,
    SigningRequest,
    TokenClaims,
    Unsigned,
};

// Re-export commonly used types from http
pub use http::{
    ApiResponse,
    AuthenticatedClient,
    ClientConfig,
    FundsManagerError,
    Result,
};

// Re-export all types
pub use types::*;
