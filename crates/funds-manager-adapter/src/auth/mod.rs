/*
[INPUT]:  Key material, request method/path/body, clock and nonce providers
[OUTPUT]: Request credentials (HMAC signature header or RS256 bearer token)
[POS]:    Auth layer - request authentication for custody APIs
[UPDATE]: When signing schemes or credential headers change
*/

pub mod canonical;
pub mod hmac_signer;
pub mod provider;
pub mod signer;
pub mod token;

pub use canonical::{SigningRequest, build_message};
pub use hmac_signer::{HmacKey, HmacSigner, X_SIGNATURE_HEADER};
pub use provider::{Clock, FixedClock, FixedNonce, NonceSource, RandomNonce, SystemClock};
pub use signer::{AuthenticatedRequest, RequestSigner, Unsigned, has_hmac_key, hmac_or_unsigned};
pub use token::{FireblocksSigner, TOKEN_TTL_SECS, TokenClaims, X_API_KEY_HEADER, body_hash};
