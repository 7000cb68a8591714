/*
[INPUT]:  Prepared SigningRequest and the active signing scheme
[OUTPUT]: AuthenticatedRequest carrying credential headers
[POS]:    Auth layer - scheme-agnostic credential attachment for the dispatcher
[UPDATE]: When adding a signing scheme or changing credential headers
*/

use std::fmt::Debug;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use super::canonical::SigningRequest;
use super::hmac_signer::{HmacSigner, X_SIGNATURE_HEADER};
use super::token::{FireblocksSigner, X_API_KEY_HEADER};
use crate::http::{FundsManagerError, Result};

/// A request plus the credential headers produced for it
#[derive(Debug, Clone)]
pub struct AuthenticatedRequest {
    pub request: SigningRequest,
    pub headers: HeaderMap,
}

impl AuthenticatedRequest {
    /// Wrap a request with no credential headers
    pub fn unsigned(request: SigningRequest) -> Self {
        Self {
            request,
            headers: HeaderMap::new(),
        }
    }

    fn insert(&mut self, name: &str, value: &str) -> Result<()> {
        let header = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| FundsManagerError::Config(format!("invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| FundsManagerError::Config(format!("invalid {name} header value: {e}")))?;
        self.headers.insert(header, value);
        Ok(())
    }
}

/// Attaches a credential to an outbound request
///
/// Implementations must derive every credential from the request itself and
/// must not cache credentials between calls.
pub trait RequestSigner: Debug + Send + Sync {
    /// Name of the scheme, for logs
    fn scheme(&self) -> &'static str;

    fn attach_credential(&self, request: SigningRequest) -> Result<AuthenticatedRequest>;
}

/// Sends requests without any credential
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsigned;

impl RequestSigner for Unsigned {
    fn scheme(&self) -> &'static str {
        "none"
    }

    fn attach_credential(&self, request: SigningRequest) -> Result<AuthenticatedRequest> {
        Ok(AuthenticatedRequest::unsigned(request))
    }
}

impl RequestSigner for HmacSigner {
    fn scheme(&self) -> &'static str {
        "hmac-sha256"
    }

    fn attach_credential(&self, request: SigningRequest) -> Result<AuthenticatedRequest> {
        let signature = self.sign_request(&request)?;
        debug!(
            scheme = self.scheme(),
            method = %request.method(),
            path = request.path(),
            "attached request signature"
        );
        let mut authenticated = AuthenticatedRequest::unsigned(request);
        authenticated.insert(X_SIGNATURE_HEADER, &signature)?;
        Ok(authenticated)
    }
}

impl RequestSigner for FireblocksSigner {
    fn scheme(&self) -> &'static str {
        "rs256-jwt"
    }

    fn attach_credential(&self, request: SigningRequest) -> Result<AuthenticatedRequest> {
        let token = self.mint_for(&request)?;
        debug!(
            scheme = self.scheme(),
            method = %request.method(),
            path = request.path(),
            "minted bearer token"
        );
        let mut authenticated = AuthenticatedRequest::unsigned(request);
        authenticated.insert(X_API_KEY_HEADER, self.api_key())?;
        let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| FundsManagerError::Config(format!("invalid bearer token: {e}")))?;
        authenticated.headers.insert(AUTHORIZATION, bearer);
        Ok(authenticated)
    }
}

/// Whether an optional HMAC key is present and non-blank
pub fn has_hmac_key(hmac_key_hex: Option<&str>) -> bool {
    hmac_key_hex.is_some_and(|key| !key.trim().is_empty())
}

/// Build the signer for an optional HMAC key; a missing or blank key disables signing
pub fn hmac_or_unsigned(hmac_key_hex: Option<&str>) -> Result<Box<dyn RequestSigner>> {
    match hmac_key_hex {
        Some(key) if !key.trim().is_empty() => Ok(Box::new(HmacSigner::from_hex(key)?)),
        _ => Ok(Box::new(Unsigned)),
    }
}
