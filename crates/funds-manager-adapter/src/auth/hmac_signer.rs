/*
[INPUT]:  Hex-encoded shared secret and canonical request message
[OUTPUT]: Lower-case hex HMAC-SHA256 signature (X-Signature header)
[POS]:    Auth layer - symmetric signing for the funds manager custody API
[UPDATE]: When changing the symmetric signing algorithm or key format
*/

use std::fmt;

use ::hmac::{Hmac, Mac};
use reqwest::Method;
use sha2::Sha256;

use super::canonical::{SigningRequest, build_message};
use crate::http::{FundsManagerError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the HMAC signature
pub const X_SIGNATURE_HEADER: &str = "X-Signature";

/// Raw symmetric key bytes
#[derive(Clone, PartialEq, Eq)]
pub struct HmacKey(Vec<u8>);

impl HmacKey {
    /// Decode a key from its hex representation
    pub fn from_hex(encoded: &str) -> Result<Self> {
        hex::decode(encoded.trim())
            .map(Self)
            .map_err(|e| FundsManagerError::InvalidKeyEncoding(e.to_string()))
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(&self.0)
            .map_err(|e| FundsManagerError::InvalidKeyEncoding(e.to_string()))
    }
}

impl fmt::Debug for HmacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacKey(<{} bytes redacted>)", self.0.len())
    }
}

/// Signs requests with HMAC-SHA256 over `METHOD || PATH || BODY`
///
/// Deterministic: no nonce or timestamp is mixed in.
#[derive(Debug, Clone)]
pub struct HmacSigner {
    key: HmacKey,
}

impl HmacSigner {
    pub fn new(key: HmacKey) -> Self {
        Self { key }
    }

    pub fn from_hex(encoded: &str) -> Result<Self> {
        HmacKey::from_hex(encoded).map(Self::new)
    }

    /// Hex signature for a request
    pub fn sign_request(&self, request: &SigningRequest) -> Result<String> {
        let mut mac = self.key.mac()?;
        mac.update(&request.message());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Check a hex signature against a request in constant time
    pub fn verify_request(&self, request: &SigningRequest, signature_hex: &str) -> Result<bool> {
        let Ok(expected) = hex::decode(signature_hex) else {
            return Ok(false);
        };
        let mut mac = self.key.mac()?;
        mac.update(&request.message());
        Ok(mac.verify_slice(&expected).is_ok())
    }
}

/// Sign `method`, `path` and `body` with a hex-encoded key
pub fn sign(key_hex: &str, method: &Method, path: &str, body: &[u8]) -> Result<String> {
    let key = HmacKey::from_hex(key_hex)?;
    let mut mac = key.mac()?;
    mac.update(&build_message(method, path, body));
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verify a hex signature produced by [`sign`]
pub fn verify(key: &HmacKey, request: &SigningRequest, signature_hex: &str) -> Result<bool> {
    HmacSigner::new(key.clone()).verify_request(request, signature_hex)
}
