/*
[INPUT]:  HTTP method, request path and serialized body bytes
[OUTPUT]: Canonical byte sequence that both signing schemes cover
[POS]:    Auth layer - canonical message construction
[UPDATE]: When the signed message layout changes
*/

use reqwest::Method;
use serde::Serialize;

use crate::http::Result;

/// Immutable input to every signer
///
/// The body is held as the exact bytes that will be transmitted, so the
/// dispatcher never re-serializes what was signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    method: Method,
    path: String,
    body: Vec<u8>,
}

impl SigningRequest {
    /// Create a request with a raw body
    pub fn new(method: Method, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            method,
            path: path.into(),
            body: body.into(),
        }
    }

    /// Create a request without a body
    pub fn empty(method: Method, path: impl Into<String>) -> Self {
        Self::new(method, path, Vec::new())
    }

    /// Create a request whose body is the compact JSON encoding of `payload`
    ///
    /// Keys are written in struct declaration order with no whitespace.
    pub fn json<T: Serialize + ?Sized>(
        method: Method,
        path: impl Into<String>,
        payload: &T,
    ) -> Result<Self> {
        let body = serde_json::to_vec(payload)?;
        Ok(Self::new(method, path, body))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path including any query string, exactly as it goes on the wire
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path with the query string stripped
    pub fn signed_path(&self) -> &str {
        self.path
            .split_once('?')
            .map_or(self.path.as_str(), |(path, _)| path)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Canonical message for this request
    pub fn message(&self) -> Vec<u8> {
        build_message(&self.method, self.signed_path(), &self.body)
    }
}

/// Concatenate `METHOD || PATH || BODY` with no delimiter
pub fn build_message(method: &Method, path: &str, body: &[u8]) -> Vec<u8> {
    let method = method.as_str().to_ascii_uppercase();
    let mut message = Vec::with_capacity(method.len() + path.len() + body.len());
    message.extend_from_slice(method.as_bytes());
    message.extend_from_slice(path.as_bytes());
    message.extend_from_slice(body);
    message
}
