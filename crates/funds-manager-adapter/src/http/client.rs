/*
[INPUT]:  Host, timeouts, request signer and prepared SigningRequests
[OUTPUT]: ApiResponse (status, headers, parsed JSON) or a structured error
[POS]:    HTTP layer - authenticated request dispatcher
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info};

use crate::auth::{RequestSigner, SigningRequest, Unsigned};
use crate::http::{FundsManagerError, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Same connect timeout, different overall request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Decoded response of a successful call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `Value::Null` when the response body is empty
    pub body: Value,
}

impl ApiResponse {
    /// Deserialize the body into a typed response
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.body)?)
    }
}

/// Dispatches requests to one host, attaching credentials from a signer
///
/// One attempt per call; retry policy belongs to the caller.
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    http_client: Client,
    host: String,
    signer: Arc<dyn RequestSigner>,
}

impl AuthenticatedClient {
    /// Create an unsigned client with default configuration
    pub fn new(host: impl Into<String>) -> Result<Self> {
        Self::with_config(host, Arc::new(Unsigned), ClientConfig::default())
    }

    /// Create a client with a signer and custom configuration
    pub fn with_config(
        host: impl Into<String>,
        signer: Arc<dyn RequestSigner>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            http_client,
            host: host.into(),
            signer,
        })
    }

    /// Replace the signer
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = signer;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn signer(&self) -> &dyn RequestSigner {
        self.signer.as_ref()
    }

    /// Full URL as `host + path`, without normalization
    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.host, path))?)
    }

    /// Sign and send a request
    ///
    /// A non-2xx status is logged with the raw body and returned as
    /// [`FundsManagerError::RemoteRejection`].
    pub async fn send(&self, request: SigningRequest) -> Result<ApiResponse> {
        let authenticated = self.signer.attach_credential(request)?;
        let request = authenticated.request;
        let url = self.url(request.path())?;

        let mut builder = self
            .http_client
            .request(request.method().clone(), url)
            .headers(authenticated.headers);
        if request.has_body() {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(request.body().to_vec());
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;

        if !status.is_success() {
            error!(
                status = status.as_u16(),
                body = %text,
                method = %request.method(),
                path = request.path(),
                "remote rejected request"
            );
            return Err(FundsManagerError::remote_rejection(status, text));
        }

        info!(
            status = status.as_u16(),
            method = %request.method(),
            path = request.path(),
            scheme = self.signer.scheme(),
            "request completed"
        );

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }

    /// Sign, send and decode a typed response
    pub async fn send_json<T: DeserializeOwned>(&self, request: SigningRequest) -> Result<T> {
        self.send(request).await?.json()
    }
}
