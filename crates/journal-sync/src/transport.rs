//! Outbound transport for sync requests

use crate::config::GatewayConfig;
use crate::error::SyncError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// Delivers an encoded JSON document to a URL.
///
/// Implementations report any non-success outcome as a [`SyncError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<(), SyncError>;
}

/// HTTP transport backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a client honoring the configured timeout
    pub fn new(config: &GatewayConfig) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SyncError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<(), SyncError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status(status.as_u16()));
        }
        debug!(%url, status = status.as_u16(), "remote store accepted request");
        Ok(())
    }
}
