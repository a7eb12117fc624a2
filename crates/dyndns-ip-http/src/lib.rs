// # HTTP IP Source
//
// This crate provides an IP source backed by a public "what is my IP" echo
// service (ipify by default).
//
// ## Behavior
//
// - One GET per call, no caching, no retry
// - The body is the address as plain text; it is trimmed and returned as-is
// - Unreachable service, non-2xx status or empty body → `Error::IpResolution`

use dyndns_core::traits::IpSource;
use dyndns_core::{Error, PublicAddress, Result};

use std::time::Duration;

/// Default echo service
pub const DEFAULT_IP_SERVICE: &str = dyndns_core::config::DEFAULT_IP_SERVICE;

/// Default HTTP timeout for the echo service
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// IP source that asks an HTTP echo service for the caller's address
#[derive(Debug)]
pub struct HttpIpSource {
    /// URL to fetch the address from
    url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpIpSource {
    /// Create a new HTTP IP source
    ///
    /// # Parameters
    ///
    /// - `url`: URL to fetch the address from (e.g., "https://api.ipify.org")
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::builder()
                .timeout(DEFAULT_HTTP_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for HttpIpSource {
    fn default() -> Self {
        Self::new(DEFAULT_IP_SERVICE)
    }
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<PublicAddress> {
        tracing::debug!("requesting current address from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::ip_resolution(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::ip_resolution(format!(
                "echo service answered {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::ip_resolution(format!("failed to read response: {}", e)))?;

        PublicAddress::new(&body).ok_or_else(|| Error::ip_resolution("empty response body"))
    }
}
