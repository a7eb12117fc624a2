// # DigitalOcean DNS Provider
//
// This crate provides the DigitalOcean DNS provider for the updater.
//
// ## Behavior
//
// - One HTTP request per trait call, no retry, no caching
// - The listing body must be `{"domain_records": [...]}`; anything else is
//   reported as `Error::MalformedListing` with the raw body
// - Write responses are NOT checked for HTTP status: any JSON body carrying a
//   `domain_record` object is taken as success
//
// ## Security Requirements
//
// - The bearer header NEVER appears in logs or Debug output
//
// ## API Reference
//
// - List records:   GET  `/v2/domains/:domain/records`
// - Create record:  POST `/v2/domains/:domain/records`
// - Update record:  PUT  `/v2/domains/:domain/records/:id`

use async_trait::async_trait;
use dyndns_core::traits::{DnsProvider, WrittenRecord};
use dyndns_core::{AuthHeader, Error, RecordId, RecordPayload, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

/// DigitalOcean API base URL
pub const DIGITALOCEAN_API_BASE: &str = dyndns_core::config::DEFAULT_API_BASE;

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

const PROVIDER: &str = "digitalocean";

#[derive(Debug, Deserialize)]
struct ListResponse {
    domain_records: Vec<ListedRecord>,
}

#[derive(Debug, Deserialize)]
struct ListedRecord {
    id: RecordId,
    name: String,
    /// type, data, ttl... kept for the debug listing
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct WriteResponse {
    domain_record: Map<String, Value>,
}

/// DigitalOcean DNS provider
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the auth header.
pub struct DigitalOceanProvider {
    /// API base, without trailing slash
    api_base: String,

    /// Bearer header sent on every request
    /// ⚠️ NEVER log this value
    auth: AuthHeader,

    /// HTTP client for API requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the auth header
impl std::fmt::Debug for DigitalOceanProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigitalOceanProvider")
            .field("api_base", &self.api_base)
            .field("auth", &"<REDACTED>")
            .finish()
    }
}

impl DigitalOceanProvider {
    /// Create a provider talking to the public DigitalOcean API
    pub fn new(auth: AuthHeader) -> Self {
        Self::with_base_url(DIGITALOCEAN_API_BASE, auth)
    }

    /// Create a provider talking to `api_base` (e.g. a mock server)
    pub fn with_base_url(api_base: impl Into<String>, auth: AuthHeader) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            auth,
            client,
        }
    }

    /// Records collection of `domain`
    fn records_url(&self, domain: &str) -> String {
        format!("{}/v2/domains/{}/records", self.api_base, domain)
    }

    fn record_url(&self, domain: &str, id: &RecordId) -> String {
        format!("{}/{}", self.records_url(domain), id)
    }

    /// Send a prepared request and return the body as text
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request
            .header(AuthHeader::NAME, self.auth.value())
            .send()
            .await
            .map_err(|e| Error::provider(PROVIDER, format!("HTTP request failed: {}", e)))?;

        tracing::debug!("{} answered {}", PROVIDER, response.status());

        response
            .text()
            .await
            .map_err(|e| Error::provider(PROVIDER, format!("Failed to read response: {}", e)))
    }

    fn parse_written(body: &str) -> Result<WrittenRecord> {
        let parsed: WriteResponse = serde_json::from_str(body).map_err(|e| {
            Error::malformed_response(format!("{} (body: {})", e, body))
        })?;
        Ok(WrittenRecord::new(parsed.domain_record))
    }
}

#[async_trait]
impl DnsProvider for DigitalOceanProvider {
    async fn list_matching(&self, domain: &str, name: &str) -> Result<Vec<RecordId>> {
        let body = self.send(self.client.get(self.records_url(domain))).await?;

        let listing: ListResponse =
            serde_json::from_str(&body).map_err(|_| Error::malformed_listing(body.as_str()))?;

        let matching: Vec<ListedRecord> = listing
            .domain_records
            .into_iter()
            .filter(|r| r.name == name)
            .collect();
        tracing::debug!("domain records: {:?}", matching);

        Ok(matching.into_iter().map(|r| r.id).collect())
    }

    async fn create_record(&self, domain: &str, payload: &RecordPayload) -> Result<WrittenRecord> {
        let url = self.records_url(domain);
        tracing::debug!("create url {} with {}", url, payload);

        let body = self.send(self.client.post(url).json(payload)).await?;
        Self::parse_written(&body)
    }

    async fn update_record(
        &self,
        domain: &str,
        id: &RecordId,
        payload: &RecordPayload,
    ) -> Result<WrittenRecord> {
        let url = self.record_url(domain, id);
        tracing::debug!("update url {} with {}", url, payload);

        let body = self.send(self.client.put(url).json(payload)).await?;
        Self::parse_written(&body)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
