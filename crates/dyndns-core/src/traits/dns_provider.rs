// # DNS Provider Trait
//
// Defines the interface for reading and writing DNS records via a provider's
// REST API.
//
// ## Implementations
//
// - DigitalOcean: `dyndns-provider-digitalocean` crate
//
// ## Usage
//
// ```rust,ignore
// use dyndns_core::{DnsProvider, PublicAddress, RecordPayload};
//
// async fn point(provider: &dyn DnsProvider) -> dyndns_core::Result<()> {
//     let ids = provider.list_matching("example.com", "home").await?;
//     let payload = RecordPayload::new("home", PublicAddress::new("203.0.113.7").unwrap());
//     for id in &ids {
//         provider.update_record("example.com", id, &payload).await?;
//     }
//     Ok(())
// }
// ```

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;

use crate::record::{RecordId, RecordPayload};

/// Record as returned by the provider after a create or update
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenRecord {
    /// Raw fields of the returned record
    pub fields: Map<String, Value>,
}

impl WrittenRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The record with null-valued fields dropped
    pub fn without_nulls(&self) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

impl fmt::Display for WrittenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.fields.clone()))
    }
}

/// Trait for DNS provider implementations
///
/// The provider exposes no upsert, so the updater lists first and then
/// updates by id or creates.
///
/// # Trust Level: Untrusted
///
/// ## Allowed Capabilities
/// - ✅ Perform HTTP/HTTPS API calls to their endpoints only
/// - ✅ Parse provider-specific responses
///
/// ## Forbidden Capabilities
/// - ❌ Retry, back off, or spawn tasks
/// - ❌ Decide between create and update (owned by `DdnsEngine`)
/// - ❌ Resolve the public address (owned by `IpSource`)
/// - ❌ Log credentials
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// List ids of the records in `domain` whose name equals `name`
    ///
    /// Ids are returned in the provider's order.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<RecordId>)`: Zero or more matching ids
    /// - `Err(Error::MalformedListing)`: Body was not the expected structure
    async fn list_matching(
        &self,
        domain: &str,
        name: &str,
    ) -> Result<Vec<RecordId>, crate::Error>;

    /// Create a new record in `domain`
    async fn create_record(
        &self,
        domain: &str,
        payload: &RecordPayload,
    ) -> Result<WrittenRecord, crate::Error>;

    /// Overwrite the record `id` in `domain`
    async fn update_record(
        &self,
        domain: &str,
        id: &RecordId,
        payload: &RecordPayload,
    ) -> Result<WrittenRecord, crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
