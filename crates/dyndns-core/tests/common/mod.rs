//! Test doubles and common utilities for engine contract tests
//!
//! These doubles record every call so tests can assert on order and count
//! without any network access.

#![allow(dead_code)]

use dyndns_core::error::{Error, Result};
use dyndns_core::traits::{DnsProvider, IpSource, WrittenRecord};
use dyndns_core::{AuthHeader, InvocationConfig, PublicAddress, RecordId, RecordPayload};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// An IP source returning a fixed address
pub struct StaticIpSource {
    address: String,
    call_count: Arc<AtomicUsize>,
}

impl StaticIpSource {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a new StaticIpSource that shares its counter with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            address: other.address.clone(),
            call_count: Arc::clone(&other.call_count),
        }
    }

    /// Get the number of times current() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IpSource for StaticIpSource {
    async fn current(&self) -> Result<PublicAddress> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        PublicAddress::new(&self.address).ok_or_else(|| Error::ip_resolution("empty"))
    }
}

/// An IP source whose service is always unreachable
pub struct UnreachableIpSource;

#[async_trait::async_trait]
impl IpSource for UnreachableIpSource {
    async fn current(&self) -> Result<PublicAddress> {
        Err(Error::ip_resolution("connection refused"))
    }
}

/// A provider call, as recorded by [`MockDnsProvider`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List { domain: String, name: String },
    Create { domain: String, payload: RecordPayload },
    Update { domain: String, id: RecordId, payload: RecordPayload },
}

/// What the mock answers to `list_matching()`
#[derive(Clone)]
pub enum Listing {
    Ids(Vec<RecordId>),
    Malformed(String),
}

/// A mock DnsProvider that records calls in order
pub struct MockDnsProvider {
    listing: Listing,
    calls: Arc<Mutex<Vec<Call>>>,
    fail_updates_after: Option<usize>,
}

impl MockDnsProvider {
    pub fn with_ids(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            listing: Listing::Ids(ids.into_iter().map(RecordId::from).collect()),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_updates_after: None,
        }
    }

    /// A provider with no matching record
    pub fn empty() -> Self {
        Self::with_ids(Vec::<u64>::new())
    }

    pub fn malformed(raw: &str) -> Self {
        Self {
            listing: Listing::Malformed(raw.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_updates_after: None,
        }
    }

    /// Make every update after the first `n` fail
    pub fn failing_updates_after(mut self, n: usize) -> Self {
        self.fail_updates_after = Some(n);
        self
    }

    /// Create a new MockDnsProvider that shares its call log with an existing one
    pub fn sharing_calls_with(other: &Self) -> Self {
        Self {
            listing: other.listing.clone(),
            calls: Arc::clone(&other.calls),
            fail_updates_after: other.fail_updates_after,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Create { .. }))
            .collect()
    }

    pub fn updated_ids(&self) -> Vec<RecordId> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Update { id, .. } => Some(id),
                _ => None,
            })
            .collect()
    }

    fn echo(payload: &RecordPayload, id: u64) -> WrittenRecord {
        let value = serde_json::json!({
            "id": id,
            "type": payload.record_type.as_str(),
            "name": payload.name,
            "data": payload.data.as_str(),
            "priority": null,
        });
        WrittenRecord::new(value.as_object().cloned().unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl DnsProvider for MockDnsProvider {
    async fn list_matching(&self, domain: &str, name: &str) -> Result<Vec<RecordId>> {
        self.calls.lock().unwrap().push(Call::List {
            domain: domain.to_string(),
            name: name.to_string(),
        });

        match &self.listing {
            Listing::Ids(ids) => Ok(ids.clone()),
            Listing::Malformed(raw) => Err(Error::malformed_listing(raw.clone())),
        }
    }

    async fn create_record(&self, domain: &str, payload: &RecordPayload) -> Result<WrittenRecord> {
        self.calls.lock().unwrap().push(Call::Create {
            domain: domain.to_string(),
            payload: payload.clone(),
        });
        Ok(Self::echo(payload, 1))
    }

    async fn update_record(
        &self,
        domain: &str,
        id: &RecordId,
        payload: &RecordPayload,
    ) -> Result<WrittenRecord> {
        let done = self.updated_ids().len();
        self.calls.lock().unwrap().push(Call::Update {
            domain: domain.to_string(),
            id: id.clone(),
            payload: payload.clone(),
        });

        if let Some(limit) = self.fail_updates_after
            && done >= limit
        {
            return Err(Error::malformed_response("missing domain_record"));
        }

        Ok(Self::echo(payload, 0))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Helper to create the invocation used by most tests
pub fn target(domain: &str, name: &str) -> InvocationConfig {
    InvocationConfig::new(domain, name, AuthHeader::from_token("test-token").unwrap())
}
