//! DNS record model
//!
//! Request-scoped values exchanged with the DNS provider. Nothing here is
//! persisted; the provider owns the records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// DNS record type written by the updater
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// IPv4 address record
    A,
    /// IPv6 address record
    #[serde(rename = "AAAA")]
    Aaaa,
}

impl RecordType {
    /// Classify an address string.
    ///
    /// Returns `A` when `address` is a valid IPv4 literal and `AAAA` for
    /// anything else. IPv6 is not validated: garbage is classified as `AAAA`.
    pub fn classify(address: &str) -> Self {
        if address.parse::<Ipv4Addr>().is_ok() {
            Self::A
        } else {
            Self::Aaaa
        }
    }

    /// Wire name of the record type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The caller's public address as reported by the IP-echo service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PublicAddress(String);

impl PublicAddress {
    /// Wrap an address string, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(address: impl AsRef<str>) -> Option<Self> {
        let trimmed = address.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Record type matching this address's family
    pub fn record_type(&self) -> RecordType {
        RecordType::classify(&self.0)
    }
}

impl fmt::Display for PublicAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON body of every create and update call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordPayload {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub data: PublicAddress,
}

impl RecordPayload {
    /// Build the payload for `name`, deriving the type from `address`.
    pub fn new(name: impl Into<String>, address: PublicAddress) -> Self {
        Self {
            record_type: address.record_type(),
            name: name.into(),
            data: address,
        }
    }
}

impl fmt::Display for RecordPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{type: {}, name: {}, data: {}}}",
            self.record_type, self.name, self.data
        )
    }
}

/// Opaque identifier of an existing record, as returned by the provider
///
/// Providers return numeric or string ids; both are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{}", id),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}
