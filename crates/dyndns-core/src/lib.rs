// # dyndns-core
//
// Core library for the DigitalOcean dynamic DNS updater.
//
// ## Architecture Overview
//
// This library provides the core functionality for one dynamic DNS pass:
// - **IpSource**: Trait for determining the caller's public address
// - **DnsProvider**: Trait for listing, creating and updating DNS records
// - **DdnsEngine**: Orchestrates address lookup → list → update-or-create
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Core logic is separate from HTTP implementations
// 2. **Fail Fast**: Any error aborts the run and is returned to the caller
// 3. **Library-First**: The binary only parses arguments and maps exit codes

pub mod traits;
pub mod engine;
pub mod config;
pub mod error;
pub mod record;

// Re-export core types for convenience
pub use traits::{IpSource, DnsProvider, WrittenRecord};
pub use engine::{DdnsEngine, RunOutcome};
pub use config::{AuthHeader, EngineOptions, InvocationConfig, Verbosity};
pub use error::{Error, Result};
pub use record::{PublicAddress, RecordId, RecordPayload, RecordType};
