//! Core update engine
//!
//! The DdnsEngine is responsible for:
//! - Resolving the public address via IpSource (once per run)
//! - Listing existing records matching the target name
//! - Updating every match, or creating the record when there is none
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    PublicAddress    ┌──────────────┐
//! │  IpSource   │────────────────────▶│  DdnsEngine  │
//! └─────────────┘                     └──────────────┘
//!                                            │
//!                        list / create / update (sequential)
//!                                            ▼
//!                                     ┌──────────────┐
//!                                     │ DnsProvider  │
//!                                     └──────────────┘
//! ```
//!
//! ## Run States
//!
//! START → IDS_FETCHED → {UPDATING* | CREATING} → DONE
//!
//! There is no way back to START: any error ends the run.

use crate::config::{EngineOptions, InvocationConfig};
use crate::error::Result;
use crate::record::{RecordId, RecordPayload};
use crate::traits::{DnsProvider, IpSource};
use tracing::{debug, info};

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No record matched; one was created
    Created,

    /// `count` existing records were overwritten
    Updated {
        count: usize,
    },
}

/// Core update engine
///
/// Runs a single create-or-update pass for one `(domain, name)` pair. All
/// calls are awaited one after another; nothing runs concurrently.
pub struct DdnsEngine {
    /// IP source for the current public address
    ip_source: Box<dyn IpSource>,

    /// DNS provider for reading and writing records
    provider: Box<dyn DnsProvider>,

    /// The targeted record
    target: InvocationConfig,

    /// Run switches
    options: EngineOptions,
}

impl DdnsEngine {
    /// Create a new engine
    ///
    /// # Parameters
    ///
    /// - `ip_source`: IP source implementation
    /// - `provider`: DNS provider implementation
    /// - `target`: The `(domain, name)` pair to point at the public address
    /// - `options`: Run switches
    pub fn new(
        ip_source: Box<dyn IpSource>,
        provider: Box<dyn DnsProvider>,
        target: InvocationConfig,
        options: EngineOptions,
    ) -> Result<Self> {
        target.validate()?;

        Ok(Self {
            ip_source,
            provider,
            target,
            options,
        })
    }

    /// Run one update pass
    ///
    /// # Returns
    ///
    /// - `Ok(RunOutcome)`: Records were created or updated
    /// - `Err(Error)`: The run was aborted; no further calls were made
    pub async fn run_once(&self) -> Result<RunOutcome> {
        let address = self.ip_source.current().await?;
        debug!("current address {} ({})", address, address.record_type());

        let domain = &self.target.domain;
        let name = &self.target.name;

        debug!(
            "listing records for {} via {}",
            self.target.fqdn(),
            self.provider.provider_name()
        );
        let ids = self.provider.list_matching(domain, name).await?;
        let payload = RecordPayload::new(name.as_str(), address);

        if ids.is_empty() {
            info!("no existing record found for {}", self.target.fqdn());
            self.create(&payload).await?;
            return Ok(RunOutcome::Created);
        }

        info!("found {} records for {}", ids.len(), self.target.fqdn());
        for id in &ids {
            self.update(id, &payload).await?;
        }

        Ok(RunOutcome::Updated { count: ids.len() })
    }

    async fn create(&self, payload: &RecordPayload) -> Result<()> {
        if self.options.dry_run {
            info!(
                "[DRY-RUN] would add new record {} in {}",
                payload, self.target.domain
            );
            return Ok(());
        }

        let record = self
            .provider
            .create_record(&self.target.domain, payload)
            .await?;
        info!("added new record {}", record);
        Ok(())
    }

    async fn update(&self, id: &RecordId, payload: &RecordPayload) -> Result<()> {
        if self.options.dry_run {
            info!("[DRY-RUN] would update record {} with {}", id, payload);
            return Ok(());
        }

        let record = self
            .provider
            .update_record(&self.target.domain, id, payload)
            .await?;
        info!("updated record {} with {}", id, record.without_nulls());
        Ok(())
    }
}
