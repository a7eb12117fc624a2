// # IP Source Trait
//
// Defines the interface for determining the caller's public address.
//
// ## Implementations
//
// - HTTP echo service: `dyndns-ip-http` crate
//
// ## Usage
//
// ```rust,ignore
// use dyndns_core::IpSource;
//
// async fn show(source: &dyn IpSource) -> dyndns_core::Result<()> {
//     let address = source.current().await?;
//     println!("public address: {}", address);
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::record::PublicAddress;

/// Trait for IP source implementations
///
/// The updater asks for the address exactly once per run, before talking to
/// the DNS provider.
///
/// # Trust Level: Semi-Trusted
///
/// ## Allowed Capabilities
/// - ✅ One outbound request per call to their own endpoint
/// - ✅ Parse and trim the service response
///
/// ## Forbidden Capabilities
/// - ❌ Retry or back off (a failed lookup is fatal to the run)
/// - ❌ Cache the address between calls
/// - ❌ Talk to the DNS provider
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Get the current public address
    ///
    /// # Returns
    ///
    /// - `Ok(PublicAddress)`: The address as reported by the service
    /// - `Err(Error::IpResolution)`: Service unreachable or response unusable
    async fn current(&self) -> Result<PublicAddress, crate::Error>;
}
