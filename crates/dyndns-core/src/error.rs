//! Error types for the dynamic DNS updater
//!
//! Every failure is fatal to the run. Components return these values up to
//! the binary, which alone decides on the process exit code.

use thiserror::Error;

/// Result type alias for updater operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the updater
#[derive(Error, Debug)]
pub enum Error {
    /// The IP-echo service was unreachable or answered with something unusable
    #[error("unable to determine current address: {0}")]
    IpResolution(String),

    /// The record listing body could not be parsed; carries the raw body
    #[error("unexpected response from provider: {content}")]
    MalformedListing {
        /// Raw response body as received
        content: String,
    },

    /// A create/update response did not have the expected shape
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Transport-level failure talking to the DNS provider
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },

    /// Invalid invocation values
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an IP resolution error
    pub fn ip_resolution(msg: impl Into<String>) -> Self {
        Self::IpResolution(msg.into())
    }

    /// Create a malformed listing error from the raw body
    pub fn malformed_listing(content: impl Into<String>) -> Self {
        Self::MalformedListing {
            content: content.into(),
        }
    }

    /// Create a malformed write-response error
    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this failure is one of the two the updater reports with exit
    /// code 1 (address lookup, unreadable listing).
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::IpResolution(_) | Self::MalformedListing { .. })
    }
}
