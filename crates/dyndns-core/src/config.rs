//! Configuration types for the updater
//!
//! All configuration comes from the command line and is built once per run.

use std::fmt;
use tracing::Level;

/// DigitalOcean API base URL
pub const DEFAULT_API_BASE: &str = "https://api.digitalocean.com";

/// Default IP-echo service
pub const DEFAULT_IP_SERVICE: &str = "https://api.ipify.org";

/// The `Authorization` header sent on every provider request
///
/// Built from the API token when arguments are parsed; the raw token is not
/// kept anywhere else.
///
/// # Security
///
/// The Debug implementation does NOT expose the header value.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeader {
    value: String,
}

impl AuthHeader {
    /// Header name
    pub const NAME: &'static str = "Authorization";

    /// Build the bearer header for `token`.
    pub fn from_token(token: &str) -> crate::Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(crate::Error::config("API token cannot be empty"));
        }

        Ok(Self {
            value: format!("Bearer {}", token),
        })
    }

    /// Header value (`Bearer <token>`)
    /// ⚠️ NEVER log this value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHeader")
            .field("value", &"Bearer <REDACTED>")
            .finish()
    }
}

/// The single `(domain, name)` pair targeted by a run
#[derive(Debug, Clone)]
pub struct InvocationConfig {
    /// DNS zone, e.g. "example.com"
    pub domain: String,

    /// Record host label, e.g. "home"
    pub name: String,

    /// Provider credentials
    pub auth: AuthHeader,
}

impl InvocationConfig {
    pub fn new(domain: impl Into<String>, name: impl Into<String>, auth: AuthHeader) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            auth,
        }
    }

    /// Fully qualified target, used in log lines ("home.example.com")
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.name, self.domain)
    }

    /// Validate the invocation values
    pub fn validate(&self) -> crate::Result<()> {
        if self.domain.trim().is_empty() {
            return Err(crate::Error::config("domain cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(crate::Error::config("record name cannot be empty"));
        }
        Ok(())
    }
}

/// Log verbosity selected from the `--verbose`/`--debug` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only
    #[default]
    Quiet,
    /// Informational messages
    Verbose,
    /// Everything
    Debug,
}

impl Verbosity {
    /// Select exactly one threshold; `debug` wins over `verbose`.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Self::Debug
        } else if verbose {
            Self::Verbose
        } else {
            Self::Quiet
        }
    }

    /// Maximum tracing level for this verbosity
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
        }
    }
}

/// Engine run switches
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Resolve and list, but send no POST/PUT
    pub dry_run: bool,
}
