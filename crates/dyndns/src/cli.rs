//! Command-line interface.

use clap::Parser;
use dyndns_core::config::{DEFAULT_API_BASE, DEFAULT_IP_SERVICE};
use dyndns_core::{AuthHeader, EngineOptions, InvocationConfig, Verbosity};

/// Point a DigitalOcean DNS record at the public IP of the machine that runs
/// this tool, creating the record when it does not exist yet.
#[derive(Parser, Debug)]
#[command(name = "do-dyndns", version, about)]
pub struct Cli {
    /// The domain to be updated
    pub domain: String,

    /// The name of the record to be updated
    pub name: String,

    /// Your API token from DigitalOcean
    #[arg(value_name = "TOKEN", value_parser = parse_token)]
    pub auth: AuthHeader,

    /// Log informational messages
    #[arg(short, long, conflicts_with = "debug")]
    pub verbose: bool,

    /// Log debug messages
    #[arg(short, long)]
    pub debug: bool,

    /// List records and log the writes that would be sent, without sending them
    #[arg(long)]
    pub dry_run: bool,

    /// DigitalOcean API base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    pub api_url: String,

    /// Service answering with the caller's public IP as plain text
    #[arg(long, value_name = "URL", default_value = DEFAULT_IP_SERVICE)]
    pub ip_service: String,
}

impl Cli {
    pub fn invocation(&self) -> InvocationConfig {
        InvocationConfig::new(&self.domain, &self.name, self.auth.clone())
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.debug)
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            dry_run: self.dry_run,
        }
    }
}

/// The token becomes the bearer header as soon as it is parsed.
fn parse_token(token: &str) -> Result<AuthHeader, String> {
    AuthHeader::from_token(token).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn positional_arguments() {
        let cli = Cli::try_parse_from(["do-dyndns", "example.com", "home", "tok"]).unwrap();

        let invocation = cli.invocation();
        assert_eq!(invocation.domain, "example.com");
        assert_eq!(invocation.name, "home");
        assert_eq!(invocation.auth.value(), "Bearer tok");
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
        assert!(!cli.engine_options().dry_run);
        assert_eq!(cli.api_url, "https://api.digitalocean.com");
        assert_eq!(cli.ip_service, "https://api.ipify.org");
    }

    #[test]
    fn verbosity_flags() {
        let cli = Cli::try_parse_from(["do-dyndns", "example.com", "home", "tok", "-v"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Verbose);

        let cli = Cli::try_parse_from(["do-dyndns", "example.com", "home", "tok", "--debug"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Debug);
    }

    #[test]
    fn verbose_and_debug_conflict() {
        let err = Cli::try_parse_from(["do-dyndns", "example.com", "home", "tok", "-v", "-d"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_positional_is_usage_error() {
        let err = Cli::try_parse_from(["do-dyndns", "example.com", "home"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn empty_token_is_rejected() {
        let err = Cli::try_parse_from(["do-dyndns", "example.com", "home", ""]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn endpoint_overrides_and_dry_run() {
        let cli = Cli::try_parse_from([
            "do-dyndns",
            "example.com",
            "home",
            "tok",
            "--dry-run",
            "--api-url",
            "http://127.0.0.1:8080",
            "--ip-service",
            "http://127.0.0.1:8081",
        ])
        .unwrap();

        assert!(cli.engine_options().dry_run);
        assert_eq!(cli.api_url, "http://127.0.0.1:8080");
        assert_eq!(cli.ip_service, "http://127.0.0.1:8081");
    }
}
