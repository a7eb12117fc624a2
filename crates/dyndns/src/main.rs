// # do-dyndns
//
// Thin entry point for the dynamic DNS updater. It is responsible for:
// 1. Parsing the command line
// 2. Installing the log sink
// 3. Wiring the HTTP IP source and the DigitalOcean provider into the engine
// 4. Turning the run result into an exit code
//
// All update logic lives in dyndns-core.
//
// ## Example
//
// ```bash
// do-dyndns example.com home "$DO_TOKEN" --verbose
// ```

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use dyndns_core::{DdnsEngine, Error, RunOutcome};
use dyndns_ip_http::HttpIpSource;
use dyndns_provider_digitalocean::DigitalOceanProvider;
use std::process::ExitCode;
use tracing::{error, info};

use crate::cli::Cli;

/// Exit codes for the different ways a run can end
///
/// - 0: Records created or updated
/// - 1: Public address or record listing could not be obtained
/// - 2: Any other failure (transport, unexpected provider response)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DdnsExitCode {
    Success = 0,
    LookupFailed = 1,
    RuntimeError = 2,
}

impl From<DdnsExitCode> for ExitCode {
    fn from(code: DdnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    // Usage errors exit here with clap's own code, before any network call
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbosity()) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DdnsExitCode::RuntimeError.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return DdnsExitCode::RuntimeError.into();
        }
    };

    let code = match rt.block_on(run(&cli)) {
        Ok(outcome) => {
            match outcome {
                RunOutcome::Created => info!("record {}.{} created", cli.name, cli.domain),
                RunOutcome::Updated { count } => {
                    info!("{} record(s) for {}.{} updated", count, cli.name, cli.domain)
                }
            }
            DdnsExitCode::Success
        }
        Err(e) => report(&e),
    };

    code.into()
}

/// Run one update pass with the real HTTP collaborators
async fn run(cli: &Cli) -> Result<RunOutcome> {
    let invocation = cli.invocation();

    let ip_source = HttpIpSource::new(&cli.ip_service);
    let provider = DigitalOceanProvider::with_base_url(&cli.api_url, invocation.auth.clone());

    let engine = DdnsEngine::new(
        Box::new(ip_source),
        Box::new(provider),
        invocation,
        cli.engine_options(),
    )?;

    Ok(engine.run_once().await?)
}

/// Log a failed run and pick its exit code
fn report(err: &anyhow::Error) -> DdnsExitCode {
    let cause = err.downcast_ref::<Error>();

    match cause {
        Some(Error::IpResolution(reason)) => {
            error!("unable to determine current address");
            tracing::debug!("address lookup failed: {}", reason);
        }
        Some(Error::MalformedListing { content }) => {
            error!("unexpected response from {}", content);
        }
        _ => error!("{:#}", err),
    }

    if cause.is_some_and(Error::is_lookup_failure) {
        DdnsExitCode::LookupFailed
    } else {
        DdnsExitCode::RuntimeError
    }
}
