//! `chime` application entry point.
//!
//! This binary plays a sound, speaks a message or raises a desktop
//! notification. It uses `eyre` for opaque error handling at the application
//! boundary and maps the run outcome onto the process exit code.
//!
//! Options are resolved with layered precedence:
//! 1. Built-in defaults
//! 2. Configuration file (`--config`, or `chime.config.json` / `.chimerc`
//!    discovered from the working directory upwards)
//! 3. Command-line arguments

use std::process::ExitCode;

use clap::Parser;
use eyre::Result as EyreResult;
use mockable::DefaultEnv;
use tracing::{Level, debug, error};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chime::api::{NotifyParams, RunOutcome, notify};
use chime::config::{Cli, ConfigLoader};
use chime::dispatch::Dispatcher;

/// Application entry point.
///
/// Exits with status 0 when every selected channel succeeded and 1 when any
/// channel failed or the run could not start.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "parsed command line");

    match run(&cli) {
        Ok(RunOutcome::Delivered) => ExitCode::SUCCESS,
        Ok(RunOutcome::Failed { errors }) => {
            for message in &errors {
                error!("{message}");
            }
            ExitCode::FAILURE
        }
        Err(report) => {
            error!("{report:?}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects DEBUG and the
/// default is WARN.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Execute one notification run.
///
/// Keeps the async pipeline inside a runtime owned by this function so the
/// CLI boundary only sees the outcome or an `eyre::Report`.
fn run(cli: &Cli) -> EyreResult<RunOutcome> {
    let runtime = tokio::runtime::Runtime::new()?;
    let env = DefaultEnv::new();
    let loader = ConfigLoader::new(&env);
    let dispatcher = Dispatcher::system();

    let outcome = runtime.block_on(notify(NotifyParams {
        loader: &loader,
        config_path: cli.config.as_deref(),
        overrides: cli.overrides(),
        dispatcher: &dispatcher,
    }));
    Ok(outcome)
}
