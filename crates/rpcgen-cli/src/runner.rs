//! Command execution and runtime logic.
//!
//! Contains the top-level run sequence and logging initialization.

use anyhow::Result;
use clap::CommandFactory;
use rpcgen_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands;
use crate::commands::generate::GenerateOptions;
use crate::config::Config;

/// Initializes logging infrastructure.
///
/// `RUST_LOG` overrides `level` unless `verbose` is set, which forces
/// debug. Log lines go to stderr so stdout stays clean for `--dry-run`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool, level: &str, log_format: &str) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}

/// Runs the CLI with parsed arguments.
///
/// Completions short-circuit everything else. Otherwise the
/// configuration file is loaded first since it supplies the log level
/// and the default summary format.
///
/// # Errors
///
/// Returns an error if configuration, logging setup, or generation fails.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        return commands::completions::run(shell, &mut cmd);
    }

    let config = Config::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.general.log_level, &config.general.log_format)?;

    let output_format = cli
        .format
        .as_deref()
        .unwrap_or(&config.general.default_format)
        .parse::<OutputFormat>()?;

    let options = GenerateOptions::from_cli(cli)?;
    commands::generate::run(&options, &config, output_format)
}

/// Maps a failed run to its exit status.
///
/// The first [`rpcgen_core::Error`] in the chain decides; anything else
/// is a general error.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<rpcgen_core::Error>())
        .map_or(ExitCode::ERROR, rpcgen_core::Error::exit_code)
}
