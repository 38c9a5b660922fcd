//! Shell completion generation.
//!
//! Generates completion scripts for bash, zsh, fish, elvish, and `PowerShell`.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use rpcgen_core::cli::ExitCode;
use std::io::{self, Write};
use tracing::info;

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use clap_complete::Shell;
/// use rpcgen_cli::commands::completions::generate_completions;
///
/// let mut script = Vec::new();
/// generate_completions(Shell::Bash, &mut Command::new("rpcgen"), &mut script);
/// assert!(!script.is_empty());
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    info!("Generating {shell} completions");
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Prints the completion script for `shell` to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    let mut stdout = io::stdout();
    generate_completions(shell, cmd, &mut stdout);
    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}
