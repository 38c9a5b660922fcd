//! Generate command implementation.
//!
//! This command:
//! 1. Merges flags and the configuration file into one `GeneratorConfig`
//! 2. Reads the source file and renders the stubs in memory
//! 3. Writes the target file (or prints it for `--dry-run`)
//! 4. Runs the formatter on the written file
//!
//! The target is only created once rendering has succeeded, so a
//! validation failure never leaves a file behind.

use crate::cli::Cli;
use crate::config::Config;
use crate::formatters::format_output;
use anyhow::Result;
use colored::Colorize;
use rpcgen_codegen::StubGenerator;
use rpcgen_core::cli::{ExitCode, OutputFormat};
use rpcgen_core::{Error, FormatterConfig, GeneratorConfig};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Generation flags from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// `--source`
    pub source: PathBuf,
    /// `--type`
    pub interface: String,
    /// `--target`
    pub target: Option<PathBuf>,
    /// `--imports`
    pub imports: Option<Vec<String>>,
    /// `--package`
    pub package: Option<String>,
    /// `--rpc_client_type`
    pub rpc_client_type: Option<String>,
    /// `--no-format`
    pub no_format: bool,
    /// `--dry-run`
    pub dry_run: bool,
}

impl GenerateOptions {
    /// Extracts generation flags from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `--source` or `--type` is missing.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let (Some(source), Some(interface)) = (cli.source.clone(), cli.interface.clone()) else {
            return Err(Error::InvalidArgument("expected --source and --type".to_string()).into());
        };
        Ok(Self {
            source,
            interface,
            target: cli.target.clone(),
            imports: cli.imports.clone(),
            package: cli.package.clone(),
            rpc_client_type: cli.rpc_client_type.clone(),
            no_format: cli.no_format,
            dry_run: cli.dry_run,
        })
    }
}

/// Result of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    /// Interface the stubs were generated for
    pub interface: String,
    /// Package clause of the generated file
    pub package: String,
    /// Methods that received stubs, in declaration order
    pub methods: Vec<String>,
    /// Imports emitted
    pub imports: Vec<String>,
    /// Written file
    pub target: String,
    /// Size of the generated file in bytes
    pub bytes: usize,
    /// Whether the formatter ran
    pub formatted: bool,
}

/// Merges flags over the configuration file over built-in defaults.
#[must_use]
pub fn build_config(options: &GenerateOptions, file: &Config) -> GeneratorConfig {
    let mut builder = GeneratorConfig::builder()
        .source(options.source.clone())
        .interface_name(options.interface.clone());

    if let Some(target) = &options.target {
        builder = builder.target(target.clone());
    }
    if let Some(imports) = options.imports.as_ref().or(file.generator.imports.as_ref()) {
        builder = builder.imports(imports.clone());
    }
    if let Some(package) = &options.package {
        builder = builder.package_name(package.clone());
    }
    if let Some(client_type) = options
        .rpc_client_type
        .as_ref()
        .or(file.generator.rpc_client_type.as_ref())
    {
        builder = builder.rpc_client_type(client_type.clone());
    }
    if let Some(suffix) = &file.generator.target_suffix {
        builder = builder.target_suffix(suffix.clone());
    }

    let formatter = file.formatter.resolve();
    builder
        .formatter_command(formatter.command)
        .format(formatter.enabled && !options.no_format)
        .build()
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if:
/// - Flags or configuration are invalid
/// - The source file cannot be read or fails validation
/// - The target file cannot be written
/// - The formatter fails (the unformatted file stays on disk)
pub fn run(options: &GenerateOptions, file_config: &Config, output_format: OutputFormat) -> Result<ExitCode> {
    let config = build_config(options, file_config);
    config.validate()?;
    debug!("Generator configuration: {config:?}");

    let source = fs::read_to_string(&config.source).map_err(|source| Error::IoError {
        path: config.source.display().to_string(),
        source,
    })?;

    let generator = StubGenerator::new()?;
    let stubs = generator.generate(&config, &source)?;

    if options.dry_run {
        info!("Dry run: not writing {}", stubs.target.display());
        print!("{}", stubs.content);
        return Ok(ExitCode::SUCCESS);
    }

    write_stubs(&stubs.target, &stubs.content)?;
    info!("Wrote {}", stubs.target.display());

    let formatted = if config.formatter.enabled {
        run_formatter(&config.formatter, &stubs.target)?;
        true
    } else {
        false
    };

    let summary = GenerationSummary {
        interface: stubs.context.interface_type_name.clone(),
        package: stubs.context.package_name.clone(),
        methods: stubs.context.methods.iter().map(|m| m.name.clone()).collect(),
        imports: stubs.context.imports.clone(),
        target: stubs.target.display().to_string(),
        bytes: stubs.content.len(),
        formatted,
    };

    if output_format == OutputFormat::Pretty {
        println!(
            "{} wrote RPC stubs for {} to {}",
            "✓".green(),
            summary.interface.bold(),
            summary.target.bold()
        );
    }
    println!("{}", format_output(&summary, output_format)?);

    Ok(ExitCode::SUCCESS)
}

/// Creates or truncates `target` and writes `content`.
///
/// # Errors
///
/// Returns [`Error::IoError`] if the file cannot be written.
pub fn write_stubs(target: &Path, content: &str) -> rpcgen_core::Result<()> {
    fs::write(target, content).map_err(|source| Error::IoError {
        path: target.display().to_string(),
        source,
    })
}

/// Runs the formatter command with `target` appended.
///
/// # Errors
///
/// Returns [`Error::FormatterFailed`] if the program cannot be found
/// or exits unsuccessfully, with its combined output.
pub fn run_formatter(formatter: &FormatterConfig, target: &Path) -> rpcgen_core::Result<()> {
    let Some((program, args)) = formatter.command.split_first() else {
        return Err(Error::ConfigError {
            message: "formatter is enabled but no formatter command is set".to_string(),
        });
    };
    let command_line = format!("{} {}", formatter.command.join(" "), target.display());

    let resolved = which::which(program).map_err(|e| Error::FormatterFailed {
        command: command_line.clone(),
        output: format!("{program}: {e}"),
    })?;
    debug!("Running formatter {}", resolved.display());

    let output = Command::new(&resolved)
        .args(args)
        .arg(target)
        .output()
        .map_err(|source| Error::IoError {
            path: resolved.display().to_string(),
            source,
        })?;

    if !output.status.success() {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        return Err(Error::FormatterFailed {
            command: command_line,
            output: combined.trim().to_string(),
        });
    }

    info!("Formatted {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FormatterSection, GeneratorSection};

    fn options() -> GenerateOptions {
        GenerateOptions {
            source: PathBuf::from("arith.go"),
            interface: "Arith".to_string(),
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn test_builtin_defaults() {
        let config = build_config(&options(), &Config::default());
        assert_eq!(config.imports, vec!["net/rpc"]);
        assert_eq!(config.rpc_client_type, "*rpc.Client");
        assert!(config.formatter.enabled);
        assert_eq!(config.formatter.command, vec!["go", "fmt"]);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = Config {
            generator: GeneratorSection {
                imports: Some(vec!["context".to_string()]),
                rpc_client_type: Some("Caller".to_string()),
                target_suffix: Some("_rpc".to_string()),
            },
            formatter: FormatterSection {
                enabled: Some(false),
                command: None,
            },
            ..Config::default()
        };
        let config = build_config(&options(), &file);
        assert_eq!(config.imports, vec!["context"]);
        assert_eq!(config.rpc_client_type, "Caller");
        assert_eq!(config.target_suffix, "_rpc");
        assert!(!config.formatter.enabled);
    }

    #[test]
    fn test_flags_override_file() {
        let file = Config {
            generator: GeneratorSection {
                imports: Some(vec!["context".to_string()]),
                rpc_client_type: Some("Caller".to_string()),
                target_suffix: None,
            },
            ..Config::default()
        };
        let opts = GenerateOptions {
            imports: Some(vec!["time".to_string()]),
            rpc_client_type: Some("*rpc.Client".to_string()),
            package: Some("arithrpc".to_string()),
            target: Some(PathBuf::from("out.go")),
            no_format: true,
            ..options()
        };
        let config = build_config(&opts, &file);
        assert_eq!(config.imports, vec!["time"]);
        assert_eq!(config.rpc_client_type, "*rpc.Client");
        assert_eq!(config.package_name.as_deref(), Some("arithrpc"));
        assert_eq!(config.target, Some(PathBuf::from("out.go")));
        assert!(!config.formatter.enabled);
    }

    #[test]
    fn test_from_cli_requires_source_and_type() {
        use clap::Parser;
        let cli = Cli::parse_from(["rpcgen", "--completions", "bash"]);
        let err = GenerateOptions::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("expected --source and --type"));
    }

    #[test]
    fn test_formatter_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.go");
        fs::write(&target, "package x\n").unwrap();

        let formatter = FormatterConfig {
            enabled: true,
            command: vec!["rpcgen-no-such-formatter".to_string()],
        };
        let err = run_formatter(&formatter, &target).unwrap_err();
        assert!(matches!(err, Error::FormatterFailed { .. }));
        assert!(target.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_formatter_exit_status_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.go");
        fs::write(&target, "package x\n").unwrap();

        let formatter = FormatterConfig {
            enabled: true,
            command: ["sh", "-c", "echo out; echo err >&2; exit 3", "sh"]
                .map(String::from)
                .to_vec(),
        };
        let err = run_formatter(&formatter, &target).unwrap_err();
        let Error::FormatterFailed { output, .. } = &err else {
            panic!("expected FormatterFailed, got {err:?}");
        };
        assert!(output.contains("out"));
        assert!(output.contains("err"));
        assert!(target.exists());
    }

    #[test]
    fn test_write_stubs_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("out.go");
        let err = write_stubs(&target, "package x\n").unwrap_err();
        assert!(err.is_io_error());
        assert!(err.to_string().contains("out.go"));
    }
}
