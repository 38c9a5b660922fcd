//! Configuration file support.
//!
//! Settings are read from TOML, by default at:
//! - Linux: `~/.config/rpcgen/config.toml`
//! - macOS: `~/Library/Application Support/rpcgen/config.toml`
//! - Windows: `%APPDATA%\rpcgen\config.toml`
//!
//! Flags given on the command line always win over the file, and the
//! file wins over built-in defaults.

use anyhow::{Context, Result};
use rpcgen_core::FormatterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
///
/// # Examples
///
/// ```toml
/// [general]
/// log_level = "info"
/// log_format = "text"
/// default_format = "pretty"
///
/// [generator]
/// imports = ["net/rpc", "context"]
/// rpc_client_type = "*rpc.Client"
/// target_suffix = "rpc"
///
/// [formatter]
/// enabled = true
/// command = ["gofmt", "-w"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Defaults for generation flags
    #[serde(default)]
    pub generator: GeneratorSection,

    /// Post-generation formatter
    #[serde(default)]
    pub formatter: FormatterSection,
}

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log line format on stderr (text, json)
    pub log_format: String,

    /// Default summary format (json, text, pretty)
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            default_format: "pretty".to_string(),
        }
    }
}

/// Defaults for the generation flags; unset keys fall through to the
/// built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct GeneratorSection {
    /// Imports used when `--imports` is not given
    pub imports: Option<Vec<String>>,

    /// Client handle type used when `--rpc_client_type` is not given
    pub rpc_client_type: Option<String>,

    /// Marker for default target paths
    pub target_suffix: Option<String>,
}

/// Formatter settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct FormatterSection {
    /// Run the formatter after writing (`--no-format` overrides)
    pub enabled: Option<bool>,

    /// Program and arguments; the target path is appended
    pub command: Option<Vec<String>>,
}

impl FormatterSection {
    /// Resolves formatter settings over the built-in defaults.
    #[must_use]
    pub fn resolve(&self) -> FormatterConfig {
        let defaults = FormatterConfig::default();
        FormatterConfig {
            enabled: self.enabled.unwrap_or(defaults.enabled),
            command: self.command.clone().unwrap_or(defaults.command),
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location
    /// is used if a file is there, and built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML,
    /// or holds invalid values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| rpcgen_core::Error::ConfigError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let valid_formats = ["json", "text", "pretty"];
        if !valid_formats.contains(&self.general.default_format.as_str()) {
            return Err(config_error(format!(
                "invalid default_format '{}', must be one of: {}",
                self.general.default_format,
                valid_formats.join(", ")
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(config_error(format!(
                "invalid log_level '{}', must be one of: {}",
                self.general.log_level,
                valid_levels.join(", ")
            )));
        }

        let valid_log_formats = ["text", "json"];
        if !valid_log_formats.contains(&self.general.log_format.as_str()) {
            return Err(config_error(format!(
                "invalid log_format '{}', must be one of: {}",
                self.general.log_format,
                valid_log_formats.join(", ")
            )));
        }

        if self
            .formatter
            .command
            .as_ref()
            .is_some_and(|command| command.first().is_none_or(|program| program.trim().is_empty()))
        {
            return Err(config_error("formatter.command must name a program".to_string()));
        }

        Ok(())
    }
}

fn config_error(message: String) -> anyhow::Error {
    rpcgen_core::Error::ConfigError { message }.into()
}

/// Default configuration file location, if the platform has a config
/// directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rpcgen").join("config.toml"))
}
