//! Generator configuration.
//!
//! One immutable [`GeneratorConfig`] is built per run from flags and the
//! optional configuration file, validated, and passed by reference into
//! the generator. Nothing reads configuration from global state.
//!
//! # Examples
//!
//! ```
//! use rpcgen_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::builder()
//!     .source("arith.go")
//!     .interface_name("Arith")
//!     .build();
//!
//! assert_eq!(config.rpc_client_type, "*rpc.Client");
//! assert_eq!(config.imports, vec!["net/rpc".to_string()]);
//! assert!(config.validate().is_ok());
//! ```

use crate::{Error, Result};
use std::path::PathBuf;

/// Import path of the transport registry used by generated stubs.
pub const DEFAULT_IMPORT: &str = "net/rpc";

/// Client handle type used when none is configured.
pub const DEFAULT_RPC_CLIENT_TYPE: &str = "*rpc.Client";

/// Marker inserted between the source file stem and its extension to
/// derive the default target path.
pub const DEFAULT_TARGET_SUFFIX: &str = "rpc";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// File containing the interface declaration
    pub source: PathBuf,

    /// Interface to generate stubs for
    pub interface_name: String,

    /// Output file; derived from `source` when `None`
    pub target: Option<PathBuf>,

    /// Import paths for the generated file
    ///
    /// Default: `["net/rpc"]`
    pub imports: Vec<String>,

    /// Package clause for the generated file; the source's package when `None`
    pub package_name: Option<String>,

    /// Type of the client transport handle
    ///
    /// Default: `*rpc.Client`
    pub rpc_client_type: String,

    /// Marker used to derive the default target path
    ///
    /// Default: `rpc` (`arith.go` becomes `arithrpc.go`)
    pub target_suffix: String,

    /// Post-generation formatter settings
    pub formatter: FormatterConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            interface_name: String::new(),
            target: None,
            imports: vec![DEFAULT_IMPORT.to_string()],
            package_name: None,
            rpc_client_type: DEFAULT_RPC_CLIENT_TYPE.to_string(),
            target_suffix: DEFAULT_TARGET_SUFFIX.to_string(),
            formatter: FormatterConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the source path or interface
    /// name is missing, and [`Error::ConfigError`] if the client type,
    /// package name, or formatter command is unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpcgen_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::default();
    /// assert!(config.validate().unwrap_err().is_config_error());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() || self.interface_name.is_empty() {
            return Err(Error::InvalidArgument(
                "expected --source and --type".to_string(),
            ));
        }

        if !is_identifier(&self.interface_name) {
            return Err(Error::InvalidArgument(format!(
                "'{}' is not a valid interface name",
                self.interface_name
            )));
        }

        if let Some(package) = &self.package_name
            && !is_identifier(package)
        {
            return Err(Error::ConfigError {
                message: format!("'{package}' is not a valid package name"),
            });
        }

        if self.rpc_client_type.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "RPC client type cannot be empty".to_string(),
            });
        }

        if self.formatter.enabled && self.formatter.command.is_empty() {
            return Err(Error::ConfigError {
                message: "formatter is enabled but no formatter command is set".to_string(),
            });
        }

        Ok(())
    }
}

/// Post-generation formatter settings.
///
/// The formatter runs after the target has been written; its failure is
/// reported but the unformatted file stays on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Run the formatter at all
    ///
    /// Default: true
    pub enabled: bool,

    /// Program and leading arguments; the target path is appended
    ///
    /// Default: `["go", "fmt"]`
    pub command: Vec<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: vec!["go".to_string(), "fmt".to_string()],
        }
    }
}

/// Builder for `GeneratorConfig`.
///
/// # Examples
///
/// ```
/// use rpcgen_core::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .source("svc/arith.go")
///     .interface_name("Arith")
///     .package_name("arithrpc")
///     .imports(vec!["net/rpc".to_string(), "time".to_string()])
///     .format(false)
///     .build();
///
/// assert_eq!(config.package_name.as_deref(), Some("arithrpc"));
/// assert!(!config.formatter.enabled);
/// ```
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.source = path.into();
        self
    }

    /// Sets the interface name.
    #[must_use]
    pub fn interface_name(mut self, name: impl Into<String>) -> Self {
        self.config.interface_name = name.into();
        self
    }

    /// Sets an explicit target file.
    #[must_use]
    pub fn target(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.target = Some(path.into());
        self
    }

    /// Replaces the import list.
    #[must_use]
    pub fn imports(mut self, imports: Vec<String>) -> Self {
        self.config.imports = imports;
        self
    }

    /// Sets the output package name.
    #[must_use]
    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.config.package_name = Some(name.into());
        self
    }

    /// Sets the client transport handle type.
    #[must_use]
    pub fn rpc_client_type(mut self, ty: impl Into<String>) -> Self {
        self.config.rpc_client_type = ty.into();
        self
    }

    /// Sets the default-target marker.
    #[must_use]
    pub fn target_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.target_suffix = suffix.into();
        self
    }

    /// Enables or disables the formatter.
    #[must_use]
    pub const fn format(mut self, enabled: bool) -> Self {
        self.config.formatter.enabled = enabled;
        self
    }

    /// Sets the formatter command.
    #[must_use]
    pub fn formatter_command(mut self, command: Vec<String>) -> Self {
        self.config.formatter.command = command;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}
