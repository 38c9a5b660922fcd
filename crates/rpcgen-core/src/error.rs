//! Error types for rpcgen.
//!
//! Every stage (parse, walk, model building, rendering, writing) reports
//! failures through [`Error`]; no stage terminates the process itself.
//! The command-line driver turns the first error into a diagnostic and
//! an exit status via [`Error::exit_code`].
//!
//! # Examples
//!
//! ```
//! use rpcgen_core::{Error, Result, SourcePosition};
//!
//! fn check_named(names: &[&str]) -> Result<()> {
//!     if names.is_empty() {
//!         return Err(Error::ValidationError {
//!             position: SourcePosition::new("arith.go", 4, 6),
//!             method: Some("Add".to_string()),
//!             message: "RPC interface parameters and results must all be named".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_named(&[]).unwrap_err();
//! assert!(err.is_validation_error());
//! assert!(err.to_string().starts_with("arith.go:4:6"));
//! ```

use crate::SourcePosition;
use crate::cli::ExitCode;
use thiserror::Error;

/// Main error type for rpcgen.
///
/// All errors in the system use this type, providing consistent error
/// handling across all crates in the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument error.
    ///
    /// Raised when a required flag is missing or a flag value is malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error.
    ///
    /// Raised when the configuration file cannot be parsed or contains
    /// values that cannot drive a generation run.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Source file could not be parsed.
    #[error("{position}: {message}")]
    ParseError {
        /// Where the parser gave up
        position: SourcePosition,
        /// Parser diagnostic
        message: String,
    },

    /// The interface declaration violates the generator's conventions.
    ///
    /// Raised for a method without a trailing `error` result and for
    /// parameters or results without names.
    #[error("{position}: {message}")]
    ValidationError {
        /// Position of the offending method or field
        position: SourcePosition,
        /// Method being modeled when validation failed
        method: Option<String>,
        /// Detailed reason for the validation failure
        message: String,
    },

    /// No top-level type declaration carries the requested name.
    #[error("{file}: interface type '{name}' not found")]
    InterfaceNotFound {
        /// Requested interface name
        name: String,
        /// Source file that was searched
        file: String,
    },

    /// The requested type exists but is not an interface.
    #[error("{position}: type '{name}' is not an interface")]
    NotAnInterface {
        /// Requested type name
        name: String,
        /// Position of the type declaration
        position: SourcePosition,
    },

    /// The declaration uses a construct the generator does not support.
    #[error("{position}: {message}")]
    Unsupported {
        /// Position of the unsupported construct
        position: SourcePosition,
        /// What is unsupported
        message: String,
    },

    /// Template registration or rendering failed.
    ///
    /// Indicates a defect in the generator rather than in the input.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
        /// Underlying template engine error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reading the source or writing the target failed.
    #[error("I/O error on '{path}'")]
    IoError {
        /// Path being read or written
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The post-generation formatter exited unsuccessfully.
    #[error("Formatter '{command}' failed: {output}")]
    FormatterFailed {
        /// Command line that was run
        command: String,
        /// Combined stdout and stderr of the formatter
        output: String,
    },
}

impl Error {
    /// Returns `true` if this is a parse error.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }

    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpcgen_core::{Error, SourcePosition};
    ///
    /// let err = Error::ValidationError {
    ///     position: SourcePosition::new("arith.go", 5, 2),
    ///     method: Some("Add".to_string()),
    ///     message: "method Add must have error as last return value".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if the requested interface was not found.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::InterfaceNotFound { .. })
    }

    /// Returns `true` if this is a configuration or argument error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. } | Self::InvalidArgument(_))
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }

    /// Returns the source position attached to this error, if any.
    #[must_use]
    pub const fn position(&self) -> Option<&SourcePosition> {
        match self {
            Self::ParseError { position, .. }
            | Self::ValidationError { position, .. }
            | Self::NotAnInterface { position, .. }
            | Self::Unsupported { position, .. } => Some(position),
            _ => None,
        }
    }

    /// Maps this error onto a process exit code.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpcgen_core::Error;
    /// use rpcgen_core::cli::ExitCode;
    ///
    /// let err = Error::InvalidArgument("expected --source and --type".to_string());
    /// assert_eq!(err.exit_code(), ExitCode::INVALID_INPUT);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidArgument(_) | Self::ConfigError { .. } => ExitCode::INVALID_INPUT,
            Self::ParseError { .. }
            | Self::ValidationError { .. }
            | Self::InterfaceNotFound { .. }
            | Self::NotAnInterface { .. }
            | Self::Unsupported { .. } => ExitCode::INVALID_SOURCE,
            Self::TemplateError { .. } | Self::IoError { .. } | Self::FormatterFailed { .. } => {
                ExitCode::ERROR
            }
        }
    }
}

/// Result type alias for rpcgen operations.
pub type Result<T> = std::result::Result<T, Error>;
