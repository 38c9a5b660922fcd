//! Output formatters for the generation summary.
//!
//! Provides JSON, text, and pretty renderings of any serializable
//! summary.

use anyhow::Result;
use colored::Colorize;
use rpcgen_core::cli::OutputFormat;
use serde::Serialize;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use rpcgen_cli::formatters::format_output;
/// use rpcgen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     interface: String,
///     methods: usize,
/// }
///
/// let summary = Summary { interface: "Arith".to_string(), methods: 2 };
///
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"interface\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize};
    use serde_json::Value;

    /// Format data as `key=value` lines, one per top-level field.
    ///
    /// Arrays are joined with commas. Suitable for `grep` and `cut`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let Value::Object(fields) = value else {
            return Ok(scalar(&value));
        };
        Ok(fields
            .iter()
            .map(|(key, value)| format!("{key}={}", scalar(value)))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub(super) fn scalar(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Array(items) => items.iter().map(scalar).collect::<Vec<_>>().join(","),
            other => other.to_string(),
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Format data as aligned, colorized `key: value` lines.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let Value::Object(fields) = value else {
            return Ok(format_value(&value));
        };

        let width = fields.keys().map(String::len).max().unwrap_or(0) + 1;
        Ok(fields
            .iter()
            .map(|(key, value)| {
                let label = format!("{key}:");
                format!("  {:<width$} {}", label.blue().bold(), format_value(value))
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn format_value(value: &Value) -> String {
        match value {
            Value::Null => "-".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(items) if items.is_empty() => "-".dimmed().to_string(),
            Value::Array(items) => items
                .iter()
                .map(format_value)
                .collect::<Vec<_>>()
                .join(", "),
            Value::Object(_) => super::text::scalar(value),
        }
    }
}
