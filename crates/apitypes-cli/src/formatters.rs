//! Output formatters for command summaries.
//!
//! Summaries are flat serializable records; each format renders them
//! differently.

use anyhow::Result;
use apitypes_core::cli::OutputFormat;
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
/// use apitypes_cli::formatters::format_output;
/// use apitypes_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     interface: String,
///     endpoint_count: usize,
/// }
///
/// let summary = Summary { interface: "IApis".to_string(), endpoint_count: 3 };
/// let output = format_output(&summary, OutputFormat::Text)?;
/// assert_eq!(output, "interface=IApis\nendpoint_count=3");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// Renders a scalar JSON value without quotes.
fn scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as pretty-printed JSON.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, scalar};

    /// Format data as `key=value` lines, suitable for scripts.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let Some(fields) = value.as_object() else {
            return Ok(scalar(&value));
        };

        let lines: Vec<_> = fields
            .iter()
            .map(|(key, value)| format!("{key}={}", scalar(value)))
            .collect();
        Ok(lines.join("\n"))
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Result, Serialize, scalar};
    use colored::Colorize;

    /// Format data as aligned, colorized `key: value` lines.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let Some(fields) = value.as_object() else {
            return Ok(scalar(&value));
        };

        let width = fields.keys().map(String::len).max().unwrap_or(0);
        let lines: Vec<_> = fields
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    serde_json::Value::Bool(true) => "yes".green().to_string(),
                    serde_json::Value::Bool(false) => "no".yellow().to_string(),
                    serde_json::Value::Number(n) => n.to_string().cyan().to_string(),
                    other => scalar(other).normal().to_string(),
                };
                format!("{:width$}  {rendered}", key.bold())
            })
            .collect();
        Ok(lines.join("\n"))
    }
}
