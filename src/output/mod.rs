//! Rendering of command results for stdout

use crate::error::{HubError, Result};
use crate::registry::Projection;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(HubError::Config(format!(
                "Output format not supported: {} (expected text or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Formats listings either as separator-joined text or as indented JSON
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    format: OutputFormat,
    separator: String,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, separator: impl Into<String>) -> Self {
        Self {
            format,
            separator: separator.into(),
        }
    }

    pub fn render_names(&self, names: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(names.join(self.separator.as_str())),
            OutputFormat::Json => to_pretty_json(names),
        }
    }

    /// Values print bare; records print as space separated `key=value` pairs
    pub fn render_projection(&self, projection: &Projection) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_pretty_json(projection);
        }

        let items: Vec<String> = match projection {
            Projection::Values(values) => values.iter().map(scalar_text).collect(),
            Projection::Records(records) => records
                .iter()
                .map(|record| {
                    record
                        .iter()
                        .map(|(key, value)| format!("{}={}", key, scalar_text(value)))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect(),
        };
        Ok(items.join(self.separator.as_str()))
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| HubError::Parse(format!("UTF-8 conversion error: {}", e)))
}
