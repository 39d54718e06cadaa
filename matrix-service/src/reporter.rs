// Matrix Reporter
// Renders generated matrices as compact JSON, pretty JSON or YAML

use crate::error::ServiceResult;

use std::fmt;

use serde::Serialize;

/// Output format for rendered matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Single-line JSON, suitable for `fromJSON` in workflow expressions
    #[default]
    Json,
    /// Indented JSON
    JsonPretty,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::JsonPretty => write!(f, "pretty"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" | "json-pretty" => Ok(OutputFormat::JsonPretty),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format '{}'. Valid formats: json, pretty, yaml",
                s
            )),
        }
    }
}

pub struct MatrixReporter;

impl MatrixReporter {
    /// Render any serializable matrix in the given format
    pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> ServiceResult<String> {
        let rendered = match format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::JsonPretty => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
        };
        Ok(rendered)
    }
}
