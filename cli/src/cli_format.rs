use std::str::FromStr;

use anyhow::Result;
use canister_registry_core::ApiResult;

/// Output format for CLI command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CliOutputFormat {
    /// JSON output
    #[default]
    Json,
    /// YAML output
    Yaml,
}

impl CliOutputFormat {
    pub fn render(&self, result: &ApiResult) -> Result<String> {
        let output = match self {
            CliOutputFormat::Json => serde_json::to_string_pretty(result)?,
            CliOutputFormat::Yaml => serde_yaml::to_string(result)?,
        };
        Ok(output)
    }
}

impl FromStr for CliOutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(CliOutputFormat::Json),
            "yaml" => Ok(CliOutputFormat::Yaml),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}
