use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration of the `office` binary.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OfficeConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Extra days resolved around the instant.
    #[serde(default)]
    pub span: SpanToml,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SpanToml {
    #[serde(default)]
    pub days_before: u32,
    #[serde(default)]
    pub days_after: u32,
}

/// Reads the config file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<OfficeConfig> {
    let Some(path) = path else {
        return Ok(OfficeConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
