//! Environment configuration for dnn-inspect

use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the output format
pub const OUTPUT_ENV: &str = "DNN_INSPECT_OUTPUT";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported output format {0:?} (expected \"text\" or \"json\")")]
    UnsupportedOutput(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnsupportedOutput(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InspectConfig {
    pub output: OutputFormat,
}

impl InspectConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let output = match lookup(OUTPUT_ENV) {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self { output })
    }
}
