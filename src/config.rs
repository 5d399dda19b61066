//! Configuration System
//!
//! Layered configuration for the `personas` CLI: built-in defaults, an optional
//! user-level TOML file, and `PERSONAS_` environment variables. The agent
//! registry itself is compiled in and is not configurable.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge;
mod sources;

pub use sources::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonasConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Defaults for command output
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when a command is run without `--format`
    #[serde(default)]
    pub format: OutputFormat,

    /// Colored check marks and tables in text output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration: defaults, then the global file if present, then environment.
    pub fn load() -> Result<PersonasConfig, ApiError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::add_global_file(builder)?;
        let builder = sources::add_environment(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load configuration from an explicit file instead of the global one.
    ///
    /// The file must exist. Environment variables still override it.
    pub fn load_from_file(path: &Path) -> Result<PersonasConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge::builder_with_defaults()?;
        let builder = sources::add_file(builder, path);
        let builder = sources::add_environment(builder);
        Ok(builder.build()?.try_deserialize()?)
    }
}
