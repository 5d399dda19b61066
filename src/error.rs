//! Error types for the persona registry and the CLI around it.

use thiserror::Error;

/// Registry errors: lookup misses and invariant violations at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown agent type: '{key}'")]
    UnknownAgentType { key: String, available: Vec<String> },

    #[error("Registry must contain at least one profile")]
    EmptyRegistry,

    #[error("Duplicate agent type: '{0}'")]
    DuplicateKey(String),

    #[error("Agent '{key}' has an empty {field}")]
    EmptyField { key: String, field: &'static str },
}

/// Application-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Registry validation failed")]
    ValidationFailed(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
