//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, RegistryError};

/// Map domain/service errors to a string for CLI output.
///
/// Unknown agent types list the valid keys.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Registry(RegistryError::UnknownAgentType { key, available }) => format!(
            "Unknown agent type: '{}'. Available agent types: {}",
            key,
            available.join(", ")
        ),
        other => other.to_string(),
    }
}
