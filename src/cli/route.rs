//! CLI route: single route table and run context. Dispatches to the registry and presentation.

use crate::agent::{validate_registry, AgentRegistry};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_list_json, format_list_text, format_show_json, format_show_text,
    format_validation_json, format_validation_text,
};
use crate::config::{OutputConfig, OutputFormat, PersonasConfig};
use crate::error::ApiError;
use tracing::{debug, info};

/// Runtime context for CLI execution: the registry to read and output defaults.
pub struct RunContext<'a> {
    registry: &'a AgentRegistry,
    output: OutputConfig,
}

impl RunContext<'static> {
    /// Run context over the built-in registry.
    pub fn new(config: &PersonasConfig) -> Self {
        Self::with_registry(AgentRegistry::builtin(), config.output.clone())
    }
}

impl<'a> RunContext<'a> {
    /// Run context over an explicit registry.
    pub fn with_registry(registry: &'a AgentRegistry, output: OutputConfig) -> Self {
        Self { registry, output }
    }

    pub fn registry(&self) -> &AgentRegistry {
        self.registry
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::List { format } => self.handle_list(self.resolve_format(*format)),
            Commands::Show {
                key,
                format,
                prompt_only,
            } => self.handle_show(key, self.resolve_format(*format), *prompt_only),
            Commands::Validate { format, detailed } => {
                self.handle_validate(self.resolve_format(*format), *detailed)
            }
        }
    }

    fn resolve_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.output.format)
    }

    fn handle_list(&self, format: OutputFormat) -> Result<String, ApiError> {
        debug!(agents = self.registry.len(), "Listing agent types");
        Ok(match format {
            OutputFormat::Text => format_list_text(self.registry),
            OutputFormat::Json => format_list_json(self.registry),
        })
    }

    fn handle_show(
        &self,
        key: &str,
        format: OutputFormat,
        prompt_only: bool,
    ) -> Result<String, ApiError> {
        let profile = self.registry.get_profile(key)?;
        info!(key, "Showing agent profile");
        if prompt_only {
            return Ok(profile.system_prompt.clone());
        }
        Ok(match format {
            OutputFormat::Text => format_show_text(profile),
            OutputFormat::Json => format_show_json(profile),
        })
    }

    fn handle_validate(&self, format: OutputFormat, detailed: bool) -> Result<String, ApiError> {
        let reports = validate_registry(self.registry);
        let report = match format {
            OutputFormat::Text => format_validation_text(&reports, detailed, self.output.color),
            OutputFormat::Json => format_validation_json(&reports),
        };
        if reports.iter().all(|r| r.is_valid()) {
            Ok(report)
        } else {
            Err(ApiError::ValidationFailed(report))
        }
    }
}
