//! Agent profile: the record stored for each agent type.

use serde::{Deserialize, Serialize};

/// Display name, description and system prompt of one agent type.
///
/// The system prompt is opaque content for the agent runtime. It may contain
/// markdown headers, lists and tool names, none of which are interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Lookup key, unique within a registry (e.g. "financial")
    pub key: String,
    /// Human-readable display name
    pub name: String,
    /// One-line summary
    pub description: String,
    /// Instruction text given to the language model
    pub system_prompt: String,
}

impl AgentProfile {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            system_prompt: system_prompt.into(),
        }
    }

    /// Name of the first field that is empty or whitespace-only, if any.
    pub fn first_empty_field(&self) -> Option<&'static str> {
        [
            ("key", &self.key),
            ("name", &self.name),
            ("description", &self.description),
            ("system_prompt", &self.system_prompt),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}
