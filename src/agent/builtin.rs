//! Built-in agent personas
//!
//! System prompts are embedded in the binary at compile time from `prompts/`.
//! Declaration order here is the order `list_keys` reports.

use crate::agent::profile::AgentProfile;

/// Static profile data compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct BuiltinProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

impl BuiltinProfile {
    /// Owned profile with the prompt file's trailing newlines removed.
    pub fn to_profile(&self) -> AgentProfile {
        AgentProfile::new(
            self.key,
            self.name,
            self.description,
            self.prompt.trim_end(),
        )
    }
}

pub const BUILTIN_PROFILES: &[BuiltinProfile] = &[
    BuiltinProfile {
        key: "financial",
        name: "Financial Research Agent",
        description: "Iterative financial market analysis and research agent",
        prompt: include_str!("../../prompts/financial.md"),
    },
    BuiltinProfile {
        key: "weather",
        name: "Weather Analysis Agent",
        description: "Professional weather analysis and forecasting agent",
        prompt: include_str!("../../prompts/weather.md"),
    },
    BuiltinProfile {
        key: "technical",
        name: "Technical Support Agent",
        description: "System troubleshooting and technical support agent",
        prompt: include_str!("../../prompts/technical.md"),
    },
];

/// All built-in profiles in declaration order.
pub fn builtin_profiles() -> Vec<AgentProfile> {
    BUILTIN_PROFILES.iter().map(BuiltinProfile::to_profile).collect()
}
