//! Agent registry: immutable, ordered index of agent profiles.

use crate::agent::builtin::builtin_profiles;
use crate::agent::profile::AgentProfile;
use crate::error::RegistryError;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::debug;

static BUILTIN_REGISTRY: OnceLock<AgentRegistry> = OnceLock::new();

/// Agent registry mapping agent-type keys to profiles
///
/// Profiles keep their declaration order for enumeration; lookups go through
/// a key index. There are no mutating methods, so a registry can be shared
/// across threads by reference.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    profiles: Vec<AgentProfile>,
    index: HashMap<String, usize>,
}

impl AgentRegistry {
    /// The process-wide registry of built-in personas, built on first access.
    pub fn builtin() -> &'static AgentRegistry {
        BUILTIN_REGISTRY.get_or_init(|| {
            let registry = Self::index_profiles(builtin_profiles());
            debug!(agents = registry.len(), "Built-in agent registry initialized");
            registry
        })
    }

    /// Build a registry from profiles, enforcing the registry invariants.
    ///
    /// Rejects an empty list, duplicate keys, and profiles with an empty field.
    pub fn from_profiles(profiles: Vec<AgentProfile>) -> Result<Self, RegistryError> {
        if profiles.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }

        let mut seen = HashSet::new();
        for profile in &profiles {
            if let Some(field) = profile.first_empty_field() {
                return Err(RegistryError::EmptyField {
                    key: profile.key.clone(),
                    field,
                });
            }
            if !seen.insert(profile.key.as_str()) {
                return Err(RegistryError::DuplicateKey(profile.key.clone()));
            }
        }

        Ok(Self::index_profiles(profiles))
    }

    fn index_profiles(profiles: Vec<AgentProfile>) -> Self {
        let index = profiles
            .iter()
            .enumerate()
            .map(|(position, profile)| (profile.key.clone(), position))
            .collect();
        Self { profiles, index }
    }

    /// Get a profile by key
    pub fn get(&self, key: &str) -> Option<&AgentProfile> {
        self.index.get(key).map(|&position| &self.profiles[position])
    }

    /// Get a profile by key or fail with `UnknownAgentType`
    pub fn get_profile(&self, key: &str) -> Result<&AgentProfile, RegistryError> {
        self.get(key).ok_or_else(|| {
            debug!(key, "Lookup of unknown agent type");
            RegistryError::UnknownAgentType {
                key: key.to_string(),
                available: self.list_keys().into_iter().map(str::to_string).collect(),
            }
        })
    }

    /// Whether a profile is registered under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All keys in declaration order
    pub fn list_keys(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.key.as_str()).collect()
    }

    /// All profiles in declaration order
    pub fn profiles(&self) -> impl Iterator<Item = &AgentProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
